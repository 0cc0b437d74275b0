//! In-process tests for the CLI dispatcher.
//!
//! Configuration is read through an injected lookup, so `SOLITAIRE_*`
//! variables in the calling shell never reach these tests. None of them
//! read stdin.

use solitaire_cli::run_with_env;

fn run_args_with_env(args: &[&str], vars: &[(&str, &str)]) -> (i32, String, String) {
    let env = |key: &str| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    };
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_env(args.iter().copied(), &env, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn run_args(args: &[&str]) -> (i32, String, String) {
    run_args_with_env(args, &[])
}

#[test]
fn help_lists_expected_commands() {
    let (code, stdout, _) = run_args(&["solitaire", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "check", "deal", "cfg"] {
        assert!(
            stdout.contains(cmd),
            "help should list subcommand `{}`",
            cmd
        );
    }
}

#[test]
fn unknown_command_exits_two() {
    let (code, stdout, stderr) = run_args(&["solitaire", "replay"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Commands:"));
}

#[test]
fn deal_is_reproducible_for_a_seed() {
    let (code_a, out_a, _) = run_args(&["solitaire", "deal", "--seed", "42"]);
    let (code_b, out_b, _) = run_args(&["solitaire", "deal", "--seed", "42"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
    assert!(out_a.starts_with("deal: seed=42"));
    // Seven columns, the deepest holding six face-down cards.
    assert!(out_a.matches("##").count() >= 21);
}

#[test]
fn deal_differs_between_seeds() {
    let (_, a, _) = run_args(&["solitaire", "deal", "--seed", "1"]);
    let (_, b, _) = run_args(&["solitaire", "deal", "--seed", "2"]);
    assert_ne!(a, b);
}

#[test]
fn check_same_column_reports_reason_on_stderr() {
    let (code, stdout, stderr) = run_args(&["solitaire", "check", "--seed", "9", "c2", "c"]);
    assert_eq!(code, 2);
    assert!(stdout.contains("check: seed=9 move=C2 C"));
    assert!(!stdout.contains("legal:"));
    assert!(stderr.contains("Illegal move: Move source and destination can't be the same"));
}

#[test]
fn check_hidden_card_is_rejected() {
    // Row 0 of column G is face-down right after the deal.
    let (code, _, stderr) = run_args(&["solitaire", "check", "--seed", "9", "G0", "A"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("You can't move an invisible card"));
}

#[test]
fn check_empty_waste_is_rejected() {
    let (code, _, stderr) = run_args(&["solitaire", "check", "--seed", "9", "O", "SA"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("You can't move a card from an empty deck"));
}

#[test]
fn check_bad_syntax_names_the_token_and_slot() {
    let (code, _, stderr) = run_args(&["solitaire", "check", "A01", "B"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("\"A01\" is not a valid source location"));
    assert!(stderr.contains("See Help for instructions."));
}

#[test]
fn check_row_past_column_end() {
    let (code, _, stderr) = run_args(&["solitaire", "check", "--seed", "4", "A3", "B"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("There is no card at A3"));
}

#[test]
fn cfg_prints_json_with_sources() {
    let (code, stdout, _) = run_args(&["solitaire", "cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("cfg prints JSON");
    for key in ["seed", "log_level", "symbols"] {
        assert!(json.get(key).is_some(), "missing key {}", key);
        assert!(json[key].get("source").is_some());
    }
}

#[test]
fn injected_seed_is_used_when_no_flag_is_given() {
    let (code, stdout, _) = run_args_with_env(&["solitaire", "deal"], &[("SOLITAIRE_SEED", "31")]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("deal: seed=31"));
}

#[test]
fn invalid_injected_log_level_fails_every_configured_command() {
    let vars = [("SOLITAIRE_LOG_LEVEL", "loud")];
    for args in [
        &["solitaire", "deal", "--seed", "1"][..],
        &["solitaire", "check", "--seed", "1", "A0", "B"][..],
        &["solitaire", "cfg"][..],
    ] {
        let (code, _, stderr) = run_args_with_env(args, &vars);
        assert_eq!(code, 2, "args {:?}", args);
        assert!(stderr.contains("log_level must be one of"));
    }
}
