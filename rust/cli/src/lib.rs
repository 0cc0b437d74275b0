//! # Solitaire CLI Library
//!
//! Command-line front end for the Klondike move-legality engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["solitaire", "play", "--seed", "42"];
//! let code = solitaire_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game, entering moves on stdin
//! - `check`: Ask whether one move is legal on a fresh deal
//! - `deal`: Print the opening layout for a seed
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, SolitaireCli};
use commands::{
    handle_cfg_command, handle_check_command, handle_deal_command, handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "check", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors and illegal `check` moves
///
/// # Example
///
/// ```
/// let args = vec!["solitaire", "deal", "--seed", "42"];
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = solitaire_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_with_env(args, &|key: &str| std::env::var(key).ok(), out, err)
}

/// [`run`] with configuration variables read through `env` instead of the
/// process environment.
///
/// ```
/// let env = |key: &str| (key == "SOLITAIRE_SEED").then(|| "8".to_string());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = solitaire_cli::run_with_env(["solitaire", "deal"], &env, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("deal: seed=8"));
/// ```
pub fn run_with_env<I, S>(
    args: I,
    env: &dyn Fn(&str) -> Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SolitaireCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: solitaire <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: solitaire --help");
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, env, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    env: &dyn Fn(&str) -> Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(env, out),
        Commands::Play { seed } => {
            let config = config::load_from(env)?;
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, &config, out, err, &mut stdin_lock)
        }
        Commands::Check {
            seed,
            source,
            destination,
        } => handle_check_command(seed, &source, &destination, &config::load_from(env)?, out),
        Commands::Deal { seed } => handle_deal_command(seed, &config::load_from(env)?, out),
    }
}
