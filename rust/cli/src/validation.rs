//! Input parsing for the interactive `play` command.
//!
//! Splits a raw line into the uppercase tokens the engine expects. Whether
//! the locations themselves are valid is left to the engine's syntax check.

/// Outcome of reading one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// `M <source> <destination>`: the three tokens, uppercased
    Move(Vec<String>),
    /// `D`: turn a stock card
    Draw,
    /// `H` or `HELP`
    Help,
    /// `Q` or `QUIT`
    Quit,
    /// Blank line
    Empty,
    /// Anything else, with a message for the player
    Invalid(String),
}

/// Parse a line of user input into a command.
///
/// Input is case-insensitive; tokens are uppercased before they reach the
/// engine.
///
/// # Example
///
/// ```rust
/// # use solitaire_cli::validation::{parse_command, ParseResult};
/// assert_eq!(
///     parse_command("m a3 sa"),
///     ParseResult::Move(vec!["M".into(), "A3".into(), "SA".into()])
/// );
/// assert_eq!(parse_command("q"), ParseResult::Quit);
/// ```
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim().to_uppercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Empty;
    };

    match command {
        "Q" | "QUIT" => ParseResult::Quit,
        "H" | "HELP" => ParseResult::Help,
        "D" | "DRAW" if parts.len() == 1 => ParseResult::Draw,
        "M" | "MOVE" => {
            if parts.len() != 3 {
                return ParseResult::Invalid(
                    "Move takes a source and a destination (e.g., 'M A3 SA')".to_string(),
                );
            }
            ParseResult::Move(parts.iter().map(|s| s.to_string()).collect())
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: M <source> <destination>, D, H, Q",
            command
        )),
    }
}
