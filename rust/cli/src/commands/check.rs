//! Check command handler: runs one move through the rule checks against a
//! freshly dealt board, without playing it.

use super::{deal_board, resolve_seed};
use crate::config::Config;
use crate::error::CliError;
use std::io::Write;

/// Handle the check command.
///
/// Writes `legal: ...` and returns `Ok(())` when the move passes every
/// check.
///
/// # Errors
///
/// `CliError::IllegalMove` carrying the classified reason when it does not,
/// or `CliError::Engine` for a contract violation.
pub fn handle_check_command(
    seed: Option<u64>,
    source: &str,
    destination: &str,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed, config.seed);
    let board = deal_board(seed);
    let tokens = ["M".to_string(), source.to_uppercase(), destination.to_uppercase()];
    writeln!(out, "check: seed={} move={} {}", seed, tokens[1], tokens[2])?;

    let checked = board.validate(&tokens)?;
    let card = if config.symbols {
        checked.card.symbolic()
    } else {
        checked.card.to_string()
    };
    writeln!(
        out,
        "legal: {} from {} to {}",
        card, checked.request.source, checked.request.destination
    )?;
    Ok(())
}
