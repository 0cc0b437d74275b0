//! Deal command handler: prints the opening layout for a seed.

use super::{deal_board, resolve_seed};
use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the deal command.
///
/// Deals a shuffled deck into the Klondike opening and writes the seed
/// followed by the rendered board.
pub fn handle_deal_command(
    seed: Option<u64>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed, config.seed);
    let board = deal_board(seed);
    writeln!(out, "deal: seed={}", seed)?;
    write!(out, "{}", ui::render_board(&board, config.symbols))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_same_seed_same_output() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(42), &Config::default(), &mut a).unwrap();
        handle_deal_command(Some(42), &Config::default(), &mut b).unwrap();
        assert_eq!(a, b);
        let text = String::from_utf8(a).unwrap();
        assert!(text.starts_with("deal: seed=42"));
        assert!(text.contains("Stock: 24 left"));
    }

    #[test]
    fn test_deal_without_seed() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &Config::default(), &mut out).is_ok());
    }
}
