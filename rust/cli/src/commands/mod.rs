//! Command handler modules for the Solitaire CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod check;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;

use solitaire_engine::board::Board;
use solitaire_engine::deck::Deck;

/// Picks the deal seed: explicit flag, then configured seed, then random.
fn resolve_seed(flag: Option<u64>, configured: Option<u64>) -> u64 {
    flag.or(configured).unwrap_or_else(rand::random)
}

fn deal_board(seed: u64) -> Board {
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    Board::deal(deck.into_cards())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config_seed() {
        assert_eq!(resolve_seed(Some(1), Some(2)), 1);
        assert_eq!(resolve_seed(None, Some(2)), 2);
    }

    #[test]
    fn deal_board_is_reproducible() {
        assert_eq!(deal_board(11), deal_board(11));
    }
}
