//! UI helper functions for terminal output formatting.
//!
//! Error and warning lines, the help text shown after syntax errors, and
//! the text rendering of a board.

use std::fmt::Write as _;
use std::io::Write;

use solitaire_engine::board::Board;
use solitaire_engine::cards::Card;
use solitaire_engine::pile::Pile;

/// Reference text for the move syntax. Syntax errors point here.
pub const HELP: &str = "\
Commands:
  M <source> <destination>   move a card or run of cards
  D                          draw a card from the stock
  H                          show this help
  Q                          quit

Source locations:
  A0..G<row>   card at <row> in column A..G (row 0 is the bottom card)
  O            top card turned from the stock
  SA..SD       top card of stack A..D

Destination locations:
  A..G         end of column A..G
  SA..SD       stack A..D

Stacks build up from Ace to King in one suit.
Columns build down from King in alternating colours.";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

fn card_text(card: &Card, symbols: bool) -> String {
    if symbols {
        card.symbolic()
    } else {
        card.to_string()
    }
}

fn top_text(pile: &Pile, symbols: bool) -> String {
    pile.top()
        .map_or_else(|| "--".to_string(), |c| card_text(c, symbols))
}

/// Renders the board as plain text, one row per column depth.
///
/// Face-down cards show as `##`; row numbers on the left are the ones a
/// move command uses.
pub fn render_board(board: &Board, symbols: bool) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Stock: {:>2} left   O: {}",
        board.stock().len(),
        top_text(board.waste(), symbols)
    );
    let stacks: Vec<String> = board
        .stacks()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("S{}: {}", (b'A' + i as u8) as char, top_text(p, symbols)))
        .collect();
    let _ = writeln!(s, "{}", stacks.join("  "));
    let _ = writeln!(s);

    let _ = write!(s, "    ");
    for i in 0..board.columns().len() {
        let _ = write!(s, "{:<5}", (b'A' + i as u8) as char);
    }
    let _ = writeln!(s);

    let depth = board.columns().iter().map(Pile::len).max().unwrap_or(0);
    for row in 0..depth {
        let _ = write!(s, "{:>2}  ", row);
        for column in board.columns() {
            let cell = match column.get(row) {
                Some(_) if row < column.invisible() => "##".to_string(),
                Some(card) => card_text(card, symbols),
                None => String::new(),
            };
            let _ = write!(s, "{:<5}", cell);
        }
        let _ = writeln!(s);
    }
    s
}
