//! # Play Command
//!
//! Interactive Klondike on stdin.
//!
//! Every move is handed to the engine, which checks syntax, pile rules and
//! card rules before the board changes. A rejected move prints its reason
//! and the prompt comes back; the board is left as it was.
//!
//! Commands: `M <source> <destination>`, `D` (draw), `H` (help), `Q` (quit).
//! EOF on stdin ends the game like `Q`.

use super::{deal_board, resolve_seed};
use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_command};
use std::io::{BufRead, Write};
use tracing::warn;

/// Handle the play command: interactive game loop.
///
/// # Arguments
///
/// * `seed` - RNG seed for the deal (falls back to the configured seed, then random)
/// * `config` - Resolved configuration (seed fallback, suit rendering)
/// * `out` - Output stream for the board and prompts
/// * `err` - Error stream for rejected moves and warnings
/// * `stdin` - Input stream for player commands
///
/// # Returns
///
/// * `Ok(())` when the player quits or input ends
/// * `Err(CliError)` on I/O failure or an engine contract violation
pub fn handle_play_command(
    seed: Option<u64>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed, config.seed);
    let mut board = deal_board(seed);
    let mut moves = 0u32;

    writeln!(out, "play: seed={}", seed)?;
    write!(out, "{}", ui::render_board(&board, config.symbols))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin)? else {
            writeln!(out)?;
            break;
        };

        match parse_command(&line) {
            ParseResult::Quit => break,
            ParseResult::Empty => {}
            ParseResult::Help => writeln!(out, "{}", ui::HELP)?,
            ParseResult::Draw => {
                if board.draw() {
                    write!(out, "{}", ui::render_board(&board, config.symbols))?;
                } else {
                    ui::display_warning(err, "The stock and waste are both empty")?;
                }
            }
            ParseResult::Move(tokens) => match board.apply(&tokens) {
                Ok(outcome) => {
                    moves += 1;
                    if outcome.revealed {
                        writeln!(out, "A card was turned face-up.")?;
                    }
                    write!(out, "{}", ui::render_board(&board, config.symbols))?;
                }
                Err(e) if e.is_contract_violation() => {
                    warn!(error = %e, "engine contract violated");
                    ui::write_error(err, &e.to_string())?;
                    return Err(e.into());
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    writeln!(out, "Game over after {} move(s).", moves)?;
    Ok(())
}
