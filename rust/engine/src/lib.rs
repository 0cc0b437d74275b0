//! # solitaire-engine: Klondike Move Legality Core
//!
//! Decides whether a fully specified Solitaire move is legal and, when it is
//! not, classifies why. The checks are pure functions over borrowed piles;
//! they never mutate anything and keep no state between calls.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Color, Card)
//! - [`pile`] - Piles with a kind and a count of face-down cards
//! - [`location`] - Move-command tokens and the locations they name
//! - [`rules`] - The three ordered check layers and colour helpers
//! - [`errors`] - Classified rejection reasons
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`board`] - A Klondike board that validates before it mutates
//!
//! ## Quick Start
//!
//! ```rust
//! use solitaire_engine::cards::{Card, Rank, Suit};
//! use solitaire_engine::pile::{Pile, PileKind};
//! use solitaire_engine::rules::{card_level_checks, check_player_input, deck_level_checks};
//!
//! // "M A3 SA": move the card at column A, row 3 onto stack A.
//! check_player_input(&["M", "A3", "SA"]).unwrap();
//!
//! let column = Pile::with_invisible(
//!     PileKind::Column,
//!     vec![
//!         Card::new(Suit::Spades, Rank::King),
//!         Card::new(Suit::Clubs, Rank::Two),
//!         Card::new(Suit::Diamonds, Rank::Jack),
//!         Card::new(Suit::Hearts, Rank::Seven),
//!     ],
//!     3,
//! )
//! .unwrap();
//! let stack = Pile::with_cards(PileKind::Stack, vec![Card::new(Suit::Hearts, Rank::Six)]);
//!
//! deck_level_checks(&column, 3, &stack).unwrap();
//! card_level_checks(&stack, &column.cards()[3]).unwrap();
//! ```
//!
//! ## Playing a Board
//!
//! ```rust
//! use solitaire_engine::board::Board;
//! use solitaire_engine::deck::Deck;
//!
//! let mut deck = Deck::new_with_seed(42);
//! deck.shuffle();
//! let mut board = Board::deal(deck.into_cards());
//!
//! match board.apply(&["M", "O", "SA"]) {
//!     Ok(outcome) => println!("moved {} card(s)", outcome.cards_moved),
//!     Err(e) => println!("{}", e),
//! }
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod location;
pub mod pile;
pub mod rules;
