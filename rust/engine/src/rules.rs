//! Move legality checks.
//!
//! Three layers, always run in this order by the caller:
//!
//! 1. [`check_player_input`]: are the raw tokens well-formed locations?
//! 2. [`deck_level_checks`]: is the move possible given the pile kinds,
//!    emptiness and face-down cards?
//! 3. [`card_level_checks`]: does the moved card fit on the destination?
//!
//! Every check is a pure function over borrowed piles and returns on the
//! first violated rule. Later layers rely on the earlier ones having passed.

use tracing::debug;

use crate::cards::{Card, Color, Rank};
use crate::errors::{CardError, ContractViolation, PileError, SyntaxError};
use crate::location::parse_move;
use crate::pile::{Pile, PileKind};

/// Verifies that a tokenized move command names a valid source and
/// destination.
///
/// `tokens` is `[command, source, destination]`, already uppercased and
/// split on spaces. The command token itself is not inspected.
///
/// # Errors
///
/// [`SyntaxError`] naming the first offending token and its slot.
///
/// # Examples
///
/// ```
/// use solitaire_engine::rules::check_player_input;
/// use solitaire_engine::errors::Slot;
///
/// assert!(check_player_input(&["M", "A3", "SA"]).is_ok());
/// assert!(check_player_input(&["M", "O", "G"]).is_ok());
///
/// let err = check_player_input(&["M", "A3", "Z"]).unwrap_err();
/// assert_eq!(err.token, "Z");
/// assert_eq!(err.slot, Slot::Destination);
/// ```
pub fn check_player_input<S: AsRef<str>>(tokens: &[S]) -> Result<(), SyntaxError> {
    parse_move(tokens).map(|_| ()).inspect_err(|e| {
        debug!(stage = "syntax", token = %e.token, slot = %e.slot, "move rejected");
    })
}

/// Verifies that moving the cards from `source_index` upwards in `source`
/// onto `destination` is possible, without looking at ranks or suits.
///
/// Checks, in order: distinct piles, non-empty source, non-stock
/// destination, face-up source card, single card when targeting a stack.
///
/// # Examples
///
/// ```
/// use solitaire_engine::cards::{Card, Rank, Suit};
/// use solitaire_engine::errors::PileError;
/// use solitaire_engine::pile::{Pile, PileKind};
/// use solitaire_engine::rules::deck_level_checks;
///
/// let column = Pile::with_cards(PileKind::Column, vec![Card::new(Suit::Hearts, Rank::Ace)]);
/// let stack = Pile::new(PileKind::Stack);
///
/// assert!(deck_level_checks(&column, 0, &stack).is_ok());
/// assert_eq!(deck_level_checks(&column, 0, &column), Err(PileError::SameDeck));
/// ```
pub fn deck_level_checks(
    source: &Pile,
    source_index: usize,
    destination: &Pile,
) -> Result<(), PileError> {
    pile_verdict(source, source_index, destination).inspect_err(|e| {
        debug!(stage = "pile", reason = ?e, source_index, "move rejected");
    })
}

fn pile_verdict(source: &Pile, source_index: usize, destination: &Pile) -> Result<(), PileError> {
    if std::ptr::eq(source, destination) {
        return Err(PileError::SameDeck);
    }
    if source.is_empty() {
        return Err(PileError::EmptySource);
    }
    if destination.kind() == PileKind::Stock {
        return Err(PileError::StockIsNotADestination);
    }
    if source_index < source.invisible() {
        return Err(PileError::InvisibleCard);
    }
    if destination.kind() == PileKind::Stack && Some(source_index) != source.top_index() {
        return Err(PileError::MultiCardToStack);
    }
    Ok(())
}

/// Verifies that `card_to_add` may be placed on `destination`.
///
/// `card_to_add` is the card at the source index, i.e. the bottom card of
/// the moved run. Stacks build up by one rank in a single suit starting at
/// Ace; columns build down by one rank in alternating colours starting at
/// King. Neither wraps around.
///
/// # Errors
///
/// The first violated [`CardError`]. A Joker meeting a column colour check
/// yields [`CardError::Contract`].
///
/// # Examples
///
/// ```
/// use solitaire_engine::cards::{Card, Rank, Suit};
/// use solitaire_engine::errors::CardError;
/// use solitaire_engine::pile::{Pile, PileKind};
/// use solitaire_engine::rules::card_level_checks;
///
/// let stack = Pile::with_cards(PileKind::Stack, vec![Card::new(Suit::Hearts, Rank::Six)]);
/// assert!(card_level_checks(&stack, &Card::new(Suit::Hearts, Rank::Seven)).is_ok());
///
/// let empty = Pile::new(PileKind::Stack);
/// assert_eq!(
///     card_level_checks(&empty, &Card::new(Suit::Spades, Rank::Five)),
///     Err(CardError::StackMustStartWithAce)
/// );
/// ```
pub fn card_level_checks(destination: &Pile, card_to_add: &Card) -> Result<(), CardError> {
    card_verdict(destination, card_to_add).inspect_err(|e| {
        debug!(stage = "card", reason = ?e, card = %card_to_add, "move rejected");
    })
}

fn card_verdict(destination: &Pile, card_to_add: &Card) -> Result<(), CardError> {
    let kind = destination.kind();
    if kind != PileKind::Stack && kind != PileKind::Column {
        return Err(CardError::InvalidTargetKind);
    }
    let Some(last) = destination.top() else {
        return match kind {
            PileKind::Stack if card_to_add.rank != Rank::Ace => {
                Err(CardError::StackMustStartWithAce)
            }
            PileKind::Column if card_to_add.rank != Rank::King => {
                Err(CardError::ColumnMustStartWithKing)
            }
            _ => Ok(()),
        };
    };

    if kind == PileKind::Stack {
        if card_to_add.suit != last.suit {
            return Err(CardError::SuitMismatchOnStack);
        }
        if last.rank.next() != Some(card_to_add.rank) {
            return Err(CardError::RankNotSequentialOnStack);
        }
    } else {
        if !opposing_color(last, card_to_add)? {
            return Err(CardError::ColorNotAlternating);
        }
        if last.rank.prev() != Some(card_to_add.rank) {
            return Err(CardError::RankNotSequentialOnColumn);
        }
    }
    Ok(())
}

/// True when the two cards are of different colours (red versus black).
///
/// # Errors
///
/// [`ContractViolation::JokerHasNoColor`] if either card is a Joker. The
/// first card is examined first.
pub fn opposing_color(card1: &Card, card2: &Card) -> Result<bool, ContractViolation> {
    Ok(red_suit(card1)? != red_suit(card2)?)
}

/// True when the card's suit is Diamonds or Hearts.
///
/// # Errors
///
/// [`ContractViolation::JokerHasNoColor`] for a Joker.
pub fn red_suit(card: &Card) -> Result<bool, ContractViolation> {
    Ok(card.color()? == Color::Red)
}
