use std::fmt;

use thiserror::Error;

use crate::cards::Card;

/// Which half of a move command a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Source,
    Destination,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Source => f.write_str("source"),
            Slot::Destination => f.write_str("destination"),
        }
    }
}

/// A move token that does not name a valid location.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid Move syntax. \"{token}\" is not a valid {slot} location.\nSee Help for instructions.")]
pub struct SyntaxError {
    pub token: String,
    pub slot: Slot,
}

/// Pile-level rejections, in the order the checks run.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PileError {
    #[error("Move source and destination can't be the same")]
    SameDeck,
    #[error("You can't move a card from an empty deck")]
    EmptySource,
    #[error("You can't move cards to the stock")]
    StockIsNotADestination,
    #[error("You can't move an invisible card")]
    InvisibleCard,
    #[error("You can't move more than 1 card at a time to a Stack Pile")]
    MultiCardToStack,
}

/// Card-level rejections.
///
/// `Contract` is not a gameplay outcome: it means a Joker reached the colour
/// comparison, which callers must never let happen.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Target deck is neither Stack nor Column.")]
    InvalidTargetKind,
    #[error("An Ace has to be the first card of a Stack Pile")]
    StackMustStartWithAce,
    #[error("A King has to be the first card of a Column")]
    ColumnMustStartWithKing,
    #[error("Stack Piles can only contain same-suit cards")]
    SuitMismatchOnStack,
    #[error("Stack Piles hold same-suit cards of increasing Rank from Ace to King")]
    RankNotSequentialOnStack,
    #[error("Column cards have to alternate colors (red and black)")]
    ColorNotAlternating,
    #[error("Columns hold alternating-color cards of decreasing rank from King to Two")]
    RankNotSequentialOnColumn,
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// Misuse of the engine API by the caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("colour of {card} requested, but Jokers have no colour")]
    JokerHasNoColor { card: Card },
    #[error("pile holds {len} cards but {invisible} are marked invisible")]
    InvisibleExceedsLength { invisible: usize, len: usize },
}

/// Any rejection produced while validating a full move command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Pile(#[from] PileError),
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error("There is no card at {location}")]
    NoCardAt { location: String },
}

impl MoveError {
    /// True for caller bugs rather than ordinary illegal moves.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            MoveError::Contract(_) | MoveError::Card(CardError::Contract(_))
        )
    }
}
