//! A Klondike board that runs every move through the rule checks before
//! touching any pile.

use tracing::{debug, info};

use crate::cards::Card;
use crate::errors::MoveError;
use crate::location::{
    parse_move, DestinationLocation, MoveRequest, SourceLocation, COLUMN_COUNT, STACK_COUNT,
};
use crate::pile::{Pile, PileKind};
use crate::rules::{card_level_checks, deck_level_checks};

/// Game state for one session: stock, waste, four stacks and seven columns.
///
/// The board owns its piles exclusively. [`Board::validate`] only reads
/// them; [`Board::apply`] validates and then mutates in one `&mut self`
/// call, so nothing can change the piles between the check and the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stock: Pile,
    waste: Pile,
    stacks: [Pile; STACK_COUNT],
    columns: [Pile; COLUMN_COUNT],
}

/// A move that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub request: MoveRequest,
    /// Index of the first moved card in the source pile.
    pub source_index: usize,
    /// The first (bottom) card of the moved run.
    pub card: Card,
}

/// What [`Board::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub cards_moved: usize,
    /// The source column turned a face-down card up.
    pub revealed: bool,
}

impl Board {
    /// Board with every pile empty.
    pub fn empty() -> Self {
        Self {
            stock: Pile::new(PileKind::Stock),
            waste: Pile::new(PileKind::Waste),
            stacks: std::array::from_fn(|_| Pile::new(PileKind::Stack)),
            columns: std::array::from_fn(|_| Pile::new(PileKind::Column)),
        }
    }

    /// Assembles a board from prepared piles.
    pub fn from_parts(
        stock: Pile,
        waste: Pile,
        stacks: [Pile; STACK_COUNT],
        columns: [Pile; COLUMN_COUNT],
    ) -> Self {
        Self {
            stock,
            waste,
            stacks,
            columns,
        }
    }

    /// Lays out the Klondike opening: column `i` receives `i + 1` cards with
    /// only the top one face-up, and the rest go face-down to the stock.
    ///
    /// ```
    /// use solitaire_engine::board::Board;
    /// use solitaire_engine::deck::Deck;
    ///
    /// let mut deck = Deck::new_with_seed(1);
    /// deck.shuffle();
    /// let board = Board::deal(deck.into_cards());
    /// assert_eq!(board.columns()[6].len(), 7);
    /// assert_eq!(board.columns()[6].invisible(), 6);
    /// assert_eq!(board.stock().len(), 24);
    /// ```
    pub fn deal(cards: Vec<Card>) -> Self {
        let mut board = Self::empty();
        let mut cards = cards.into_iter();
        for (i, column) in board.columns.iter_mut().enumerate() {
            for card in cards.by_ref().take(i + 1) {
                column.push(card);
            }
            column.hide_all();
            column.reveal_top();
        }
        for card in cards {
            board.stock.push(card);
        }
        board.stock.hide_all();
        debug!(stock = board.stock.len(), "dealt board");
        board
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn stacks(&self) -> &[Pile; STACK_COUNT] {
        &self.stacks
    }

    pub fn columns(&self) -> &[Pile; COLUMN_COUNT] {
        &self.columns
    }

    /// Turns the top stock card onto the waste. When the stock is empty the
    /// waste is turned back over into the stock instead.
    ///
    /// Returns false when both piles are empty and nothing happened.
    pub fn draw(&mut self) -> bool {
        if let Some(card) = self.stock.pop() {
            self.waste.push(card);
            return true;
        }
        if self.waste.is_empty() {
            return false;
        }
        let mut recycled = self.waste.take_all();
        recycled.reverse();
        self.stock.extend(recycled);
        self.stock.hide_all();
        debug!(stock = self.stock.len(), "waste recycled into stock");
        true
    }

    fn source(&self, location: SourceLocation) -> (&Pile, usize) {
        let pile = match location {
            SourceLocation::Column { column, row } => return (&self.columns[column], row),
            // The stock marker moves the face-up card on the waste.
            SourceLocation::Stock => &self.waste,
            SourceLocation::Stack(i) => &self.stacks[i],
        };
        (pile, pile.top_index().unwrap_or(0))
    }

    fn source_mut(&mut self, location: SourceLocation) -> &mut Pile {
        match location {
            SourceLocation::Column { column, .. } => &mut self.columns[column],
            SourceLocation::Stock => &mut self.waste,
            SourceLocation::Stack(i) => &mut self.stacks[i],
        }
    }

    fn destination(&self, location: DestinationLocation) -> &Pile {
        match location {
            DestinationLocation::Column(i) => &self.columns[i],
            DestinationLocation::Stock => &self.stock,
            DestinationLocation::Stack(i) => &self.stacks[i],
        }
    }

    fn destination_mut(&mut self, location: DestinationLocation) -> &mut Pile {
        match location {
            DestinationLocation::Column(i) => &mut self.columns[i],
            DestinationLocation::Stock => &mut self.stock,
            DestinationLocation::Stack(i) => &mut self.stacks[i],
        }
    }

    /// Runs the syntax, pile and card checks for `tokens` against the
    /// current piles without changing them.
    ///
    /// # Errors
    ///
    /// The first rejection, or [`MoveError::NoCardAt`] when a column row
    /// points past the end of a non-empty column. The row is resolved
    /// before the pile checks; an empty source still reports `EmptySource`.
    pub fn validate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ValidatedMove, MoveError> {
        let request = parse_move(tokens)?;
        let (source, source_index) = self.source(request.source);
        let destination = self.destination(request.destination);
        let no_card = || MoveError::NoCardAt {
            location: request.source.to_string(),
        };
        if !source.is_empty() && source_index >= source.len() {
            debug!(location = %request.source, "move rejected: no card at row");
            return Err(no_card());
        }
        deck_level_checks(source, source_index, destination)?;
        let card = *source.get(source_index).ok_or_else(no_card)?;
        card_level_checks(destination, &card)?;
        Ok(ValidatedMove {
            request,
            source_index,
            card,
        })
    }

    /// Validates `tokens` and, only if every check passes, moves the run.
    ///
    /// ```
    /// use solitaire_engine::board::Board;
    /// use solitaire_engine::deck::Deck;
    /// use solitaire_engine::errors::{MoveError, PileError};
    ///
    /// let mut deck = Deck::new_with_seed(3);
    /// deck.shuffle();
    /// let mut board = Board::deal(deck.into_cards());
    /// let before = board.clone();
    ///
    /// let err = board.apply(&["M", "B0", "B"]).unwrap_err();
    /// assert_eq!(err, MoveError::Pile(PileError::SameDeck));
    /// assert_eq!(board, before);
    /// ```
    pub fn apply<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<MoveOutcome, MoveError> {
        let checked = self.validate(tokens)?;
        let request = checked.request;

        let source = self.source_mut(request.source);
        let run = source.split_off(checked.source_index);
        let revealed = source.kind() == PileKind::Column && source.reveal_top();
        let cards_moved = run.len();
        self.destination_mut(request.destination).extend(run);

        info!(
            from = %request.source,
            to = %request.destination,
            card = %checked.card,
            cards_moved,
            revealed,
            "move applied"
        );
        Ok(MoveOutcome {
            cards_moved,
            revealed,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
