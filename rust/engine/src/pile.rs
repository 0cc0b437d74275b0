use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::ContractViolation;

/// The role a pile plays on the board. Drives which rules apply to it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down draw pile. Cards leave it, never enter it.
    Stock,
    /// Foundation, built up Ace to King in one suit.
    Stack,
    /// Tableau column, built down King to Two in alternating colours.
    Column,
    /// Face-up cards turned from the stock.
    Waste,
}

/// An ordered run of cards, bottom first, with a number of face-down
/// ("invisible") cards at the bottom.
///
/// `invisible <= cards.len()` holds for every value of this type.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
    invisible: usize,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
            invisible: 0,
        }
    }

    /// Builds a pile with every card face-up.
    pub fn with_cards(kind: PileKind, cards: Vec<Card>) -> Self {
        Self {
            kind,
            cards,
            invisible: 0,
        }
    }

    /// Builds a pile whose bottom `invisible` cards are face-down.
    ///
    /// ```
    /// use solitaire_engine::cards::{Card, Rank, Suit};
    /// use solitaire_engine::pile::{Pile, PileKind};
    ///
    /// let cards = vec![Card::new(Suit::Clubs, Rank::Two), Card::new(Suit::Hearts, Rank::Ace)];
    /// let pile = Pile::with_invisible(PileKind::Column, cards.clone(), 1).unwrap();
    /// assert_eq!(pile.invisible(), 1);
    /// assert!(Pile::with_invisible(PileKind::Column, cards, 3).is_err());
    /// ```
    pub fn with_invisible(
        kind: PileKind,
        cards: Vec<Card>,
        invisible: usize,
    ) -> Result<Self, ContractViolation> {
        if invisible > cards.len() {
            return Err(ContractViolation::InvisibleExceedsLength {
                invisible,
                len: cards.len(),
            });
        }
        Ok(Self {
            kind,
            cards,
            invisible,
        })
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn invisible(&self) -> usize {
        self.invisible
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Index of the top card, or `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// Face-up cards, bottom first.
    pub fn visible(&self) -> &[Card] {
        &self.cards[self.invisible..]
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends a run on top. The run lands face-up.
    pub fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.invisible = self.invisible.min(self.cards.len());
        Some(card)
    }

    /// Removes and returns the cards from `index` to the top.
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        let run = self.cards.split_off(index.min(self.cards.len()));
        self.invisible = self.invisible.min(self.cards.len());
        run
    }

    /// Removes every card, leaving the pile empty.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.invisible = 0;
        std::mem::take(&mut self.cards)
    }

    /// Turns the top card face-up if all remaining cards are face-down.
    /// Returns true when a card was turned.
    pub fn reveal_top(&mut self) -> bool {
        if !self.cards.is_empty() && self.invisible == self.cards.len() {
            self.invisible -= 1;
            true
        } else {
            false
        }
    }

    /// Marks every card face-down.
    pub fn hide_all(&mut self) {
        self.invisible = self.cards.len();
    }
}
