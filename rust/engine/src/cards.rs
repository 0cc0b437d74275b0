use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ContractViolation;

/// Represents one of the four suits of a standard deck, plus the Joker sentinel.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
    /// Joker sentinel. Has no colour.
    Joker,
}

impl Suit {
    /// Single-letter form used on the board display: C, D, H, S or J.
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Joker => 'J',
        }
    }

    /// Suit glyph used when rendering with symbols.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Joker => '★',
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Ace is the lowest rank; the discriminants are the 1..=13 face values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Face value, 1 for Ace through 13 for King.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a face value, or `None` outside `1..=13`.
    ///
    /// ```
    /// use solitaire_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::from_u8(12), Some(Rank::Queen));
    /// assert_eq!(Rank::from_u8(12).map(Rank::short), Some("Q"));
    /// assert_eq!(Rank::from_u8(0), None);
    /// assert_eq!(Rank::King.value(), 13);
    /// ```
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    /// The rank one step above, or `None` for King. There is no wraparound.
    pub fn next(self) -> Option<Rank> {
        Rank::from_u8(self.value() + 1)
    }

    /// The rank one step below, or `None` for Ace.
    pub fn prev(self) -> Option<Rank> {
        Rank::from_u8(self.value() - 1)
    }

    /// Token used in card text: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn short(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Two-valued colour classification of the four standard suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; piles own them and the rule checks only read them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (or the Joker sentinel)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Colour of the card's suit.
    ///
    /// # Errors
    ///
    /// A Joker has no colour; asking for one is a caller bug and yields
    /// [`ContractViolation::JokerHasNoColor`].
    ///
    /// ```
    /// use solitaire_engine::cards::{Card, Color, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Hearts, Rank::Seven);
    /// assert_eq!(card.color(), Ok(Color::Red));
    /// assert!(Card::new(Suit::Joker, Rank::Ace).color().is_err());
    /// ```
    pub fn color(&self) -> Result<Color, ContractViolation> {
        match self.suit {
            Suit::Diamonds | Suit::Hearts => Ok(Color::Red),
            Suit::Clubs | Suit::Spades => Ok(Color::Black),
            Suit::Joker => Err(ContractViolation::JokerHasNoColor { card: *self }),
        }
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }

    /// Display form using suit symbols (`7♥`) instead of letters (`7H`).
    pub fn symbolic(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short(), self.suit.letter())
    }
}

/// The four standard suits, in the order stacks are usually laid out.
pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// 52 cards, suit by suit, Ace to King. No Jokers.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
