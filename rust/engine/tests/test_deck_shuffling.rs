use std::collections::HashSet;

use solitaire_engine::board::Board;
use solitaire_engine::cards::Card;
use solitaire_engine::deck::Deck;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn into_cards_skips_dealt_cards() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    let first = deck.deal_card().unwrap();
    let rest = deck.into_cards();
    assert_eq!(rest.len(), 51);
    assert!(!rest.contains(&first));
}

#[test]
fn same_seed_deals_same_board() {
    let deal = |seed| {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Board::deal(deck.into_cards())
    };
    assert_eq!(deal(77), deal(77));
}

#[test]
fn cards_serialize_by_suit_and_rank_name() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let card = deck.deal_card().unwrap();
    let json = serde_json::to_string(&card).unwrap();
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
    assert!(json.contains("\"suit\""));
    assert!(json.contains("\"rank\""));
}
