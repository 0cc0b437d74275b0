use solitaire_engine::board::{Board, MoveOutcome};
use solitaire_engine::cards::{full_deck, Card, Rank, Suit};
use solitaire_engine::errors::{CardError, MoveError, PileError, Slot};
use solitaire_engine::location::{COLUMN_COUNT, STACK_COUNT};
use solitaire_engine::pile::{Pile, PileKind};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

struct Layout {
    stock: Vec<Card>,
    waste: Vec<Card>,
    stacks: [Vec<Card>; STACK_COUNT],
    columns: [(Vec<Card>, usize); COLUMN_COUNT],
}

impl Layout {
    fn new() -> Self {
        Self {
            stock: Vec::new(),
            waste: Vec::new(),
            stacks: Default::default(),
            columns: Default::default(),
        }
    }

    fn build(self) -> Board {
        let mut stock = Pile::with_cards(PileKind::Stock, self.stock);
        stock.hide_all();
        let stacks = self.stacks.map(|cards| Pile::with_cards(PileKind::Stack, cards));
        let columns = self.columns.map(|(cards, invisible)| {
            Pile::with_invisible(PileKind::Column, cards, invisible).unwrap()
        });
        Board::from_parts(
            stock,
            Pile::with_cards(PileKind::Waste, self.waste),
            stacks,
            columns,
        )
    }
}

#[test]
fn seven_of_hearts_from_column_to_stack_is_accepted() {
    let mut layout = Layout::new();
    layout.columns[0] = (
        vec![
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Hearts, Rank::Seven),
        ],
        3,
    );
    layout.stacks[0] = vec![card(Suit::Hearts, Rank::Six)];
    let mut board = layout.build();

    let outcome = board.apply(&["M", "A3", "SA"]).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome {
            cards_moved: 1,
            revealed: true
        }
    );
    assert_eq!(board.stacks()[0].top(), Some(&card(Suit::Hearts, Rank::Seven)));
    assert_eq!(board.columns()[0].len(), 3);
    assert_eq!(board.columns()[0].invisible(), 2);
}

#[test]
fn stock_card_to_empty_stack_needs_an_ace() {
    let mut layout = Layout::new();
    layout.waste = vec![card(Suit::Spades, Rank::Five)];
    let mut board = layout.build();
    let before = board.clone();

    let err = board.apply(&["M", "O", "SA"]).unwrap_err();
    assert_eq!(err, MoveError::Card(CardError::StackMustStartWithAce));
    assert_eq!(board, before, "rejected moves must not mutate the board");
}

#[test]
fn column_to_itself_is_same_deck() {
    let mut layout = Layout::new();
    layout.columns[1] = (vec![card(Suit::Hearts, Rank::King)], 0);
    let board = layout.build();
    assert_eq!(
        board.validate(&["M", "B0", "B"]),
        Err(MoveError::Pile(PileError::SameDeck))
    );
}

#[test]
fn unknown_destination_token_is_a_syntax_error() {
    let board = Board::empty();
    match board.validate(&["M", "A0", "Z"]) {
        Err(MoveError::Syntax(e)) => {
            assert_eq!(e.token, "Z");
            assert_eq!(e.slot, Slot::Destination);
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn black_eight_on_black_nine_is_rejected() {
    let mut layout = Layout::new();
    layout.columns[0] = (vec![card(Suit::Clubs, Rank::Nine)], 0);
    layout.columns[1] = (vec![card(Suit::Spades, Rank::Eight)], 0);
    let board = layout.build();
    assert_eq!(
        board.validate(&["M", "B0", "A"]),
        Err(MoveError::Card(CardError::ColorNotAlternating))
    );
}

#[test]
fn moving_to_stock_marker_is_rejected() {
    let mut layout = Layout::new();
    layout.columns[0] = (vec![card(Suit::Clubs, Rank::Nine)], 0);
    let board = layout.build();
    assert_eq!(
        board.validate(&["M", "A0", "O"]),
        Err(MoveError::Pile(PileError::StockIsNotADestination))
    );
}

#[test]
fn empty_stack_source_is_rejected() {
    let board = Board::empty();
    assert_eq!(
        board.validate(&["M", "SB", "A"]),
        Err(MoveError::Pile(PileError::EmptySource))
    );
}

#[test]
fn face_down_card_cannot_be_picked() {
    let mut layout = Layout::new();
    layout.columns[2] = (
        vec![card(Suit::Clubs, Rank::Nine), card(Suit::Hearts, Rank::King)],
        1,
    );
    let board = layout.build();
    assert_eq!(
        board.validate(&["M", "C0", "D"]),
        Err(MoveError::Pile(PileError::InvisibleCard))
    );
}

#[test]
fn run_moves_onto_column_with_its_bottom_card_checked() {
    let mut layout = Layout::new();
    layout.columns[0] = (
        vec![
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Clubs, Rank::Ten),
        ],
        1,
    );
    layout.columns[3] = (vec![card(Suit::Diamonds, Rank::King)], 0);
    let mut board = layout.build();

    // The run Q♠ J♥ 10♣ moves as a block onto K♦.
    let outcome = board.apply(&["M", "A1", "D"]).unwrap();
    assert_eq!(outcome.cards_moved, 3);
    assert!(outcome.revealed);
    assert_eq!(board.columns()[3].len(), 4);
    assert_eq!(board.columns()[3].top(), Some(&card(Suit::Clubs, Rank::Ten)));
    assert_eq!(board.columns()[0].visible(), &[card(Suit::Diamonds, Rank::Four)]);
}

#[test]
fn run_cannot_move_onto_a_stack() {
    let mut layout = Layout::new();
    layout.columns[0] = (
        vec![card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::King)],
        0,
    );
    let board = layout.build();
    assert_eq!(
        board.validate(&["M", "A0", "SA"]),
        Err(MoveError::Pile(PileError::MultiCardToStack))
    );
}

#[test]
fn king_from_waste_fills_empty_column() {
    let mut layout = Layout::new();
    layout.waste = vec![card(Suit::Clubs, Rank::Two), card(Suit::Hearts, Rank::King)];
    let mut board = layout.build();
    board.apply(&["M", "O", "E"]).unwrap();
    assert_eq!(board.columns()[4].top(), Some(&card(Suit::Hearts, Rank::King)));
    assert_eq!(board.waste().top(), Some(&card(Suit::Clubs, Rank::Two)));
}

#[test]
fn stack_card_can_return_to_a_column() {
    let mut layout = Layout::new();
    layout.stacks[3] = vec![
        card(Suit::Spades, Rank::Ace),
        card(Suit::Spades, Rank::Two),
    ];
    layout.columns[6] = (vec![card(Suit::Hearts, Rank::Three)], 0);
    let mut board = layout.build();
    board.apply(&["M", "SD", "G"]).unwrap();
    assert_eq!(board.stacks()[3].len(), 1);
    assert_eq!(board.columns()[6].top(), Some(&card(Suit::Spades, Rank::Two)));
}

#[test]
fn joker_reaching_column_check_is_reported_as_contract_violation() {
    let mut layout = Layout::new();
    layout.waste = vec![card(Suit::Joker, Rank::Eight)];
    layout.columns[0] = (vec![card(Suit::Hearts, Rank::Nine)], 0);
    let board = layout.build();
    let err = board.validate(&["M", "O", "A"]).unwrap_err();
    assert!(err.is_contract_violation());
}

#[test]
fn row_past_column_end_is_no_card_whatever_the_destination() {
    let board = Board::deal(full_deck());
    let expected = Err(MoveError::NoCardAt {
        location: "A5".into(),
    });
    // Column A holds one card after the deal.
    assert_eq!(board.validate(&["M", "A5", "SA"]), expected);
    assert_eq!(board.validate(&["M", "A5", "B"]), expected);
}

#[test]
fn empty_column_with_a_row_is_still_an_empty_source() {
    let board = Board::empty();
    assert_eq!(
        board.validate(&["M", "D3", "SA"]),
        Err(MoveError::Pile(PileError::EmptySource))
    );
}
