//! Board-level tests through the public facade

use std::collections::HashSet;

use tui_klondike::core::GameBoard;
use tui_klondike::types::{Suit, DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};

fn census(board: &GameBoard) -> Vec<(Suit, u8)> {
    let mut all = Vec::new();
    for (_, stack) in board.stacks() {
        for card in stack.cards() {
            all.push((card.suit, card.rank.value()));
        }
    }
    all
}

#[test]
fn test_same_seed_deals_identically() {
    let a = GameBoard::new(42);
    let b = GameBoard::new(42);
    for (id, stack) in a.stacks() {
        assert_eq!(stack.cards(), b.stack(id).cards());
    }
}

#[test]
fn test_different_seeds_deal_differently() {
    let a = GameBoard::new(42);
    let b = GameBoard::new(43);
    let same = a
        .stacks()
        .all(|(id, stack)| stack.cards() == b.stack(id).cards());
    assert!(!same);
}

#[test]
fn test_every_deal_is_a_complete_deck() {
    for seed in [0, 1, 7, 1000, u32::MAX] {
        let board = GameBoard::new(seed);
        let cards = census(&board);
        assert_eq!(cards.len(), DECK_SIZE, "seed {}", seed);
        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), DECK_SIZE, "seed {} has duplicates", seed);
    }
}

#[test]
fn test_layout_shape() {
    let board = GameBoard::new(5);

    // Tableaus run left to right along the top.
    let xs: Vec<f32> = board
        .tableau_ids()
        .iter()
        .map(|&id| board.stack(id).position().x)
        .collect();
    assert_eq!(xs.len(), TABLEAU_COUNT);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));

    // Foundations cluster in the top-right, above the tableau baseline's top
    // edge or beside it; all four sit to the right of the last tableau.
    let last_tableau_x = xs[TABLEAU_COUNT - 1];
    let foundation_xs: Vec<f32> = board
        .foundation_ids()
        .iter()
        .map(|&id| board.stack(id).position().x)
        .collect();
    assert_eq!(foundation_xs.len(), FOUNDATION_COUNT);
    assert!(foundation_xs.iter().all(|&x| x > last_tableau_x));

    // Deck and waste sit low on the right.
    let deck = board.stack(board.deck_id()).position();
    let waste = board.stack(board.waste_id()).position();
    assert!(deck.y < board.stack(board.tableau_ids()[0]).position().y);
    assert!(waste.x < deck.x);
}

#[test]
fn test_draw_and_recycle_preserves_order() {
    let mut board = GameBoard::new(9);
    let deck = board.deck_id();
    let waste = board.waste_id();
    let original = board.stack(deck).cards().to_vec();

    for _ in 0..2 {
        while let Ok(mut card) = board.stack_mut(deck).remove_top() {
            card.face_down = false;
            board.stack_mut(waste).add(card).unwrap();
        }
        board.reset_deck();
    }

    assert_eq!(board.stack(deck).cards(), &original[..]);
    assert_eq!(census(&board).len(), DECK_SIZE);
}
