//! Board module - owns every stack and the full card population
//!
//! The board deals the opening layout, recycles the deck, and reports the win
//! condition. Stacks are addressed through [`StackId`] handles; the handle
//! table never changes shape after construction, so ids stay valid for the
//! whole game.
//!
//! Invariant: at any settled (non-dragging) moment the cards across all
//! stacks are exactly the standard 52, no duplicates, no omissions.

use crate::rng::shuffled_deck;
use crate::stack::{Stack, StackKind};
use crate::types::{
    StackId, CARD_HEIGHT, CARD_WIDTH, DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT, TABLE_HEIGHT,
    TABLE_WIDTH,
};

/// Horizontal spacing between tableau columns, in card widths.
const TABLEAU_PITCH: f32 = 1.20;
/// Second-column offset for the paired piles on the right, in card widths.
const SIDE_PITCH: f32 = 2.2;

/// The full game board: draw deck, waste, seven tableaus, four foundations.
#[derive(Debug, Clone)]
pub struct GameBoard {
    /// All stacks, in registration order. Hover scanning walks this in order
    /// with last-match-wins, so later stacks take priority on overlap.
    stacks: Vec<Stack>,
    deck: StackId,
    waste: StackId,
    tableaus: [StackId; TABLEAU_COUNT],
    foundations: [StackId; FOUNDATION_COUNT],
}

impl GameBoard {
    /// Deal a fresh board from a seeded shuffle.
    ///
    /// Tableau `i` receives `i + 1` cards from the bottom of the shuffled
    /// deck, the last of them face-up; the remainder stays in the draw deck.
    pub fn new(seed: u32) -> Self {
        let mut stacks = Vec::with_capacity(FOUNDATION_COUNT + 2 + TABLEAU_COUNT);
        let mut push = |stack: Stack, stacks: &mut Vec<Stack>| {
            stacks.push(stack);
            StackId(stacks.len() - 1)
        };

        // Foundations sit in a 2x2 block in the top-right corner.
        let fx = [
            TABLE_WIDTH - CARD_WIDTH,
            TABLE_WIDTH - CARD_WIDTH * SIDE_PITCH,
            TABLE_WIDTH - CARD_WIDTH,
            TABLE_WIDTH - CARD_WIDTH * SIDE_PITCH,
        ];
        let fy = [
            TABLE_HEIGHT - CARD_HEIGHT,
            TABLE_HEIGHT - CARD_HEIGHT,
            TABLE_HEIGHT - CARD_HEIGHT * SIDE_PITCH,
            TABLE_HEIGHT - CARD_HEIGHT * SIDE_PITCH,
        ];
        let mut foundations = [StackId(0); FOUNDATION_COUNT];
        for i in 0..FOUNDATION_COUNT {
            foundations[i] = push(Stack::new(StackKind::Foundation, fx[i], fy[i]), &mut stacks);
        }

        // Deal: cards leave the shuffle from the front, which is the deck's
        // bottom, exactly as if dealt off a face-down pile.
        let mut shuffle = shuffled_deck(seed).into_iter();
        let mut tableau_cards: Vec<Vec<_>> = Vec::with_capacity(TABLEAU_COUNT);
        for pile in 0..TABLEAU_COUNT {
            let mut cards: Vec<_> = shuffle.by_ref().take(pile + 1).collect();
            if let Some(last) = cards.last_mut() {
                last.face_down = false;
            }
            tableau_cards.push(cards);
        }

        let deck = push(
            Stack::with_cards(
                StackKind::Pile { accepting: false },
                TABLE_WIDTH - CARD_WIDTH,
                CARD_HEIGHT / 2.0,
                shuffle.collect(),
            ),
            &mut stacks,
        );
        let waste = push(
            Stack::new(
                StackKind::Pile { accepting: true },
                TABLE_WIDTH - CARD_WIDTH * SIDE_PITCH,
                CARD_HEIGHT / 2.0,
            ),
            &mut stacks,
        );

        let mut tableaus = [StackId(0); TABLEAU_COUNT];
        for (i, cards) in tableau_cards.into_iter().enumerate() {
            tableaus[i] = push(
                Stack::with_cards(
                    StackKind::Tableau,
                    CARD_WIDTH * TABLEAU_PITCH * i as f32,
                    TABLE_HEIGHT - CARD_HEIGHT,
                    cards,
                ),
                &mut stacks,
            );
        }

        Self {
            stacks,
            deck,
            waste,
            tableaus,
            foundations,
        }
    }

    pub fn stack(&self, id: StackId) -> &Stack {
        &self.stacks[id.0]
    }

    pub fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        &mut self.stacks[id.0]
    }

    /// All stacks with their ids, in registration order.
    pub fn stacks(&self) -> impl Iterator<Item = (StackId, &Stack)> {
        self.stacks.iter().enumerate().map(|(i, s)| (StackId(i), s))
    }

    pub fn deck_id(&self) -> StackId {
        self.deck
    }

    pub fn waste_id(&self) -> StackId {
        self.waste
    }

    pub fn tableau_ids(&self) -> &[StackId; TABLEAU_COUNT] {
        &self.tableaus
    }

    pub fn foundation_ids(&self) -> &[StackId; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// Rebuild the draw deck from the waste pile.
    ///
    /// Only meaningful once the deck has been drawn empty; a non-empty deck
    /// makes this a no-op. The waste is reversed and turned face-down, which
    /// restores the original draw order (unlimited recycling, no pass limit).
    pub fn reset_deck(&mut self) {
        if !self.stack(self.deck).is_empty() {
            return;
        }
        let mut cards = self.stack_mut(self.waste).take_all();
        cards.reverse();
        for card in &mut cards {
            card.face_down = true;
        }
        self.stack_mut(self.deck).set_cards(cards);
    }

    /// True when every card has reached a foundation.
    pub fn is_won(&self) -> bool {
        let count: usize = self
            .foundations
            .iter()
            .map(|&id| self.stack(id).len())
            .sum();
        count == DECK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rank, Suit};
    use std::collections::HashSet;

    fn card_census(board: &GameBoard) -> Vec<(Suit, Rank)> {
        let mut seen = Vec::new();
        for (_, stack) in board.stacks() {
            for card in stack.cards() {
                seen.push((card.suit, card.rank));
            }
        }
        seen
    }

    #[test]
    fn test_deal_shape() {
        let board = GameBoard::new(99);

        for (i, &id) in board.tableau_ids().iter().enumerate() {
            let stack = board.stack(id);
            assert_eq!(stack.len(), i + 1, "tableau {} size", i);
            // Only the top card is face-up.
            for (j, card) in stack.cards().iter().enumerate() {
                assert_eq!(card.face_down, j != i, "tableau {} card {}", i, j);
            }
        }

        assert_eq!(board.stack(board.deck_id()).len(), DECK_SIZE - 28);
        assert!(board.stack(board.waste_id()).is_empty());
        for &id in board.foundation_ids() {
            assert!(board.stack(id).is_empty());
        }
    }

    #[test]
    fn test_deal_conserves_all_52_cards() {
        let board = GameBoard::new(7);
        let census = card_census(&board);
        assert_eq!(census.len(), DECK_SIZE);
        let unique: HashSet<_> = census.iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_registration_order_puts_tableaus_last() {
        let board = GameBoard::new(7);
        let ids: Vec<_> = board.stacks().map(|(id, _)| id).collect();
        assert_eq!(&ids[..4], board.foundation_ids());
        assert_eq!(ids[4], board.deck_id());
        assert_eq!(ids[5], board.waste_id());
        assert_eq!(&ids[6..], board.tableau_ids());
    }

    #[test]
    fn test_deck_recycle_round_trip() {
        let mut board = GameBoard::new(3);
        let deck = board.deck_id();
        let waste = board.waste_id();
        let original: Vec<_> = board.stack(deck).cards().to_vec();

        // Draw the entire deck into the waste, face-up.
        while let Ok(mut card) = board.stack_mut(deck).remove_top() {
            card.face_down = false;
            board.stack_mut(waste).add(card).unwrap();
        }
        assert!(board.stack(deck).is_empty());
        assert_eq!(board.stack(waste).len(), original.len());

        board.reset_deck();

        assert!(board.stack(waste).is_empty());
        let recycled = board.stack(deck).cards();
        assert_eq!(recycled.len(), original.len());
        assert!(recycled.iter().all(|c| c.face_down));
        // Reversed twice: the original draw order is back.
        assert_eq!(recycled, &original[..]);
    }

    #[test]
    fn test_reset_deck_is_a_noop_while_deck_has_cards() {
        let mut board = GameBoard::new(3);
        let before = board.stack(board.deck_id()).cards().to_vec();
        board.reset_deck();
        assert_eq!(board.stack(board.deck_id()).cards(), &before[..]);
    }

    #[test]
    fn test_is_won_requires_all_52_in_foundations() {
        let mut board = GameBoard::new(5);
        assert!(!board.is_won());

        // Drain every stack, then refill the foundations suit by suit.
        let mut cards = Vec::new();
        let ids: Vec<_> = board.stacks().map(|(id, _)| id).collect();
        for id in ids {
            cards.extend(board.stack_mut(id).take_all());
        }
        assert_eq!(cards.len(), DECK_SIZE);

        for (i, suit) in Suit::ALL.iter().enumerate() {
            let foundation = board.foundation_ids()[i];
            for rank in Rank::ALL {
                let mut card = *cards
                    .iter()
                    .find(|c| c.suit == *suit && c.rank == rank)
                    .unwrap();
                card.face_down = false;
                board.stack_mut(foundation).add(card).unwrap();
            }
            // Won only once the very last suit is complete.
            assert_eq!(board.is_won(), i == Suit::ALL.len() - 1);
        }
    }
}
