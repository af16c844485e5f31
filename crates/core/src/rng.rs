//! RNG module - deterministic deck shuffling
//!
//! A simple LCG plus Fisher-Yates keeps shuffles reproducible from a seed,
//! so a whole game can be replayed in tests from a single number.

use crate::types::{Card, Rank, Suit, DECK_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Build a standard 52-card deck, every card face-down, uniformly shuffled.
pub fn shuffled_deck(seed: u32) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    SimpleRng::new(seed).shuffle(&mut cards);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_deck_has_all_52_cards_face_down() {
        let deck = shuffled_deck(7);
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| c.face_down));

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert_eq!(
                    deck.iter().filter(|c| c.suit == suit && c.rank == rank).count(),
                    1,
                    "missing or duplicated {:?} {:?}",
                    rank,
                    suit
                );
            }
        }
    }

    #[test]
    fn test_deck_shuffle_is_seeded() {
        assert_eq!(shuffled_deck(42), shuffled_deck(42));
        assert_ne!(shuffled_deck(42), shuffled_deck(43));
    }
}
