//! Core rule engine - pure, deterministic, and testable
//!
//! This crate owns the cards, the stacks, and the board: everything with
//! game-rule semantics and nothing else. It has **zero dependencies** on
//! input, rendering, or I/O, making it:
//!
//! - **Deterministic**: the same seed deals and replays the same game
//! - **Testable**: every rule and invariant is exercised by unit tests
//! - **Portable**: usable from a terminal shell, a GUI, or headless tests
//!
//! # Module Structure
//!
//! - [`stack`]: one stack type with a closed kind set carrying the add rules
//! - [`board`]: the full table — deal, deck recycling, win condition
//! - [`rng`]: seeded LCG shuffling for reproducible deals
//! - [`error`]: contract-violation errors for the mutating stack operations
//!
//! # Rules implemented
//!
//! Standard single-draw Klondike: tableaus build down in alternating colors
//! (King fills an empty column), foundations build up in suit from the Ace,
//! the deck turns one card at a time onto the waste and recycles without a
//! pass limit.

pub mod board;
pub mod error;
pub mod rng;
pub mod stack;

pub use tui_klondike_types as types;

// Re-export commonly used types for convenience
pub use board::GameBoard;
pub use error::StackError;
pub use rng::{shuffled_deck, SimpleRng};
pub use stack::{Stack, StackKind};
