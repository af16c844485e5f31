//! Stack operation errors.
//!
//! Every variant is a programmer-contract violation, not a playable outcome:
//! the controller pre-checks rules (`can_add`), emptiness, and pick state
//! before calling the mutating operations, so none of these should be
//! reachable through the gesture API. Tests assert exactly that.

use thiserror::Error;

use crate::types::Card;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StackError {
    /// The stack's add rule rejected the card.
    #[error("cannot add {0} to this stack")]
    InvalidMove(Card),

    /// Removal was requested from a stack with no cards.
    #[error("stack is empty")]
    EmptyStack,

    /// A pick named a card that is not in the stack.
    #[error("{0} is not in this stack")]
    CardNotFound(Card),

    /// A pick was requested while a previous pick is still outstanding.
    #[error("a pick is already outstanding on this stack")]
    PickOutstanding,
}
