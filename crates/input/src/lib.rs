//! Pointer input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. The gesture
//! machine in [`gesture`] consumes abstract [`crate::types::PointerSample`]s;
//! [`map`] is the crossterm-specific pointer source that produces them from
//! terminal mouse events.

pub mod gesture;
pub mod map;

pub use tui_klondike_core as core;
pub use tui_klondike_types as types;

pub use gesture::{InputManager, PointerPhase};
pub use map::{cell_to_table, should_quit, wants_restart, PointerTracker};
