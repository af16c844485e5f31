//! Game engine - the controller tying rules to gestures
//!
//! Sits between the pure rule core and whatever shell drives it: the shell
//! feeds pointer samples in at a fixed tick, the engine recognizes gestures,
//! applies the game rules, and exposes the resulting board (plus any in-flight
//! drag) for rendering.

pub mod game;

pub use tui_klondike_core as core;
pub use tui_klondike_input as input;
pub use tui_klondike_types as types;

pub use game::{DragStack, Game};
