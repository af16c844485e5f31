//! TUI Klondike (workspace facade crate).
//!
//! This package keeps the `tui_klondike::{core,engine,input,term,types}`
//! public API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_klondike_core as core;
pub use tui_klondike_engine as engine;
pub use tui_klondike_input as input;
pub use tui_klondike_term as term;
pub use tui_klondike_types as types;
