//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: [`table_view`] draws the board
//! into a plain framebuffer of styled cells, and [`renderer`] flushes that
//! framebuffer to the terminal with diffed updates. No widget toolkit, no
//! layout engine.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Give the table view precise control over card placement and color
//! - Own the terminal session (raw mode, alternate screen, mouse capture)

pub mod fb;
pub mod renderer;
pub mod table_view;

pub use tui_klondike_core as core;
pub use tui_klondike_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table_view::{TableView, Viewport};
