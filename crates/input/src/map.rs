//! Input mapping - crossterm events to pointer samples
//!
//! The gesture machine works in the logical table space; this module is the
//! terminal-specific pointer source that feeds it. Terminal cells map onto
//! the 1280x720 canvas through their centers, with the row axis flipped to
//! the table's bottom-left origin.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{PointerSample, Vec2, TABLE_HEIGHT, TABLE_WIDTH};

/// Map a terminal cell to its center in table space.
pub fn cell_to_table(column: u16, row: u16, cols: u16, rows: u16) -> Vec2 {
    let cols = cols.max(1) as f32;
    let rows = rows.max(1) as f32;
    let x = (column as f32 + 0.5) / cols * TABLE_WIDTH;
    let y = TABLE_HEIGHT - (row as f32 + 0.5) / rows * TABLE_HEIGHT;
    Vec2::new(x, y)
}

/// Tracks the left mouse button and pointer position between ticks.
///
/// Crossterm reports discrete events; the gesture machine wants one sample
/// per tick. The tracker folds events as they arrive and hands out the
/// latest state on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    pos: Vec2,
    pressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one mouse event into the tracked state.
    pub fn apply_mouse_event(&mut self, event: &MouseEvent, cols: u16, rows: u16) {
        let pos = cell_to_table(event.column, event.row, cols, rows);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = true;
                self.pos = pos;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pressed = false;
                self.pos = pos;
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.pos = pos;
            }
            _ => {}
        }
    }

    /// Current state as one gesture-machine tick sample.
    pub fn sample(&self) -> PointerSample {
        PointerSample {
            pos: self.pos,
            pressed: self.pressed,
        }
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart with a fresh shuffle
pub fn wants_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
