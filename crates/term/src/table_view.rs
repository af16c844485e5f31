//! TableView: maps a game board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Stacks carry their layout in the logical 1280x720 table space; the view
//! only scales those rects into terminal cells, with the row axis flipped
//! because the table's origin is bottom-left.

use crate::core::{GameBoard, Stack};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Card, Color, Rect, TABLE_HEIGHT, TABLE_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FELT: Rgb = Rgb::new(0, 96, 48);
const FACE: Rgb = Rgb::new(235, 235, 225);
const BACK: Rgb = Rgb::new(40, 60, 150);
const BACK_WEAVE: Rgb = Rgb::new(95, 115, 205);
const RED_PIP: Rgb = Rgb::new(190, 30, 40);
const BLACK_PIP: Rgb = Rgb::new(25, 25, 30);
const EDGE: Rgb = Rgb::new(120, 120, 110);

/// A lightweight terminal renderer for the patience table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableView;

impl TableView {
    pub fn new() -> Self {
        Self
    }

    /// Render the table into an existing framebuffer.
    ///
    /// This is the allocation-light hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    ///
    /// `drag` is drawn last so mid-drag cards float above everything else.
    pub fn render_into(
        &self,
        board: &GameBoard,
        drag: Option<&Stack>,
        won: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        let felt = CellStyle::colored(Rgb::new(180, 220, 190), FELT);
        fb.clear(Cell::new(' ', felt));

        for (_, stack) in board.stacks() {
            self.draw_stack(fb, stack, viewport);
        }
        if let Some(stack) = drag {
            self.draw_stack(fb, stack, viewport);
        }

        self.draw_status_line(fb, viewport, felt);

        if won {
            self.draw_win_banner(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: &GameBoard,
        drag: Option<&Stack>,
        won: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, drag, won, viewport, &mut fb);
        fb
    }

    fn draw_stack(&self, fb: &mut FrameBuffer, stack: &Stack, viewport: Viewport) {
        if stack.is_empty() {
            let (x, y, w, h) = table_rect_to_cells(stack.rect(), viewport);
            fb.draw_frame(x, y, w, h, CellStyle::colored(EDGE, FELT).dim());
            return;
        }
        // Bottom card first; later cards of a fan overdraw the earlier ones.
        for (i, card) in stack.cards().iter().enumerate() {
            if let Some(rect) = stack.card_rect(i) {
                self.draw_card(fb, card, rect, viewport);
            }
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: &Card, rect: Rect, viewport: Viewport) {
        let (x, y, w, h) = table_rect_to_cells(rect, viewport);

        if card.face_down {
            let back = CellStyle::colored(BACK_WEAVE, BACK);
            fb.fill_rect(x, y, w, h, '░', back);
            fb.draw_frame(x, y, w, h, back);
            return;
        }

        let pip = match card.color() {
            Color::Red => RED_PIP,
            Color::Black => BLACK_PIP,
        };
        fb.fill_rect(x, y, w, h, ' ', CellStyle::colored(pip, FACE));
        fb.draw_frame(x, y, w, h, CellStyle::colored(EDGE, FACE));

        // The corner label sits on the top edge so it survives fan overlap.
        let label = format!("{}{}", card.rank.label(), card.suit.glyph());
        fb.put_str(x + 1, y, &label, CellStyle::colored(pip, FACE).bold());
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, viewport: Viewport, felt: CellStyle) {
        if viewport.height == 0 {
            return;
        }
        fb.put_str(
            0,
            viewport.height - 1,
            " q quit   r restart   click deck to draw ",
            felt.dim(),
        );
    }

    fn draw_win_banner(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let text = "  YOU WON!  ";
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        let style = CellStyle::colored(Rgb::new(255, 255, 255), Rgb::new(160, 110, 10)).bold();
        fb.put_str(x, y, text, style);
    }
}

/// Scale a table-space rect into a terminal cell rect (x, y, w, h).
///
/// The top of the rect (highest y in table space) becomes the smallest row.
/// Results are clamped to the viewport and kept at least one cell in each
/// dimension so thin fans stay visible.
fn table_rect_to_cells(rect: Rect, viewport: Viewport) -> (u16, u16, u16, u16) {
    let cols = viewport.width.max(1) as f32;
    let rows = viewport.height.max(1) as f32;

    let x0 = (rect.x / TABLE_WIDTH * cols).round();
    let x1 = ((rect.x + rect.w) / TABLE_WIDTH * cols).round();
    let y0 = ((1.0 - (rect.y + rect.h) / TABLE_HEIGHT) * rows).round();
    let y1 = ((1.0 - rect.y / TABLE_HEIGHT) * rows).round();

    let max_x = (viewport.width.saturating_sub(1)) as f32;
    let max_y = (viewport.height.saturating_sub(1)) as f32;
    let x = x0.clamp(0.0, max_x);
    let y = y0.clamp(0.0, max_y);
    let w = (x1.clamp(0.0, cols) - x).max(1.0);
    let h = (y1.clamp(0.0, rows) - y).max(1.0);
    (x as u16, y as u16, w as u16, h as u16)
}
