//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The renderer owns the terminal session: raw mode, the alternate screen,
//! and mouse capture (the pointer is the game's primary input). Drawing diffs
//! each frame against the previous one and only rewrites changed runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => prev,
            _ => {
                // First frame, or size changed: full redraw against a blank.
                self.buf.clear();
                encode_full_into(fb, &mut self.buf)?;
                self.flush_buf()?;
                let mut blank = FrameBuffer::new(fb.width(), fb.height());
                std::mem::swap(&mut blank, fb);
                // `fb` now holds a blank of the right size for the caller to
                // render the next frame into; remember what is on screen.
                self.last = Some(blank);
                return Ok(());
            }
        };

        self.buf.clear();
        encode_diff_into(&prev, fb, &mut self.buf)?;
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            emit_cell(out, cell.ch, cell.style, &mut style)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs only) into `out`.
///
/// Both buffers must have the same dimensions; `draw_swap` guarantees this.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;

    for y in 0..next.height() {
        let mut in_run = false;
        for x in 0..next.width() {
            let cell = next.get(x, y).unwrap_or_default();
            if prev.get(x, y).unwrap_or_default() == cell {
                in_run = false;
                continue;
            }
            if !in_run {
                out.queue(cursor::MoveTo(x, y))?;
                in_run = true;
            }
            emit_cell(out, cell.ch, cell.style, &mut style)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn emit_cell(
    out: &mut Vec<u8>,
    ch: char,
    style: CellStyle,
    current: &mut Option<CellStyle>,
) -> Result<()> {
    if *current != Some(style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        *current = Some(style);
    }
    out.queue(Print(ch))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb_to_color(rgb), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_diff_of_identical_frames_is_nearly_empty() {
        let a = FrameBuffer::new(8, 3);
        let b = a.clone();

        let mut unchanged = Vec::new();
        encode_diff_into(&a, &b, &mut unchanged).unwrap();

        let mut changed = Vec::new();
        let mut c = a.clone();
        c.set(4, 1, Cell::new('X', CellStyle::default()));
        encode_diff_into(&a, &c, &mut changed).unwrap();

        // Identical frames only emit the trailing reset; a real change emits
        // a cursor move plus the cell.
        assert!(unchanged.len() < changed.len());
    }

    #[test]
    fn test_full_encode_emits_every_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A') && text.contains('B'));
    }
}
