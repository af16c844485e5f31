//! Terminal Klondike runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for mouse/keyboard input and a custom framebuffer-based
//! renderer (no widget toolkit).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_klondike::engine::Game;
use tui_klondike::input::{should_quit, wants_restart, PointerTracker};
use tui_klondike::term::{FrameBuffer, TableView, TerminalRenderer, Viewport};
use tui_klondike::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(seed_from_clock());
    let view = TableView::new();
    let mut tracker = PointerTracker::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            game.board(),
            game.drag_stack(),
            game.is_won(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if wants_restart(key) {
                        game.reset();
                    }
                }
                Event::Mouse(mouse) => {
                    tracker.apply_mouse_event(&mouse, w, h);
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.update(TICK_MS as f32 / 1000.0, tracker.sample());
        }
    }
}
