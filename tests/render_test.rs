//! Rendering smoke tests through the public facade

use tui_klondike::core::GameBoard;
use tui_klondike::engine::Game;
use tui_klondike::term::{encode_diff_into, encode_full_into, FrameBuffer, TableView, Viewport};
use tui_klondike::types::GestureEvent;

#[test]
fn test_render_at_assorted_terminal_sizes() {
    let board = GameBoard::new(21);
    let view = TableView::new();
    for (w, h) in [(80, 24), (120, 40), (40, 12), (3, 2), (1, 1)] {
        let fb = view.render(&board, None, false, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn test_render_with_an_active_drag() {
    let mut game = Game::new(21);
    let t5 = game.board().tableau_ids()[5];
    let top = *game.board().stack(t5).top().unwrap();
    game.apply_event(GestureEvent::DragStarted(t5, top));

    let view = TableView::new();
    let fb = view.render(
        game.board(),
        game.drag_stack(),
        game.is_won(),
        Viewport::new(100, 30),
    );
    assert_eq!((fb.width(), fb.height()), (100, 30));
}

#[test]
fn test_frame_encoding_round() {
    let game = Game::new(21);
    let view = TableView::new();
    let vp = Viewport::new(80, 24);

    let first = view.render(game.board(), None, false, vp);
    let mut out = Vec::new();
    encode_full_into(&first, &mut out).unwrap();
    assert!(!out.is_empty());

    // A second identical frame diffs down to almost nothing.
    let second = first.clone();
    let mut diff = Vec::new();
    encode_diff_into(&first, &second, &mut diff).unwrap();
    assert!(diff.len() < out.len() / 10);
}

#[test]
fn test_reusing_one_framebuffer_across_frames() {
    let mut game = Game::new(21);
    let view = TableView::new();
    let mut fb = FrameBuffer::new(0, 0);

    for _ in 0..3 {
        let deck = game.board().deck_id();
        if let Some(top) = game.board().stack(deck).top().copied() {
            game.apply_event(GestureEvent::CardClicked(deck, top));
        }
        view.render_into(
            game.board(),
            game.drag_stack(),
            game.is_won(),
            Viewport::new(90, 28),
            &mut fb,
        );
        assert_eq!((fb.width(), fb.height()), (90, 28));
    }
}
