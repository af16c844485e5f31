//! Pointer gesture recognition.
//!
//! Turns a continuous pointer stream (position + pressed flag, one sample per
//! tick) into one-shot gesture events: stack/card clicks, double-clicks, and
//! drag start/stop. The machine is an explicit three-phase FSM; transitions
//! are edge-triggered by comparing each tick's sample against the phase.
//!
//! Event order within a release tick is fixed: stack click, then card click,
//! then double-click. A qualifying double-click fires *in addition to* the
//! single click, and the inter-click timer restarts on every completed card
//! click whether or not a double-click fired.

use arrayvec::ArrayVec;

use crate::core::GameBoard;
use crate::types::{
    Card, GestureEvent, PointerSample, StackId, Vec2, DOUBLE_CLICK_WINDOW, DRAG_TOLERANCE,
};

/// Where the pointer currently is in the press/drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    /// Button down, movement still within the drag tolerance.
    Pressed,
    /// Movement exceeded the tolerance; sticky until release.
    Dragging,
}

/// Gesture recognition state machine.
///
/// Holds no reference to the board; hover is recomputed from the board passed
/// into [`InputManager::update`] each tick. Reusable across games — there is
/// no terminal state.
#[derive(Debug, Clone)]
pub struct InputManager {
    phase: PointerPhase,
    pointer: Vec2,
    /// Pointer position when the current press began.
    press_origin: Vec2,
    /// Seconds since the last completed card click.
    since_last_click: f32,
    hover_stack: Option<StackId>,
    hover_card: Option<Card>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            phase: PointerPhase::Idle,
            pointer: Vec2::default(),
            press_origin: Vec2::default(),
            // Start outside the window so the first click never doubles.
            since_last_click: DOUBLE_CLICK_WINDOW,
            hover_stack: None,
            hover_card: None,
        }
    }

    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Stack under the pointer, as of the last update.
    pub fn hovered_stack(&self) -> Option<StackId> {
        self.hover_stack
    }

    /// Card under the pointer, as of the last update.
    pub fn hovered_card(&self) -> Option<Card> {
        self.hover_card
    }

    /// Advance one tick: sample the pointer, recompute hover, emit events.
    ///
    /// At most one phase transition happens per tick, so the returned list
    /// holds at most a stack click + card click + double-click.
    pub fn update(
        &mut self,
        delta: f32,
        sample: PointerSample,
        board: &GameBoard,
    ) -> ArrayVec<GestureEvent, 4> {
        let mut events = ArrayVec::new();

        self.since_last_click += delta;
        self.pointer = sample.pos;
        self.update_hover(board);

        match self.phase {
            PointerPhase::Idle => {
                if sample.pressed {
                    self.phase = PointerPhase::Pressed;
                    self.press_origin = sample.pos;
                }
            }
            PointerPhase::Pressed => {
                if sample.pressed {
                    if self.press_origin.distance_to(self.pointer) > DRAG_TOLERANCE {
                        self.phase = PointerPhase::Dragging;
                        if let (Some(stack), Some(card)) = (self.hover_stack, self.hover_card) {
                            let _ = events.try_push(GestureEvent::DragStarted(stack, card));
                        }
                    }
                } else {
                    // Released without ever crossing the drag tolerance: a click.
                    self.phase = PointerPhase::Idle;
                    if let Some(stack) = self.hover_stack {
                        let _ = events.try_push(GestureEvent::StackClicked(stack));
                        if let Some(card) = self.hover_card {
                            let _ = events.try_push(GestureEvent::CardClicked(stack, card));
                            if self.since_last_click < DOUBLE_CLICK_WINDOW {
                                let _ =
                                    events.try_push(GestureEvent::CardDoubleClicked(stack, card));
                            }
                            self.since_last_click = 0.0;
                        }
                    }
                }
            }
            PointerPhase::Dragging => {
                if !sample.pressed {
                    self.phase = PointerPhase::Idle;
                    // Hover is evaluated at release time and may be nothing.
                    let _ = events.try_push(GestureEvent::DragStopped(self.hover_stack));
                }
            }
        }

        events
    }

    /// Hit-test the 1x1 pointer box against every stack, then against the
    /// cards of each hit stack. Later stacks win on overlap (registration
    /// order is the priority order).
    fn update_hover(&mut self, board: &GameBoard) {
        self.hover_stack = None;
        self.hover_card = None;

        for (id, stack) in board.stacks() {
            if !stack.rect().contains_point(self.pointer) {
                continue;
            }
            self.hover_stack = Some(id);
            for (i, card) in stack.cards().iter().enumerate() {
                if let Some(rect) = stack.card_rect(i) {
                    if rect.contains_point(self.pointer) {
                        self.hover_card = Some(*card);
                    }
                }
            }
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    const TICK: f32 = 0.016;

    fn center(rect: Rect) -> Vec2 {
        Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0)
    }

    fn pressed(pos: Vec2) -> PointerSample {
        PointerSample { pos, pressed: true }
    }

    fn released(pos: Vec2) -> PointerSample {
        PointerSample {
            pos,
            pressed: false,
        }
    }

    /// Press and release at `pos` without moving, returning the release tick's events.
    fn click(im: &mut InputManager, board: &GameBoard, pos: Vec2) -> Vec<GestureEvent> {
        let down = im.update(TICK, pressed(pos), board);
        assert!(down.is_empty(), "press alone must not fire events");
        im.update(TICK, released(pos), board).to_vec()
    }

    #[test]
    fn test_click_on_deck_fires_stack_then_card() {
        let board = GameBoard::new(11);
        let mut im = InputManager::new();
        let deck = board.deck_id();
        let pos = center(board.stack(deck).rect());

        let events = click(&mut im, &board, pos);
        let top = *board.stack(deck).top().unwrap();
        assert_eq!(
            events,
            vec![
                GestureEvent::StackClicked(deck),
                GestureEvent::CardClicked(deck, top),
            ]
        );
    }

    #[test]
    fn test_click_over_nothing_fires_nothing() {
        let board = GameBoard::new(11);
        let mut im = InputManager::new();
        // Dead zone well below the tableaus and left of the piles.
        let events = click(&mut im, &board, Vec2::new(600.0, 30.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_double_click_within_window_fires_both_events() {
        let board = GameBoard::new(11);
        let mut im = InputManager::new();
        let deck = board.deck_id();
        let pos = center(board.stack(deck).rect());

        let first = click(&mut im, &board, pos);
        assert_eq!(first.len(), 2, "first click is never a double");

        // 0.5 s of idle ticks, well inside the 1 s window.
        let mut elapsed = 0.0;
        while elapsed < 0.5 {
            im.update(TICK, released(pos), &board);
            elapsed += TICK;
        }

        let second = click(&mut im, &board, pos);
        let top = *board.stack(deck).top().unwrap();
        assert_eq!(second.len(), 3, "single click fires alongside the double");
        assert_eq!(second[2], GestureEvent::CardDoubleClicked(deck, top));
    }

    #[test]
    fn test_slow_second_click_is_not_a_double() {
        let board = GameBoard::new(11);
        let mut im = InputManager::new();
        let pos = center(board.stack(board.deck_id()).rect());

        click(&mut im, &board, pos);
        let mut elapsed = 0.0;
        while elapsed < 1.5 {
            im.update(TICK, released(pos), &board);
            elapsed += TICK;
        }

        let second = click(&mut im, &board, pos);
        assert_eq!(second.len(), 2);
        assert!(!second
            .iter()
            .any(|e| matches!(e, GestureEvent::CardDoubleClicked(..))));
    }

    #[test]
    fn test_drag_starts_once_past_tolerance_and_stops_at_release_hover() {
        let board = GameBoard::new(11);
        let mut im = InputManager::new();
        let tableau = board.tableau_ids()[2];
        let top_index = board.stack(tableau).len() - 1;
        let start = center(board.stack(tableau).card_rect(top_index).unwrap());

        assert!(im.update(TICK, pressed(start), &board).is_empty());

        // 5 units: under the 10-unit tolerance, still a potential click.
        let nearby = Vec2::new(start.x + 5.0, start.y);
        assert!(im.update(TICK, pressed(nearby), &board).is_empty());
        assert_eq!(im.phase(), PointerPhase::Pressed);

        // 15 units: drag activates exactly once.
        let away = Vec2::new(start.x + 15.0, start.y);
        let events = im.update(TICK, pressed(away), &board);
        let top = *board.stack(tableau).top().unwrap();
        assert_eq!(events.as_slice(), &[GestureEvent::DragStarted(tableau, top)]);
        assert_eq!(im.phase(), PointerPhase::Dragging);

        // Stays dragging without re-firing.
        assert!(im.update(TICK, pressed(away), &board).is_empty());

        // Release over empty felt: stop reports no stack, and no click fires.
        let nowhere = Vec2::new(600.0, 30.0);
        let events = im.update(TICK, released(nowhere), &board);
        assert_eq!(events.as_slice(), &[GestureEvent::DragStopped(None)]);
        assert_eq!(im.phase(), PointerPhase::Idle);
    }

    #[test]
    fn test_drag_is_sticky_when_pointer_returns_to_origin() {
        let board = GameBoard::new(11);
        let mut im = InputManager::new();
        let tableau = board.tableau_ids()[0];
        let start = center(board.stack(tableau).rect());

        im.update(TICK, pressed(start), &board);
        im.update(TICK, pressed(Vec2::new(start.x + 20.0, start.y)), &board);
        assert_eq!(im.phase(), PointerPhase::Dragging);

        // Back inside the tolerance: still dragging.
        im.update(TICK, pressed(start), &board);
        assert_eq!(im.phase(), PointerPhase::Dragging);

        // Release over the origin stack reports that stack.
        let events = im.update(TICK, released(start), &board);
        assert_eq!(events.as_slice(), &[GestureEvent::DragStopped(Some(tableau))]);
    }

    #[test]
    fn test_hover_tracks_topmost_card_in_fan() {
        let board = GameBoard::new(11);
        let tableau = board.tableau_ids()[6];
        let stack = board.stack(tableau);
        let mut im = InputManager::new();

        // The fan overlaps: the top card's rect also covers part of the card
        // below it, and the later card must win.
        let top_index = stack.len() - 1;
        let pos = center(stack.card_rect(top_index).unwrap());
        im.update(TICK, released(pos), &board);

        assert_eq!(im.hovered_stack(), Some(tableau));
        let hovered = im.hovered_card().unwrap();
        assert!(hovered.is_same_card(stack.top().unwrap()));
    }
}
