//! Game controller - turns gesture events into rule-gated board mutations
//!
//! Owns the board, the gesture machine, the transient drag buffer, and the
//! win-screen timer. Every handler pre-validates with `can_add` / emptiness /
//! identity checks, so the core's contract errors stay unreachable from the
//! gesture API; the `debug_assert!`s document exactly that.

use crate::core::{GameBoard, SimpleRng, Stack, StackKind};
use crate::input::InputManager;
use crate::types::{
    Card, GestureEvent, PointerSample, StackId, Vec2, CARD_HEIGHT, CARD_WIDTH, FAN_OFFSET,
    WIN_SCREEN_SECS,
};

/// Cards mid-drag: an always-accepting buffer plus where they came from.
///
/// Created on drag start, pinned to the pointer every tick, emptied on drag
/// stop — whatever the drop target refuses goes back to the source stack.
#[derive(Debug, Clone)]
pub struct DragStack {
    source: StackId,
    stack: Stack,
}

impl DragStack {
    pub fn source(&self) -> StackId {
        self.source
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }
}

/// The game: board state, input, and the rules binding them together.
#[derive(Debug, Clone)]
pub struct Game {
    board: GameBoard,
    input: InputManager,
    drag: Option<DragStack>,
    win_timer: f32,
    /// Deals a fresh seed for every episode, so one construction seed
    /// reproduces a whole session of games.
    rng: SimpleRng,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = GameBoard::new(rng.next_u32());
        Self {
            board,
            input: InputManager::new(),
            drag: None,
            win_timer: 0.0,
            rng,
        }
    }

    /// Start over with a fresh shuffle. The input manager carries no game
    /// state and survives resets.
    pub fn reset(&mut self) {
        self.board = GameBoard::new(self.rng.next_u32());
        self.drag = None;
        self.win_timer = 0.0;
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut GameBoard {
        &mut self.board
    }

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Pointer position as of the last tick, in table space.
    pub fn pointer(&self) -> Vec2 {
        self.input.pointer()
    }

    /// The active drag buffer's stack, for rendering on top of the table.
    pub fn drag_stack(&self) -> Option<&Stack> {
        self.drag.as_ref().map(|d| &d.stack)
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Run one fixed-timestep tick: gesture recognition, event handling,
    /// drag-buffer pinning, and the win-screen timer.
    pub fn update(&mut self, delta: f32, sample: PointerSample) {
        let events = self.input.update(delta, sample, &self.board);
        for event in events {
            self.apply_event(event);
        }

        if let Some(drag) = &mut self.drag {
            // Keep the pointer at the middle-top of the topmost dragged card.
            let p = self.input.pointer();
            drag.stack
                .set_position(p.x - CARD_WIDTH / 2.0, p.y - CARD_HEIGHT + FAN_OFFSET / 2.0);
        }

        if self.board.is_won() {
            self.win_timer += delta;
            if self.win_timer > WIN_SCREEN_SECS {
                self.reset();
            }
        }
    }

    /// Apply one gesture event. Public so tests can drive the rules without
    /// synthesizing pointer trajectories.
    pub fn apply_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::StackClicked(id) => self.on_stack_clicked(id),
            GestureEvent::CardClicked(id, card) => self.on_card_clicked(id, card),
            GestureEvent::CardDoubleClicked(id, card) => self.on_card_double_clicked(id, card),
            GestureEvent::DragStarted(id, card) => self.on_drag_started(id, card),
            GestureEvent::DragStopped(target) => self.on_drag_stopped(target),
        }
    }

    /// Deck: draw one card to the waste. Elsewhere: flip a face-down top card.
    fn on_card_clicked(&mut self, id: StackId, card: Card) {
        if id == self.board.deck_id() {
            self.draw_from_deck();
            return;
        }
        // The event card is a snapshot; check the live top by identity.
        if let Some(top) = self.board.stack(id).top() {
            if top.is_same_card(&card) && top.face_down {
                self.board.stack_mut(id).flip_top_face_up();
            }
        }
    }

    fn draw_from_deck(&mut self) {
        let deck = self.board.deck_id();
        let waste = self.board.waste_id();
        // A card click on the deck implies the deck is non-empty.
        let Ok(mut card) = self.board.stack_mut(deck).remove_top() else {
            return;
        };
        card.face_down = false;
        let added = self.board.stack_mut(waste).add(card);
        debug_assert!(added.is_ok(), "the waste pile accepts unconditionally");
    }

    /// Clicking the drawn-out deck recycles the waste back into it.
    fn on_stack_clicked(&mut self, id: StackId) {
        if id == self.board.deck_id() && self.board.stack(id).is_empty() {
            self.board.reset_deck();
        }
    }

    /// Pick the card and everything above it into a fresh drag buffer.
    /// The deck is click-to-draw only, never draggable.
    fn on_drag_started(&mut self, id: StackId, card: Card) {
        if id == self.board.deck_id() || self.drag.is_some() {
            return;
        }
        // Hover guarantees the card is in the stack; a failed pick means the
        // drag simply does not begin.
        if let Ok(cards) = self.board.stack_mut(id).pick_cards(&card) {
            let p = self.input.pointer();
            self.drag = Some(DragStack {
                source: id,
                stack: Stack::with_cards(
                    StackKind::DragBuffer,
                    p.x - CARD_WIDTH / 2.0,
                    p.y - CARD_HEIGHT + FAN_OFFSET / 2.0,
                    cards,
                ),
            });
        }
    }

    /// Transfer dragged cards bottom-up while the target accepts them, then
    /// return the rest to the source stack.
    fn on_drag_stopped(&mut self, target: Option<StackId>) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };

        if let Some(target_id) = target {
            // The waste never receives drops, and a foundation only takes a
            // single-card drag.
            let foundation = self.board.stack(target_id).kind() == StackKind::Foundation;
            if target_id != self.board.waste_id() && (!foundation || drag.stack.len() == 1) {
                while let Some(card) = drag.stack.bottom().copied() {
                    if !self.board.stack(target_id).can_add(&card) {
                        break;
                    }
                    if drag.stack.remove_bottom().is_ok() {
                        let added = self.board.stack_mut(target_id).add(card);
                        debug_assert!(added.is_ok(), "checked can_add just above");
                    }
                }
            }
        }

        let leftovers = drag.stack.take_all();
        self.board.stack_mut(drag.source).restore(leftovers);
    }

    /// Send a face-up top card to the first foundation that takes it.
    ///
    /// Pure convenience: the outcome must be exactly what a manual
    /// single-card drag onto that foundation would produce.
    fn on_card_double_clicked(&mut self, id: StackId, card: Card) {
        if id == self.board.deck_id() {
            return;
        }
        let Some(top) = self.board.stack(id).top().copied() else {
            return;
        };
        if !top.is_same_card(&card) || top.face_down {
            return;
        }

        let foundations = *self.board.foundation_ids();
        for fid in foundations {
            if self.board.stack(fid).can_add(&top) {
                if let Ok(card) = self.board.stack_mut(id).remove_top() {
                    let added = self.board.stack_mut(fid).add(card);
                    debug_assert!(added.is_ok(), "checked can_add just above");
                }
                return;
            }
        }
    }
}
