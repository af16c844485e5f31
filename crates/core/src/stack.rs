//! Stack module - an ordered pile of cards with a position and an add rule
//!
//! One struct covers every stack on the table; behavior differences live in
//! the closed [`StackKind`] set, which carries the per-kind `can_add` rule.
//! Index 0 is the bottom card, the last index is the top.
//!
//! Layout (the stack's bounding rect and each card's rect) is derived state,
//! recomputed at the end of every mutating operation so it is never stale —
//! hover detection and rendering read it directly.

use crate::error::StackError;
use crate::types::{Card, Rank, Rect, Vec2, CARD_HEIGHT, CARD_WIDTH, FAN_OFFSET};

/// The closed set of stack kinds and their add rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// One of the seven main playing columns.
    Tableau,
    /// A suit-ordered completion pile, Ace up to King.
    Foundation,
    /// Draw deck (`accepting: false`) or waste pile (`accepting: true`).
    Pile { accepting: bool },
    /// Transient buffer holding cards mid-drag; accepts anything.
    DragBuffer,
}

impl StackKind {
    /// Whether stacks of this kind fan their cards out by default.
    fn fanned_by_default(&self) -> bool {
        matches!(self, StackKind::Tableau | StackKind::DragBuffer)
    }
}

/// An ordered pile of cards at a position on the table.
#[derive(Debug, Clone)]
pub struct Stack {
    kind: StackKind,
    cards: Vec<Card>,
    /// Base position: x of every card, y of the *top* card.
    x: f32,
    base_y: f32,
    /// Fanned stacks stagger each card down by [`FAN_OFFSET`].
    fanned: bool,
    /// Derived bounding box, spans all cards.
    rect: Rect,
    /// Derived per-card boxes, same indexing as `cards`.
    card_rects: Vec<Rect>,
    /// Number of cards detached by an unfinished `pick_cards`.
    picked_out: usize,
}

impl Stack {
    /// Create an empty stack.
    pub fn new(kind: StackKind, x: f32, y: f32) -> Self {
        Self::with_cards(kind, x, y, Vec::new())
    }

    /// Create a stack pre-populated with cards (deal-time only; no rules apply).
    pub fn with_cards(kind: StackKind, x: f32, y: f32, cards: Vec<Card>) -> Self {
        let mut stack = Self {
            kind,
            cards,
            x,
            base_y: y,
            fanned: kind.fanned_by_default(),
            rect: Rect::default(),
            card_rects: Vec::new(),
            picked_out: 0,
        };
        stack.update_layout();
        stack
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }

    pub fn is_fanned(&self) -> bool {
        self.fanned
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Bounding box covering the whole stack (card-sized when empty).
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Box of the card at `index`, if present.
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        self.card_rects.get(index).copied()
    }

    /// Base position (x, y of the top card).
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.base_y)
    }

    /// Move the whole stack; card and bounding boxes follow.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.base_y = y;
        self.update_layout();
    }

    /// Whether this stack's rule accepts `card` right now. Pure check.
    pub fn can_add(&self, card: &Card) -> bool {
        match self.kind {
            StackKind::DragBuffer => true,
            StackKind::Pile { accepting } => accepting,
            StackKind::Tableau => {
                // Face-down cards are never playable.
                if card.face_down {
                    return false;
                }
                match self.top() {
                    None => card.rank == Rank::King,
                    Some(top) => {
                        !top.face_down
                            && card.color() != top.color()
                            && card.rank.value() + 1 == top.rank.value()
                    }
                }
            }
            StackKind::Foundation => {
                if card.face_down {
                    return false;
                }
                match self.top() {
                    None => card.rank == Rank::Ace,
                    Some(top) => {
                        card.suit == top.suit && card.rank.value() == top.rank.value() + 1
                    }
                }
            }
        }
    }

    /// Append a card to the top, subject to the stack's rule.
    pub fn add(&mut self, card: Card) -> Result<(), StackError> {
        if !self.can_add(&card) {
            return Err(StackError::InvalidMove(card));
        }
        self.cards.push(card);
        self.update_layout();
        Ok(())
    }

    /// Remove and return the top card.
    pub fn remove_top(&mut self) -> Result<Card, StackError> {
        let card = self.cards.pop().ok_or(StackError::EmptyStack)?;
        self.update_layout();
        Ok(card)
    }

    /// Remove and return the bottom card.
    pub fn remove_bottom(&mut self) -> Result<Card, StackError> {
        if self.cards.is_empty() {
            return Err(StackError::EmptyStack);
        }
        let card = self.cards.remove(0);
        self.update_layout();
        Ok(card)
    }

    /// Turn the top card face-up. No-op when empty.
    pub fn flip_top_face_up(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.face_down = false;
        }
    }

    /// Detach `first_card` and everything above it as a contiguous suffix.
    ///
    /// Ownership of the picked cards moves to the caller; the stack only
    /// remembers that a pick is outstanding until [`Stack::restore`] clears
    /// it. `first_card` is matched by identity (suit + rank).
    pub fn pick_cards(&mut self, first_card: &Card) -> Result<Vec<Card>, StackError> {
        if self.picked_out > 0 {
            return Err(StackError::PickOutstanding);
        }
        let start = self
            .cards
            .iter()
            .position(|c| c.is_same_card(first_card))
            .ok_or(StackError::CardNotFound(*first_card))?;

        let picked = self.cards.split_off(start);
        self.picked_out = picked.len();
        self.update_layout();
        Ok(picked)
    }

    /// True while cards picked from this stack have not been restored.
    pub fn has_outstanding_pick(&self) -> bool {
        self.picked_out > 0
    }

    /// Re-append previously picked cards in the given order, bypassing the
    /// add rule, and clear the outstanding-pick marker. Idempotent when
    /// called with no cards.
    pub fn restore(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
        self.picked_out = 0;
        self.update_layout();
    }

    /// Remove every card from the stack.
    pub fn take_all(&mut self) -> Vec<Card> {
        let cards = std::mem::take(&mut self.cards);
        self.update_layout();
        cards
    }

    /// Replace the stack's contents wholesale (deck recycling).
    pub(crate) fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.update_layout();
    }

    /// Recompute the bounding box and per-card boxes from the base position.
    ///
    /// Fanned stacks grow downward: card `i` sits `FAN_OFFSET * i` below the
    /// base, and the bounding box stretches to the lowest card.
    fn update_layout(&mut self) {
        let n = self.cards.len();
        let overhang = if self.fanned {
            FAN_OFFSET * n.saturating_sub(1) as f32
        } else {
            0.0
        };
        self.rect = Rect::new(self.x, self.base_y - overhang, CARD_WIDTH, CARD_HEIGHT + overhang);

        self.card_rects.clear();
        for i in 0..n {
            let y = if self.fanned {
                self.base_y - FAN_OFFSET * i as f32
            } else {
                self.base_y
            };
            self.card_rects.push(Rect::new(self.x, y, CARD_WIDTH, CARD_HEIGHT));
        }
    }
}
