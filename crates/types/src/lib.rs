//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Logical table dimensions (the fixed virtual canvas all positions live in).
///
/// Origin is bottom-left, y grows upward. Input and rendering collaborators
/// are responsible for mapping their device coordinates into this space.
pub const TABLE_WIDTH: f32 = 1280.0;
pub const TABLE_HEIGHT: f32 = 720.0;

/// Card dimensions, derived from the table width.
pub const CARD_WIDTH: f32 = TABLE_WIDTH / 11.0;
pub const CARD_HEIGHT: f32 = CARD_WIDTH * 1.5;

/// Vertical stagger per card in a fanned stack.
pub const FAN_OFFSET: f32 = CARD_HEIGHT / 4.0;

/// Board shape
pub const TABLEAU_COUNT: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
pub const DECK_SIZE: usize = 52;

/// Gesture tolerances
pub const DRAG_TOLERANCE: f32 = 10.0;
pub const DOUBLE_CLICK_WINDOW: f32 = 1.0;

/// Seconds the win banner stays up before the game resets itself.
pub const WIN_SCREEN_SECS: f32 = 1.5;

/// Shell tick cadence (milliseconds)
pub const TICK_MS: u32 = 16;

/// A point in the logical table space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned box with bottom-left corner at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// AABB overlap test.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Point test via a 1x1 probe box (how the pointer is hit-tested).
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.overlaps(&Rect::new(p.x, p.y, 1.0, 1.0))
    }
}

/// Card colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Card suits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamond,
    Spade,
    Heart,
    Club,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Spade, Suit::Heart, Suit::Club];

    pub fn color(&self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    /// Unicode glyph for rendering.
    pub fn glyph(&self) -> char {
        match self {
            Suit::Diamond => '♦',
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Diamond => "Diamonds",
            Suit::Spade => "Spades",
            Suit::Heart => "Hearts",
            Suit::Club => "Clubs",
        }
    }
}

/// Card ranks, Ace low (value 1) through King (value 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value 1..=13.
    pub fn value(&self) -> u8 {
        *self as u8 + 1
    }

    /// Short label for rendering ("A", "2", .., "10", "J", "Q", "K").
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn word(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// A playing card.
///
/// Suit and rank never change; facing does. Within one 52-card deck every
/// (suit, rank) pair is unique, so it doubles as the card's identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_down: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_down: true,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Identity comparison, ignoring facing.
    ///
    /// Events carry `Card` copies whose facing may be stale; identity is what
    /// handlers match on before re-reading live state from the board.
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.word(), self.suit.name())
    }
}

/// Handle to a stack owned by the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackId(pub usize);

/// One tick of pointer input, already mapped into table space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub pos: Vec2,
    pub pressed: bool,
}

/// One-shot gesture events produced by the input manager.
///
/// Cards are carried by value as identity tokens; consumers re-read live
/// state from the board before mutating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    StackClicked(StackId),
    CardClicked(StackId, Card),
    CardDoubleClicked(StackId, Card),
    DragStarted(StackId, Card),
    DragStopped(Option<StackId>),
}
