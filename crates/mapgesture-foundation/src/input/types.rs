use mapgesture_graphics::Point;
use smallvec::SmallVec;
use web_time::Instant;

pub type TouchId = u64;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Move,
    Up(MouseButton),
    /// The pointer left the tracked surface.
    Leave,
    /// The hosting window lost focus. The position is the last known one.
    Blur,
}

/// Pointing-device event scoped to the map surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: Point,
    pub timestamp: Instant,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, position: Point, timestamp: Instant) -> Self {
        Self {
            kind,
            position,
            timestamp,
        }
    }

    pub fn down(button: MouseButton, position: Point, timestamp: Instant) -> Self {
        Self::new(MouseEventKind::Down(button), position, timestamp)
    }

    pub fn moved(position: Point, timestamp: Instant) -> Self {
        Self::new(MouseEventKind::Move, position, timestamp)
    }

    pub fn up(button: MouseButton, position: Point, timestamp: Instant) -> Self {
        Self::new(MouseEventKind::Up(button), position, timestamp)
    }

    pub fn leave(position: Point, timestamp: Instant) -> Self {
        Self::new(MouseEventKind::Leave, position, timestamp)
    }

    pub fn blur(timestamp: Instant) -> Self {
        Self::new(MouseEventKind::Blur, Point::ZERO, timestamp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Point,
}

impl TouchPoint {
    pub const fn new(id: TouchId, position: Point) -> Self {
        Self { id, position }
    }
}

/// Touch event carrying only the points whose state changed.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub changed: SmallVec<[TouchPoint; 4]>,
    pub timestamp: Instant,
}

impl TouchEvent {
    pub fn new<I>(phase: TouchPhase, changed: I, timestamp: Instant) -> Self
    where
        I: IntoIterator<Item = TouchPoint>,
    {
        Self {
            phase,
            changed: changed.into_iter().collect(),
            timestamp,
        }
    }
}
