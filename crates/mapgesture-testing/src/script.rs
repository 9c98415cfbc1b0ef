//! Scripted input with deterministic timestamps.
//!
//! # Example
//!
//! ```
//! use mapgesture_testing::{EventClock, MouseScript};
//!
//! let clock = EventClock::new();
//! let events = MouseScript::new(clock)
//!     .press(0.0, 0.0, 0)
//!     .move_to(100.0, 0.0, 100)
//!     .release(100.0, 0.0, 100)
//!     .build();
//! assert_eq!(events.len(), 3);
//! ```

use mapgesture_foundation::{MouseButton, MouseEvent, TouchEvent, TouchId, TouchPhase, TouchPoint};
use mapgesture_graphics::Point;
use web_time::{Duration, Instant};

/// Produces timestamps as millisecond offsets from a fixed origin.
#[derive(Debug, Clone, Copy)]
pub struct EventClock {
    origin: Instant,
}

impl EventClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.origin + Duration::from_millis(ms)
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a sequence of mouse events.
#[derive(Debug, Clone)]
pub struct MouseScript {
    clock: EventClock,
    events: Vec<MouseEvent>,
}

impl MouseScript {
    pub fn new(clock: EventClock) -> Self {
        Self {
            clock,
            events: Vec::new(),
        }
    }

    pub fn press(self, x: f32, y: f32, ms: u64) -> Self {
        self.press_button(MouseButton::Primary, x, y, ms)
    }

    pub fn press_button(mut self, button: MouseButton, x: f32, y: f32, ms: u64) -> Self {
        let event = MouseEvent::down(button, Point::new(x, y), self.clock.at(ms));
        self.events.push(event);
        self
    }

    pub fn move_to(mut self, x: f32, y: f32, ms: u64) -> Self {
        let event = MouseEvent::moved(Point::new(x, y), self.clock.at(ms));
        self.events.push(event);
        self
    }

    pub fn release(mut self, x: f32, y: f32, ms: u64) -> Self {
        let event = MouseEvent::up(MouseButton::Primary, Point::new(x, y), self.clock.at(ms));
        self.events.push(event);
        self
    }

    pub fn leave(mut self, x: f32, y: f32, ms: u64) -> Self {
        let event = MouseEvent::leave(Point::new(x, y), self.clock.at(ms));
        self.events.push(event);
        self
    }

    pub fn blur(mut self, ms: u64) -> Self {
        self.events.push(MouseEvent::blur(self.clock.at(ms)));
        self
    }

    /// Straight-line drag from `from` to `to`, one move every `step_ms`.
    pub fn drag(
        mut self,
        from: (f32, f32),
        to: (f32, f32),
        start_ms: u64,
        steps: u32,
        step_ms: u64,
    ) -> Self {
        self = self.press(from.0, from.1, start_ms);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self = self.move_to(x, y, start_ms + step as u64 * step_ms);
        }
        self
    }

    pub fn build(self) -> Vec<MouseEvent> {
        self.events
    }
}

/// Builder for a sequence of touch events.
#[derive(Debug, Clone)]
pub struct TouchScript {
    clock: EventClock,
    events: Vec<TouchEvent>,
}

impl TouchScript {
    pub fn new(clock: EventClock) -> Self {
        Self {
            clock,
            events: Vec::new(),
        }
    }

    fn push(mut self, phase: TouchPhase, points: &[(TouchId, f32, f32)], ms: u64) -> Self {
        let changed = points
            .iter()
            .map(|&(id, x, y)| TouchPoint::new(id, Point::new(x, y)));
        self.events
            .push(TouchEvent::new(phase, changed, self.clock.at(ms)));
        self
    }

    pub fn start(self, points: &[(TouchId, f32, f32)], ms: u64) -> Self {
        self.push(TouchPhase::Start, points, ms)
    }

    pub fn move_to(self, points: &[(TouchId, f32, f32)], ms: u64) -> Self {
        self.push(TouchPhase::Move, points, ms)
    }

    pub fn end(self, points: &[(TouchId, f32, f32)], ms: u64) -> Self {
        self.push(TouchPhase::End, points, ms)
    }

    pub fn cancel(self, points: &[(TouchId, f32, f32)], ms: u64) -> Self {
        self.push(TouchPhase::Cancel, points, ms)
    }

    pub fn build(self) -> Vec<TouchEvent> {
        self.events
    }
}
