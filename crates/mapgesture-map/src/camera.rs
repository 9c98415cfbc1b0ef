//! Minimal camera that applies drag-pan output to a screen offset.

use mapgesture_animation::InertialPan;
use mapgesture_foundation::PanTarget;
use mapgesture_graphics::Vector;
use web_time::Instant;

/// State for an active inertial pan.
#[derive(Debug, Clone, Copy)]
struct InertiaAnimation {
    pan: InertialPan,
    /// Offset when the pan was requested.
    start_offset: Vector,
    /// Frame time of the first frame, used as the animation origin.
    start_frame_time: Option<Instant>,
}

/// Tracks the accumulated screen-space pan of a map view.
///
/// Inertial pans are driven by [`advance`](Self::advance), which the host
/// calls once per animation frame.
#[derive(Debug, Default)]
pub struct SimpleCamera {
    offset: Vector,
    animation: Option<InertiaAnimation>,
}

impl SimpleCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Returns true if an inertial pan is currently running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Steps the running inertial pan to `frame_time`.
    ///
    /// Returns true while more frames are needed.
    pub fn advance(&mut self, frame_time: Instant) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let start = *animation.start_frame_time.get_or_insert(frame_time);
        let elapsed = frame_time.saturating_duration_since(start);
        self.offset = animation.start_offset + animation.pan.offset_at(elapsed);

        if animation.pan.is_finished(elapsed) {
            log::trace!("camera: inertial pan finished at {:?}", self.offset);
            self.animation = None;
            return false;
        }
        true
    }
}

impl PanTarget for SimpleCamera {
    fn pan_by(&mut self, delta: Vector) {
        self.offset += delta;
    }

    fn ease_pan_by(&mut self, pan: InertialPan) {
        self.animation = Some(InertiaAnimation {
            pan,
            start_offset: self.offset,
            start_frame_time: None,
        });
    }

    fn stop_inertia(&mut self) {
        if self.animation.take().is_some() {
            log::trace!("camera: inertial pan interrupted at {:?}", self.offset);
        }
    }
}
