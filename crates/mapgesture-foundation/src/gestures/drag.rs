//! Modality-independent drag bookkeeping.

use mapgesture_animation::{InertiaOptions, InertialPan};
use mapgesture_graphics::{Point, Vector};
use web_time::Instant;

use crate::gesture_constants::ASSUME_STOPPED;
use crate::velocity_tracker::{InertiaProjector, MotionSample};

/// Normalized output of a drag-pan handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start { position: Point },
    Move { delta: Vector },
    /// The drag ended naturally. `inertia` is `None` when the release carried
    /// no momentum.
    End { inertia: Option<InertialPan> },
}

#[derive(Debug, Clone, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    /// Moves to `Idle`, handing back the session that was running.
    pub(crate) fn take_session(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }
}

/// State of one in-flight drag.
///
/// `anchor` is the raw reference position deltas are measured from. `path`
/// is the running sum of emitted deltas; it is what gets sampled, so
/// re-anchoring (a touch point joining or leaving) never reads as motion.
#[derive(Debug, Clone)]
pub struct DragSession {
    options: InertiaOptions,
    projector: InertiaProjector,
    anchor: Point,
    path: Point,
}

impl DragSession {
    pub(crate) fn begin(options: InertiaOptions, position: Point, timestamp: Instant) -> Self {
        let mut projector = InertiaProjector::new();
        projector.record_sample(MotionSample::new(position, timestamp));
        Self {
            options,
            projector,
            anchor: position,
            path: position,
        }
    }

    /// Options snapshotted when the drag started.
    pub fn options(&self) -> &InertiaOptions {
        &self.options
    }

    pub fn sample_count(&self) -> usize {
        self.projector.len()
    }

    pub(crate) fn move_to(&mut self, position: Point, timestamp: Instant) -> Vector {
        let delta = position - self.anchor;
        self.anchor = position;
        self.path += delta;
        self.projector
            .record_sample(MotionSample::new(self.path, timestamp));
        delta
    }

    pub(crate) fn re_anchor(&mut self, position: Point) {
        self.anchor = position;
    }

    pub(crate) fn anchor(&self) -> Point {
        self.anchor
    }

    /// Ends the drag and projects its momentum.
    pub(crate) fn finish(mut self, released_at: Instant) -> Option<InertialPan> {
        let last_motion = self.projector.latest_timestamp()?;
        let rested = released_at.saturating_duration_since(last_motion);
        if rested > ASSUME_STOPPED {
            log::trace!("drag rested {rested:?} before release, no inertia");
            return None;
        }
        self.projector.project_release(&self.options)
    }
}
