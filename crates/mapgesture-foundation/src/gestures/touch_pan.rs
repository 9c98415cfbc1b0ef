//! Drag-to-pan for multi-touch input.

use mapgesture_animation::InertiaOptions;
use mapgesture_graphics::Point;
use smallvec::SmallVec;

use crate::gestures::drag::{DragEvent, DragSession, GestureState};
use crate::gestures::GestureAdapter;
use crate::input::{TouchEvent, TouchId, TouchPhase, TouchPoint};
use crate::pan_target::PanTarget;

/// Pans the map by the motion of the centroid of all touch points.
///
/// Points may join or leave mid-gesture (a pinch collapsing into a pan).
/// Each change re-anchors the centroid so the jump between the old and new
/// point sets is never emitted as motion.
#[derive(Debug, Default)]
pub struct TouchPanHandler {
    options: Option<InertiaOptions>,
    state: GestureState,
    touches: SmallVec<[TouchPoint; 4]>,
}

impl TouchPanHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Number of touch points currently tracked.
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn centroid(&self) -> Option<Point> {
        Point::centroid(self.touches.iter().map(|t| t.position))
    }

    fn position_of(&mut self, id: TouchId) -> Option<&mut Point> {
        self.touches
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| &mut t.position)
    }

    /// Feeds one event through the state machine, forwarding pan output to
    /// `target`.
    pub fn handle_event(
        &mut self,
        event: &TouchEvent,
        target: &mut dyn PanTarget,
    ) -> Option<DragEvent> {
        let options = self.options?;

        match event.phase {
            TouchPhase::Start => self.on_start(event, options, target),
            TouchPhase::Move => self.on_move(event, target),
            TouchPhase::End | TouchPhase::Cancel => self.on_release(event, target),
        }
    }

    fn on_start(
        &mut self,
        event: &TouchEvent,
        options: InertiaOptions,
        target: &mut dyn PanTarget,
    ) -> Option<DragEvent> {
        for point in &event.changed {
            match self.position_of(point.id) {
                Some(position) => *position = point.position,
                None => self.touches.push(*point),
            }
        }
        let centroid = self.centroid()?;

        if let Some(session) = self.state.session_mut() {
            log::trace!(
                "touch pan: {} point(s) joined, re-anchoring",
                event.changed.len()
            );
            session.re_anchor(centroid);
            return None;
        }

        log::debug!(
            "touch pan: drag started with {} point(s) at {:?}",
            self.touches.len(),
            centroid
        );
        target.stop_inertia();
        self.state =
            GestureState::Dragging(DragSession::begin(options, centroid, event.timestamp));
        Some(DragEvent::Start { position: centroid })
    }

    fn on_move(&mut self, event: &TouchEvent, target: &mut dyn PanTarget) -> Option<DragEvent> {
        if !self.state.is_dragging() {
            log::trace!("touch pan: ignoring move while idle");
            return None;
        }

        let mut moved = false;
        for point in &event.changed {
            if let Some(position) = self.position_of(point.id) {
                *position = point.position;
                moved = true;
            }
        }
        if !moved {
            return None;
        }

        let centroid = self.centroid()?;
        let session = self.state.session_mut()?;
        let delta = session.move_to(centroid, event.timestamp);
        target.pan_by(delta);
        Some(DragEvent::Move { delta })
    }

    fn on_release(&mut self, event: &TouchEvent, target: &mut dyn PanTarget) -> Option<DragEvent> {
        let before = self.touches.len();
        self.touches
            .retain(|t| !event.changed.iter().any(|lifted| lifted.id == t.id));
        if self.touches.len() == before {
            log::trace!("touch pan: {:?} for untracked point(s)", event.phase);
            return None;
        }

        if let Some(centroid) = self.centroid() {
            if let Some(session) = self.state.session_mut() {
                session.re_anchor(centroid);
            }
            return None;
        }

        let session = self.state.take_session()?;
        let inertia = session.finish(event.timestamp);
        log::debug!(
            "touch pan: drag ended ({:?}), inertia={}",
            event.phase,
            inertia.is_some()
        );
        if let Some(pan) = inertia {
            target.ease_pan_by(pan);
        }
        Some(DragEvent::End { inertia })
    }
}

impl GestureAdapter for TouchPanHandler {
    fn enable(&mut self, options: InertiaOptions) {
        self.options = Some(options);
    }

    fn disable(&mut self) {
        self.options = None;
        self.touches.clear();
        if self.state.take_session().is_some() {
            log::debug!("touch pan: disabled mid-drag, dropping samples");
        }
    }

    fn is_enabled(&self) -> bool {
        self.options.is_some()
    }

    fn is_active(&self) -> bool {
        self.state.is_dragging()
    }
}

#[cfg(test)]
#[path = "../tests/touch_pan_tests.rs"]
mod tests;
