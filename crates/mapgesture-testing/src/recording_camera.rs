//! A [`PanTarget`] that records every call for later assertions.

use mapgesture_animation::InertialPan;
use mapgesture_foundation::PanTarget;
use mapgesture_graphics::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCall {
    PanBy(Vector),
    EasePanBy(InertialPan),
    StopInertia,
}

#[derive(Debug, Default, Clone)]
pub struct RecordingCamera {
    calls: Vec<CameraCall>,
}

impl RecordingCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[CameraCall] {
        &self.calls
    }

    /// Deltas passed to `pan_by`, in order.
    pub fn pans(&self) -> Vec<Vector> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CameraCall::PanBy(delta) => Some(*delta),
                _ => None,
            })
            .collect()
    }

    /// Sum of every `pan_by` delta.
    pub fn total_pan(&self) -> Vector {
        self.pans()
            .into_iter()
            .fold(Vector::ZERO, |sum, delta| sum + delta)
    }

    /// Inertial pans requested via `ease_pan_by`, in order.
    pub fn inertial_pans(&self) -> Vec<InertialPan> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CameraCall::EasePanBy(pan) => Some(*pan),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PanTarget for RecordingCamera {
    fn pan_by(&mut self, delta: Vector) {
        self.calls.push(CameraCall::PanBy(delta));
    }

    fn ease_pan_by(&mut self, pan: InertialPan) {
        self.calls.push(CameraCall::EasePanBy(pan));
    }

    fn stop_inertia(&mut self) {
        self.calls.push(CameraCall::StopInertia);
    }
}
