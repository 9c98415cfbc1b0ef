//! Camera-side collaborator of the drag-pan handlers.

use mapgesture_animation::InertialPan;
use mapgesture_graphics::Vector;

/// Receives the output of a drag-pan gesture.
///
/// Clamping to world bounds and projecting screen deltas onto the map are the
/// implementor's concern.
pub trait PanTarget {
    /// Translate the view by a screen-space delta. Called once per move while
    /// a drag is active.
    fn pan_by(&mut self, delta: Vector);

    /// Start the eased continuation of a released drag. Called at most once
    /// per gesture.
    fn ease_pan_by(&mut self, pan: InertialPan);

    /// Called when a new drag begins, so any running inertial pan stops under
    /// the user's pointer.
    fn stop_inertia(&mut self) {}
}
