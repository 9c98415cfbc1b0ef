//! Feature-toggle surface shared by every drag-pan input modality.

use mapgesture_animation::InertiaOptions;

/// Enable/disable contract of a single input modality.
///
/// Implementors own their own gesture state; callers only toggle them and
/// ask whether a drag is in progress.
pub trait GestureAdapter {
    /// Start handling events with the given inertia tuning.
    ///
    /// Calling this while enabled replaces the options. A drag already in
    /// progress keeps the options it started with.
    fn enable(&mut self, options: InertiaOptions);

    /// Stop handling events. A drag in progress ends immediately without
    /// momentum.
    fn disable(&mut self);

    fn is_enabled(&self) -> bool;

    /// Whether a drag is currently in progress.
    fn is_active(&self) -> bool;
}
