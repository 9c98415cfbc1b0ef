//! Animation primitives for map gestures
//!
//! Provides the cubic-bezier [`EasingCurve`] and the constant-deceleration
//! physics that turns a release velocity into an [`InertialPan`].

mod easing;
mod inertia;

pub use easing::*;
pub use inertia::*;
