//! Pure math/data for screen-space gesture handling
//!
//! This crate contains the geometry primitives shared by the input adapters,
//! the inertia math and the camera collaborator.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Vector};
}
