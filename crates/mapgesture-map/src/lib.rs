//! Map interaction handlers
//!
//! [`DragPanHandler`] presents the per-modality pan handlers as one feature
//! toggle. [`MapHandlers`] owns those handlers and the camera and routes raw
//! input to the right one.

mod camera;
mod drag_pan;
mod handlers;

pub use camera::SimpleCamera;
pub use drag_pan::{DragPanHandler, SharedAdapter};
pub use handlers::{InputEvent, MapHandlers};

pub use mapgesture_animation::{EasingCurve, InertiaOptions, InertialPan};
pub use mapgesture_foundation::{
    DragEvent, GestureAdapter, MousePanHandler, PanTarget, TouchPanHandler,
};
