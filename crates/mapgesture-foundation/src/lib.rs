//! Foundation layer for map drag-to-pan
//!
//! Input event types, the trailing motion window used to estimate release
//! velocity, and one drag-pan handler per input modality.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod pan_target;
pub mod velocity_tracker;

pub use gestures::{DragEvent, GestureAdapter, MousePanHandler, TouchPanHandler};
pub use input::*;
pub use mapgesture_animation::{EasingCurve, InertiaOptions, InertialPan};
pub use mapgesture_graphics::{Point, Rect, Vector};
pub use pan_target::PanTarget;
pub use velocity_tracker::{InertiaProjector, MotionSample};

pub mod prelude {
    pub use crate::gestures::{DragEvent, GestureAdapter, MousePanHandler, TouchPanHandler};
    pub use crate::input::{
        MouseButton, MouseEvent, MouseEventKind, TouchEvent, TouchPhase, TouchPoint,
    };
    pub use crate::pan_target::PanTarget;
    pub use crate::velocity_tracker::{InertiaProjector, MotionSample};
}
