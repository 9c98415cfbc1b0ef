//! Testing utilities for map gesture handlers
//!
//! Scripted input with deterministic timestamps, and a camera that records
//! everything the handlers ask of it.

pub mod recording_camera;
pub mod script;

pub use recording_camera::{CameraCall, RecordingCamera};
pub use script::{EventClock, MouseScript, TouchScript};

pub mod prelude {
    pub use crate::recording_camera::{CameraCall, RecordingCamera};
    pub use crate::script::{EventClock, MouseScript, TouchScript};
}
