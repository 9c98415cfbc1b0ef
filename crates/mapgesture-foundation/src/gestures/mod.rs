pub mod adapter;
pub mod drag;
pub mod mouse_pan;
pub mod touch_pan;

pub use adapter::GestureAdapter;
pub use drag::{DragEvent, GestureState};
pub use mouse_pan::MousePanHandler;
pub use touch_pan::TouchPanHandler;
