//! Routes raw map input to the per-modality pan handlers.

use std::cell::RefCell;
use std::rc::Rc;

use mapgesture_foundation::{
    DragEvent, MouseEvent, MousePanHandler, PanTarget, TouchEvent, TouchPanHandler,
};
use mapgesture_graphics::Rect;

use crate::drag_pan::DragPanHandler;

/// Raw input scoped to the map surface.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Touch(TouchEvent),
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        InputEvent::Mouse(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        InputEvent::Touch(event)
    }
}

/// Per-map owner of the input handlers and the camera they drive.
///
/// Constructed once per map. Each modality's handler only ever sees events of
/// its own kind; the [`DragPanHandler`] built here shares the same handlers
/// for toggling.
pub struct MapHandlers<C: PanTarget> {
    mouse_pan: Rc<RefCell<MousePanHandler>>,
    touch_pan: Rc<RefCell<TouchPanHandler>>,
    drag_pan: DragPanHandler,
    camera: C,
}

impl<C: PanTarget> MapHandlers<C> {
    /// Wires the handlers to `camera`. Drag-to-pan starts out disabled.
    pub fn new(camera: C) -> Self {
        let mouse_pan = Rc::new(RefCell::new(MousePanHandler::new()));
        let touch_pan = Rc::new(RefCell::new(TouchPanHandler::new()));
        let drag_pan = DragPanHandler::new(mouse_pan.clone(), touch_pan.clone());
        Self {
            mouse_pan,
            touch_pan,
            drag_pan,
            camera,
        }
    }

    pub fn drag_pan(&self) -> &DragPanHandler {
        &self.drag_pan
    }

    pub fn drag_pan_mut(&mut self) -> &mut DragPanHandler {
        &mut self.drag_pan
    }

    pub fn mouse_pan(&self) -> &Rc<RefCell<MousePanHandler>> {
        &self.mouse_pan
    }

    pub fn touch_pan(&self) -> &Rc<RefCell<TouchPanHandler>> {
        &self.touch_pan
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Restricts mouse drag starts to presses inside the map surface.
    pub fn set_surface_bounds(&mut self, bounds: Rect) {
        self.mouse_pan.borrow_mut().set_surface_bounds(Some(bounds));
    }

    /// Dispatches one input event to the handler for its modality.
    pub fn handle_input(&mut self, event: impl Into<InputEvent>) -> Option<DragEvent> {
        match event.into() {
            InputEvent::Mouse(event) => self
                .mouse_pan
                .borrow_mut()
                .handle_event(&event, &mut self.camera),
            InputEvent::Touch(event) => self
                .touch_pan
                .borrow_mut()
                .handle_event(&event, &mut self.camera),
        }
    }
}
