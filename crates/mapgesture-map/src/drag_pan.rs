//! The "drag to pan" feature toggle.

use std::cell::RefCell;
use std::rc::Rc;

use mapgesture_animation::InertiaOptions;
use mapgesture_foundation::GestureAdapter;
use smallvec::SmallVec;

/// An input-modality handler shared between the toggle and the event
/// dispatcher that feeds it.
pub type SharedAdapter = Rc<RefCell<dyn GestureAdapter>>;

/// Lets the user pan the map by dragging with any supported input device.
///
/// Owns no gesture state. It fans configuration out to every adapter and
/// fans their status back in: the feature is enabled only when every
/// adapter is, and active as soon as any adapter is mid-drag.
///
/// # Usage
/// ```ignore
/// let mut drag_pan = DragPanHandler::new(mouse_pan, touch_pan);
/// drag_pan.enable(InertiaOptions::default().with_linearity(0.3));
/// assert!(drag_pan.is_enabled());
/// ```
pub struct DragPanHandler {
    adapters: SmallVec<[SharedAdapter; 2]>,
}

impl DragPanHandler {
    pub fn new(mouse_pan: SharedAdapter, touch_pan: SharedAdapter) -> Self {
        Self::empty().with_adapter(mouse_pan).with_adapter(touch_pan)
    }

    /// A toggle with no adapters: vacuously enabled, never active.
    pub fn empty() -> Self {
        Self {
            adapters: SmallVec::new(),
        }
    }

    /// Adds another input modality.
    pub fn with_adapter(mut self, adapter: SharedAdapter) -> Self {
        self.adapters.push(adapter);
        self
    }

    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    /// Enables the "drag to pan" interaction on every adapter.
    ///
    /// The options replace whatever the adapters held before. Drags already
    /// in progress finish with the options they started with.
    pub fn enable(&mut self, options: InertiaOptions) {
        log::debug!("drag pan: enabling {} adapter(s)", self.adapters.len());
        for adapter in &self.adapters {
            adapter.borrow_mut().enable(options);
        }
    }

    /// Disables the "drag to pan" interaction, cancelling any drag in
    /// progress without momentum.
    pub fn disable(&mut self) {
        log::debug!("drag pan: disabling {} adapter(s)", self.adapters.len());
        for adapter in &self.adapters {
            adapter.borrow_mut().disable();
        }
    }

    /// `true` only if every adapter is enabled.
    pub fn is_enabled(&self) -> bool {
        self.adapters.iter().all(|a| a.borrow().is_enabled())
    }

    /// `true` if any adapter is currently dragging.
    pub fn is_active(&self) -> bool {
        self.adapters.iter().any(|a| a.borrow().is_active())
    }
}

impl std::fmt::Debug for DragPanHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragPanHandler")
            .field("adapters", &self.adapters.len())
            .field("enabled", &self.is_enabled())
            .field("active", &self.is_active())
            .finish()
    }
}
