//! In-memory host for simulations and tests.
//!
//! [`HeadlessObserver`] and [`HeadlessSurface`] record every call the engine
//! makes so callers can assert on host traffic, including the absence of
//! traffic after teardown.

use crate::host::{HostError, TrackSurface, ViewportObserver};
use crate::visibility::ObserverOptions;

#[derive(Debug, Clone, Default)]
pub struct HeadlessObserver {
    supported: bool,
    options: Option<ObserverOptions>,
    observing: bool,
    observe_calls: usize,
    disconnect_calls: usize,
}

impl HeadlessObserver {
    pub fn new() -> Self {
        Self {
            supported: true,
            ..Self::default()
        }
    }

    /// A host without intersection observation.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn options(&self) -> Option<&ObserverOptions> {
        self.options.as_ref()
    }

    pub fn observe_calls(&self) -> usize {
        self.observe_calls
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls
    }
}

impl ViewportObserver for HeadlessObserver {
    fn observe(&mut self, options: &ObserverOptions) -> Result<(), HostError> {
        self.observe_calls += 1;
        if !self.supported {
            return Err(HostError::ObserverUnsupported);
        }
        self.options = Some(*options);
        self.observing = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.disconnect_calls += 1;
        self.observing = false;
    }
}

/// Records mounts, translations and frame requests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    mounted_copies: Option<usize>,
    translation: f32,
    translations: Vec<f32>,
    frame_requests: usize,
    frame_cancels: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted_copies(&self) -> Option<usize> {
        self.mounted_copies
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    /// Every translation pushed so far, oldest first.
    pub fn translations(&self) -> &[f32] {
        &self.translations
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    pub fn frame_cancels(&self) -> usize {
        self.frame_cancels
    }

    /// Total number of host calls received.
    pub fn call_count(&self) -> usize {
        usize::from(self.mounted_copies.is_some())
            + self.translations.len()
            + self.frame_requests
            + self.frame_cancels
    }
}

impl TrackSurface for HeadlessSurface {
    fn mount_track(&mut self, copies: usize) {
        self.mounted_copies = Some(copies);
    }

    fn set_translation(&mut self, x: f32) {
        self.translation = x;
        self.translations.push(x);
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn cancel_frame(&mut self) {
        self.frame_cancels += 1;
    }
}
