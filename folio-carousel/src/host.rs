//! Host seams.
//!
//! The engine never touches a platform API directly. A browser binding
//! implements these over `IntersectionObserver` and `requestAnimationFrame`;
//! [`crate::headless`] implements them in memory.

use thiserror::Error;

use crate::visibility::ObserverOptions;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("intersection observation is not supported by this host")]
    ObserverUnsupported,
}

/// Reports visibility changes of the section that owns a carousel.
///
/// Entries are delivered by the host calling
/// [`CarouselEngine::on_intersection`](crate::engine::CarouselEngine::on_intersection).
#[cfg_attr(test, mockall::automock)]
pub trait ViewportObserver {
    /// Begin observing. An `Err` means observation is unavailable and the
    /// engine treats the section as always visible.
    fn observe(&mut self, options: &ObserverOptions) -> Result<(), HostError>;

    /// Stop delivering entries.
    fn disconnect(&mut self);
}

/// The rendered track.
#[cfg_attr(test, mockall::automock)]
pub trait TrackSurface {
    /// Mount the heavy subtree (cards, drag handlers) with `copies` copies of
    /// the item sequence.
    fn mount_track(&mut self, copies: usize);

    /// Translate the track horizontally by `x` pixels.
    fn set_translation(&mut self, x: f32);

    /// Ask for a frame tick.
    fn request_frame(&mut self);

    /// Withdraw a pending frame request.
    fn cancel_frame(&mut self);
}
