//! Headless carousel engine for showcase sections.
//!
//! A [`CarouselEngine`] drives one auto-drifting, drag-scrollable track: it
//! latches visibility, measures the scroll bound once the track has mounted,
//! loops a slow linear translation while the section is in view, and hands
//! control to the pointer during drags. Platform access goes through the
//! [`ViewportObserver`] and [`TrackSurface`] seams.

pub mod animator;
pub mod constants;
pub mod drag;
pub mod easing;
pub mod engine;
pub mod headless;
pub mod host;
pub mod layout;
pub mod measure;
pub mod messages;
pub mod playback;
pub mod registry;
pub mod reveal;
pub mod spring;
pub mod update;
pub mod visibility;

pub use animator::LoopAnimator;
pub use drag::{DragInputHandler, ReleaseOutcome, clamp_offset, elastic_offset};
pub use easing::Easing;
pub use engine::CarouselEngine;
pub use headless::{HeadlessObserver, HeadlessSurface};
pub use host::{HostError, TrackSurface, ViewportObserver};
pub use layout::TrackLayout;
pub use measure::{CarouselMeasurer, MeasureOutcome, TrackMetrics, scroll_bound};
pub use messages::CarouselMessage;
pub use playback::{LoopCommand, PlaybackEvent, PlaybackState};
pub use registry::{CarouselRegistry, TrackFrame};
pub use reveal::{RevealAnimation, RevealFrame, RevealPreset, RevealSpec};
pub use spring::{Spring, SpringConfig};
pub use update::{UpdateOutcome, update};
pub use visibility::{
    IntersectionEntry, ObserverOptions, Rect, VisibilityChange,
    VisibilityTracker,
};

/// Engine wired to the in-memory host.
pub type HeadlessEngine = CarouselEngine<HeadlessObserver, HeadlessSurface>;
/// Registry of headless engines.
pub type HeadlessRegistry = CarouselRegistry<HeadlessObserver, HeadlessSurface>;
