//! Message types for carousel interactions

use folio_model::SectionKey;

use crate::measure::TrackMetrics;
use crate::visibility::IntersectionEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    // Lifecycle
    Attach(SectionKey),
    AttachAll,
    Unmount(SectionKey),
    UnmountAll,

    // Host reports
    Intersection(SectionKey, IntersectionEntry),
    Layout(SectionKey, TrackMetrics),

    // Pointer
    PointerDown(SectionKey, f32),
    PointerMove(SectionKey, f32),
    PointerUp(SectionKey),

    // Animation frame for every registered track
    Frame,
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attach(_) => "Attach",
            Self::AttachAll => "AttachAll",
            Self::Unmount(_) => "Unmount",
            Self::UnmountAll => "UnmountAll",
            Self::Intersection(_, _) => "Intersection",
            Self::Layout(_, _) => "Layout",
            Self::PointerDown(_, _) => "PointerDown",
            Self::PointerMove(_, _) => "PointerMove",
            Self::PointerUp(_) => "PointerUp",
            Self::Frame => "Frame",
        }
    }

    /// Section the message targets, if it targets one.
    pub fn key(&self) -> Option<&SectionKey> {
        match self {
            Self::Attach(key)
            | Self::Unmount(key)
            | Self::Intersection(key, _)
            | Self::Layout(key, _)
            | Self::PointerDown(key, _)
            | Self::PointerMove(key, _)
            | Self::PointerUp(key) => Some(key),
            Self::AttachAll | Self::UnmountAll | Self::Frame => None,
        }
    }
}
