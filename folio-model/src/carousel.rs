//! Static carousel configuration.
//!
//! A `CarouselConfig` is immutable once handed to an engine. Presets mirror
//! the two carousel flavours found on the showcase page: slow-drifting
//! tripled tracks and single-pass manual swipe tracks.

use crate::error::ModelError;
use crate::item::CarouselItem;

/// Time to traverse the full scroll bound once (two minutes).
pub const DEFAULT_LOOP_DURATION_MS: u64 = 120_000;

/// How the item sequence is laid out on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LoopMode {
    /// Items rendered three times back-to-back for seamless wraparound.
    #[default]
    RepeatedTriple,
    /// Items rendered once; manual swipe only.
    SinglePass,
}

impl LoopMode {
    /// Number of back-to-back copies of the item sequence on the track.
    pub const fn copies(self) -> usize {
        match self {
            LoopMode::RepeatedTriple => 3,
            LoopMode::SinglePass => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LoopMode::RepeatedTriple => "repeated-triple",
            LoopMode::SinglePass => "single-pass",
        }
    }
}

/// Whether a carousel follows viewport intersection or assumes it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VisibilityMode {
    #[default]
    Observed,
    /// Never observe; latch and report visible as soon as the engine attaches.
    AlwaysVisible,
}

/// Elastic drag and spring-back tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragFeel {
    /// Fraction of pointer travel applied past a bound (0 = rigid, 1 = free).
    pub elastic: f32,
    /// Spring stiffness used to return to the nearest bound on release.
    pub bounce_stiffness: f32,
    /// Spring damping used to return to the nearest bound on release.
    pub bounce_damping: f32,
}

impl DragFeel {
    /// Firm rubber band used by the autoplaying tracks.
    pub const fn tight() -> Self {
        Self {
            elastic: 0.1,
            bounce_stiffness: 600.0,
            bounce_damping: 20.0,
        }
    }

    /// Looser rubber band used by the manual swipe tracks.
    pub const fn soft() -> Self {
        Self {
            elastic: 0.2,
            bounce_stiffness: 400.0,
            bounce_damping: 30.0,
        }
    }
}

impl Default for DragFeel {
    fn default() -> Self {
        Self::tight()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    pub items: Vec<CarouselItem>,
    pub loop_mode: LoopMode,
    pub autoplay: bool,
    /// Restart the loop from the released offset after a manual drag.
    /// Some sections never resumed after a drag; they set this to `false`.
    pub resume_after_drag: bool,
    pub loop_duration_ms: u64,
    pub drag: DragFeel,
    pub visibility: VisibilityMode,
}

impl CarouselConfig {
    /// Tripled, slowly drifting track that resumes after drags.
    pub fn autoplay_loop(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            loop_mode: LoopMode::RepeatedTriple,
            autoplay: true,
            resume_after_drag: true,
            loop_duration_ms: DEFAULT_LOOP_DURATION_MS,
            drag: DragFeel::tight(),
            visibility: VisibilityMode::Observed,
        }
    }

    /// Single copy of the items, swipe only.
    pub fn manual_swipe(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            loop_mode: LoopMode::SinglePass,
            autoplay: false,
            resume_after_drag: false,
            loop_duration_ms: DEFAULT_LOOP_DURATION_MS,
            drag: DragFeel::soft(),
            visibility: VisibilityMode::Observed,
        }
    }

    pub fn with_loop_duration_ms(
        mut self,
        loop_duration_ms: u64,
    ) -> Result<Self, ModelError> {
        if loop_duration_ms == 0 {
            return Err(ModelError::ZeroLoopDuration);
        }
        self.loop_duration_ms = loop_duration_ms;
        Ok(self)
    }

    pub fn with_resume_after_drag(mut self, resume: bool) -> Self {
        self.resume_after_drag = resume;
        self
    }

    pub fn with_drag(mut self, drag: DragFeel) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_visibility(mut self, visibility: VisibilityMode) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Whether a released drag should hand control back to the loop.
    pub fn resumes_after_drag(&self) -> bool {
        self.autoplay && self.resume_after_drag
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::autoplay_loop(Vec::new())
    }
}
