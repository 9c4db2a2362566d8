//! One-shot scroll-triggered entrance animations for section copy.
//!
//! Each reveal starts from a preset pose (faded, offset, scaled) and eases
//! to rest the first time its target becomes visible. It never replays: the
//! trigger is the visibility latch, not the live intersection flag.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::constants::reveal as cfg;
use crate::easing::Easing;
use crate::visibility::{
    IntersectionEntry, ObserverOptions, VisibilityChange, VisibilityTracker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPreset {
    /// Fade in while rising 20px.
    FadeUp,
    /// Fade in from 40px to the left.
    SlideLeft,
    /// Fade in from 40px to the right.
    SlideRight,
    FadeIn,
    /// Fade in while growing from 90%.
    ScaleIn,
    /// Horizontal rule growing from nothing.
    DividerGrow,
}

impl RevealPreset {
    pub fn duration_ms(self) -> u64 {
        match self {
            RevealPreset::FadeUp | RevealPreset::FadeIn => cfg::FADE_DURATION_MS,
            RevealPreset::SlideLeft | RevealPreset::SlideRight => {
                cfg::SLIDE_DURATION_MS
            }
            RevealPreset::ScaleIn => cfg::SCALE_DURATION_MS,
            RevealPreset::DividerGrow => cfg::DIVIDER_DURATION_MS,
        }
    }

    /// Pose before the reveal starts.
    pub fn initial_frame(self) -> RevealFrame {
        let rest = RevealFrame::REST;
        match self {
            RevealPreset::FadeUp => RevealFrame {
                opacity: 0.0,
                translate_y: cfg::FADE_UP_OFFSET_PX,
                ..rest
            },
            RevealPreset::SlideLeft => RevealFrame {
                opacity: 0.0,
                translate_x: -cfg::SLIDE_OFFSET_PX,
                ..rest
            },
            RevealPreset::SlideRight => RevealFrame {
                opacity: 0.0,
                translate_x: cfg::SLIDE_OFFSET_PX,
                ..rest
            },
            RevealPreset::FadeIn => RevealFrame {
                opacity: 0.0,
                ..rest
            },
            RevealPreset::ScaleIn => RevealFrame {
                opacity: 0.0,
                scale_x: cfg::SCALE_IN_FROM,
                scale_y: cfg::SCALE_IN_FROM,
                ..rest
            },
            RevealPreset::DividerGrow => RevealFrame {
                scale_x: 0.0,
                ..rest
            },
        }
    }
}

/// Visual pose of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl RevealFrame {
    pub const REST: RevealFrame = RevealFrame {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    fn lerp(from: RevealFrame, to: RevealFrame, t: f32) -> RevealFrame {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        RevealFrame {
            opacity: mix(from.opacity, to.opacity),
            translate_x: mix(from.translate_x, to.translate_x),
            translate_y: mix(from.translate_y, to.translate_y),
            scale_x: mix(from.scale_x, to.scale_x),
            scale_y: mix(from.scale_y, to.scale_y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub preset: RevealPreset,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl RevealSpec {
    pub fn new(preset: RevealPreset) -> Self {
        Self {
            preset,
            delay_ms: 0,
            duration_ms: preset.duration_ms(),
            easing: Easing::EaseOut,
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Add the stagger delay for the `index`-th element of a group.
    pub fn staggered(mut self, index: usize) -> Self {
        self.delay_ms += index as u64 * cfg::STAGGER_STEP_MS;
        self
    }
}

#[derive(Debug, Clone)]
pub struct RevealAnimation {
    spec: RevealSpec,
    tracker: VisibilityTracker,
    triggered_at: Option<Instant>,
}

impl RevealAnimation {
    pub fn new(spec: RevealSpec, options: ObserverOptions) -> Self {
        Self {
            spec,
            tracker: VisibilityTracker::new(options),
            triggered_at: None,
        }
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Feed an intersection entry. Returns `true` when this entry triggered
    /// the reveal.
    pub fn observe(&mut self, entry: IntersectionEntry, now: Instant) -> bool {
        if let VisibilityChange::Entered { first: true } =
            self.tracker.observe(entry)
        {
            debug!(preset = ?self.spec.preset, "reveal: triggered");
            self.triggered_at = Some(now);
            return true;
        }
        false
    }

    /// Pose at `now`.
    pub fn frame(&self, now: Instant) -> RevealFrame {
        let initial = self.spec.preset.initial_frame();
        let Some(t) = self.progress(now) else {
            return initial;
        };
        RevealFrame::lerp(initial, RevealFrame::REST, self.spec.easing.apply(t))
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now).is_some_and(|t| t >= 1.0)
    }

    fn progress(&self, now: Instant) -> Option<f32> {
        let triggered_at = self.triggered_at?;
        let start = triggered_at + Duration::from_millis(self.spec.delay_ms);
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        if self.spec.duration_ms == 0 {
            return Some(1.0);
        }
        let duration = self.spec.duration_ms as f32 / 1_000.0;
        Some((elapsed / duration).clamp(0.0, 1.0))
    }
}
