//! Carousel constants
//!
//! Shared constants for visibility observation, measurement, drag and the
//! reveal animations. Tuning should happen here so all sections update
//! consistently.

/// Intersection observation defaults.
pub mod visibility {
    /// Fraction of the section box that must be inside the viewport.
    pub const THRESHOLD: f32 = 0.2;
    /// Pixels added around the viewport so content mounts before it shows.
    pub const ROOT_MARGIN_PX: f32 = 50.0;
}

/// Track layout defaults (matches the card strip markup).
pub mod layout {
    /// Gap between cards, and between consecutive copies of the item set.
    pub const ITEM_GAP_PX: f32 = 16.0;
    /// Horizontal padding on each side of the track.
    pub const TRACK_PADDING_SIDE_PX: f32 = 24.0;
}

/// Measurement tolerances.
pub mod measure {
    /// Widths at or below this are treated as "not laid out yet".
    pub const MIN_LAID_OUT_WIDTH_PX: f32 = 0.5;
    /// Resize reports closer than this to the last measurement are ignored.
    pub const RESIZE_EPSILON_PX: f32 = 0.5;
}

/// Drag and spring-back behavior.
pub mod drag {
    /// Spring mass for the bounce-back transition.
    pub const SPRING_MASS: f32 = 1.0;
    /// Offsets this close to a bound count as resting on it.
    pub const BOUND_EPSILON_PX: f32 = 0.5;
    /// Largest integration step for the spring (s). Longer frames are split.
    pub const MAX_SPRING_STEP_S: f32 = 1.0 / 60.0;
    /// A spring within this distance of its target (px) may settle.
    pub const SETTLE_EPSILON_PX: f32 = 0.5;
    /// Speed below which a spring near its target counts as still (px/s).
    pub const SETTLE_VELOCITY_PX_S: f32 = 5.0;
}

/// Reveal (fade/slide) animation defaults.
pub mod reveal {
    /// Vertical travel of the fade-up entrance (px).
    pub const FADE_UP_OFFSET_PX: f32 = 20.0;
    /// Horizontal travel of the slide entrances (px).
    pub const SLIDE_OFFSET_PX: f32 = 40.0;
    /// Starting scale of the scale-in entrance.
    pub const SCALE_IN_FROM: f32 = 0.9;
    pub const FADE_DURATION_MS: u64 = 600;
    pub const SLIDE_DURATION_MS: u64 = 700;
    pub const SCALE_DURATION_MS: u64 = 400;
    pub const DIVIDER_DURATION_MS: u64 = 800;
    /// Delay added per index for staggered groups (ms).
    pub const STAGGER_STEP_MS: u64 = 100;
}
