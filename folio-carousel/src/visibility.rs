//! Viewport visibility tracking with a one-way "has been seen" latch.
//!
//! Hosts with a native intersection observer feed its entries straight into
//! [`VisibilityTracker::observe`]. Headless hosts can derive the same entries
//! from rectangles with [`IntersectionEntry::from_geometry`].

use tracing::debug;

use crate::constants::visibility as cfg;

/// Options handed to the host observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target box that must be inside the (expanded) root.
    pub threshold: f32,
    /// Pixels the root is expanded by on every side before testing.
    pub root_margin_px: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: cfg::THRESHOLD,
            root_margin_px: cfg::ROOT_MARGIN_PX,
        }
    }
}

/// Axis-aligned rectangle in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Overlapping region, if the rectangles touch or overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// One observation of a target against the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Visible fraction of the target box, in `[0, 1]`.
    pub intersection_ratio: f32,
}

impl IntersectionEntry {
    pub const fn visible(ratio: f32) -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio: ratio,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }

    /// Compute an entry from a target rect and the viewport rect, expanding
    /// the viewport by the configured root margin.
    pub fn from_geometry(
        target: &Rect,
        viewport: &Rect,
        options: &ObserverOptions,
    ) -> Self {
        let root = viewport.expand(options.root_margin_px);
        let Some(overlap) = target.intersection(&root) else {
            return Self::hidden();
        };
        let target_area = target.area();
        let ratio = if target_area > 0.0 {
            (overlap.area() / target_area).clamp(0.0, 1.0)
        } else {
            // A zero-area target that touches the root counts as fully in.
            1.0
        };
        Self::visible(ratio)
    }
}

/// Result of feeding an entry to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Unchanged,
    /// Became visible. `first` is set on the latch transition only.
    Entered { first: bool },
    Left,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: ObserverOptions,
    is_intersecting: bool,
    has_ever_been_visible: bool,
}

impl VisibilityTracker {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            is_intersecting: false,
            has_ever_been_visible: false,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn is_intersecting(&self) -> bool {
        self.is_intersecting
    }

    pub fn has_ever_been_visible(&self) -> bool {
        self.has_ever_been_visible
    }

    /// Apply an observer entry.
    pub fn observe(&mut self, entry: IntersectionEntry) -> VisibilityChange {
        let visible = entry.is_intersecting
            && entry.intersection_ratio >= self.options.threshold;
        self.set_intersecting(visible)
    }

    /// Treat the target as visible for good. Used when no observer is
    /// available, so content is never left permanently unmounted.
    pub fn force_visible(&mut self) -> VisibilityChange {
        self.set_intersecting(true)
    }

    fn set_intersecting(&mut self, visible: bool) -> VisibilityChange {
        if visible == self.is_intersecting {
            return VisibilityChange::Unchanged;
        }
        self.is_intersecting = visible;
        if !visible {
            debug!("visibility: left viewport");
            return VisibilityChange::Left;
        }
        let first = !self.has_ever_been_visible;
        // Latch: never reset.
        self.has_ever_been_visible = true;
        debug!(first, "visibility: entered viewport");
        VisibilityChange::Entered { first }
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}
