//! Scroll bound measurement.
//!
//! The bound is computed once, the first time the mounted track reports a
//! real (non-zero) width. "Not measured yet" is `None`, never a zero.

use folio_model::LoopMode;
use tracing::{debug, info, warn};

use crate::constants::measure as cfg;

/// Geometry reported by the host after the track has laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Total scrollable width of the track element.
    pub content_scroll_width: f32,
    /// Width of the clipping container that shows the track.
    pub container_visible_width: f32,
}

impl TrackMetrics {
    pub const fn new(
        content_scroll_width: f32,
        container_visible_width: f32,
    ) -> Self {
        Self {
            content_scroll_width,
            container_visible_width,
        }
    }

    /// Whether the track has produced real geometry yet.
    pub fn is_laid_out(&self) -> bool {
        self.content_scroll_width.is_finite()
            && self.container_visible_width.is_finite()
            && self.content_scroll_width > cfg::MIN_LAID_OUT_WIDTH_PX
    }
}

/// Maximum leftward travel for `metrics` under `mode`. Never negative.
///
/// Tripled tracks travel one unique set plus the container width; single
/// pass tracks travel whatever is not already on screen.
pub fn scroll_bound(mode: LoopMode, metrics: TrackMetrics) -> f32 {
    let content = metrics.content_scroll_width.max(0.0);
    let container = metrics.container_visible_width.max(0.0);
    let bound = match mode {
        LoopMode::RepeatedTriple => content / 3.0 + container,
        LoopMode::SinglePass => content - container,
    };
    bound.max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureOutcome {
    /// Geometry still reads as zero; try again on the next layout report.
    NotReady,
    /// First successful measurement.
    Measured { scroll_bound: f32 },
    /// A bound already exists; the report was ignored.
    AlreadyMeasured { scroll_bound: f32 },
}

#[derive(Debug, Clone)]
pub struct CarouselMeasurer {
    loop_mode: LoopMode,
    scroll_bound: Option<f32>,
    last_metrics: Option<TrackMetrics>,
}

impl CarouselMeasurer {
    pub fn new(loop_mode: LoopMode) -> Self {
        Self {
            loop_mode,
            scroll_bound: None,
            last_metrics: None,
        }
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// `None` until a real layout has been measured.
    pub fn scroll_bound(&self) -> Option<f32> {
        self.scroll_bound
    }

    pub fn is_measured(&self) -> bool {
        self.scroll_bound.is_some()
    }

    pub fn last_metrics(&self) -> Option<TrackMetrics> {
        self.last_metrics
    }

    /// First-time measurement. Later calls are no-ops; use
    /// [`remeasure`](Self::remeasure) for container resizes.
    pub fn measure(&mut self, metrics: TrackMetrics) -> MeasureOutcome {
        if let Some(scroll_bound) = self.scroll_bound {
            return MeasureOutcome::AlreadyMeasured { scroll_bound };
        }
        if !metrics.is_laid_out() {
            warn!(
                content = metrics.content_scroll_width,
                container = metrics.container_visible_width,
                "measure: track not laid out yet, deferring"
            );
            return MeasureOutcome::NotReady;
        }
        let bound = scroll_bound(self.loop_mode, metrics);
        info!(
            mode = self.loop_mode.as_str(),
            content = metrics.content_scroll_width,
            container = metrics.container_visible_width,
            scroll_bound = bound,
            "measure: scroll bound computed"
        );
        self.scroll_bound = Some(bound);
        self.last_metrics = Some(metrics);
        MeasureOutcome::Measured {
            scroll_bound: bound,
        }
    }

    /// Recompute after a resize. Returns the new bound when it changed.
    /// Before the first measurement this behaves like `measure`.
    pub fn remeasure(&mut self, metrics: TrackMetrics) -> Option<f32> {
        if self.scroll_bound.is_none() {
            return match self.measure(metrics) {
                MeasureOutcome::Measured { scroll_bound } => Some(scroll_bound),
                _ => None,
            };
        }
        if !metrics.is_laid_out() {
            return None;
        }
        if let Some(last) = self.last_metrics {
            let same_content = (last.content_scroll_width
                - metrics.content_scroll_width)
                .abs()
                <= cfg::RESIZE_EPSILON_PX;
            let same_container = (last.container_visible_width
                - metrics.container_visible_width)
                .abs()
                <= cfg::RESIZE_EPSILON_PX;
            if same_content && same_container {
                return None;
            }
        }
        let bound = scroll_bound(self.loop_mode, metrics);
        debug!(scroll_bound = bound, "measure: re-measured after resize");
        self.last_metrics = Some(metrics);
        let changed = self
            .scroll_bound
            .is_none_or(|prev| (prev - bound).abs() > cfg::RESIZE_EPSILON_PX);
        self.scroll_bound = Some(bound);
        changed.then_some(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_triple_formula() {
        let bound =
            scroll_bound(LoopMode::RepeatedTriple, TrackMetrics::new(900.0, 300.0));
        assert_eq!(bound, 600.0);
    }

    #[test]
    fn single_pass_formula() {
        let bound =
            scroll_bound(LoopMode::SinglePass, TrackMetrics::new(900.0, 300.0));
        assert_eq!(bound, 600.0);
    }

    #[test]
    fn bound_is_never_negative() {
        let widths = [0.0, 1.0, 120.0, 299.9, 300.0, 900.0, 5_000.0];
        for mode in [LoopMode::RepeatedTriple, LoopMode::SinglePass] {
            for &content in &widths {
                for &container in &widths {
                    let bound =
                        scroll_bound(mode, TrackMetrics::new(content, container));
                    assert!(bound >= 0.0, "{mode:?} {content} {container}");
                }
            }
        }
        assert_eq!(
            scroll_bound(LoopMode::SinglePass, TrackMetrics::new(200.0, 390.0)),
            0.0
        );
    }

    #[test]
    fn zero_width_is_not_ready_and_stays_unmeasured() {
        let mut measurer = CarouselMeasurer::new(LoopMode::RepeatedTriple);
        assert_eq!(
            measurer.measure(TrackMetrics::new(0.0, 390.0)),
            MeasureOutcome::NotReady
        );
        assert_eq!(measurer.scroll_bound(), None);

        assert_eq!(
            measurer.measure(TrackMetrics::new(900.0, 300.0)),
            MeasureOutcome::Measured {
                scroll_bound: 600.0
            }
        );
    }

    #[test]
    fn measures_only_once() {
        let mut measurer = CarouselMeasurer::new(LoopMode::SinglePass);
        measurer.measure(TrackMetrics::new(900.0, 300.0));
        assert_eq!(
            measurer.measure(TrackMetrics::new(1_500.0, 300.0)),
            MeasureOutcome::AlreadyMeasured {
                scroll_bound: 600.0
            }
        );
    }

    #[test]
    fn narrow_content_measures_a_real_zero() {
        let mut measurer = CarouselMeasurer::new(LoopMode::SinglePass);
        measurer.measure(TrackMetrics::new(200.0, 390.0));
        assert_eq!(measurer.scroll_bound(), Some(0.0));
    }

    #[test]
    fn remeasure_reports_changes_only() {
        let mut measurer = CarouselMeasurer::new(LoopMode::SinglePass);
        measurer.measure(TrackMetrics::new(900.0, 300.0));
        assert_eq!(measurer.remeasure(TrackMetrics::new(900.0, 300.2)), None);
        assert_eq!(
            measurer.remeasure(TrackMetrics::new(900.0, 500.0)),
            Some(400.0)
        );
        assert_eq!(measurer.scroll_bound(), Some(400.0));
    }
}
