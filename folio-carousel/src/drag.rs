//! Pointer drag with rubber-band resistance past the track bounds.
//!
//! The logical range is `[-scroll_bound, 0]`. While the pointer is down the
//! displayed offset may overshoot either end, damped by the elastic factor.
//! On release the committed offset is always clamped back into range; if the
//! release happened past a bound, a spring carries the display back.

use std::time::Instant;

use folio_model::DragFeel;
use tracing::debug;

use crate::constants::drag as cfg;
use crate::spring::{Spring, SpringConfig};

/// Clamp `offset` into `[-scroll_bound, 0]`.
pub fn clamp_offset(offset: f32, scroll_bound: f32) -> f32 {
    offset.clamp(-scroll_bound.max(0.0), 0.0)
}

/// Displayed offset for a raw (undamped) drag position.
pub fn elastic_offset(raw: f32, scroll_bound: f32, elastic: f32) -> f32 {
    let min = -scroll_bound.max(0.0);
    if raw > 0.0 {
        raw * elastic
    } else if raw < min {
        min + (raw - min) * elastic
    } else {
        raw
    }
}

/// Inverse of [`elastic_offset`]. Used when a drag starts while the track is
/// still displayed past a bound (grabbing mid-bounce).
fn raw_from_display(display: f32, scroll_bound: f32, elastic: f32) -> f32 {
    let min = -scroll_bound.max(0.0);
    if elastic <= f32::EPSILON {
        return clamp_offset(display, scroll_bound);
    }
    if display > 0.0 {
        display / elastic
    } else if display < min {
        min + (display - min) / elastic
    } else {
        display
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pointer_origin: f32,
    raw_origin: f32,
    display_offset: f32,
}

/// What a pointer release resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseOutcome {
    /// Offset displayed at the moment of release, overshoot included.
    pub released_offset: f32,
    /// Committed resting offset, always inside `[-scroll_bound, 0]`.
    pub resolved_offset: f32,
}

impl ReleaseOutcome {
    /// Whether the release happened past a bound.
    pub fn overshot(&self) -> bool {
        (self.released_offset - self.resolved_offset).abs()
            > cfg::BOUND_EPSILON_PX
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounce {
    spring: Spring,
    last_tick: Instant,
}

#[derive(Debug, Clone)]
pub struct DragInputHandler {
    feel: DragFeel,
    session: Option<DragSession>,
    bounce: Option<Bounce>,
}

impl DragInputHandler {
    pub fn new(feel: DragFeel) -> Self {
        Self {
            feel,
            session: None,
            bounce: None,
        }
    }

    pub fn feel(&self) -> &DragFeel {
        &self.feel
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_some()
    }

    /// Displayed offset of the active drag, if any.
    pub fn display_offset(&self) -> Option<f32> {
        self.session.map(|s| s.display_offset)
    }

    /// Start a drag at `pointer_x` with the track currently shown at
    /// `current_offset`. Any bounce in progress is abandoned.
    pub fn begin(
        &mut self,
        pointer_x: f32,
        current_offset: f32,
        scroll_bound: f32,
    ) {
        self.bounce = None;
        let raw_origin =
            raw_from_display(current_offset, scroll_bound, self.feel.elastic);
        debug!(pointer_x, current_offset, "drag: begin");
        self.session = Some(DragSession {
            pointer_origin: pointer_x,
            raw_origin,
            display_offset: current_offset,
        });
    }

    /// Follow the pointer. Returns the offset to display.
    pub fn drag_to(
        &mut self,
        pointer_x: f32,
        scroll_bound: f32,
    ) -> Option<f32> {
        let elastic = self.feel.elastic;
        let session = self.session.as_mut()?;
        let raw = session.raw_origin + (pointer_x - session.pointer_origin);
        session.display_offset = elastic_offset(raw, scroll_bound, elastic);
        Some(session.display_offset)
    }

    /// Finish the drag. The caller decides whether to spring the display
    /// back with [`start_bounce`](Self::start_bounce).
    pub fn end(&mut self, scroll_bound: f32) -> Option<ReleaseOutcome> {
        let session = self.session.take()?;
        let released_offset = session.display_offset;
        let resolved_offset = clamp_offset(released_offset, scroll_bound);
        let outcome = ReleaseOutcome {
            released_offset,
            resolved_offset,
        };
        debug!(
            released = released_offset,
            resolved = resolved_offset,
            overshot = outcome.overshot(),
            "drag: end"
        );
        Some(outcome)
    }

    /// Spring the display from `from` back to `to`.
    pub fn start_bounce(&mut self, from: f32, to: f32, now: Instant) {
        let spring = Spring::new(SpringConfig::bounce(&self.feel), from, to);
        self.bounce = Some(Bounce {
            spring,
            last_tick: now,
        });
    }

    /// Advance the bounce to `now`. Returns the displayed offset while a
    /// bounce is running; the final frame lands exactly on the bound.
    pub fn tick_bounce(&mut self, now: Instant) -> Option<f32> {
        let bounce = self.bounce.as_mut()?;
        let dt = now.saturating_duration_since(bounce.last_tick).as_secs_f32();
        bounce.last_tick = now;
        bounce.spring.advance(dt);
        let value = bounce.spring.value();
        if bounce.spring.is_settled() {
            self.bounce = None;
        }
        Some(value)
    }

    /// Drop any drag or bounce in progress.
    pub fn cancel(&mut self) {
        self.session = None;
        self.bounce = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn elastic_damps_only_past_bounds() {
        assert_eq!(elastic_offset(-300.0, 600.0, 0.1), -300.0);
        assert_eq!(elastic_offset(100.0, 600.0, 0.1), 10.0);
        assert_eq!(elastic_offset(-700.0, 600.0, 0.2), -620.0);
    }

    #[test]
    fn raw_inverse_round_trips_overshoot() {
        let display = elastic_offset(-800.0, 600.0, 0.2);
        assert!((raw_from_display(display, 600.0, 0.2) + 800.0).abs() < 1e-3);
        assert_eq!(raw_from_display(12.0, 600.0, 0.0), 0.0);
    }

    #[test]
    fn drag_follows_pointer_delta() {
        let mut drag = DragInputHandler::new(DragFeel::tight());
        drag.begin(500.0, -100.0, 600.0);
        assert_eq!(drag.drag_to(350.0, 600.0), Some(-250.0));
        let outcome = drag.end(600.0).unwrap();
        assert_eq!(outcome.resolved_offset, -250.0);
        assert!(!outcome.overshot());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn committed_offset_stays_in_range() {
        for feel in [DragFeel::tight(), DragFeel::soft()] {
            for pointer in [-5_000.0, -900.0, -10.0, 0.0, 40.0, 2_000.0] {
                let mut drag = DragInputHandler::new(feel);
                drag.begin(0.0, -50.0, 600.0);
                drag.drag_to(pointer, 600.0);
                let outcome = drag.end(600.0).unwrap();
                assert!(
                    (-600.0..=0.0).contains(&outcome.resolved_offset),
                    "{pointer} -> {outcome:?}"
                );
            }
        }
    }

    #[test]
    fn overshoot_springs_back_to_nearest_bound() {
        let t0 = Instant::now();
        let mut drag = DragInputHandler::new(DragFeel::tight());
        drag.begin(0.0, 0.0, 600.0);
        let shown = drag.drag_to(300.0, 600.0).unwrap();
        assert_eq!(shown, 30.0);
        let outcome = drag.end(600.0).unwrap();
        assert!(outcome.overshot());
        assert_eq!(outcome.resolved_offset, 0.0);

        drag.start_bounce(outcome.released_offset, outcome.resolved_offset, t0);
        let mut last = shown;
        for frame in 1..=120 {
            match drag.tick_bounce(t0 + Duration::from_millis(frame * 16)) {
                Some(value) => last = value,
                None => break,
            }
        }
        assert!(!drag.is_bouncing());
        assert_eq!(last, 0.0);
    }

    #[test]
    fn move_without_begin_is_ignored() {
        let mut drag = DragInputHandler::new(DragFeel::soft());
        assert_eq!(drag.drag_to(10.0, 600.0), None);
        assert_eq!(drag.end(600.0), None);
    }
}
