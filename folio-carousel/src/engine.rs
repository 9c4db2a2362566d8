//! Carousel engine.
//!
//! One engine per carousel section. It owns the visibility latch, the scroll
//! bound, the playback state, the loop animator and the drag handler, and it
//! talks to the platform only through the [`ViewportObserver`] and
//! [`TrackSurface`] seams.
//!
//! Lifecycle: `new` → `attach` → host events (`on_intersection`,
//! `on_layout`, pointer events, `tick`) → `teardown` (also run on drop).
//! Events delivered before `attach` or after `teardown` are ignored, and no
//! host call is made after teardown.

use std::time::Instant;

use folio_model::{CarouselConfig, VisibilityMode};
use tracing::{debug, info, warn};

use crate::animator::LoopAnimator;
use crate::drag::{DragInputHandler, ReleaseOutcome};
use crate::host::{TrackSurface, ViewportObserver};
use crate::measure::{CarouselMeasurer, MeasureOutcome, TrackMetrics};
use crate::playback::{
    LoopCommand, PlaybackContext, PlaybackEvent, PlaybackState, transition,
};
use crate::visibility::{
    IntersectionEntry, ObserverOptions, VisibilityChange, VisibilityTracker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Detached,
    Attached,
    TornDown,
}

#[derive(Debug)]
pub struct CarouselEngine<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    config: CarouselConfig,
    observer: O,
    surface: S,
    visibility: VisibilityTracker,
    measurer: CarouselMeasurer,
    animator: LoopAnimator,
    drag: DragInputHandler,
    state: PlaybackState,
    offset: f32,
    lifecycle: Lifecycle,
    observing: bool,
    mounted: bool,
    frame_pending: bool,
    held_after_release: bool,
}

impl<O, S> CarouselEngine<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    pub fn new(
        config: CarouselConfig,
        observer: O,
        surface: S,
        options: ObserverOptions,
    ) -> Self {
        let measurer = CarouselMeasurer::new(config.loop_mode);
        let drag = DragInputHandler::new(config.drag);
        Self {
            config,
            observer,
            surface,
            visibility: VisibilityTracker::new(options),
            measurer,
            animator: LoopAnimator::new(),
            drag,
            state: PlaybackState::Idle,
            offset: 0.0,
            lifecycle: Lifecycle::Detached,
            observing: false,
            mounted: false,
            frame_pending: false,
            held_after_release: false,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Last translation handed to the surface.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn scroll_bound(&self) -> Option<f32> {
        self.measurer.scroll_bound()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_intersecting(&self) -> bool {
        self.visibility.is_intersecting()
    }

    pub fn has_ever_been_visible(&self) -> bool {
        self.visibility.has_ever_been_visible()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    /// Whether a loop or a bounce is still producing frames.
    pub fn is_animating(&self) -> bool {
        self.animator.is_active() || self.drag.is_bouncing()
    }

    /// Current loop endpoints, when the autoplay loop is running.
    pub fn loop_segment(&self) -> Option<(f32, f32)> {
        self.animator.segment()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn is_live(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    /// Start observing the owning section. Sections configured as always
    /// visible, and hosts without intersection observation, latch visible
    /// immediately.
    pub fn attach(&mut self, now: Instant) {
        if self.lifecycle != Lifecycle::Detached {
            return;
        }
        self.lifecycle = Lifecycle::Attached;

        match self.config.visibility {
            VisibilityMode::AlwaysVisible => {
                debug!("engine: always visible, skipping observer");
                let change = self.visibility.force_visible();
                self.apply_visibility(change, now);
            }
            VisibilityMode::Observed => {
                let options = *self.visibility.options();
                match self.observer.observe(&options) {
                    Ok(()) => self.observing = true,
                    Err(err) => {
                        warn!(
                            error = %err,
                            "engine: observer unavailable, treating section as visible"
                        );
                        let change = self.visibility.force_visible();
                        self.apply_visibility(change, now);
                    }
                }
            }
        }
    }

    /// Feed an observer entry.
    pub fn on_intersection(&mut self, entry: IntersectionEntry, now: Instant) {
        if !self.is_live() {
            return;
        }
        let change = self.visibility.observe(entry);
        self.apply_visibility(change, now);
    }

    fn apply_visibility(&mut self, change: VisibilityChange, now: Instant) {
        match change {
            VisibilityChange::Unchanged => {}
            VisibilityChange::Entered { first } => {
                if first {
                    self.mount();
                }
                self.held_after_release = false;
                self.dispatch(PlaybackEvent::Shown, now);
            }
            VisibilityChange::Left => {
                let offset = self.current_offset(now);
                self.dispatch(PlaybackEvent::Hidden { offset }, now);
            }
        }
    }

    fn mount(&mut self) {
        let copies = self.config.loop_mode.copies();
        info!(
            copies,
            items = self.config.items.len(),
            "engine: first reveal, mounting track"
        );
        self.surface.mount_track(copies);
        self.mounted = true;
    }

    /// Report track geometry. The first real layout after mount fixes the
    /// scroll bound; later reports re-measure on resize.
    pub fn on_layout(&mut self, metrics: TrackMetrics, now: Instant) {
        if !self.is_live() {
            return;
        }
        if !self.mounted {
            debug!("engine: layout before mount ignored");
            return;
        }

        if !self.measurer.is_measured() {
            if let MeasureOutcome::Measured { .. } =
                self.measurer.measure(metrics)
            {
                self.dispatch(PlaybackEvent::Measured, now);
            }
            return;
        }

        let previous_bound = self.measurer.scroll_bound().unwrap_or(0.0);
        if self.measurer.remeasure(metrics).is_some() {
            let offset = self.current_offset(now);
            self.dispatch(
                PlaybackEvent::BoundChanged {
                    offset,
                    previous_bound,
                },
                now,
            );
            if let PlaybackState::Stopped { at_offset } = self.state {
                self.drag.cancel();
                self.render(at_offset);
            }
        }
    }

    /// Pointer pressed on the track. Ignored until the track is measured.
    pub fn pointer_down(&mut self, pointer_x: f32, now: Instant) {
        if !self.is_live() {
            return;
        }
        let Some(bound) = self.measurer.scroll_bound() else {
            return;
        };
        let offset = self.current_offset(now);
        self.dispatch(PlaybackEvent::PointerDown { offset }, now);
        if self.state.is_dragging() {
            self.drag.begin(pointer_x, offset, bound);
        }
    }

    pub fn pointer_move(&mut self, pointer_x: f32, now: Instant) {
        if !self.is_live() {
            return;
        }
        let Some(bound) = self.measurer.scroll_bound() else {
            return;
        };
        let Some(display) = self.drag.drag_to(pointer_x, bound) else {
            return;
        };
        self.render(display);
        self.dispatch(PlaybackEvent::PointerMoved { offset: display }, now);
    }

    /// Pointer released. Returns how the release resolved, if a drag was
    /// in progress.
    pub fn pointer_up(&mut self, now: Instant) -> Option<ReleaseOutcome> {
        if !self.is_live() {
            return None;
        }
        let bound = self.measurer.scroll_bound()?;
        let outcome = self.drag.end(bound)?;
        self.dispatch(
            PlaybackEvent::PointerUp {
                offset: outcome.resolved_offset,
            },
            now,
        );
        self.held_after_release =
            !self.config.resume_after_drag && !self.state.is_playing();

        if !self.state.is_playing() {
            if outcome.overshot() {
                self.drag.start_bounce(
                    outcome.released_offset,
                    outcome.resolved_offset,
                    now,
                );
                self.request_frame();
            } else {
                self.render(outcome.resolved_offset);
            }
        }
        Some(outcome)
    }

    /// Advance animations to `now` and push the result to the surface.
    /// Returns the rendered offset when something moved.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.is_live() {
            return None;
        }
        self.frame_pending = false;

        let offset = match self.drag.tick_bounce(now) {
            Some(value) => Some(value),
            None => self.animator.sample(now),
        };
        if let Some(x) = offset {
            self.render(x);
        }
        if self.is_animating() {
            self.request_frame();
        }
        offset
    }

    /// Cancel animations, withdraw frame requests and disconnect the
    /// observer. Safe to call repeatedly and mid-animation.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        let was_attached = self.lifecycle == Lifecycle::Attached;
        self.lifecycle = Lifecycle::TornDown;

        self.animator.cancel();
        self.drag.cancel();
        if self.frame_pending {
            self.surface.cancel_frame();
            self.frame_pending = false;
        }
        if self.observing {
            self.observer.disconnect();
            self.observing = false;
        }
        if was_attached {
            debug!(state = self.state.name(), "engine: torn down");
        }
    }

    fn current_offset(&self, now: Instant) -> f32 {
        self.animator.sample(now).unwrap_or(self.offset)
    }

    fn dispatch(&mut self, event: PlaybackEvent, now: Instant) {
        let ctx = PlaybackContext {
            autoplay: self.config.autoplay,
            resume_after_drag: self.config.resume_after_drag,
            is_intersecting: self.visibility.is_intersecting(),
            scroll_bound: self.measurer.scroll_bound(),
            held_after_release: self.held_after_release,
        };
        let (next, command) = transition(self.state, event, &ctx);
        self.state = next;
        if next.is_playing() {
            self.held_after_release = false;
        }

        match command {
            LoopCommand::Keep => {}
            LoopCommand::Start { from, to } => {
                self.drag.cancel();
                self.animator
                    .start(from, to, self.config.loop_duration_ms, now);
                self.render(from);
                self.request_frame();
            }
            LoopCommand::Stop => {
                if let Some(frozen) = self.animator.stop(now) {
                    self.render(frozen);
                }
            }
        }
    }

    fn render(&mut self, x: f32) {
        self.offset = x;
        self.surface.set_translation(x);
    }

    fn request_frame(&mut self) {
        if !self.frame_pending {
            self.frame_pending = true;
            self.surface.request_frame();
        }
    }
}

impl<O, S> Drop for CarouselEngine<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
