//! Time-based linear loop animator for the autoplay drift.
//!
//! Moves from `from` to `to` over `duration`, then jumps back to `from` and
//! repeats forever. Time is always supplied by the caller so the loop can be
//! driven by frame timestamps or by tests.

use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct LoopAnimator {
    active: bool,
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for LoopAnimator {
    fn default() -> Self {
        Self {
            active: false,
            from: 0.0,
            to: 0.0,
            started_at: None,
            duration: Duration::from_millis(1),
        }
    }
}

impl LoopAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current loop endpoints, when running.
    pub fn segment(&self) -> Option<(f32, f32)> {
        self.active.then_some((self.from, self.to))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Begin (or replace) the loop. Any running loop is discarded.
    pub fn start(
        &mut self,
        from: f32,
        to: f32,
        duration_ms: u64,
        now: Instant,
    ) {
        debug!(from, to, duration_ms, "autoplay: loop started");
        self.active = true;
        self.from = from;
        self.to = to;
        self.started_at = Some(now);
        self.duration = Duration::from_millis(duration_ms.max(1));
    }

    /// Offset at `now`, or `None` when no loop is running.
    pub fn sample(&self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        let period = self.duration.as_secs_f64();
        let t = ((elapsed % period) / period) as f32;
        Some(self.from + (self.to - self.from) * t)
    }

    /// Halt at the current interpolated offset and return it. Calling this
    /// on a stopped animator is a no-op that returns `None`.
    pub fn stop(&mut self, now: Instant) -> Option<f32> {
        let frozen = self.sample(now)?;
        debug!(offset = frozen, "autoplay: loop stopped");
        self.cancel();
        Some(frozen)
    }

    /// Cancel without sampling.
    pub fn cancel(&mut self) {
        self.active = false;
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn interpolates_linearly() {
        let t0 = Instant::now();
        let mut anim = LoopAnimator::new();
        anim.start(0.0, -600.0, 120_000, t0);
        assert_eq!(anim.sample(t0), Some(0.0));
        let quarter = anim.sample(at(t0, 30_000)).unwrap();
        assert!((quarter + 150.0).abs() < 1e-3);
        let half = anim.sample(at(t0, 60_000)).unwrap();
        assert!((half + 300.0).abs() < 1e-3);
        let late = anim.sample(at(t0, 90_000)).unwrap();
        assert!((late + 450.0).abs() < 1e-3);
    }

    #[test]
    fn repeats_from_the_start_offset() {
        let t0 = Instant::now();
        let mut anim = LoopAnimator::new();
        anim.start(-250.0, -600.0, 10_000, t0);
        let wrapped = anim.sample(at(t0, 10_000)).unwrap();
        assert!((wrapped + 250.0).abs() < 1e-3);
        let second_half = anim.sample(at(t0, 15_000)).unwrap();
        assert!((second_half + 425.0).abs() < 1e-3);
    }

    #[test]
    fn motion_is_leftward_only() {
        let t0 = Instant::now();
        let mut anim = LoopAnimator::new();
        anim.start(0.0, -600.0, 1_000, t0);
        let mut prev = anim.sample(t0).unwrap();
        for ms in (10..1_000).step_by(10) {
            let next = anim.sample(at(t0, ms)).unwrap();
            assert!(next <= prev);
            prev = next;
        }
    }

    #[test]
    fn stop_freezes_in_place_and_is_idempotent() {
        let t0 = Instant::now();
        let mut anim = LoopAnimator::new();
        anim.start(0.0, -600.0, 120_000, t0);
        let frozen = anim.stop(at(t0, 60_000)).unwrap();
        assert!((frozen + 300.0).abs() < 1e-3);
        assert!(!anim.is_active());
        assert_eq!(anim.stop(at(t0, 70_000)), None);
        assert_eq!(anim.sample(at(t0, 70_000)), None);
    }

    #[test]
    fn stop_on_fresh_animator_is_harmless() {
        let mut anim = LoopAnimator::new();
        assert_eq!(anim.stop(Instant::now()), None);
        anim.cancel();
        assert!(!anim.is_active());
    }
}
