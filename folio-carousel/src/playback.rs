//! Playback state machine.
//!
//! Pure transition function over [`PlaybackState`]. The engine feeds it
//! events and applies the returned [`LoopCommand`] to the animator, which
//! keeps the mount → observe → measure → animate sequencing testable
//! without a host.

use tracing::debug;

use crate::constants::drag as drag_cfg;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlaybackState {
    /// Not measured yet; nothing to animate.
    #[default]
    Idle,
    /// Looping from `start_offset` to `loop_target`.
    Playing { start_offset: f32, loop_target: f32 },
    /// Pointer is down; the user owns the offset.
    Dragging { current_offset: f32 },
    /// Frozen at `at_offset`.
    Stopped { at_offset: f32 },
}

impl PlaybackState {
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Playing { .. } => "playing",
            PlaybackState::Dragging { .. } => "dragging",
            PlaybackState::Stopped { .. } => "stopped",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, PlaybackState::Dragging { .. })
    }
}

/// Inputs to a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// The scroll bound became known.
    Measured,
    /// The section crossed into view.
    Shown,
    /// The section left view while the track was shown at `offset`.
    Hidden { offset: f32 },
    PointerDown { offset: f32 },
    PointerMoved { offset: f32 },
    /// Pointer released; `offset` is the spring-resolved resting offset.
    PointerUp { offset: f32 },
    /// The bound changed from `previous_bound` after a resize while the
    /// track was at `offset`.
    BoundChanged { offset: f32, previous_bound: f32 },
}

/// Facts the transition depends on besides the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackContext {
    pub autoplay: bool,
    pub resume_after_drag: bool,
    pub is_intersecting: bool,
    pub scroll_bound: Option<f32>,
    /// The last release parked the track because `resume_after_drag` is
    /// off. Cleared when the section is shown again or starts playing.
    pub held_after_release: bool,
}

impl PlaybackContext {
    fn playable_bound(&self) -> Option<f32> {
        self.scroll_bound.filter(|bound| *bound > 0.0)
    }
}

/// What the animator should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopCommand {
    Keep,
    Start { from: f32, to: f32 },
    Stop,
}

/// Loop start for a resume at `offset`. A track resting on the far bound
/// would produce a zero-length loop, so it wraps to the beginning.
fn resume_origin(offset: f32, bound: f32) -> f32 {
    let offset = offset.clamp(-bound, 0.0);
    if offset <= -bound + drag_cfg::BOUND_EPSILON_PX {
        0.0
    } else {
        offset
    }
}

fn play(from: f32, bound: f32) -> (PlaybackState, LoopCommand) {
    let to = -bound;
    (
        PlaybackState::Playing {
            start_offset: from,
            loop_target: to,
        },
        LoopCommand::Start { from, to },
    )
}

/// Compute the next state for `event`.
pub fn transition(
    state: PlaybackState,
    event: PlaybackEvent,
    ctx: &PlaybackContext,
) -> (PlaybackState, LoopCommand) {
    use PlaybackEvent as E;
    use PlaybackState as S;

    let next = match (state, event) {
        (S::Idle, E::Measured) => match ctx.playable_bound() {
            Some(bound) if ctx.autoplay && ctx.is_intersecting => {
                play(0.0, bound)
            }
            _ => (S::Stopped { at_offset: 0.0 }, LoopCommand::Keep),
        },
        // Nothing is mounted or measured yet.
        (S::Idle, _) => (S::Idle, LoopCommand::Keep),

        (S::Playing { .. }, E::Hidden { offset }) => {
            (S::Stopped { at_offset: offset }, LoopCommand::Stop)
        }
        (S::Playing { .. } | S::Stopped { .. }, E::PointerDown { offset }) => {
            (S::Dragging { current_offset: offset }, LoopCommand::Stop)
        }
        (S::Playing { .. }, E::BoundChanged { offset, .. }) => {
            match ctx.playable_bound() {
                Some(bound) => play(resume_origin(offset, bound), bound),
                None => (S::Stopped { at_offset: 0.0 }, LoopCommand::Stop),
            }
        }

        // Visibility resume always restarts from the beginning.
        (S::Stopped { at_offset }, E::Shown) => match ctx.playable_bound() {
            Some(bound) if ctx.autoplay => play(0.0, bound),
            _ => (S::Stopped { at_offset }, LoopCommand::Keep),
        },
        (S::Stopped { at_offset }, E::BoundChanged { previous_bound, .. }) => {
            match ctx.playable_bound() {
                // Content that used to fit the container now overflows it.
                Some(bound)
                    if previous_bound <= 0.0
                        && ctx.autoplay
                        && ctx.is_intersecting
                        && !ctx.held_after_release =>
                {
                    play(0.0, bound)
                }
                _ => {
                    let bound = ctx.scroll_bound.unwrap_or(0.0).max(0.0);
                    let at_offset = at_offset.clamp(-bound, 0.0);
                    (S::Stopped { at_offset }, LoopCommand::Keep)
                }
            }
        }

        (S::Dragging { .. }, E::PointerMoved { offset }) => {
            (S::Dragging { current_offset: offset }, LoopCommand::Keep)
        }
        // Drag resume keeps the released position.
        (S::Dragging { .. }, E::PointerUp { offset }) => {
            match ctx.playable_bound() {
                Some(bound)
                    if ctx.autoplay
                        && ctx.resume_after_drag
                        && ctx.is_intersecting =>
                {
                    play(resume_origin(offset, bound), bound)
                }
                _ => (S::Stopped { at_offset: offset }, LoopCommand::Keep),
            }
        }

        (state, _) => (state, LoopCommand::Keep),
    };

    if next.0 != state {
        debug!(
            from = state.name(),
            to = next.0.name(),
            event = ?event,
            "playback: transition"
        );
    }
    next
}
