use std::time::Instant;

use folio_model::SectionKey;
use tracing::{trace, warn};

use crate::drag::ReleaseOutcome;
use crate::host::{TrackSurface, ViewportObserver};
use crate::messages::CarouselMessage;
use crate::registry::{CarouselRegistry, TrackFrame};

/// Result of routing one message.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Handled,
    /// Frame ticked; offsets of the tracks that moved.
    Frame(Vec<TrackFrame>),
    Released(SectionKey, ReleaseOutcome),
    UnknownSection(SectionKey),
}

/// Route a carousel message to the engine it targets.
pub fn update<O, S>(
    registry: &mut CarouselRegistry<O, S>,
    message: CarouselMessage,
    now: Instant,
) -> UpdateOutcome
where
    O: ViewportObserver,
    S: TrackSurface,
{
    trace!(message = message.name(), "carousel: update");

    match message {
        CarouselMessage::AttachAll => {
            registry.attach_all(now);
            UpdateOutcome::Handled
        }
        CarouselMessage::UnmountAll => {
            registry.teardown_all();
            UpdateOutcome::Handled
        }
        CarouselMessage::Frame => UpdateOutcome::Frame(registry.tick_all(now)),
        CarouselMessage::Unmount(key) => {
            if registry.remove(&key) {
                UpdateOutcome::Handled
            } else {
                unknown(key)
            }
        }
        CarouselMessage::Attach(key) => {
            with_engine(registry, key, |engine| engine.attach(now))
        }
        CarouselMessage::Intersection(key, entry) => {
            with_engine(registry, key, |engine| {
                engine.on_intersection(entry, now)
            })
        }
        CarouselMessage::Layout(key, metrics) => {
            with_engine(registry, key, |engine| engine.on_layout(metrics, now))
        }
        CarouselMessage::PointerDown(key, x) => {
            with_engine(registry, key, |engine| engine.pointer_down(x, now))
        }
        CarouselMessage::PointerMove(key, x) => {
            with_engine(registry, key, |engine| engine.pointer_move(x, now))
        }
        CarouselMessage::PointerUp(key) => {
            let Some(engine) = registry.get_mut(&key) else {
                return unknown(key);
            };
            match engine.pointer_up(now) {
                Some(outcome) => UpdateOutcome::Released(key, outcome),
                None => UpdateOutcome::Handled,
            }
        }
    }
}

fn with_engine<O, S, F>(
    registry: &mut CarouselRegistry<O, S>,
    key: SectionKey,
    f: F,
) -> UpdateOutcome
where
    O: ViewportObserver,
    S: TrackSurface,
    F: FnOnce(&mut crate::engine::CarouselEngine<O, S>),
{
    match registry.get_mut(&key) {
        Some(engine) => {
            f(engine);
            UpdateOutcome::Handled
        }
        None => unknown(key),
    }
}

fn unknown(key: SectionKey) -> UpdateOutcome {
    warn!(key = %key, "carousel: message for unknown section");
    UpdateOutcome::UnknownSection(key)
}
