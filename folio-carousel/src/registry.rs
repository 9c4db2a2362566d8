//! Page-owned registry of carousel engines keyed by section.

use std::collections::HashMap;
use std::time::Instant;

use folio_model::SectionKey;
use tracing::debug;

use crate::engine::CarouselEngine;
use crate::host::{TrackSurface, ViewportObserver};

/// Offset rendered for one section during a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFrame {
    pub key: SectionKey,
    pub offset: f32,
}

#[derive(Debug)]
pub struct CarouselRegistry<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    engines: HashMap<SectionKey, CarouselEngine<O, S>>,
    // Page order, so frames come out top to bottom.
    order: Vec<SectionKey>,
}

impl<O, S> Default for CarouselRegistry<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    fn default() -> Self {
        Self {
            engines: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<O, S> CarouselRegistry<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an engine. A previous engine under the same key is torn
    /// down and returned.
    pub fn insert(
        &mut self,
        key: SectionKey,
        engine: CarouselEngine<O, S>,
    ) -> Option<CarouselEngine<O, S>> {
        let previous = self.engines.insert(key.clone(), engine);
        match previous {
            Some(mut old) => {
                debug!(key = %key, "registry: replacing engine");
                old.teardown();
                Some(old)
            }
            None => {
                self.order.push(key);
                None
            }
        }
    }

    pub fn get(&self, key: &SectionKey) -> Option<&CarouselEngine<O, S>> {
        self.engines.get(key)
    }

    pub fn get_mut(
        &mut self,
        key: &SectionKey,
    ) -> Option<&mut CarouselEngine<O, S>> {
        self.engines.get_mut(key)
    }

    /// Tear down and drop the engine for `key`.
    pub fn remove(&mut self, key: &SectionKey) -> bool {
        self.order.retain(|k| k != key);
        match self.engines.remove(key) {
            Some(mut engine) => {
                engine.teardown();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &SectionKey) -> bool {
        self.engines.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Keys in insertion (page) order.
    pub fn keys(&self) -> &[SectionKey] {
        &self.order
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&SectionKey, &CarouselEngine<O, S>)> {
        self.order
            .iter()
            .filter_map(|key| self.engines.get(key).map(|e| (key, e)))
    }

    pub fn attach_all(&mut self, now: Instant) {
        for key in &self.order {
            if let Some(engine) = self.engines.get_mut(key) {
                engine.attach(now);
            }
        }
    }

    /// Advance every animating engine to `now`.
    pub fn tick_all(&mut self, now: Instant) -> Vec<TrackFrame> {
        let mut frames = Vec::new();
        for key in &self.order {
            let Some(engine) = self.engines.get_mut(key) else {
                continue;
            };
            if let Some(offset) = engine.tick(now) {
                frames.push(TrackFrame {
                    key: key.clone(),
                    offset,
                });
            }
        }
        frames
    }

    /// Tear down every engine and empty the registry.
    pub fn teardown_all(&mut self) {
        debug!(count = self.engines.len(), "registry: tearing down all");
        for (_, mut engine) in self.engines.drain() {
            engine.teardown();
        }
        self.order.clear();
    }
}

impl<O, S> Drop for CarouselRegistry<O, S>
where
    O: ViewportObserver,
    S: TrackSurface,
{
    fn drop(&mut self) {
        self.teardown_all();
    }
}
