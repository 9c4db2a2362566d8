//! Virtual showcase page: sections stacked vertically under a viewport.

use std::time::{Duration, Instant};

use folio_carousel::{
    CarouselMessage, HeadlessEngine, HeadlessObserver, HeadlessRegistry,
    HeadlessSurface, IntersectionEntry, ObserverOptions, Rect, ReleaseOutcome,
    RevealAnimation, RevealPreset, RevealSpec, TrackFrame, TrackLayout,
    UpdateOutcome, update,
};
use folio_config::ShowcaseConfig;
use folio_model::{CarouselConfig, SectionKey};
use serde::Serialize;
use tracing::debug;

use crate::options::SimOptions;

/// Pointer moves sent per simulated drag.
const DRAG_STEPS: u32 = 8;

#[derive(Debug)]
struct PageSection {
    key: SectionKey,
    title: String,
    rect: Rect,
    carousel: CarouselConfig,
    heading: RevealAnimation,
    divider: RevealAnimation,
    layout_reported: bool,
}

/// End-of-session view of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub key: String,
    pub title: String,
    pub state: String,
    pub offset: f32,
    pub scroll_bound: Option<f32>,
    pub loop_segment: Option<(f32, f32)>,
    pub mounted: bool,
    pub visible: bool,
    pub heading_revealed: bool,
}

#[derive(Debug)]
pub struct ShowcasePage {
    registry: HeadlessRegistry,
    sections: Vec<PageSection>,
    layout: TrackLayout,
    observer_options: ObserverOptions,
    viewport: Rect,
}

impl ShowcasePage {
    pub fn new(config: &ShowcaseConfig, options: &SimOptions) -> Self {
        let observer_options = ObserverOptions {
            threshold: config.visibility.threshold,
            root_margin_px: config.visibility.root_margin_px,
        };
        let layout = TrackLayout::new(
            config.layout.item_gap_px,
            config.layout.track_padding_px,
        );

        let mut registry = HeadlessRegistry::new();
        let mut sections = Vec::with_capacity(config.sections.len());
        for (index, section) in config.sections.iter().enumerate() {
            let carousel = section.carousel_config();
            let engine = HeadlessEngine::new(
                carousel.clone(),
                HeadlessObserver::new(),
                HeadlessSurface::new(),
                observer_options,
            );
            registry.insert(section.key.clone(), engine);

            let rect = Rect::new(
                0.0,
                index as f32 * options.section_height,
                options.viewport_width,
                options.section_height,
            );
            sections.push(PageSection {
                key: section.key.clone(),
                title: section.title.clone(),
                rect,
                carousel,
                heading: RevealAnimation::new(
                    RevealSpec::new(RevealPreset::FadeUp),
                    observer_options,
                ),
                divider: RevealAnimation::new(
                    RevealSpec::new(RevealPreset::DividerGrow).staggered(1),
                    observer_options,
                ),
                layout_reported: false,
            });
        }

        Self {
            registry,
            sections,
            layout,
            observer_options,
            viewport: Rect::new(
                0.0,
                0.0,
                options.viewport_width,
                options.viewport_height,
            ),
        }
    }

    pub fn registry(&self) -> &HeadlessRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn page_height(&self) -> f32 {
        self.sections
            .last()
            .map(|s| s.rect.y + s.rect.height)
            .unwrap_or(0.0)
    }

    pub fn engine(&self, key: &SectionKey) -> Option<&HeadlessEngine> {
        self.registry.get(key)
    }

    /// Attach every engine and deliver the initial intersections.
    pub fn attach(&mut self, now: Instant) {
        update(&mut self.registry, CarouselMessage::AttachAll, now);
        self.scroll_to(self.viewport.y, now);
    }

    /// Move the viewport to `y` and report intersections and layouts.
    pub fn scroll_to(&mut self, y: f32, now: Instant) {
        self.viewport.y = y.max(0.0);
        debug!(y = self.viewport.y, "page: scrolled");

        for section in &mut self.sections {
            let entry = IntersectionEntry::from_geometry(
                &section.rect,
                &self.viewport,
                &self.observer_options,
            );
            section.heading.observe(entry, now);
            section.divider.observe(entry, now);

            let observing = self
                .registry
                .get(&section.key)
                .is_some_and(|engine| engine.is_observing());
            if observing {
                update(
                    &mut self.registry,
                    CarouselMessage::Intersection(section.key.clone(), entry),
                    now,
                );
            }
        }
        self.report_layouts(now);
    }

    /// Change the viewport width; mounted tracks are re-measured.
    pub fn resize(&mut self, width: f32, now: Instant) {
        self.viewport.width = width.max(0.0);
        for section in &mut self.sections {
            section.rect.width = self.viewport.width;
            section.layout_reported = false;
        }
        self.report_layouts(now);
    }

    fn report_layouts(&mut self, now: Instant) {
        for section in &mut self.sections {
            if section.layout_reported {
                continue;
            }
            let mounted = self
                .registry
                .get(&section.key)
                .is_some_and(|engine| engine.is_mounted());
            if !mounted {
                continue;
            }
            let metrics = self.layout.metrics(
                &section.carousel.items,
                section.carousel.loop_mode,
                self.viewport.width,
            );
            update(
                &mut self.registry,
                CarouselMessage::Layout(section.key.clone(), metrics),
                now,
            );
            section.layout_reported = true;
        }
    }

    /// Tick one animation frame.
    pub fn frame(&mut self, now: Instant) -> Vec<TrackFrame> {
        match update(&mut self.registry, CarouselMessage::Frame, now) {
            UpdateOutcome::Frame(frames) => frames,
            _ => Vec::new(),
        }
    }

    /// Drag `key`'s track by `distance` pixels, one pointer move per frame,
    /// starting at `now`. Returns the release and the time it happened.
    pub fn drag(
        &mut self,
        key: &SectionKey,
        distance: f32,
        frame: Duration,
        now: Instant,
    ) -> Option<(ReleaseOutcome, Instant)> {
        let start_x = self.viewport.width / 2.0;
        let mut clock = now;
        update(
            &mut self.registry,
            CarouselMessage::PointerDown(key.clone(), start_x),
            clock,
        );
        for step in 1..=DRAG_STEPS {
            clock += frame;
            let x = start_x + distance * step as f32 / DRAG_STEPS as f32;
            update(
                &mut self.registry,
                CarouselMessage::PointerMove(key.clone(), x),
                clock,
            );
        }
        clock += frame;
        match update(
            &mut self.registry,
            CarouselMessage::PointerUp(key.clone()),
            clock,
        ) {
            UpdateOutcome::Released(_, outcome) => Some((outcome, clock)),
            _ => None,
        }
    }

    pub fn summaries(&self, now: Instant) -> Vec<SectionSummary> {
        self.sections
            .iter()
            .filter_map(|section| {
                let engine = self.registry.get(&section.key)?;
                Some(SectionSummary {
                    key: section.key.to_string(),
                    title: section.title.clone(),
                    state: engine.state().name().to_string(),
                    offset: engine.offset(),
                    scroll_bound: engine.scroll_bound(),
                    loop_segment: engine.loop_segment(),
                    mounted: engine.is_mounted(),
                    visible: engine.is_intersecting(),
                    heading_revealed: section.heading.is_complete(now),
                })
            })
            .collect()
    }

    /// Unmount every carousel.
    pub fn teardown(&mut self, now: Instant) {
        update(&mut self.registry, CarouselMessage::UnmountAll, now);
    }
}
