use std::time::{Duration, Instant};

use folio_config::{SectionConfig, ShowcaseConfig};
use folio_model::{CarouselItem, DragFeel, LoopMode, SectionKey};
use serde::Serialize;
use tracing::{info, warn};

use crate::options::SimOptions;
use crate::page::{SectionSummary, ShowcasePage};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragReport {
    pub key: String,
    pub released_offset: f32,
    pub resolved_offset: f32,
    pub overshot: bool,
    /// Playback state right after the release.
    pub state_after: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub scroll_positions: usize,
    pub frames: usize,
    pub simulated_ms: u128,
    pub drag: Option<DragReport>,
    pub sections: Vec<SectionSummary>,
}

/// Two-section page used when no showcase is configured.
pub fn demo_showcase() -> ShowcaseConfig {
    let mut sections = Vec::new();

    if let Ok(key) = SectionKey::new("salahmate") {
        let items = (1..=4)
            .map(|i| {
                CarouselItem::portrait(
                    format!("/projects/project10/ss{i}.png"),
                    format!("SalahMate screen {i}"),
                )
            })
            .collect();
        let mut section = SectionConfig::new(key, items);
        section.title = "SalahMate".into();
        sections.push(section);
    }

    if let Ok(key) = SectionKey::new("portfolio") {
        let items = ["landing", "services", "about"]
            .iter()
            .map(|page| {
                CarouselItem::landscape(
                    format!("/projects/project3/{page}.png"),
                    format!("Portfolio {page} page"),
                )
            })
            .collect();
        let mut section = SectionConfig::new(key, items);
        section.title = "Portfolio Website".into();
        section.loop_mode = LoopMode::SinglePass;
        section.autoplay = false;
        section.resume_after_drag = false;
        section.drag_feel = folio_config::DragFeelSetting::Custom(DragFeel::soft());
        sections.push(section);
    }

    ShowcaseConfig {
        sections,
        ..ShowcaseConfig::default()
    }
}

/// Scroll from the top of the page to the bottom, dwelling at each step
/// and ticking frames on a simulated clock that begins at `start`.
pub fn run_session(
    config: &ShowcaseConfig,
    options: &SimOptions,
    start: Instant,
) -> SessionReport {
    let frame = Duration::from_millis(options.frame_ms.max(1));
    let frames_per_dwell = (options.dwell_ms / options.frame_ms.max(1)).max(1);
    let step = options.scroll_step_px.max(1.0);

    let mut page = ShowcasePage::new(config, options);
    let mut clock = start;
    let mut frames = 0;
    let mut scroll_positions = 0;
    let mut pending_drag = options.drag_section.clone();
    let mut drag = None;

    page.attach(clock);
    let max_scroll = (page.page_height() - options.viewport_height).max(0.0);
    let mut y = 0.0_f32;

    loop {
        page.scroll_to(y, clock);
        scroll_positions += 1;

        for _ in 0..frames_per_dwell {
            clock += frame;
            page.frame(clock);
            frames += 1;
        }

        if let Some(key) = pending_drag.clone() {
            let ready = page
                .engine(&key)
                .is_some_and(|e| e.is_intersecting() && e.scroll_bound().is_some());
            if ready {
                pending_drag = None;
                if let Some((outcome, released_at)) =
                    page.drag(&key, options.drag_distance_px, frame, clock)
                {
                    clock = released_at;
                    let state_after = page
                        .engine(&key)
                        .map(|e| e.state().name().to_string())
                        .unwrap_or_default();
                    info!(
                        key = %key,
                        released = outcome.released_offset,
                        resolved = outcome.resolved_offset,
                        state = %state_after,
                        "sim: drag released"
                    );
                    drag = Some(DragReport {
                        key: key.to_string(),
                        released_offset: outcome.released_offset,
                        resolved_offset: outcome.resolved_offset,
                        overshot: outcome.overshot(),
                        state_after,
                    });
                }
            }
        }

        if y >= max_scroll {
            break;
        }
        y = (y + step).min(max_scroll);
    }

    if let Some(key) = pending_drag {
        warn!(key = %key, "sim: drag target never became draggable");
    }

    let sections = page.summaries(clock);
    page.teardown(clock);

    SessionReport {
        scroll_positions,
        frames,
        simulated_ms: clock.duration_since(start).as_millis(),
        drag,
        sections,
    }
}
