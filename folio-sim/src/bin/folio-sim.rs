use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_config::{
    ShowcaseConfig, ShowcaseConfigSource, constants::DEFAULT_LOG_FILTER,
    init_tracing, load_showcase, loader::validated,
};
use folio_model::SectionKey;
use folio_sim::{SessionReport, SimOptions, demo_showcase, run_session};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "folio-sim",
    about = "Scroll a headless viewport through a showcase and report carousel behaviour"
)]
struct Cli {
    /// Showcase file (TOML or JSON). Defaults to SHOWCASE_CONFIG_PATH,
    /// SHOWCASE_CONFIG_JSON, then showcase.toml / config/showcase.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 390.0)]
    viewport_width: f32,
    #[arg(long, default_value_t = 844.0)]
    viewport_height: f32,
    #[arg(long, default_value_t = 900.0)]
    section_height: f32,
    #[arg(long, default_value_t = 300.0)]
    scroll_step: f32,
    /// Simulated milliseconds spent at each scroll position
    #[arg(long, default_value_t = 2_000)]
    dwell_ms: u64,
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Section key whose track is dragged once it is on screen
    #[arg(long)]
    drag: Option<String>,
    #[arg(long, default_value_t = -250.0, allow_hyphen_values = true)]
    drag_distance: f32,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing(DEFAULT_LOG_FILTER);
    let cli = Cli::parse();

    let load = match &cli.config {
        Some(path) => {
            let config = ShowcaseConfig::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            validated(config, ShowcaseConfigSource::File(path.clone()))?
        }
        None => load_showcase().context("loading showcase configuration")?,
    };

    let config = if load.config.sections.is_empty() {
        info!(source = %load.source, "no sections configured, using demo showcase");
        demo_showcase()
    } else {
        load.config
    };

    let drag_section = match cli.drag.as_deref() {
        Some(raw) => {
            let key = SectionKey::new(raw)?;
            if config.section(&key).is_none() {
                bail!("--drag: no section named '{key}'");
            }
            Some(key)
        }
        None => None,
    };

    let options = SimOptions {
        viewport_width: cli.viewport_width,
        viewport_height: cli.viewport_height,
        section_height: cli.section_height,
        scroll_step_px: cli.scroll_step,
        dwell_ms: cli.dwell_ms,
        frame_ms: cli.frame_ms,
        drag_section,
        drag_distance_px: cli.drag_distance,
    };

    let report = run_session(&config, &options, Instant::now());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SessionReport) {
    println!(
        "{} scroll positions, {} frames, {}ms simulated",
        report.scroll_positions, report.frames, report.simulated_ms
    );
    if let Some(drag) = &report.drag {
        println!(
            "drag on {}: released at {:.1}, resolved to {:.1}{} -> {}",
            drag.key,
            drag.released_offset,
            drag.resolved_offset,
            if drag.overshot { " (bounced)" } else { "" },
            drag.state_after
        );
    }
    for section in &report.sections {
        let bound = section
            .scroll_bound
            .map(|b| format!("{b:.1}"))
            .unwrap_or_else(|| "unmeasured".into());
        println!(
            "{:<16} {:<9} offset {:>9.1}  bound {:>10}  mounted {:<5}  visible {:<5}  heading {}",
            section.key,
            section.state,
            section.offset,
            bound,
            section.mounted,
            section.visible,
            if section.heading_revealed { "revealed" } else { "pending" }
        );
    }
}
