//! Configuration defaults and environment variable names.

/// Environment variables consulted by [`crate::ShowcaseConfig::load_from_env`].
pub mod env {
    /// Path to a TOML or JSON showcase file.
    pub const CONFIG_PATH: &str = "SHOWCASE_CONFIG_PATH";
    /// Inline JSON showcase document.
    pub const CONFIG_JSON: &str = "SHOWCASE_CONFIG_JSON";
}

/// Files probed, in order, when no environment override is set.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "showcase.toml",
    "showcase.json",
    "config/showcase.toml",
    "config/showcase.json",
];

pub mod visibility {
    pub const THRESHOLD: f32 = 0.2;
    pub const ROOT_MARGIN_PX: f32 = 50.0;
}

pub mod layout {
    pub const ITEM_GAP_PX: f32 = 16.0;
    pub const TRACK_PADDING_PX: f32 = 24.0;
}

/// Loops shorter than this read as a carousel, not a drift.
pub const MIN_COMFORTABLE_LOOP_MS: u64 = 1_000;

/// Default `RUST_LOG` filter for the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info,folio_carousel=debug";
