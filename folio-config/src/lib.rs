//! Configuration library for folio showcases.
//!
//! Loads the showcase description (sections, their carousel items and
//! tuning) from TOML or JSON, applies guard rails, and installs the tracing
//! subscriber shared by the binaries.

pub mod constants;
pub mod loader;
pub mod logging;
pub mod models;
pub mod validation;

pub use loader::{ShowcaseLoad, error::ConfigLoadError, load_showcase};
pub use logging::init_tracing;
pub use models::{
    DragFeelPreset, DragFeelSetting, LayoutSettings, SectionConfig,
    ShowcaseConfig, ShowcaseConfigSource, VisibilitySettings,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
