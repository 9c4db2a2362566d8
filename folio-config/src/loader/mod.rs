//! Showcase loading entry point.

pub mod error;

use tracing::{info, warn};

use crate::models::{ShowcaseConfig, ShowcaseConfigSource};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

/// A validated showcase together with where it came from and any soft
/// findings.
#[derive(Debug, Clone)]
pub struct ShowcaseLoad {
    pub config: ShowcaseConfig,
    pub source: ShowcaseConfigSource,
    pub warnings: ConfigWarnings,
}

/// Resolve the showcase from the environment and validate it. Warnings are
/// logged and returned; guard-rail violations are errors.
pub fn load_showcase() -> Result<ShowcaseLoad, ConfigLoadError> {
    let (config, source) = ShowcaseConfig::load_from_env()?;
    validated(config, source)
}

/// Validate an already-parsed showcase.
pub fn validated(
    config: ShowcaseConfig,
    source: ShowcaseConfigSource,
) -> Result<ShowcaseLoad, ConfigLoadError> {
    let warnings = apply_guard_rails(&config)?;
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "config: {}", warning.message),
            None => warn!("config: {}", warning.message),
        }
    }
    info!(
        source = %source,
        sections = config.sections.len(),
        "config: showcase loaded"
    );
    Ok(ShowcaseLoad {
        config,
        source,
        warnings,
    })
}
