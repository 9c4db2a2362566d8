use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read showcase config from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid showcase config {origin}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid showcase config json {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse showcase config {origin}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        origin: String,
        toml: String,
        json: String,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}
