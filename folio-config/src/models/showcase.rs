use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::section::SectionConfig;
use crate::constants::{self, env as env_vars};
use crate::loader::error::ConfigLoadError;

/// Source that produced the showcase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShowcaseConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ShowcaseConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "built-in defaults"),
            Self::EnvPath(path) => {
                write!(f, "{} ({})", env_vars::CONFIG_PATH, path.display())
            }
            Self::EnvInline => write!(f, "{}", env_vars::CONFIG_JSON),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Intersection observer tuning shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VisibilitySettings {
    /// Fraction of a section that must be on screen before it counts as
    /// visible. Lower values start carousels earlier.
    pub threshold: f32,
    /// Pixels added around the viewport so heavy content mounts just before
    /// it scrolls in.
    pub root_margin_px: f32,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            threshold: constants::visibility::THRESHOLD,
            root_margin_px: constants::visibility::ROOT_MARGIN_PX,
        }
    }
}

/// Card strip geometry, used by headless hosts to compute track widths.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub item_gap_px: f32,
    pub track_padding_px: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            item_gap_px: constants::layout::ITEM_GAP_PX,
            track_padding_px: constants::layout::TRACK_PADDING_PX,
        }
    }
}

/// Whole showcase page: shared tuning plus sections in page order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub visibility: VisibilitySettings,
    pub layout: LayoutSettings,
    pub sections: Vec<SectionConfig>,
}

impl ShowcaseConfig {
    /// Load the showcase using environment variables.
    /// Evaluation order:
    /// 1) `$SHOWCASE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SHOWCASE_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults.
    pub fn load_from_env()
    -> Result<(Self, ShowcaseConfigSource), ConfigLoadError> {
        if let Ok(path_str) = env::var(env_vars::CONFIG_PATH)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ShowcaseConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(env_vars::CONFIG_JSON)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw, env_vars::CONFIG_JSON)?;
            return Ok((parsed, ShowcaseConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ShowcaseConfigSource::File(path)));
        }

        Ok((Self::default(), ShowcaseConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => Self::parse_toml(&contents, &origin),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse a document of unknown format: TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        })
    }

    pub fn parse_toml(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        toml::from_str(raw).map_err(|source| ConfigLoadError::Toml {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn find_default_file() -> Option<PathBuf> {
        constants::DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }

    pub fn section(
        &self,
        key: &folio_model::SectionKey,
    ) -> Option<&SectionConfig> {
        self.sections.iter().find(|section| &section.key == key)
    }
}

#[cfg(test)]
mod tests {
    use folio_model::{AspectRatio, LoopMode, VisibilityMode};

    use super::*;
    use crate::models::DragFeelSetting;

    const SHOWCASE_TOML: &str = r#"
[visibility]
threshold = 0.25

[[sections]]
key = "salahmate"
title = "SalahMate"
loop_mode = "repeated-triple"
loop_duration_ms = 90000

[[sections.items]]
source = "/projects/project10/ss1.png"
label = "SalahMate splash screen"
aspect = "9/16"

[[sections]]
key = "portfolio"
title = "Portfolio"
loop_mode = "single-pass"
autoplay = false
drag_feel = "soft"
visibility = "always-visible"

[[sections.items]]
source = "/projects/project3/landing.png"
label = "Landing page"
aspect = "16/9"
"#;

    #[test]
    fn parses_full_toml_document() {
        let config = ShowcaseConfig::parse_toml(SHOWCASE_TOML, "test").unwrap();
        assert_eq!(config.visibility.threshold, 0.25);
        assert_eq!(config.visibility.root_margin_px, 50.0);
        assert_eq!(config.layout, LayoutSettings::default());
        assert_eq!(config.sections.len(), 2);

        let portfolio = &config.sections[1];
        assert_eq!(portfolio.loop_mode, LoopMode::SinglePass);
        assert!(!portfolio.autoplay);
        assert_eq!(portfolio.visibility, VisibilityMode::AlwaysVisible);
        assert!(matches!(portfolio.drag_feel, DragFeelSetting::Preset(_)));
        assert_eq!(portfolio.items[0].aspect, AspectRatio::Landscape);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let json = r#"{"sections":[{"key":"a","items":[]}]}"#;
        let config = ShowcaseConfig::parse_from_str(json, "inline").unwrap();
        assert_eq!(config.sections[0].key.as_str(), "a");
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = ShowcaseConfig::parse_from_str("{{ nope", "inline").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("inline"), "{message}");
        assert!(matches!(err, ConfigLoadError::Unrecognized { .. }));
    }

    #[test]
    fn bad_aspect_is_a_parse_error() {
        let raw = r#"
[[sections]]
key = "a"
[[sections.items]]
source = "/a.png"
label = "a"
aspect = "4/3"
"#;
        assert!(ShowcaseConfig::parse_toml(raw, "test").is_err());
    }

    #[test]
    fn empty_key_is_rejected() {
        let raw = r#"{"sections":[{"key":"  "}]}"#;
        assert!(ShowcaseConfig::parse_json(raw, "test").is_err());
    }
}
