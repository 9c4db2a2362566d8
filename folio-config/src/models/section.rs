use folio_model::{
    CarouselConfig, CarouselItem, DEFAULT_LOOP_DURATION_MS, DragFeel, LoopMode,
    SectionKey, VisibilityMode,
};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_loop_duration_ms() -> u64 {
    DEFAULT_LOOP_DURATION_MS
}

/// Named drag feel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragFeelPreset {
    #[default]
    Tight,
    Soft,
}

/// Either a preset name (`drag_feel = "soft"`) or explicit numbers
/// (`drag_feel = { elastic = 0.15, bounce_stiffness = 500.0, ... }`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DragFeelSetting {
    Preset(DragFeelPreset),
    Custom(DragFeel),
}

impl Default for DragFeelSetting {
    fn default() -> Self {
        DragFeelSetting::Preset(DragFeelPreset::Tight)
    }
}

impl DragFeelSetting {
    pub fn resolve(&self) -> DragFeel {
        match self {
            DragFeelSetting::Preset(DragFeelPreset::Tight) => DragFeel::tight(),
            DragFeelSetting::Preset(DragFeelPreset::Soft) => DragFeel::soft(),
            DragFeelSetting::Custom(feel) => *feel,
        }
    }
}

/// One showcase section and its carousel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionConfig {
    /// Unique key; used for the registry and in log output.
    pub key: SectionKey,
    /// Heading shown above the carousel.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub loop_mode: LoopMode,
    /// Drift the track on its own while visible.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Restart the drift from where a drag left the track.
    #[serde(default = "default_true")]
    pub resume_after_drag: bool,
    /// Time (ms) to traverse the full scroll bound once.
    #[serde(default = "default_loop_duration_ms")]
    pub loop_duration_ms: u64,
    #[serde(default)]
    pub drag_feel: DragFeelSetting,
    #[serde(default)]
    pub visibility: VisibilityMode,
    #[serde(default)]
    pub items: Vec<CarouselItem>,
}

impl SectionConfig {
    pub fn new(key: SectionKey, items: Vec<CarouselItem>) -> Self {
        Self {
            key,
            title: String::new(),
            loop_mode: LoopMode::default(),
            autoplay: true,
            resume_after_drag: true,
            loop_duration_ms: DEFAULT_LOOP_DURATION_MS,
            drag_feel: DragFeelSetting::default(),
            visibility: VisibilityMode::default(),
            items,
        }
    }

    /// Engine configuration for this section.
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            items: self.items.clone(),
            loop_mode: self.loop_mode,
            autoplay: self.autoplay,
            resume_after_drag: self.resume_after_drag,
            loop_duration_ms: self.loop_duration_ms,
            drag: self.drag_feel.resolve(),
            visibility: self.visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_and_custom_drag_feel_parse() {
        #[derive(Deserialize)]
        struct Wrapper {
            drag_feel: DragFeelSetting,
        }

        let preset: Wrapper = toml::from_str(r#"drag_feel = "soft""#).unwrap();
        assert_eq!(preset.drag_feel.resolve(), DragFeel::soft());

        let custom: Wrapper = toml::from_str(
            "drag_feel = { elastic = 0.15, bounce_stiffness = 500.0, bounce_damping = 25.0 }",
        )
        .unwrap();
        assert_eq!(custom.drag_feel.resolve().elastic, 0.15);
    }

    #[test]
    fn minimal_section_fills_defaults() {
        let section: SectionConfig = toml::from_str(
            r#"
key = "salahmate"

[[items]]
source = "/projects/project10/ss1.png"
label = "SalahMate splash screen"
aspect = "9/16"
"#,
        )
        .unwrap();
        let config = section.carousel_config();
        assert_eq!(config.loop_mode, LoopMode::RepeatedTriple);
        assert!(config.autoplay);
        assert!(config.resume_after_drag);
        assert_eq!(config.loop_duration_ms, 120_000);
        assert_eq!(config.drag, DragFeel::tight());
        assert_eq!(config.items.len(), 1);
    }
}
