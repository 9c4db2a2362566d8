use std::collections::HashSet;

use folio_model::{LoopMode, SectionKey};
use thiserror::Error;

use crate::constants::MIN_COMFORTABLE_LOOP_MS;
use crate::models::{SectionConfig, ShowcaseConfig};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("visibility threshold {value} must be within [0, 1]")]
    ThresholdOutOfRange { value: f32 },
    #[error("visibility root margin {value}px must not be negative")]
    NegativeRootMargin { value: f32 },
    #[error("layout {field} {value}px must not be negative")]
    NegativeLayout { field: &'static str, value: f32 },
    #[error("section '{key}' has a zero loop duration")]
    ZeroLoopDuration { key: SectionKey },
    #[error("section '{key}' elastic factor {value} must be within [0, 1]")]
    ElasticOutOfRange { key: SectionKey, value: f32 },
    #[error("section '{key}' spring {field} {value} must be positive")]
    NonPositiveSpring {
        key: SectionKey,
        field: &'static str,
        value: f32,
    },
    #[error("section key '{key}' is used more than once")]
    DuplicateSectionKey { key: SectionKey },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &ShowcaseConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let threshold = config.visibility.threshold;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigGuardRailError::ThresholdOutOfRange {
            value: threshold,
        });
    }
    let margin = config.visibility.root_margin_px;
    if margin.is_nan() || margin < 0.0 {
        return Err(ConfigGuardRailError::NegativeRootMargin { value: margin });
    }
    for (field, value) in [
        ("item_gap_px", config.layout.item_gap_px),
        ("track_padding_px", config.layout.track_padding_px),
    ] {
        if value.is_nan() || value < 0.0 {
            return Err(ConfigGuardRailError::NegativeLayout { field, value });
        }
    }

    if config.sections.is_empty() {
        warnings.push_with_hint(
            "No sections configured; the showcase will render no carousels",
            "Add [[sections]] entries to showcase.toml",
        );
    }

    let mut seen = HashSet::new();
    for section in &config.sections {
        if !seen.insert(&section.key) {
            return Err(ConfigGuardRailError::DuplicateSectionKey {
                key: section.key.clone(),
            });
        }
        warnings.extend(check_section(section)?);
    }

    Ok(warnings)
}

fn check_section(
    section: &SectionConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let key = &section.key;

    if section.loop_duration_ms == 0 {
        return Err(ConfigGuardRailError::ZeroLoopDuration { key: key.clone() });
    }

    let feel = section.drag_feel.resolve();
    if !(0.0..=1.0).contains(&feel.elastic) {
        return Err(ConfigGuardRailError::ElasticOutOfRange {
            key: key.clone(),
            value: feel.elastic,
        });
    }
    for (field, value) in [
        ("stiffness", feel.bounce_stiffness),
        ("damping", feel.bounce_damping),
    ] {
        if value.is_nan() || value <= 0.0 {
            return Err(ConfigGuardRailError::NonPositiveSpring {
                key: key.clone(),
                field,
                value,
            });
        }
    }

    if section.items.is_empty() {
        warnings.push(format!(
            "Section '{key}' has no items; its carousel will stay empty"
        ));
    }

    if section.loop_mode == LoopMode::SinglePass && section.autoplay {
        warnings.push_with_hint(
            format!("Section '{key}' autoplays a single-pass track"),
            "Single-pass tracks stop at the last item; use loop_mode = \"repeated-triple\" for a seamless drift",
        );
    }

    if section.resume_after_drag && !section.autoplay {
        warnings.push(format!(
            "Section '{key}' sets resume_after_drag without autoplay; it has no effect"
        ));
    }

    if section.loop_duration_ms < MIN_COMFORTABLE_LOOP_MS {
        warnings.push_with_hint(
            format!(
                "Section '{key}' loops every {}ms",
                section.loop_duration_ms
            ),
            "The drift is meant to be barely perceptible; durations are usually minutes",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use folio_model::{CarouselItem, DragFeel};

    use super::*;
    use crate::models::DragFeelSetting;

    fn section(key: &str) -> SectionConfig {
        SectionConfig::new(
            SectionKey::new(key).unwrap(),
            vec![CarouselItem::portrait("/p/1.png", "one")],
        )
    }

    fn showcase(sections: Vec<SectionConfig>) -> ShowcaseConfig {
        ShowcaseConfig {
            sections,
            ..ShowcaseConfig::default()
        }
    }

    #[test]
    fn clean_showcase_has_no_warnings() {
        let warnings = apply_guard_rails(&showcase(vec![section("a")])).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut config = showcase(vec![section("a")]);
        config.visibility.threshold = 1.5;
        assert_eq!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ThresholdOutOfRange { value: 1.5 })
        );
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = apply_guard_rails(&showcase(vec![section("a"), section("a")]))
            .unwrap_err();
        assert!(matches!(err, ConfigGuardRailError::DuplicateSectionKey { .. }));
    }

    #[test]
    fn rejects_zero_duration_and_bad_springs() {
        let mut zero = section("a");
        zero.loop_duration_ms = 0;
        assert!(matches!(
            apply_guard_rails(&showcase(vec![zero])),
            Err(ConfigGuardRailError::ZeroLoopDuration { .. })
        ));

        let mut floppy = section("b");
        floppy.drag_feel = DragFeelSetting::Custom(DragFeel {
            elastic: 0.1,
            bounce_stiffness: 0.0,
            bounce_damping: 10.0,
        });
        assert!(matches!(
            apply_guard_rails(&showcase(vec![floppy])),
            Err(ConfigGuardRailError::NonPositiveSpring {
                field: "stiffness",
                ..
            })
        ));

        let mut loose = section("c");
        loose.drag_feel = DragFeelSetting::Custom(DragFeel {
            elastic: 1.2,
            ..DragFeel::soft()
        });
        assert!(matches!(
            apply_guard_rails(&showcase(vec![loose])),
            Err(ConfigGuardRailError::ElasticOutOfRange { .. })
        ));
    }

    #[test]
    fn soft_findings_become_warnings() {
        let mut empty = section("empty");
        empty.items.clear();

        let mut single = section("single");
        single.loop_mode = LoopMode::SinglePass;

        let mut manual = section("manual");
        manual.autoplay = false;

        let mut fast = section("fast");
        fast.loop_duration_ms = 500;

        let warnings =
            apply_guard_rails(&showcase(vec![empty, single, manual, fast]))
                .unwrap();
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert!(warnings.items[0].message.contains("empty"));
        assert!(warnings.items[1].hint.is_some());
        assert!(warnings.items[3].message.contains("500ms"));
    }

    #[test]
    fn no_sections_warns() {
        let warnings = apply_guard_rails(&ShowcaseConfig::default()).unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
