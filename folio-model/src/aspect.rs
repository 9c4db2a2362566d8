//! Aspect-ratio tags and the fixed card boxes they select.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Display box (CSS pixels) of a single carousel card.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardBox {
    pub width: f32,
    pub height: f32,
}

/// Aspect tag attached to every showcase screenshot.
///
/// Only two shapes exist on the page: phone screenshots (`9/16`) and
/// desktop screenshots (`16/9`). Each selects a fixed card width; the height
/// follows from the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum AspectRatio {
    #[default]
    Portrait,
    Landscape,
}

impl AspectRatio {
    /// Card width for portrait (phone) screenshots.
    pub const PORTRAIT_WIDTH: f32 = 220.0;
    /// Card width for landscape (desktop) screenshots.
    pub const LANDSCAPE_WIDTH: f32 = 320.0;

    pub const fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9/16",
            AspectRatio::Landscape => "16/9",
        }
    }

    /// Width over height.
    pub fn ratio(self) -> f32 {
        match self {
            AspectRatio::Portrait => 9.0 / 16.0,
            AspectRatio::Landscape => 16.0 / 9.0,
        }
    }

    pub fn card_box(self) -> CardBox {
        let width = match self {
            AspectRatio::Portrait => Self::PORTRAIT_WIDTH,
            AspectRatio::Landscape => Self::LANDSCAPE_WIDTH,
        };
        CardBox {
            width,
            height: width / self.ratio(),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "9/16" | "9:16" => Ok(AspectRatio::Portrait),
            "16/9" | "16:9" => Ok(AspectRatio::Landscape),
            _ => Err(ModelError::InvalidAspect(s.to_string())),
        }
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.as_str().to_string()
    }
}
