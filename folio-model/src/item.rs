use crate::aspect::{AspectRatio, CardBox};

/// One screenshot shown on a carousel track.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    /// Image source path, e.g. `/projects/project10/ss1.png`.
    pub source: String,
    /// Alternative text.
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aspect: AspectRatio,
}

impl CarouselItem {
    pub fn new(
        source: impl Into<String>,
        label: impl Into<String>,
        aspect: AspectRatio,
    ) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            aspect,
        }
    }

    pub fn portrait(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(source, label, AspectRatio::Portrait)
    }

    pub fn landscape(
        source: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::new(source, label, AspectRatio::Landscape)
    }

    pub fn card_box(&self) -> CardBox {
        self.aspect.card_box()
    }
}
