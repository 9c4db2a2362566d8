pub mod section;
pub mod showcase;

pub use section::{DragFeelPreset, DragFeelSetting, SectionConfig};
pub use showcase::{
    LayoutSettings, ShowcaseConfig, ShowcaseConfigSource, VisibilitySettings,
};
