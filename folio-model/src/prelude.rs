//! Engine focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in folio-carousel or other presentation layers.

pub use super::aspect::{AspectRatio, CardBox};
pub use super::carousel::{
    CarouselConfig, DragFeel, LoopMode, VisibilityMode,
    DEFAULT_LOOP_DURATION_MS,
};
pub use super::error::ModelError;
pub use super::item::CarouselItem;
pub use super::section::SectionKey;
