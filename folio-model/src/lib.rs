//! Core data model definitions shared across folio crates.
#![allow(missing_docs)]

pub mod aspect;
pub mod carousel;
pub mod error;
pub mod item;
pub mod prelude;
pub mod section;

// Intentionally curated re-exports for downstream consumers.
pub use aspect::{AspectRatio, CardBox};
pub use carousel::{
    CarouselConfig, DragFeel, LoopMode, VisibilityMode,
    DEFAULT_LOOP_DURATION_MS,
};
pub use error::{ModelError, Result as ModelResult};
pub use item::CarouselItem;
pub use section::SectionKey;
