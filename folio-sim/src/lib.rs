//! Headless showcase simulator.
//!
//! Lays the configured sections out on a virtual page, scrolls a viewport
//! through it, ticks animation frames on a simulated clock and drags one
//! track, reporting what every carousel did along the way.

pub mod options;
pub mod page;
pub mod session;

pub use options::SimOptions;
pub use page::{SectionSummary, ShowcasePage};
pub use session::{DragReport, SessionReport, demo_showcase, run_session};
