use folio_model::SectionKey;

/// Knobs for a simulated scroll-through.
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Viewport size in CSS pixels (a phone by default).
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Height of every section block on the virtual page.
    pub section_height: f32,
    /// Pixels scrolled per step.
    pub scroll_step_px: f32,
    /// Simulated time spent at each scroll position.
    pub dwell_ms: u64,
    /// Frame interval of the simulated clock.
    pub frame_ms: u64,
    /// Section whose track gets dragged once it is on screen.
    pub drag_section: Option<SectionKey>,
    /// Pointer travel of that drag; negative drags toward later items.
    pub drag_distance_px: f32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            viewport_width: 390.0,
            viewport_height: 844.0,
            section_height: 900.0,
            scroll_step_px: 300.0,
            dwell_ms: 2_000,
            frame_ms: 16,
            drag_section: None,
            drag_distance_px: -250.0,
        }
    }
}
