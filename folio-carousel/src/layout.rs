//! Headless track layout.
//!
//! Hosts that render the track themselves report real geometry. Headless
//! hosts (the simulator, tests) compute the same scroll width from the item
//! table using the card strip layout: fixed card widths, a uniform gap
//! between cards and between copies, and padding on both ends.

use folio_model::{CarouselItem, LoopMode};

use crate::constants::layout as cfg;
use crate::measure::TrackMetrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub item_gap: f32,
    pub padding_side: f32,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            item_gap: cfg::ITEM_GAP_PX,
            padding_side: cfg::TRACK_PADDING_SIDE_PX,
        }
    }
}

impl TrackLayout {
    pub fn new(item_gap: f32, padding_side: f32) -> Self {
        Self {
            item_gap: item_gap.max(0.0),
            padding_side: padding_side.max(0.0),
        }
    }

    /// Width of one copy of the item sequence.
    pub fn set_width(&self, items: &[CarouselItem]) -> f32 {
        if items.is_empty() {
            return 0.0;
        }
        let cards: f32 = items.iter().map(|item| item.card_box().width).sum();
        cards + (items.len() - 1) as f32 * self.item_gap
    }

    /// Total scroll width of the track, padding included.
    pub fn content_width(&self, items: &[CarouselItem], mode: LoopMode) -> f32 {
        if items.is_empty() {
            return 0.0;
        }
        let copies = mode.copies();
        let sets = copies as f32 * self.set_width(items);
        let gaps = (copies - 1) as f32 * self.item_gap;
        sets + gaps + 2.0 * self.padding_side
    }

    /// Metrics a browser would report for this track in `container_width`.
    pub fn metrics(
        &self,
        items: &[CarouselItem],
        mode: LoopMode,
        container_width: f32,
    ) -> TrackMetrics {
        TrackMetrics::new(self.content_width(items, mode), container_width)
    }
}
