//! Clamped vertical scroll state.

use super::ScrollContainer;

/// Snapshot of pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageState {
    /// Current scroll offset.
    pub scroll_offset_y: f64,
    /// Largest valid scroll offset.
    pub max_scroll_offset_y: f64,
    /// Scrollable content height, a whole number of pages.
    pub content_height: f64,
}

impl PageState {
    /// Whether another page follows the current one.
    pub fn has_next_page(&self) -> bool {
        self.max_scroll_offset_y > self.scroll_offset_y
    }
}

/// A vertical-only scroll container.
///
/// # Invariant
/// `0 <= offset <= max(0, content_height - viewport_height)` after every
/// mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollView {
    viewport_height: f64,
    content_height: f64,
    offset: f64,
}

impl ScrollView {
    /// Create a scroll view with an empty content area.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            content_height: 0.0,
            offset: 0.0,
        }
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_scroll_offset());
    }
}

impl ScrollContainer for ScrollView {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
        self.clamp_offset();
    }

    fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
        self.clamp_offset();
    }

    fn content_height(&self) -> f64 {
        self.content_height
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn max_scroll_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn scroll_to_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.clamp_offset();
    }
}
