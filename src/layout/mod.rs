//! Text layout, scrolling and the coordinator that maps reveal progress onto
//! them.
//!
//! The reveal engine only knows about rows of a fixed height spanning the full
//! panel width. Real text lines are shorter, and content taller than the panel
//! is split into pages. This module bridges the two through two collaborator
//! traits:
//!
//! - [`TextLayout`]: measured line count, per-line width, line height
//! - [`ScrollContainer`]: vertical scroll offset within the laid-out content

pub mod coordinator;
pub mod scroll_view;
pub mod wrapped_text;

pub use coordinator::{LineCompletion, Typewriter};
pub use scroll_view::{PageState, ScrollView};
pub use wrapped_text::WrappedText;

use crate::model::LayoutMetrics;

/// Read-only query interface of a text renderer's layout.
///
/// Implementations lay out their content when [`set_max_width`] changes the
/// wrap width, and answer queries from that layout.
///
/// [`set_max_width`]: TextLayout::set_max_width
pub trait TextLayout {
    /// Set the wrap width and re-run layout.
    fn set_max_width(&mut self, max_width: f64);

    /// Current wrap width.
    fn max_width(&self) -> f64;

    /// Number of laid-out lines.
    fn line_count(&self) -> usize;

    /// Measured width of line `index`, or `None` past the last line.
    fn line_width(&self, index: usize) -> Option<f64>;

    /// Height of one line.
    fn line_height(&self) -> f64;

    /// Snapshot of all measurements.
    fn metrics(&self) -> LayoutMetrics {
        let line_count = self.line_count();
        LayoutMetrics {
            line_count,
            line_widths: (0..line_count)
                .map(|i| self.line_width(i).unwrap_or(0.0))
                .collect(),
            line_height: self.line_height(),
            max_width: self.max_width(),
        }
    }
}

/// Vertical scrolling over laid-out content.
pub trait ScrollContainer {
    /// Height of the visible window.
    fn viewport_height(&self) -> f64;

    /// Resize the visible window. The offset is re-clamped.
    fn set_viewport_height(&mut self, height: f64);

    /// Total scrollable height. The offset is re-clamped.
    fn set_content_height(&mut self, height: f64);

    /// Total scrollable height.
    fn content_height(&self) -> f64;

    /// Distance from the top of the content to the top of the window.
    fn scroll_offset(&self) -> f64;

    /// Largest valid scroll offset.
    fn max_scroll_offset(&self) -> f64;

    /// Scroll to `offset`, clamped to `[0, max_scroll_offset]`.
    fn scroll_to_offset(&mut self, offset: f64);

    /// Scroll back to the first page.
    fn scroll_to_top(&mut self) {
        self.scroll_to_offset(0.0);
    }
}
