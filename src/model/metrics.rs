//! Panel and layout measurements shared between the engine and coordinator.

/// Geometry and pacing of the reveal panel.
///
/// All distances are in panel units (pixels for a GUI host, scaled terminal
/// cells for the terminal demo). `speed` is panel units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMetrics {
    /// Panel width. Each row is revealed across this full width.
    pub width: f64,
    /// Panel height; one page.
    pub height: f64,
    /// Height of a single reveal row. Must match the text line height.
    pub row_height: f64,
    /// Reveal distance per second.
    pub speed: f64,
}

impl PanelMetrics {
    /// Default row height, in panel units.
    pub const DEFAULT_ROW_HEIGHT: f64 = 40.0;

    /// Default reveal speed, in panel units per second.
    pub const DEFAULT_SPEED: f64 = 1000.0;

    /// Create panel metrics.
    pub fn new(width: f64, height: f64, row_height: f64, speed: f64) -> Self {
        Self {
            width,
            height,
            row_height,
            speed,
        }
    }
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0, Self::DEFAULT_ROW_HEIGHT, Self::DEFAULT_SPEED)
    }
}

/// Read-only snapshot of a text layout.
///
/// Produced by [`TextLayout::metrics`](crate::layout::TextLayout::metrics).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Number of laid-out lines.
    pub line_count: usize,
    /// Measured width of each line, in order.
    pub line_widths: Vec<f64>,
    /// Height of one line.
    pub line_height: f64,
    /// Wrap width the layout was computed for.
    pub max_width: f64,
}

impl LayoutMetrics {
    /// Total height of the laid-out text.
    pub fn content_height(&self) -> f64 {
        self.line_count as f64 * self.line_height
    }
}
