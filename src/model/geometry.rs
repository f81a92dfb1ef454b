//! Clip region geometry for the reveal mask.
//!
//! Coordinates use a top-left origin with `y` growing downwards, matching
//! terminal cells and most 2D UI toolkits.

/// A point in panel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal distance from the panel's left edge.
    pub x: f64,
    /// Vertical distance from the panel's top edge.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The already-revealed ("ink") area of the panel.
///
/// A staircase region: every row above the current one at full panel width,
/// plus `[0, x]` of the current row. Rebuilt from scratch on every tick by
/// [`ClipRegion::from_cursor`]; it never patches a previous region.
///
/// # Shape
///
/// ```text
/// (0,0) ┌──────────────────────┐ (w,0)
///       │  completed rows      │
///       │          ┌───────────┘ (w, y-rh)
///       │ current  │ (x, y-rh)
/// (0,y) └──────────┘ (x,y)
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClipRegion {
    /// Panel width the region was built for.
    width: f64,
    /// Bottom edge of the completed-rows band.
    completed_bottom: f64,
    /// Bottom edge of the current row.
    current_bottom: f64,
    /// Revealed extent of the current row.
    current_right: f64,
    empty: bool,
}

impl ClipRegion {
    /// A region that reveals nothing.
    pub fn empty() -> Self {
        Self {
            empty: true,
            ..Self::default()
        }
    }

    /// Build the region for cursor `(x, y)`.
    ///
    /// `y` is the baseline (bottom edge) of the current row, so the current row
    /// spans `[y - row_height, y]`. Inputs are clamped to the panel so a cursor
    /// parked at `(width, height)` yields the whole panel.
    pub fn from_cursor(x: f64, y: f64, row_height: f64, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let current_bottom = y.clamp(0.0, height.max(0.0));
        let completed_bottom = (y - row_height).clamp(0.0, current_bottom);
        Self {
            width,
            completed_bottom,
            current_bottom,
            current_right: x.clamp(0.0, width),
            empty: false,
        }
    }

    /// Whether the region reveals nothing at all.
    pub fn is_empty(&self) -> bool {
        self.empty
            || self.current_bottom <= 0.0
            || (self.completed_bottom <= 0.0 && self.current_right <= 0.0)
            || self.width <= 0.0
    }

    /// The closed outline, starting at the top-left corner and running
    /// counter-clockwise in screen space. Empty regions have no outline.
    pub fn polygon(&self) -> Vec<Point> {
        if self.empty {
            return Vec::new();
        }
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, self.current_bottom),
            Point::new(self.current_right, self.current_bottom),
            Point::new(self.current_right, self.completed_bottom),
            Point::new(self.width, self.completed_bottom),
            Point::new(self.width, 0.0),
        ]
    }

    /// Whether `point` lies inside the revealed area (edges exclusive on the
    /// right and bottom).
    pub fn contains(&self, point: Point) -> bool {
        if self.empty || point.x < 0.0 || point.y < 0.0 || point.x >= self.width {
            return false;
        }
        if point.y < self.completed_bottom {
            return true;
        }
        point.y < self.current_bottom && point.x < self.current_right
    }

    /// Whether the axis-aligned rectangle `[left, right) x [top, bottom)` is
    /// entirely revealed. Renderers use this to decide per-glyph visibility.
    pub fn covers(&self, left: f64, top: f64, right: f64, bottom: f64) -> bool {
        if self.empty || left < 0.0 || top < 0.0 || right > self.width {
            return false;
        }
        if bottom <= self.completed_bottom {
            return true;
        }
        bottom <= self.current_bottom && right <= self.current_right
    }

    /// Revealed area, used by tests and diagnostics.
    pub fn area(&self) -> f64 {
        if self.empty {
            return 0.0;
        }
        self.width * self.completed_bottom
            + self.current_right * (self.current_bottom - self.completed_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_has_no_outline_and_contains_nothing() {
        let region = ClipRegion::empty();
        assert!(region.is_empty());
        assert!(region.polygon().is_empty());
        assert!(!region.contains(Point::new(1.0, 1.0)));
        assert_eq!(region.area(), 0.0);
    }

    #[test]
    fn first_tick_region_is_one_row_with_zero_width() {
        let region = ClipRegion::from_cursor(0.0, 40.0, 40.0, 300.0, 120.0);
        assert!(region.is_empty());
        assert_eq!(
            region.polygon(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 40.0),
                Point::new(0.0, 40.0),
                Point::new(0.0, 0.0),
                Point::new(300.0, 0.0),
                Point::new(300.0, 0.0),
            ]
        );
    }

    #[test]
    fn partial_second_row_reveals_first_row_fully() {
        let region = ClipRegion::from_cursor(50.0, 80.0, 40.0, 300.0, 120.0);
        assert!(region.contains(Point::new(299.0, 10.0)));
        assert!(region.contains(Point::new(49.0, 60.0)));
        assert!(!region.contains(Point::new(51.0, 60.0)));
        assert!(!region.contains(Point::new(10.0, 90.0)));
        assert_eq!(region.area(), 300.0 * 40.0 + 50.0 * 40.0);
    }

    #[test]
    fn full_cursor_reveals_entire_panel() {
        let region = ClipRegion::from_cursor(300.0, 120.0, 40.0, 300.0, 120.0);
        assert_eq!(region.area(), 300.0 * 120.0);
        assert!(region.covers(0.0, 0.0, 300.0, 120.0));
    }

    #[test]
    fn covers_requires_whole_glyph_inside_current_row() {
        let region = ClipRegion::from_cursor(5.5, 2.0, 1.0, 10.0, 3.0);
        assert!(region.covers(4.0, 1.0, 5.0, 2.0));
        assert!(!region.covers(5.0, 1.0, 6.0, 2.0));
        assert!(region.covers(9.0, 0.0, 10.0, 1.0));
        assert!(!region.covers(0.0, 2.0, 1.0, 3.0));
    }

    #[test]
    fn cursor_beyond_panel_is_clamped() {
        let region = ClipRegion::from_cursor(500.0, 400.0, 40.0, 300.0, 120.0);
        assert_eq!(region.area(), 300.0 * 120.0);
    }
}
