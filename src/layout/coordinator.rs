//! Layout/pagination coordinator.
//!
//! [`Typewriter`] owns the text layout, the scroll container and the reveal
//! engine. It keeps the three consistent:
//!
//! - `commit_config` re-measures the text against the panel and rounds the
//!   scrollable height up to whole pages
//! - every tick, [`LineCompletion`] compares the cursor with the width of the
//!   last text line and finishes the reveal early once that line is shown
//! - `scroll_to_next_page` moves the window down by exactly one panel height

use super::{PageState, ScrollContainer, ScrollView, TextLayout, WrappedText};
use crate::config::TypewriterSettings;
use crate::model::{ConfigError, PanelMetrics};
use crate::reveal::{Directive, ProgressHook, RevealEngine, RevealPhase, TickOutcome};
use tracing::{debug, warn};

/// Decides whether the reveal can stop before the cursor crosses the whole
/// panel width.
///
/// The engine's rows always span the full panel, but the last line of text is
/// usually shorter. Once the cursor is on that line and past its measured
/// width, everything visible has been revealed.
#[derive(Debug)]
pub struct LineCompletion<'a, T: ?Sized> {
    layout: &'a T,
    scroll_offset: f64,
    row_height: f64,
}

impl<'a, T> LineCompletion<'a, T>
where
    T: TextLayout + ?Sized,
{
    /// Check progress against `layout`, scrolled down by `scroll_offset`.
    pub fn new(layout: &'a T, scroll_offset: f64, row_height: f64) -> Self {
        Self {
            layout,
            scroll_offset,
            row_height,
        }
    }

    /// 1-based line of the whole text that the cursor baseline `y` is on.
    pub fn row(&self, y: f64) -> f64 {
        ((self.scroll_offset + y) / self.row_height).ceil()
    }

    /// Whether the cursor at `(x, y)` has revealed the final text line.
    ///
    /// Only the last line of the text counts; earlier lines are followed by
    /// more text on the next row.
    pub fn is_line_complete(&self, x: f64, y: f64) -> bool {
        if !(self.row_height > 0.0) {
            return false;
        }
        let line_count = self.layout.line_count();
        let row = self.row(y);
        if line_count == 0 || row != line_count as f64 {
            return false;
        }
        self.layout
            .line_width(line_count - 1)
            .is_some_and(|width| x >= width)
    }
}

impl<T> ProgressHook for LineCompletion<'_, T>
where
    T: TextLayout + ?Sized,
{
    fn on_progress(&mut self, x: f64, y: f64) -> Directive {
        if self.is_line_complete(x, y) {
            Directive::ForceComplete
        } else {
            Directive::Continue
        }
    }
}

/// A paginated typewriter panel.
///
/// # Contract
/// After mutating the text (through [`text_mut`](Self::text_mut)), the panel
/// size, or the engine's row height, call [`commit_config`](Self::commit_config)
/// before the next reveal. Nothing enforces this; stale metrics produce a
/// reveal that ends too early or too late.
///
/// # Examples
///
/// ```
/// use typewriter::layout::{ScrollView, Typewriter, WrappedText};
/// use typewriter::model::PanelMetrics;
///
/// let mut text = WrappedText::new(1.0, 1.0);
/// text.set_content("hello\nworld");
/// let mut panel = Typewriter::new(
///     text,
///     ScrollView::default(),
///     PanelMetrics::new(10.0, 1.0, 1.0, 100.0),
/// );
/// panel.commit_config();
/// assert!(panel.has_next_page());
/// ```
#[derive(Debug)]
pub struct Typewriter<T = WrappedText, S = ScrollView> {
    text: T,
    scroll: S,
    engine: RevealEngine,
    width: f64,
    height: f64,
}

impl Typewriter<WrappedText, ScrollView> {
    /// Build a panel of `width` x `height` from settings, ready to start.
    pub fn from_settings(settings: &TypewriterSettings, width: f64, height: f64) -> Self {
        let text = WrappedText::new(settings.font_size, settings.line_height);
        let panel = PanelMetrics::new(width, height, settings.row_height, settings.speed);
        let mut typewriter = Self::new(text, ScrollView::new(height), panel);
        typewriter.commit_config();
        typewriter
    }
}

impl<T, S> Typewriter<T, S>
where
    T: TextLayout,
    S: ScrollContainer,
{
    /// Assemble a panel. Call [`commit_config`](Self::commit_config) once the
    /// text is in place.
    pub fn new(text: T, scroll: S, panel: PanelMetrics) -> Self {
        Self {
            text,
            scroll,
            engine: RevealEngine::new(panel),
            width: panel.width,
            height: panel.height,
        }
    }

    /// The text layout.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Mutable text layout. Call `commit_config` afterwards.
    pub fn text_mut(&mut self) -> &mut T {
        &mut self.text
    }

    /// The scroll container.
    pub fn scroll(&self) -> &S {
        &self.scroll
    }

    /// The reveal engine.
    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    /// Mutable reveal engine, for pacing changes and imperative controls.
    pub fn engine_mut(&mut self) -> &mut RevealEngine {
        &mut self.engine
    }

    /// Panel `(width, height)`.
    pub fn panel_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resize the panel. Call `commit_config` afterwards.
    pub fn set_panel_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Re-measure text and pages after any configuration change.
    ///
    /// Wraps the text to the panel width, rounds the scrollable height up to a
    /// whole number of panel heights and scrolls back to the first page. A
    /// line height that differs from the reveal row height is only warned
    /// about; which one is right is the caller's call.
    pub fn commit_config(&mut self) {
        let line_height = self.text.line_height();
        let row_height = self.engine.row_height();
        if line_height != row_height {
            warn!(
                line_height,
                row_height, "text line height differs from reveal row height; rows will not line up"
            );
        }

        self.text.set_max_width(self.width);
        let line_count = self.text.line_count();
        let text_height = line_count as f64 * line_height;
        let content_height = if self.height > 0.0 {
            (text_height / self.height).ceil() * self.height
        } else {
            text_height
        };

        self.scroll.set_viewport_height(self.height);
        self.scroll.set_content_height(content_height);
        self.scroll.scroll_to_top();
        self.engine.set_panel_size(self.width, self.height);

        debug!(
            line_count,
            text_height,
            content_height,
            width = self.width,
            height = self.height,
            "layout committed"
        );
    }

    /// Start (or resume, with `reset == false`) the reveal.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the engine.
    pub fn start(&mut self, reset: bool) -> Result<(), ConfigError> {
        self.engine.start(reset)
    }

    /// React to a progress notification received outside a tick.
    ///
    /// [`update`](Self::update) applies the same check synchronously, so hosts
    /// driving the panel through `update` never need to call this.
    ///
    /// Ignored once the reveal has ended or been cleared.
    pub fn on_progress_changed(&mut self, x: f64, y: f64) {
        if matches!(
            self.engine.phase(),
            RevealPhase::Completed | RevealPhase::Idle
        ) {
            return;
        }
        let complete = LineCompletion::new(
            &self.text,
            self.scroll.scroll_offset(),
            self.engine.row_height(),
        )
        .is_line_complete(x, y);
        if complete {
            self.engine.force_complete();
        }
    }

    /// Advance the reveal by `dt` seconds with early line completion.
    pub fn update(&mut self, dt: f64) -> TickOutcome {
        let mut hook = LineCompletion::new(
            &self.text,
            self.scroll.scroll_offset(),
            self.engine.row_height(),
        );
        self.engine.tick(dt, &mut hook)
    }

    /// Whether content continues below the current page.
    pub fn has_next_page(&self) -> bool {
        self.page_state().has_next_page()
    }

    /// Scroll down by one panel height (clamped at the last page).
    ///
    /// Does not restart the reveal; follow with `start(true)`.
    pub fn scroll_to_next_page(&mut self) {
        let target = self.scroll.scroll_offset() + self.height;
        self.scroll.scroll_to_offset(target);
        debug!(offset = self.scroll.scroll_offset(), "scrolled to next page");
    }

    /// Pagination snapshot.
    pub fn page_state(&self) -> PageState {
        PageState {
            scroll_offset_y: self.scroll.scroll_offset(),
            max_scroll_offset_y: self.scroll.max_scroll_offset(),
            content_height: self.scroll.content_height(),
        }
    }

    /// Index of the first text line shown on the current page.
    pub fn first_visible_line(&self) -> usize {
        let line_height = self.text.line_height();
        if !(line_height > 0.0) {
            return 0;
        }
        (self.scroll.scroll_offset() / line_height).round() as usize
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
