//! Ratatui widget that draws the current page through the reveal clip region.

use crate::layout::{ScrollView, TextLayout, Typewriter, WrappedText};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

/// Draws the visible page of a [`Typewriter`], hiding every glyph that is not
/// entirely inside the engine's clip region.
///
/// Panel space maps onto cells as: column `c` spans
/// `[c * font_size, (c + 1) * font_size)`, row `r` spans
/// `[r * line_height, (r + 1) * line_height)`.
#[derive(Debug)]
pub struct RevealWidget<'a> {
    typewriter: &'a Typewriter<WrappedText, ScrollView>,
}

impl<'a> RevealWidget<'a> {
    /// Create a widget for `typewriter`.
    pub fn new(typewriter: &'a Typewriter<WrappedText, ScrollView>) -> Self {
        Self { typewriter }
    }
}

impl Widget for RevealWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.typewriter.text();
        let clip = self.typewriter.engine().clip_region();
        let line_height = text.line_height();
        let first = self.typewriter.first_visible_line();

        for row in 0..area.height {
            let Some(line) = text.lines().get(first + usize::from(row)) else {
                break;
            };
            let top = f64::from(row) * line_height;
            let bottom = top + line_height;

            let mut left = 0.0;
            let mut col: u16 = 0;
            for ch in line.text.chars() {
                let columns = ch.width().unwrap_or(0) as u16;
                if columns == 0 {
                    continue;
                }
                if col + columns > area.width {
                    break;
                }
                let right = left + text.glyph_width(ch);
                if clip.covers(left, top, right, bottom) {
                    let mut utf8 = [0u8; 4];
                    buf.set_string(
                        area.x + col,
                        area.y + row,
                        ch.encode_utf8(&mut utf8),
                        Style::default(),
                    );
                }
                left = right;
                col += columns;
            }
        }
    }
}
