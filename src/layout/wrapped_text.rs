//! Monospace text layout with greedy wrapping.
//!
//! Glyph widths come from `unicode-width` (1 column for most scripts, 2 for
//! wide CJK glyphs, 0 for control characters), scaled by the font size so the
//! same text can be measured in terminal cells or in pixels.

use super::TextLayout;
use unicode_width::UnicodeWidthChar;

/// One laid-out line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Visible text, without the whitespace the line was broken at.
    pub text: String,
    /// Measured width of `text`.
    pub width: f64,
}

/// Plain text laid out into lines no wider than `max_width`.
///
/// Content, font size and line height may be changed freely; the layout is
/// only recomputed by [`TextLayout::set_max_width`], which the coordinator
/// calls from `commit_config`.
///
/// # Wrapping
/// - `\n` always starts a new line; an empty paragraph is an empty line
/// - a line breaks at its last whitespace when the next glyph would overflow
/// - words (or unspaced scripts) longer than a line break between glyphs
/// - `max_width <= 0` disables wrapping
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    content: String,
    font_size: f64,
    line_height: f64,
    max_width: f64,
    lines: Vec<Line>,
}

impl WrappedText {
    /// Default glyph advance of a single-column glyph.
    pub const DEFAULT_FONT_SIZE: f64 = 40.0;

    /// Default line height.
    pub const DEFAULT_LINE_HEIGHT: f64 = 40.0;

    /// Create an empty, unwrapped layout.
    pub fn new(font_size: f64, line_height: f64) -> Self {
        Self {
            content: String::new(),
            font_size,
            line_height,
            max_width: 0.0,
            lines: Vec::new(),
        }
    }

    /// Text to lay out.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text. Takes effect on the next layout pass.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Advance of a single-column glyph.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Change the glyph advance. Takes effect on the next layout pass.
    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    /// Change the line height. Takes effect on the next layout pass.
    pub fn set_line_height(&mut self, line_height: f64) {
        self.line_height = line_height;
    }

    /// Lines from the last layout pass.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Advance of `ch`.
    pub fn glyph_width(&self, ch: char) -> f64 {
        ch.width().unwrap_or(0) as f64 * self.font_size
    }

    /// Total advance of `text`.
    pub fn measure(&self, text: &str) -> f64 {
        text.chars().map(|ch| self.glyph_width(ch)).sum()
    }

    fn layout(&mut self) {
        let mut lines = Vec::new();
        for paragraph in self.content.split('\n') {
            let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
            self.wrap_paragraph(paragraph, &mut lines);
        }
        if self.content.is_empty() {
            lines.clear();
        }
        self.lines = lines;
    }

    fn push_line(&self, text: &str, lines: &mut Vec<Line>) {
        let text = text.trim_end();
        lines.push(Line {
            text: text.to_string(),
            width: self.measure(text),
        });
    }

    fn wrap_paragraph(&self, paragraph: &str, lines: &mut Vec<Line>) {
        let limit = if self.max_width.is_finite() && self.max_width > 0.0 {
            self.max_width
        } else {
            f64::INFINITY
        };

        let mut current = String::new();
        let mut width = 0.0;
        let mut continuation = false;

        for ch in paragraph.chars() {
            let glyph = self.glyph_width(ch);

            if width + glyph > limit && !current.is_empty() {
                if ch.is_whitespace() {
                    self.push_line(&current, lines);
                    current.clear();
                    width = 0.0;
                    continuation = true;
                    continue;
                }

                match current.rfind(char::is_whitespace) {
                    Some(idx) if !current[..idx].trim_end().is_empty() => {
                        let tail = current[idx..].trim_start().to_string();
                        self.push_line(&current[..idx], lines);
                        width = self.measure(&tail);
                        current = tail;
                    }
                    _ => {
                        self.push_line(&current, lines);
                        current.clear();
                        width = 0.0;
                    }
                }
                continuation = true;

                if width + glyph > limit && !current.is_empty() {
                    self.push_line(&current, lines);
                    current.clear();
                    width = 0.0;
                }
            }

            if continuation && current.is_empty() && ch.is_whitespace() {
                continue;
            }
            current.push(ch);
            width += glyph;
        }

        if !current.is_empty() || !continuation {
            self.push_line(&current, lines);
        }
    }
}

impl Default for WrappedText {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FONT_SIZE, Self::DEFAULT_LINE_HEIGHT)
    }
}

impl TextLayout for WrappedText {
    fn set_max_width(&mut self, max_width: f64) {
        self.max_width = max_width;
        self.layout();
    }

    fn max_width(&self) -> f64 {
        self.max_width
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_width(&self, index: usize) -> Option<f64> {
        self.lines.get(index).map(|line| line.width)
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}
