// SPDX-License-Identifier: MPL-2.0
//! Post text layout and truncation detection.
//!
//! Text is laid out off-screen at the surface's text width with `pre-wrap`
//! and `break-word` semantics: explicit newlines always break, words wrap
//! greedily, trailing whitespace hangs past the edge, and a word wider than
//! the line is split between graphemes. The natural height of that layout is
//! compared against the surface's line clamp.

use super::SurfaceConfig;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Slack allowed between natural and clamped height before flagging overflow.
pub const TRUNCATION_TOLERANCE_PX: f32 = 1.0;

/// Spaces a tab expands to before layout.
const TAB_WIDTH: usize = 4;

const ELLIPSIS: &str = "…";

/// Typography used for post text on every surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Line box height in logical pixels.
    pub line_height: f32,
    /// Horizontal padding on each side of the text block.
    pub inset: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            font_size: crate::config::DEFAULT_FONT_SIZE,
            line_height: crate::config::DEFAULT_LINE_HEIGHT,
            inset: crate::config::DEFAULT_TEXT_INSET,
        }
    }
}

impl TextMetrics {
    /// Width available to text on `surface`.
    #[must_use]
    pub fn text_width(&self, surface: &SurfaceConfig) -> f32 {
        (surface.width - 2.0 * self.inset).max(1.0)
    }
}

/// Measures text runs for layout.
pub trait TextMeasurer {
    /// Horizontal advance of `text` laid out on a single line.
    fn advance(&self, text: &str) -> f32;

    /// Height of one line box.
    fn line_height(&self) -> f32;
}

/// Estimates proportional glyph advances from Unicode display width.
///
/// Narrow characters advance by `AVERAGE_ADVANCE_EM` of the font size and
/// wide (CJK, emoji) characters by twice that.
#[derive(Debug, Clone, Copy)]
pub struct GlyphMeasurer {
    font_size: f32,
    line_height: f32,
}

impl GlyphMeasurer {
    pub const AVERAGE_ADVANCE_EM: f32 = 0.55;

    #[must_use]
    pub fn new(metrics: &TextMetrics) -> Self {
        Self {
            font_size: metrics.font_size,
            line_height: metrics.line_height,
        }
    }
}

impl TextMeasurer for GlyphMeasurer {
    fn advance(&self, text: &str) -> f32 {
        text.width() as f32 * self.font_size * Self::AVERAGE_ADVANCE_EM
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Lines produced by laying text out at a fixed width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<String>,
    pub line_height: f32,
}

impl TextLayout {
    /// Height of the fully rendered text.
    #[must_use]
    pub fn natural_height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

/// Truncation outcome for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Truncation {
    /// Text as shown inside the clamp, ellipsized when truncated.
    pub visible: String,
    pub truncated: bool,
    pub natural_height: f32,
    pub clamp_height: f32,
}

/// Lays `text` out at `max_width`.
pub fn layout(text: &str, max_width: f32, measurer: &dyn TextMeasurer) -> TextLayout {
    let expanded = text.replace('\t', &" ".repeat(TAB_WIDTH));
    let mut lines = Vec::new();

    for paragraph in expanded.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, max_width, measurer, &mut lines);
    }

    TextLayout {
        lines,
        line_height: measurer.line_height(),
    }
}

fn wrap_paragraph(
    paragraph: &str,
    max_width: f32,
    measurer: &dyn TextMeasurer,
    lines: &mut Vec<String>,
) {
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for token in paragraph.split_word_bounds() {
        let width = measurer.advance(token);

        // Whitespace hangs past the edge instead of forcing a break.
        if token.chars().all(char::is_whitespace) {
            current.push_str(token);
            current_width += width;
            continue;
        }

        if current_width + width <= max_width {
            current.push_str(token);
            current_width += width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if width <= max_width {
            current.push_str(token);
            current_width = width;
            continue;
        }

        for grapheme in token.graphemes(true) {
            let grapheme_width = measurer.advance(grapheme);
            if current_width + grapheme_width > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push_str(grapheme);
            current_width += grapheme_width;
        }
    }

    lines.push(current);
}

/// Decides whether `text` overflows `surface`'s line clamp.
///
/// Blank text is never reported as truncated.
pub fn resolve_truncation(
    text: &str,
    surface: &SurfaceConfig,
    metrics: &TextMetrics,
    measurer: &dyn TextMeasurer,
) -> Truncation {
    let max_width = metrics.text_width(surface);
    let layout = layout(text, max_width, measurer);
    let natural_height = layout.natural_height();
    let clamp_height = measurer.line_height() * surface.text_lines as f32;

    let truncated = !text.trim().is_empty()
        && natural_height > clamp_height + TRUNCATION_TOLERANCE_PX;

    let visible = clamp_lines(&layout.lines, surface.text_lines, truncated, max_width, measurer);

    Truncation {
        visible,
        truncated,
        natural_height,
        clamp_height,
    }
}

fn clamp_lines(
    lines: &[String],
    max_lines: u32,
    truncated: bool,
    max_width: f32,
    measurer: &dyn TextMeasurer,
) -> String {
    let keep = lines.len().min(max_lines as usize);
    let mut shown: Vec<String> = lines[..keep].to_vec();

    if truncated {
        if let Some(last) = shown.last_mut() {
            *last = ellipsize(last, max_width, measurer);
        }
    }

    shown.join("\n")
}

fn ellipsize(line: &str, max_width: f32, measurer: &dyn TextMeasurer) -> String {
    let ellipsis_width = measurer.advance(ELLIPSIS);
    let mut graphemes: Vec<&str> = line.trim_end().graphemes(true).collect();

    while !graphemes.is_empty()
        && measurer.advance(&graphemes.concat()) + ellipsis_width > max_width
    {
        graphemes.pop();
    }

    let mut out = graphemes.concat().trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}
