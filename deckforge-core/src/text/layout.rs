//! Line breaking and placement of text-box paragraphs.
//!
//! Works in slide space (top-left origin). Text is anchored to the top of the
//! frame; overflow past the bottom edge is kept, not clipped.

use super::{measure_text, split_runs, Alignment, TextFrame, TextStyle};
use crate::geometry::Rect;

/// Line height as a multiple of the font size.
pub const LINE_SPACING: f64 = 1.2;

/// Distance from the top of a line box to its baseline, per point of font size.
pub const ASCENT: f64 = 0.88;

/// A line positioned inside its frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine<'a> {
    pub text: String,
    pub style: &'a TextStyle,
    /// Left edge of the line
    pub x: f64,
    /// Baseline, measured down from the top of the page
    pub baseline: f64,
    pub width: f64,
}

/// Advance width of `text` in `style`, summing its font runs.
pub fn measure_str(text: &str, style: &TextStyle) -> f64 {
    split_runs(text, style.bold)
        .iter()
        .map(|run| measure_text(run.text, run.font, style.font_size))
        .sum()
}

/// Lays out every paragraph of `text` inside `frame`.
pub fn layout_frame<'a>(text: &'a TextFrame, frame: &Rect) -> Vec<LaidOutLine<'a>> {
    let insets = text.insets;
    let left = frame.x() + insets.left;
    let available = (frame.width() - insets.left - insets.right).max(0.0);
    let mut cursor = frame.y() + insets.top;
    let mut lines = Vec::new();

    for paragraph in text.paragraphs() {
        let style = &paragraph.style;
        let line_height = style.font_size * LINE_SPACING;
        cursor += paragraph.space_before;

        for hard_line in paragraph.text.split('\n') {
            let wrapped = if text.word_wrap {
                wrap_line(hard_line, style, available)
            } else {
                vec![hard_line.to_string()]
            };

            for line in wrapped {
                let width = measure_str(&line, style);
                let x = match paragraph.alignment {
                    Alignment::Left => left,
                    Alignment::Center => left + (available - width) / 2.0,
                    Alignment::Right => left + available - width,
                };
                lines.push(LaidOutLine {
                    text: line,
                    style,
                    x,
                    baseline: cursor + style.font_size * ASCENT,
                    width,
                });
                cursor += line_height;
            }
        }

        cursor += paragraph.space_after;
    }

    lines
}

fn is_breakable_char(ch: char) -> bool {
    !ch.is_ascii()
}

/// Splits a line into words, single spaces and single non-Latin characters.
fn tokens(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, ch) in line.char_indices() {
        if ch == ' ' || is_breakable_char(ch) {
            if let Some(start) = word_start.take() {
                out.push(&line[start..i]);
            }
            out.push(&line[i..i + ch.len_utf8()]);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        out.push(&line[start..]);
    }
    out
}

/// Greedy line breaking. A token wider than the whole line is placed alone.
pub fn wrap_line(line: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0.0;

    for token in tokens(line) {
        if current.is_empty() && token == " " && !lines.is_empty() {
            continue;
        }
        let token_width = measure_str(token, style);
        if !current.is_empty() && width + token_width > max_width && token != " " {
            lines.push(current.trim_end().to_string());
            current.clear();
            width = 0.0;
        }
        current.push_str(token);
        width += token_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }
    lines
}
