mod encoding;
mod font;
pub mod layout;
mod metrics;

pub use encoding::{encode_run, literal_string, split_runs, utf16be_hex, TextRun};
pub use font::Font;
pub use layout::{layout_frame, measure_str, LaidOutLine};
pub use metrics::{measure_char, measure_text};

use crate::geometry::inches;
use crate::graphics::{Color, Palette};
use std::fmt::Write;

/// Horizontal alignment of a paragraph inside its text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Character formatting shared by every run of a paragraph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Color,
    pub bold: bool,
}

impl Default for TextStyle {
    /// 18 pt regular dark text.
    fn default() -> Self {
        Self {
            font_size: 18.0,
            color: Palette::TextDark.color(),
            bold: false,
        }
    }
}

impl TextStyle {
    pub fn new(font_size: f64, color: impl Into<Color>) -> Self {
        Self {
            font_size,
            color: color.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Paragraph {
    /// May contain `\n`, rendered as a line break inside the paragraph
    pub text: String,
    pub style: TextStyle,
    pub alignment: Alignment,
    /// Points added above the first line
    pub space_before: f64,
    /// Points added below the last line
    pub space_after: f64,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: TextStyle, alignment: Alignment) -> Self {
        Self {
            text: text.into(),
            style,
            alignment,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    pub fn with_spacing(mut self, space_before: f64, space_after: f64) -> Self {
        self.space_before = space_before;
        self.space_after = space_after;
        self
    }
}

/// Distance between the text box edges and its text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const NONE: Insets = Insets {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };
}

impl Default for Insets {
    /// 0.1 in on the sides, 0.05 in top and bottom.
    fn default() -> Self {
        Self {
            left: inches(0.1),
            right: inches(0.1),
            top: inches(0.05),
            bottom: inches(0.05),
        }
    }
}

/// Text content of a text box. Always holds at least one paragraph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
    pub insets: Insets,
}

impl TextFrame {
    pub fn new(text: impl Into<String>, style: TextStyle, alignment: Alignment) -> Self {
        Self::from_paragraph(Paragraph::new(text, style, alignment))
    }

    pub fn from_paragraph(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            word_wrap: true,
            insets: Insets::default(),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraph texts joined with `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Emits text objects (`BT` ... `ET`) in PDF user space.
#[derive(Clone, Default)]
pub struct TextContext {
    operations: String,
}

impl TextContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line as a single text object starting at baseline (`x`, `y`).
    ///
    /// Bold runs of the CID font have no bold face to switch to, so they are
    /// drawn with fill+stroke rendering in the text color. That text object is
    /// wrapped in `q`/`Q` so the stroke color, line width and render mode do
    /// not leak into later shapes.
    pub fn show_line(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) -> &mut Self {
        let runs = split_runs(text, style.bold);
        if runs.is_empty() {
            return self;
        }

        let fake_bold = style.bold && runs.iter().any(|run| run.font.is_cid());
        if fake_bold {
            self.operations.push_str("q\n");
        }

        self.operations.push_str("BT\n");
        self.operations.push_str(&style.color.fill_operator());
        self.operations.push('\n');

        if fake_bold {
            self.operations.push_str(&style.color.stroke_operator());
            self.operations.push('\n');
            let _ = writeln!(
                &mut self.operations,
                "{:.2} w",
                style.font_size * FAKE_BOLD_STROKE
            );
        }

        let _ = writeln!(&mut self.operations, "{x:.2} {y:.2} Td");

        let mut mode = 0;
        for run in &runs {
            let wanted = if style.bold && run.font.is_cid() { 2 } else { 0 };
            if wanted != mode {
                let _ = writeln!(&mut self.operations, "{wanted} Tr");
                mode = wanted;
            }
            let _ = writeln!(
                &mut self.operations,
                "/{} {:.2} Tf",
                run.font.resource_name(),
                style.font_size
            );
            let _ = writeln!(&mut self.operations, "{} Tj", encode_run(run));
        }

        self.operations.push_str("ET\n");
        if fake_bold {
            self.operations.push_str("Q\n");
        }
        self
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }
}

/// Stroke width of fake-bold text as a fraction of the font size.
const FAKE_BOLD_STROKE: f64 = 0.03;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.font_size, 18.0);
        assert_eq!(style.color, Palette::TextDark.color());
        assert!(!style.bold);
    }

    #[test]
    fn test_text_style_builders() {
        let style = TextStyle::new(24.0, Palette::White).bold();
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.color, Palette::White.color());
        assert!(style.bold);
        assert!(!style.with_bold(false).bold);
    }

    #[test]
    fn test_text_frame_paragraphs() {
        let mut frame = TextFrame::new("Title", TextStyle::default(), Alignment::Center);
        assert!(frame.word_wrap);
        assert_eq!(frame.insets, Insets::default());
        assert_eq!(frame.paragraphs().len(), 1);

        frame.push_paragraph(
            Paragraph::new("Body", TextStyle::new(13.0, Palette::TextLight), Alignment::Left)
                .with_spacing(6.0, 2.0),
        );
        assert_eq!(frame.paragraphs().len(), 2);
        assert_eq!(frame.paragraphs()[1].space_before, 6.0);
        assert_eq!(frame.text(), "Title\nBody");
    }

    #[test]
    fn test_default_insets() {
        let insets = Insets::default();
        assert!((insets.left - 7.2).abs() < 1e-9);
        assert!((insets.top - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_show_line_latin() {
        let mut ctx = TextContext::new();
        ctx.show_line(10.0, 20.0, "94Cram", &TextStyle::new(18.0, Color::black()).bold());

        let ops = ctx.operations();
        assert!(ops.starts_with("BT\n0.000 g\n"));
        assert!(ops.contains("10.00 20.00 Td\n"));
        assert!(ops.contains("/F2 18.00 Tf\n(94Cram) Tj\n"));
        assert!(!ops.contains("Tr"));
        assert!(!ops.contains(" w\n"));
        assert!(ops.ends_with("ET\n"));
    }

    #[test]
    fn test_show_line_bold_cjk_uses_fill_stroke() {
        let mut ctx = TextContext::new();
        ctx.show_line(0.0, 0.0, "AI 智慧", &TextStyle::new(20.0, Color::black()).bold());

        let ops = ctx.operations();
        assert!(ops.contains("0.000 G\n"));
        assert!(ops.contains("0.60 w\n"));
        assert!(ops.contains("/F2 20.00 Tf\n(AI ) Tj\n"));
        assert!(ops.contains("2 Tr\n/F3 20.00 Tf\n<667A6167> Tj\nET\n"));
    }

    #[test]
    fn test_fake_bold_state_is_restored_after_text_object() {
        let mut ctx = TextContext::new();
        ctx.show_line(0.0, 0.0, "智慧", &TextStyle::new(20.0, Color::black()).bold());
        ctx.show_line(0.0, -30.0, "補教", &TextStyle::new(20.0, Color::black()));

        let ops = ctx.operations();
        let (bold, regular) = ops.split_at(ops.find("Q\n").unwrap() + 2);
        assert!(bold.starts_with("q\nBT\n"));
        assert!(bold.ends_with("ET\nQ\n"));
        assert!(bold.contains("0.60 w\n"));
        // the regular line runs in the restored state
        assert!(regular.starts_with("BT\n"));
        assert!(!regular.contains(" w\n"));
        assert!(!regular.contains("Tr\n"));
    }

    #[test]
    fn test_show_line_empty_is_noop() {
        let mut ctx = TextContext::new();
        ctx.show_line(0.0, 0.0, "", &TextStyle::default());
        assert!(ctx.operations().is_empty());
    }
}
