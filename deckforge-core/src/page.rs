use crate::error::{DeckError, Result};
use crate::graphics::{Color, GraphicsContext, Shape, ShapeKind};
use crate::text::{layout_frame, split_runs, Font, TextContext, TextFrame};
use std::collections::BTreeSet;

/// Handle to a shape on a page, valid for the lifetime of that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single slide-sized page holding an ordered display list.
///
/// Shapes are drawn in insertion order, later shapes on top. There is no
/// removal or reordering API.
///
/// # Example
///
/// ```rust
/// use deckforge::{Color, Fill, Page, Rect, Shape};
///
/// let mut page = Page::new(959.98, 540.0);
/// page.set_background(Color::hex(0x2D3A4A));
/// let id = page.add_shape(Shape::rectangle(
///     Rect::from_position_and_size(0.0, 0.0, 959.98, 4.32),
///     Fill::solid(Color::hex(0xC48B6A)),
/// ));
/// assert_eq!(id.index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    width: f64,
    height: f64,
    background: Option<Color>,
    shapes: Vec<Shape>,
}

impl Page {
    /// Creates a blank page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Solid fill behind every shape.
    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    /// Text content of a text box, for appending paragraphs.
    pub fn text_frame_mut(&mut self, id: ShapeId) -> Result<&mut TextFrame> {
        let shape = self
            .shapes
            .get_mut(id.0)
            .ok_or(DeckError::UnknownShape(id.0))?;
        shape.text_frame_mut().ok_or(DeckError::NotATextBox(id.0))
    }

    /// First non-empty text on the page, in drawing order.
    pub fn first_text(&self) -> Option<String> {
        self.shapes
            .iter()
            .filter_map(Shape::text)
            .find(|text| !text.trim().is_empty())
    }

    /// Distinct fill opacities used on this page, in whole percent.
    pub(crate) fn alpha_levels(&self) -> BTreeSet<u32> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.fill()?.effective_alpha())
            .map(alpha_percent)
            .collect()
    }

    pub(crate) fn fonts_used(&self) -> BTreeSet<Font> {
        let mut fonts = BTreeSet::new();
        for frame in self.shapes.iter().filter_map(Shape::text_frame) {
            for paragraph in frame.paragraphs() {
                let style = &paragraph.style;
                for line in paragraph.text.split('\n') {
                    fonts.extend(
                        split_runs(line, style.bold)
                            .iter()
                            .map(|run| run.font),
                    );
                }
            }
        }
        fonts
    }

    /// Renders the display list as content stream operators.
    pub(crate) fn generate_content(&self) -> Vec<u8> {
        let mut graphics = GraphicsContext::new();

        if let Some(color) = self.background {
            graphics
                .set_fill_color(color)
                .rect(0.0, 0.0, self.width, self.height)
                .fill();
        }

        for shape in &self.shapes {
            self.render_shape(&mut graphics, shape);
        }

        graphics.into_bytes()
    }

    fn render_shape(&self, graphics: &mut GraphicsContext, shape: &Shape) {
        let frame = &shape.frame;
        let x = frame.x();
        let y = frame.pdf_bottom(self.height);
        let (w, h) = (frame.width(), frame.height());

        let fill = match &shape.kind {
            ShapeKind::TextBox(text) => {
                let mut ctx = TextContext::new();
                for line in layout_frame(text, frame) {
                    ctx.show_line(line.x, self.height - line.baseline, &line.text, line.style);
                }
                graphics.append_raw(ctx.operations());
                return;
            }
            ShapeKind::Rectangle(fill)
            | ShapeKind::RoundedRectangle(fill)
            | ShapeKind::Oval(fill) => fill,
        };

        let alpha = fill.effective_alpha();
        if let Some(alpha) = alpha {
            graphics
                .save_state()
                .set_graphics_state(&alpha_state_name(alpha_percent(alpha)));
        }

        graphics.set_fill_color(fill.color);
        match shape.kind {
            ShapeKind::RoundedRectangle(_) => {
                graphics.rounded_rect(x, y, w, h, shape.corner_radius());
            }
            ShapeKind::Oval(_) => {
                graphics.ellipse(x, y, w, h);
            }
            _ => {
                graphics.rect(x, y, w, h);
            }
        }
        graphics.fill();

        if alpha.is_some() {
            graphics.restore_state();
        }
    }
}

/// Opacity quantized to whole percent.
pub(crate) fn alpha_percent(alpha: f64) -> u32 {
    (alpha * 100.0).round() as u32
}

/// `ExtGState` resource name for an opacity level, e.g. `GSa40`.
pub(crate) fn alpha_state_name(percent: u32) -> String {
    format!("GSa{percent}")
}
