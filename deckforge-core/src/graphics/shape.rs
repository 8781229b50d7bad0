use super::Color;
use crate::geometry::Rect;
use crate::text::TextFrame;

/// Corner radius of rounded rectangles as a fraction of the shorter side.
///
/// Matches the default adjustment of presentation-format rounded rectangles;
/// it is not configurable per shape.
pub const ROUNDED_CORNER_RATIO: f64 = 0.16667;

/// Borderless solid fill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fill {
    pub color: Color,
    /// Opacity as a percentage (0-100). `None` is fully opaque.
    pub alpha: Option<f64>,
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self { color, alpha: None }
    }

    pub fn with_alpha(color: Color, alpha: f64) -> Self {
        Self {
            color,
            alpha: Some(alpha),
        }
    }

    /// Opacity in 0.0-1.0, or `None` when the fill is opaque.
    ///
    /// A non-finite alpha is skipped rather than reported: the shape is drawn
    /// opaque. Out-of-range values are clamped.
    pub fn effective_alpha(&self) -> Option<f64> {
        let alpha = self.alpha?;
        if !alpha.is_finite() {
            return None;
        }
        let fraction = alpha.clamp(0.0, 100.0) / 100.0;
        if fraction >= 1.0 {
            None
        } else {
            Some(fraction)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShapeKind {
    Rectangle(Fill),
    RoundedRectangle(Fill),
    Oval(Fill),
    TextBox(TextFrame),
}

/// One element of a page's display list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shape {
    pub frame: Rect,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn rectangle(frame: Rect, fill: Fill) -> Self {
        Self {
            frame,
            kind: ShapeKind::Rectangle(fill),
        }
    }

    pub fn rounded_rectangle(frame: Rect, fill: Fill) -> Self {
        Self {
            frame,
            kind: ShapeKind::RoundedRectangle(fill),
        }
    }

    pub fn oval(frame: Rect, fill: Fill) -> Self {
        Self {
            frame,
            kind: ShapeKind::Oval(fill),
        }
    }

    pub fn text_box(frame: Rect, text: TextFrame) -> Self {
        Self {
            frame,
            kind: ShapeKind::TextBox(text),
        }
    }

    pub fn fill(&self) -> Option<&Fill> {
        match &self.kind {
            ShapeKind::Rectangle(fill)
            | ShapeKind::RoundedRectangle(fill)
            | ShapeKind::Oval(fill) => Some(fill),
            ShapeKind::TextBox(_) => None,
        }
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox(frame) => Some(frame),
            _ => None,
        }
    }

    pub(crate) fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::TextBox(frame) => Some(frame),
            _ => None,
        }
    }

    /// All paragraph text of a text box joined with newlines.
    pub fn text(&self) -> Option<String> {
        self.text_frame().map(TextFrame::text)
    }

    pub fn corner_radius(&self) -> f64 {
        match self.kind {
            ShapeKind::RoundedRectangle(_) => {
                self.frame.width().min(self.frame.height()).max(0.0) * ROUNDED_CORNER_RATIO
            }
            _ => 0.0,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::RoundedRectangle(_) => "rounded-rectangle",
            ShapeKind::Oval(_) => "oval",
            ShapeKind::TextBox(_) => "text-box",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::text::{Alignment, TextStyle};

    #[test]
    fn test_effective_alpha() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(Fill::solid(red).effective_alpha(), None);
        assert_eq!(Fill::with_alpha(red, 40.0).effective_alpha(), Some(0.4));
        assert_eq!(Fill::with_alpha(red, 100.0).effective_alpha(), None);
        assert_eq!(Fill::with_alpha(red, 250.0).effective_alpha(), None);
        assert_eq!(Fill::with_alpha(red, -5.0).effective_alpha(), Some(0.0));
    }

    #[test]
    fn test_non_finite_alpha_is_skipped() {
        let fill = Fill::with_alpha(Color::white(), f64::NAN);
        assert_eq!(fill.effective_alpha(), None);

        let fill = Fill::with_alpha(Color::white(), f64::INFINITY);
        assert_eq!(fill.effective_alpha(), None);
    }

    #[test]
    fn test_corner_radius() {
        let frame = Rect::from_position_and_size(0.0, 0.0, 200.0, 60.0);
        let rounded = Shape::rounded_rectangle(frame, Fill::solid(Color::white()));
        assert!((rounded.corner_radius() - 60.0 * ROUNDED_CORNER_RATIO).abs() < 1e-9);

        let square = Shape::rectangle(frame, Fill::solid(Color::white()));
        assert_eq!(square.corner_radius(), 0.0);
    }

    #[test]
    fn test_text_accessors() {
        let frame = Rect::from_position_and_size(0.0, 0.0, 100.0, 20.0);
        let text = TextFrame::new("Hello", TextStyle::default(), Alignment::Left);
        let shape = Shape::text_box(frame, text);

        assert_eq!(shape.text().as_deref(), Some("Hello"));
        assert!(shape.fill().is_none());
        assert_eq!(shape.kind_name(), "text-box");

        let oval = Shape::oval(frame, Fill::solid(Color::black()));
        assert!(oval.text().is_none());
        assert!(oval.fill().is_some());
    }
}
