use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::graphics::{Color, Fill, Shape};
use crate::page::{Page, ShapeId};
use crate::text::{Alignment, Paragraph, TextFrame, TextStyle};

/// Borderless filled rectangle. `alpha` is an opacity percentage (0-100).
pub fn draw_rectangle(
    page: &mut Page,
    pos: Point,
    size: Size,
    color: impl Into<Color>,
    alpha: Option<f64>,
) -> ShapeId {
    let fill = match alpha {
        Some(alpha) => Fill::with_alpha(color.into(), alpha),
        None => Fill::solid(color.into()),
    };
    page.add_shape(Shape::rectangle(Rect::new(pos, size), fill))
}

/// Borderless rounded rectangle with the fixed default corner radius.
pub fn draw_rounded_rectangle(
    page: &mut Page,
    pos: Point,
    size: Size,
    color: impl Into<Color>,
) -> ShapeId {
    page.add_shape(Shape::rounded_rectangle(
        Rect::new(pos, size),
        Fill::solid(color.into()),
    ))
}

/// Circle whose bounding box starts at `pos`.
pub fn draw_circle(page: &mut Page, pos: Point, diameter: f64, color: impl Into<Color>) -> ShapeId {
    page.add_shape(Shape::oval(
        Rect::new(pos, Size::square(diameter)),
        Fill::solid(color.into()),
    ))
}

/// Word-wrapped text box holding a single paragraph.
pub fn draw_text(
    page: &mut Page,
    pos: Point,
    size: Size,
    text: &str,
    style: &TextStyle,
    alignment: Alignment,
) -> ShapeId {
    page.add_shape(Shape::text_box(
        Rect::new(pos, size),
        TextFrame::new(text, style.clone(), alignment),
    ))
}

/// Adds a paragraph to an existing text box.
///
/// # Errors
///
/// Fails when `text_box` is not a shape of `page` or is not a text box.
pub fn append_paragraph(
    page: &mut Page,
    text_box: ShapeId,
    text: &str,
    style: &TextStyle,
    alignment: Alignment,
    space_before: f64,
    space_after: f64,
) -> Result<()> {
    let frame = page.text_frame_mut(text_box)?;
    frame.push_paragraph(
        Paragraph::new(text, style.clone(), alignment).with_spacing(space_before, space_after),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckError;
    use crate::graphics::{Palette, ShapeKind, ROUNDED_CORNER_RATIO};

    fn page() -> Page {
        Page::new(959.976, 540.0)
    }

    #[test]
    fn test_draw_rectangle() {
        let mut page = page();
        let id = draw_rectangle(
            &mut page,
            Point::inches(1.0, 2.0),
            Size::inches(3.0, 0.04),
            Palette::Accent,
            None,
        );

        let shape = page.shape(id).unwrap();
        assert_eq!(shape.frame.origin, Point::new(72.0, 144.0));
        assert_eq!(shape.frame.width(), 216.0);
        assert!((shape.frame.height() - 2.88).abs() < 1e-9);
        assert_eq!(shape.fill(), Some(&Fill::solid(Palette::Accent.color())));
    }

    #[test]
    fn test_draw_rectangle_with_alpha() {
        let mut page = page();
        let id = draw_rectangle(
            &mut page,
            Point::origin(),
            Size::new(10.0, 10.0),
            Palette::Dark,
            Some(40.0),
        );
        let fill = page.shape(id).and_then(Shape::fill).unwrap();
        assert_eq!(fill.alpha, Some(40.0));
        assert_eq!(fill.effective_alpha(), Some(0.4));
    }

    #[test]
    fn test_draw_rounded_rectangle_uses_default_radius() {
        let mut page = page();
        let id = draw_rounded_rectangle(
            &mut page,
            Point::inches(0.5, 1.7),
            Size::inches(3.8, 2.3),
            Palette::White,
        );
        let shape = page.shape(id).unwrap();
        assert!(matches!(shape.kind, ShapeKind::RoundedRectangle(_)));
        assert!((shape.corner_radius() - 2.3 * 72.0 * ROUNDED_CORNER_RATIO).abs() < 1e-9);
    }

    #[test]
    fn test_draw_circle_is_square_oval() {
        let mut page = page();
        let id = draw_circle(&mut page, Point::inches(-1.5, -2.0), 432.0, Palette::Dark2);
        let shape = page.shape(id).unwrap();
        assert_eq!(shape.frame.size, Size::square(432.0));
        // off-canvas anchors are kept as given
        assert_eq!(shape.frame.origin, Point::new(-108.0, -144.0));
        assert_eq!(shape.kind_name(), "oval");
    }

    #[test]
    fn test_draw_text_single_paragraph() {
        let mut page = page();
        let style = TextStyle::new(24.0, Palette::Accent).bold();
        let id = draw_text(
            &mut page,
            Point::inches(1.0, 1.2),
            Size::inches(11.0, 0.6),
            "94Cram",
            &style,
            Alignment::Left,
        );

        let frame = page.shape(id).and_then(Shape::text_frame).unwrap();
        assert!(frame.word_wrap);
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.paragraphs()[0].style, style);
        assert_eq!(frame.text(), "94Cram");
    }

    #[test]
    fn test_append_paragraph() {
        let mut page = page();
        let id = draw_text(
            &mut page,
            Point::origin(),
            Size::new(200.0, 100.0),
            "Title",
            &TextStyle::default(),
            Alignment::Left,
        );
        append_paragraph(
            &mut page,
            id,
            "Body",
            &TextStyle::new(16.0, Palette::TextDark),
            Alignment::Center,
            4.0,
            4.0,
        )
        .unwrap();

        let frame = page.shape(id).and_then(Shape::text_frame).unwrap();
        let body = &frame.paragraphs()[1];
        assert_eq!(body.text, "Body");
        assert_eq!(body.alignment, Alignment::Center);
        assert_eq!((body.space_before, body.space_after), (4.0, 4.0));
    }

    #[test]
    fn test_append_paragraph_to_non_text_shape_fails() {
        let mut page = page();
        let rect = draw_rectangle(
            &mut page,
            Point::origin(),
            Size::new(1.0, 1.0),
            Palette::Red,
            None,
        );
        let err = append_paragraph(
            &mut page,
            rect,
            "x",
            &TextStyle::default(),
            Alignment::Left,
            0.0,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, DeckError::NotATextBox(0)));
        assert_eq!(page.shapes().len(), 1);
    }
}
