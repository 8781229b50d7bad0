//! Slide coordinates.
//!
//! All lengths are in points (1/72 inch). The origin is the top-left corner of
//! the page and y grows downward; the writer flips into PDF user space.

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Converts inches to points.
pub fn inches(value: f64) -> f64 {
    value * POINTS_PER_INCH
}

/// A point in slide space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate, measured down from the top edge
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point from inch coordinates
    pub fn inches(x: f64, y: f64) -> Self {
        Self::new(inches(x), inches(y))
    }

    /// Origin point (0, 0)
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns this point shifted by `dx`, `dy`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of a shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn inches(width: f64, height: f64) -> Self {
        Self::new(inches(width), inches(height))
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// A frame defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a frame from position and size
    pub fn from_position_and_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Lower-left y coordinate in PDF user space for a page of `page_height`.
    pub fn pdf_bottom(&self, page_height: f64) -> f64 {
        page_height - self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 72.0);
        assert_eq!(inches(7.5), 540.0);
        assert_eq!(inches(0.0), 0.0);
    }

    #[test]
    fn test_point() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);

        let origin = Point::origin();
        assert_eq!(origin, Point::default());

        let moved = p.offset(5.0, -5.0);
        assert_eq!(moved, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_point_inches() {
        let p = Point::inches(0.5, 1.0);
        assert_eq!(p, Point::new(36.0, 72.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::from_position_and_size(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_pdf_bottom_flips_axis() {
        let rect = Rect::from_position_and_size(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.pdf_bottom(540.0), 500.0);

        let rect = Rect::from_position_and_size(0.0, 500.0, 100.0, 40.0);
        assert_eq!(rect.pdf_bottom(540.0), 0.0);
    }
}
