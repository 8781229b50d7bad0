mod color;
mod palette;
mod shape;

pub use color::Color;
pub use palette::Palette;
pub use shape::{Fill, Shape, ShapeKind, ROUNDED_CORNER_RATIO};

use std::fmt::Write;

/// Bezier control-point factor for quarter ellipses.
const KAPPA: f64 = 0.552284749831;

/// Builds the vector part of a page content stream.
///
/// Coordinates here are PDF user space (origin bottom-left).
#[derive(Clone)]
pub struct GraphicsContext {
    operations: String,
    current_color: Color,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            current_color: Color::black(),
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = writeln!(&mut self.operations, "{x:.2} {y:.2} m");
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = writeln!(&mut self.operations, "{x:.2} {y:.2} l");
        self
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        let _ = writeln!(
            &mut self.operations,
            "{x1:.2} {y1:.2} {x2:.2} {y2:.2} {x3:.2} {y3:.2} c"
        );
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let _ = writeln!(
            &mut self.operations,
            "{x:.2} {y:.2} {width:.2} {height:.2} re"
        );
        self
    }

    /// Ellipse inscribed in the box with lower-left corner (`x`, `y`).
    pub fn ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let rx = width / 2.0;
        let ry = height / 2.0;
        let cx = x + rx;
        let cy = y + ry;
        let kx = KAPPA * rx;
        let ky = KAPPA * ry;

        self.move_to(cx + rx, cy);
        self.curve_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.curve_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.curve_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.curve_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.close_path()
    }

    /// Rectangle with quarter-ellipse corners of radius `r`.
    pub fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, r: f64) -> &mut Self {
        let r = r.min(width / 2.0).min(height / 2.0).max(0.0);
        if r == 0.0 {
            return self.rect(x, y, width, height);
        }
        let k = KAPPA * r;
        let right = x + width;
        let top = y + height;

        self.move_to(x + r, y);
        self.line_to(right - r, y);
        self.curve_to(right - r + k, y, right, y + r - k, right, y + r);
        self.line_to(right, top - r);
        self.curve_to(right, top - r + k, right - r + k, top, right - r, top);
        self.line_to(x + r, top);
        self.curve_to(x + r - k, top, x, top - r + k, x, top - r);
        self.line_to(x, y + r);
        self.curve_to(x, y + r - k, x + r - k, y, x + r, y);
        self.close_path()
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.operations.push_str("h\n");
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        self.apply_fill_color();
        self.operations.push_str("f\n");
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.current_color = color;
        self
    }

    /// Selects a named `ExtGState` resource (`/GSa40 gs`).
    pub fn set_graphics_state(&mut self, name: &str) -> &mut Self {
        let _ = writeln!(&mut self.operations, "/{name} gs");
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.operations.push_str("q\n");
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.operations.push_str("Q\n");
        self
    }

    /// Appends raw operators produced by another context (text objects).
    pub(crate) fn append_raw(&mut self, operations: &str) -> &mut Self {
        self.operations.push_str(operations);
        self
    }

    fn apply_fill_color(&mut self) {
        let op = self.current_color.fill_operator();
        self.operations.push_str(&op);
        self.operations.push('\n');
    }

    /// Get the current fill color
    pub fn fill_color(&self) -> Color {
        self.current_color
    }

    /// Get the operations string
    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.operations.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphics_context_new() {
        let ctx = GraphicsContext::new();
        assert_eq!(ctx.fill_color(), Color::black());
        assert!(ctx.operations().is_empty());
    }

    #[test]
    fn test_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.rect(10.0, 20.0, 100.0, 50.0);
        assert!(ctx.operations().contains("10.00 20.00 100.00 50.00 re\n"));
    }

    #[test]
    fn test_ellipse_extremes() {
        let mut ctx = GraphicsContext::new();
        ctx.ellipse(0.0, 0.0, 100.0, 40.0);

        let ops = ctx.operations();
        // starts at the right-most point and passes through the top one
        assert!(ops.starts_with("100.00 20.00 m\n"));
        assert!(ops.contains("50.00 40.00 c\n"));
        assert!(ops.contains("0.00 20.00 c\n"));
        assert!(ops.contains("50.00 0.00 c\n"));
    }

    #[test]
    fn test_rounded_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.rounded_rect(0.0, 0.0, 100.0, 50.0, 10.0);

        let ops = ctx.operations();
        assert!(ops.starts_with("10.00 0.00 m\n"));
        assert!(ops.contains("90.00 0.00 l\n"));
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(!ops.contains(" re\n"));
    }

    #[test]
    fn test_rounded_rect_zero_radius_falls_back_to_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.rounded_rect(0.0, 0.0, 100.0, 50.0, 0.0);
        assert_eq!(ctx.operations(), "0.00 0.00 100.00 50.00 re\n");
    }

    #[test]
    fn test_rounded_rect_radius_is_capped() {
        let mut ctx = GraphicsContext::new();
        ctx.rounded_rect(0.0, 0.0, 40.0, 10.0, 30.0);
        // radius capped at half the height
        assert!(ctx.operations().starts_with("5.00 0.00 m\n"));
    }

    #[test]
    fn test_fill() {
        let mut ctx = GraphicsContext::new();
        ctx.set_fill_color(Color::rgb(0.0, 0.0, 1.0));
        ctx.rect(0.0, 0.0, 10.0, 10.0);
        ctx.fill();

        let ops = ctx.operations();
        assert!(ops.contains("0.000 0.000 1.000 rg\n"));
        assert!(ops.ends_with("f\n"));
    }

    #[test]
    fn test_graphics_state_and_save_restore() {
        let mut ctx = GraphicsContext::new();
        ctx.save_state()
            .set_graphics_state("GSa40")
            .rect(0.0, 0.0, 1.0, 1.0)
            .fill()
            .restore_state();

        let ops = ctx.operations();
        assert!(ops.starts_with("q\n/GSa40 gs\n"));
        assert!(ops.ends_with("Q\n"));
    }

    #[test]
    fn test_append_raw_and_into_bytes() {
        let mut ctx = GraphicsContext::new();
        ctx.append_raw("BT\nET\n");
        assert_eq!(ctx.into_bytes(), b"BT\nET\n".to_vec());
    }
}
