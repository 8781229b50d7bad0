use crate::geometry::{Point, Size};

/// Row-major placement of equally sized cells.
///
/// The anchor of item `i` is
/// `origin + (i % columns) * cell.width, origin + (i / columns) * cell.height`.
/// Cell sizes are pitches: the blocks drawn in them are usually smaller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub origin: Point,
    pub columns: usize,
    pub cell: Size,
}

impl Grid {
    /// A zero column count is treated as a single column.
    pub fn new(origin: Point, columns: usize, cell: Size) -> Self {
        Self {
            origin,
            columns: columns.max(1),
            cell,
        }
    }

    /// A single row advancing `pitch` points to the right per item.
    pub fn row(origin: Point, pitch: f64) -> Self {
        Self::new(origin, usize::MAX, Size::new(pitch, 0.0))
    }

    /// A single column advancing `pitch` points down per item.
    pub fn column(origin: Point, pitch: f64) -> Self {
        Self::new(origin, 1, Size::new(0.0, pitch))
    }

    /// Zero columns behave as one, also for grids built as struct literals.
    pub fn anchor(&self, index: usize) -> Point {
        let columns = self.columns.max(1);
        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        self.origin.offset(col * self.cell.width, row * self.cell.height)
    }

    /// Anchors of the first `count` items.
    pub fn anchors(&self, count: usize) -> impl Iterator<Item = Point> + '_ {
        (0..count).map(move |index| self.anchor(index))
    }
}

/// Left edge of every column of a table whose first column starts at `left`.
pub fn column_offsets(left: f64, widths: &[f64]) -> Vec<f64> {
    widths
        .iter()
        .scan(left, |x, width| {
            let edge = *x;
            *x += width;
            Some(edge)
        })
        .collect()
}
