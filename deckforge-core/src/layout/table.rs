//! Tables drawn from plain rectangles and text boxes.
//!
//! Cell values that are exactly one of the markers `✓ ✗ △` are styled from
//! [`MARKER_STYLES`]; anything else is free text.

use super::grid::column_offsets;
use super::primitives::{draw_rectangle, draw_rounded_rectangle, draw_text};
use crate::geometry::{inches, Point, Size};
use crate::graphics::Palette;
use crate::page::Page;
use crate::text::{Alignment, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Marker {
    /// `✓`
    Check,
    /// `✗`
    Cross,
    /// `△`
    Partial,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::Check, Marker::Cross, Marker::Partial];

    /// Exact match only; surrounding whitespace makes a value free text.
    pub fn parse(value: &str) -> Option<Marker> {
        match value {
            "✓" => Some(Marker::Check),
            "✗" => Some(Marker::Cross),
            "△" => Some(Marker::Partial),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Marker::Check => "✓",
            Marker::Cross => "✗",
            Marker::Partial => "△",
        }
    }
}

/// Text treatment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub color: Palette,
    pub bold: bool,
    pub font_size: f64,
}

impl CellStyle {
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size, self.color).with_bold(self.bold)
    }
}

/// Marker glyphs and how they are drawn.
pub const MARKER_STYLES: [(Marker, CellStyle); 3] = [
    (
        Marker::Check,
        CellStyle {
            color: Palette::GreenCheck,
            bold: true,
            font_size: 14.0,
        },
    ),
    (
        Marker::Cross,
        CellStyle {
            color: Palette::RedCross,
            bold: true,
            font_size: 14.0,
        },
    ),
    (
        Marker::Partial,
        CellStyle {
            color: Palette::Gold,
            bold: true,
            font_size: 14.0,
        },
    ),
];

/// Style of any cell value that is not a marker.
pub const FREE_TEXT_STYLE: CellStyle = CellStyle {
    color: Palette::TextDark,
    bold: false,
    font_size: 11.0,
};

pub fn cell_style(value: &str) -> CellStyle {
    Marker::parse(value)
        .and_then(|marker| MARKER_STYLES.iter().find(|(m, _)| *m == marker))
        .map(|(_, style)| *style)
        .unwrap_or(FREE_TEXT_STYLE)
}

/// Alternating row fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banding {
    pub even: Palette,
    pub odd: Palette,
}

impl Banding {
    pub const COMPARISON: Banding = Banding {
        even: Palette::White,
        odd: Palette::Light2,
    };

    pub const LEDGER: Banding = Banding {
        even: Palette::White,
        odd: Palette::Light,
    };

    pub fn color_for(&self, row: usize) -> Palette {
        if row % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Feature-by-product matrix: a header row of rounded cells over banded rows.
///
/// The first column holds row labels. Widths and heights are in points.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonTable<'a> {
    /// Top-left corner of the header row
    pub origin: Point,
    pub column_widths: &'a [f64],
    pub header_height: f64,
    /// Vertical distance between the tops of consecutive body rows
    pub row_pitch: f64,
    pub row_height: f64,
    pub headers: &'a [&'a str],
    pub rows: &'a [&'a [&'a str]],
    /// Column drawn in the primary color, whose `✓` cells get the mint fill
    pub highlight_column: Option<usize>,
    pub banding: Banding,
}

impl ComparisonTable<'_> {
    const HEADER_GAP: f64 = 0.05;
    const HEADER_TEXT_INSET: f64 = 0.02;
    const LABEL_INSET: f64 = 0.2;
    const HEADER_FONT_SIZE: f64 = 13.0;
    const LABEL_FONT_SIZE: f64 = 12.0;

    /// Top edge of body row `row`.
    pub fn row_top(&self, row: usize) -> f64 {
        self.origin.y
            + self.header_height
            + inches(Self::HEADER_GAP)
            + row as f64 * self.row_pitch
    }
}

pub fn comparison_table(page: &mut Page, table: &ComparisonTable) {
    let lefts = column_offsets(table.origin.x, table.column_widths);
    let header_style = TextStyle::new(ComparisonTable::HEADER_FONT_SIZE, Palette::White).bold();

    for (col, (header, (&left, &width))) in table
        .headers
        .iter()
        .zip(lefts.iter().zip(table.column_widths))
        .enumerate()
    {
        let fill = if table.highlight_column == Some(col) {
            Palette::Primary
        } else {
            Palette::Dark
        };
        draw_rounded_rectangle(
            page,
            Point::new(left, table.origin.y),
            Size::new(width, table.header_height),
            fill,
        );
        draw_text(
            page,
            Point::new(left, table.origin.y + inches(ComparisonTable::HEADER_TEXT_INSET)),
            Size::new(width, table.header_height - inches(ComparisonTable::HEADER_GAP)),
            header,
            &header_style,
            Alignment::Center,
        );
    }

    let label_style = TextStyle::new(ComparisonTable::LABEL_FONT_SIZE, Palette::TextDark).bold();
    for (row, cells) in table.rows.iter().enumerate() {
        let top = table.row_top(row);
        let band = table.banding.color_for(row);

        for (col, (value, (&left, &width))) in cells
            .iter()
            .zip(lefts.iter().zip(table.column_widths))
            .enumerate()
        {
            let size = Size::new(width, table.row_height);
            if col == 0 {
                draw_rectangle(page, Point::new(left, top), size, band, None);
                draw_text(
                    page,
                    Point::new(left + inches(ComparisonTable::LABEL_INSET), top),
                    size,
                    value,
                    &label_style,
                    Alignment::Left,
                );
                continue;
            }

            let highlighted =
                table.highlight_column == Some(col) && Marker::parse(value) == Some(Marker::Check);
            let fill = if highlighted { Palette::Mint } else { band };
            draw_rectangle(page, Point::new(left, top), size, fill, None);
            draw_text(
                page,
                Point::new(left, top),
                size,
                value,
                &cell_style(value).text_style(),
                Alignment::Center,
            );
        }
    }
}

/// Cost ledger: a header row, banded item rows and highlighted total rows.
///
/// Every row, including the header, is drawn as flat cells. Widths and heights
/// are in points.
#[derive(Debug, Clone, Copy)]
pub struct LedgerTable<'a> {
    /// Top-left corner of the header row
    pub origin: Point,
    pub column_widths: &'a [f64],
    pub row_pitch: f64,
    pub row_height: f64,
    pub font_size: f64,
    /// The first row is the header
    pub rows: &'a [&'a [&'a str]],
    /// Number of trailing rows drawn as totals
    pub total_rows: usize,
    pub banding: Banding,
    /// Column whose figures are drawn in the losing color
    pub competitor_column: Option<usize>,
}

impl LedgerTable<'_> {
    const LABEL_INSET: f64 = 0.1;

    fn is_total(&self, row: usize) -> bool {
        row > 0 && row + self.total_rows >= self.rows.len()
    }
}

pub fn ledger_table(page: &mut Page, table: &LedgerTable) {
    let lefts = column_offsets(table.origin.x, table.column_widths);

    for (row, cells) in table.rows.iter().enumerate() {
        let top = table.origin.y + row as f64 * table.row_pitch;
        let header = row == 0;
        let total = table.is_total(row);

        let (fill, text_color) = if header {
            (Palette::Primary, Palette::White)
        } else if total {
            (Palette::Mint, Palette::GreenCheck)
        } else {
            (table.banding.color_for(row), Palette::TextDark)
        };

        for (col, (value, (&left, &width))) in cells
            .iter()
            .zip(lefts.iter().zip(table.column_widths))
            .enumerate()
        {
            draw_rectangle(
                page,
                Point::new(left, top),
                Size::new(width, table.row_height),
                fill,
                None,
            );

            let style = if !header && table.competitor_column == Some(col) {
                TextStyle::new(table.font_size, Palette::RedCross)
            } else {
                TextStyle::new(table.font_size, text_color).with_bold(header || total)
            };

            if col == 0 {
                let inset = inches(LedgerTable::LABEL_INSET);
                draw_text(
                    page,
                    Point::new(left + inset, top),
                    Size::new(width - 2.0 * inset, table.row_height),
                    value,
                    &style,
                    Alignment::Left,
                );
            } else {
                draw_text(
                    page,
                    Point::new(left, top),
                    Size::new(width, table.row_height),
                    value,
                    &style,
                    Alignment::Center,
                );
            }
        }
    }
}
