//! Drawing helpers that place shapes on a [`Page`](crate::Page).
//!
//! Every helper takes the target page explicitly and works in absolute slide
//! coordinates. Nothing is measured or bounds-checked: off-page positions and
//! overlapping blocks are drawn as given.

mod blocks;
mod grid;
mod primitives;
mod table;

pub use blocks::{
    feature_bullet, icon_card, page_header, stat_card, HeaderTheme, IconCard, PageHeader,
    STAT_CARD_SIZE,
};
pub use grid::{column_offsets, Grid};
pub use primitives::{
    append_paragraph, draw_circle, draw_rectangle, draw_rounded_rectangle, draw_text,
};
pub use table::{
    cell_style, comparison_table, ledger_table, Banding, CellStyle, ComparisonTable, LedgerTable,
    Marker, FREE_TEXT_STYLE, MARKER_STYLES,
};
