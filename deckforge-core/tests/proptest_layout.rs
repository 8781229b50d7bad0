//! Property-based tests for placement, table styling and text wrapping
//!
//! Checks the grid placement formula, row banding, marker styles, alpha
//! normalization and greedy wrapping across generated inputs.

use deckforge::layout::{cell_style, Banding, Grid, Marker, FREE_TEXT_STYLE, MARKER_STYLES};
use deckforge::text::layout::wrap_line;
use deckforge::{Fill, Palette, Point, Size, TextStyle};
use proptest::prelude::*;

fn finite_coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![-2000.0..2000.0f64, Just(0.0), Just(72.0), Just(-36.0)]
}

prop_compose! {
    fn grid_strategy()(
        x in finite_coordinate(),
        y in finite_coordinate(),
        columns in 0usize..8,
        width in 0.0..500.0f64,
        height in 0.0..500.0f64,
    ) -> Grid {
        Grid::new(Point::new(x, y), columns, Size::new(width, height))
    }
}

fn banding_strategy() -> impl Strategy<Value = Banding> {
    prop_oneof![Just(Banding::COMPARISON), Just(Banding::LEDGER)]
}

proptest! {
    #[test]
    fn grid_anchor_follows_row_major_formula(grid in grid_strategy(), index in 0usize..64) {
        let k = grid.columns;
        prop_assert!(k >= 1);

        let anchor = grid.anchor(index);
        let expected_x = grid.origin.x + (index % k) as f64 * grid.cell.width;
        let expected_y = grid.origin.y + (index / k) as f64 * grid.cell.height;
        prop_assert!((anchor.x - expected_x).abs() < 1e-9);
        prop_assert!((anchor.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn grid_anchors_match_anchor(grid in grid_strategy(), count in 0usize..32) {
        let anchors: Vec<Point> = grid.anchors(count).collect();
        prop_assert_eq!(anchors.len(), count);
        for (index, anchor) in anchors.iter().enumerate() {
            prop_assert_eq!(*anchor, grid.anchor(index));
        }
    }

    #[test]
    fn banding_depends_only_on_parity(banding in banding_strategy(), row in 0usize..10_000) {
        prop_assert_eq!(banding.color_for(row), banding.color_for(row + 2));
        prop_assert_ne!(banding.color_for(row), banding.color_for(row + 1));
        let expected = if row % 2 == 0 { banding.even } else { banding.odd };
        prop_assert_eq!(banding.color_for(row), expected);
    }

    #[test]
    fn free_text_never_gets_marker_style(value in "[a-zA-Z0-9 $,.+%~]{0,16}") {
        prop_assert_eq!(cell_style(&value), FREE_TEXT_STYLE);
        prop_assert!(Marker::parse(&value).is_none());
    }

    #[test]
    fn effective_alpha_is_a_fraction(alpha in prop::num::f64::ANY) {
        let fill = Fill::with_alpha(Palette::Primary.color(), alpha);
        match fill.effective_alpha() {
            Some(fraction) => {
                prop_assert!(alpha.is_finite());
                prop_assert!((0.0..1.0).contains(&fraction));
            }
            None => prop_assert!(!alpha.is_finite() || alpha >= 100.0),
        }
    }

    #[test]
    fn wrapping_keeps_every_visible_character(
        text in "[a-z]{1,8}( [a-z]{1,8}){0,12}|[補教管理系統智慧點名]{1,40}",
        width in 20.0..400.0f64,
    ) {
        let style = TextStyle::new(12.0, Palette::TextDark);
        let lines = wrap_line(&text, &style, width);
        prop_assert!(!lines.is_empty());

        let visible: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let wrapped: String = lines
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        prop_assert_eq!(wrapped, visible);
    }
}

#[test]
fn every_marker_has_fixed_style() {
    for marker in Marker::ALL {
        let style = cell_style(marker.glyph());
        assert!(style.bold);
        assert_eq!(style.font_size, 14.0);
    }
    assert_eq!(cell_style("✓").color, Palette::GreenCheck);
    assert_eq!(cell_style("✗").color, Palette::RedCross);
    assert_eq!(cell_style("△").color, Palette::Gold);
    assert_eq!(MARKER_STYLES.len(), Marker::ALL.len());
    assert!(!FREE_TEXT_STYLE.bold);
    assert_eq!(FREE_TEXT_STYLE.font_size, 11.0);
}
