//! Composite blocks: fixed arrangements of primitives around an anchor.

use super::primitives::{
    append_paragraph, draw_circle, draw_rectangle, draw_rounded_rectangle, draw_text,
};
use crate::error::Result;
use crate::geometry::{inches, Point, Size};
use crate::graphics::{Color, Palette};
use crate::page::{Page, ShapeId};
use crate::text::{Alignment, TextStyle};

/// Content of an icon card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconCard<'a> {
    /// Glyph drawn on the badge
    pub icon: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub background: Palette,
    pub badge: Palette,
}

/// Draws a card with a round icon badge on the left and title and
/// description beside it. Returns the card background.
pub fn icon_card(page: &mut Page, anchor: Point, size: Size, card: &IconCard) -> ShapeId {
    let background = draw_rounded_rectangle(page, anchor, size, card.background);

    let badge_pos = anchor.offset(inches(0.3), inches(0.3));
    let badge = inches(0.7);
    draw_circle(page, badge_pos, badge, card.badge);
    draw_text(
        page,
        badge_pos,
        Size::square(badge),
        card.icon,
        &TextStyle::new(24.0, Palette::White).bold(),
        Alignment::Center,
    );

    let text_width = size.width - inches(1.5);
    draw_text(
        page,
        anchor.offset(inches(1.15), inches(0.3)),
        Size::new(text_width, inches(0.5)),
        card.title,
        &TextStyle::new(18.0, Palette::Dark).bold(),
        Alignment::Left,
    );
    draw_text(
        page,
        anchor.offset(inches(1.15), inches(0.75)),
        Size::new(text_width, size.height - inches(1.0)),
        card.description,
        &TextStyle::new(13.0, Palette::TextLight),
        Alignment::Left,
    );

    background
}

/// Footprint of a stat card, 2.4 × 1.6 in.
pub const STAT_CARD_SIZE: Size = Size {
    width: 2.4 * 72.0,
    height: 1.6 * 72.0,
};

/// White tile with an accent bar on top, a large figure and a label.
/// Returns the tile background.
pub fn stat_card(
    page: &mut Page,
    anchor: Point,
    number: &str,
    label: &str,
    accent: impl Into<Color>,
) -> ShapeId {
    let accent = accent.into();
    let width = STAT_CARD_SIZE.width;

    let background = draw_rounded_rectangle(page, anchor, STAT_CARD_SIZE, Palette::White);
    draw_rectangle(page, anchor, Size::new(width, inches(0.06)), accent, None);
    draw_text(
        page,
        anchor.offset(0.0, inches(0.25)),
        Size::new(width, inches(0.8)),
        number,
        &TextStyle::new(36.0, accent).bold(),
        Alignment::Center,
    );
    draw_text(
        page,
        anchor.offset(0.0, inches(1.0)),
        Size::new(width, inches(0.5)),
        label,
        &TextStyle::new(14.0, Palette::TextLight),
        Alignment::Center,
    );

    background
}

/// Color scheme of a page header, matching the page background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeaderTheme {
    #[default]
    Light,
    Dark,
}

struct HeaderLayout {
    bar: Palette,
    title: Palette,
    subtitle: Palette,
    title_top: f64,
    title_height: f64,
    subtitle_top: f64,
    brand_top: f64,
}

impl HeaderTheme {
    fn layout(self) -> HeaderLayout {
        match self {
            HeaderTheme::Light => HeaderLayout {
                bar: Palette::Primary,
                title: Palette::Dark,
                subtitle: Palette::TextLight,
                title_top: 0.3,
                title_height: 0.7,
                subtitle_top: 0.95,
                brand_top: 0.35,
            },
            HeaderTheme::Dark => HeaderLayout {
                bar: Palette::Accent,
                title: Palette::White,
                subtitle: Palette::Light2,
                title_top: 0.4,
                title_height: 0.6,
                subtitle_top: 1.0,
                brand_top: 0.45,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageHeader<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Label anchored to the top-right corner
    pub brand: &'a str,
    pub theme: HeaderTheme,
}

/// Draws the top bar, title, optional subtitle and brand label.
pub fn page_header(page: &mut Page, header: &PageHeader) {
    let layout = header.theme.layout();

    draw_rectangle(
        page,
        Point::origin(),
        Size::new(page.width(), inches(0.06)),
        layout.bar,
        None,
    );
    draw_text(
        page,
        Point::inches(0.8, layout.title_top),
        Size::inches(10.0, layout.title_height),
        header.title,
        &TextStyle::new(32.0, layout.title).bold(),
        Alignment::Left,
    );
    if let Some(subtitle) = header.subtitle {
        draw_text(
            page,
            Point::inches(0.8, layout.subtitle_top),
            Size::inches(10.0, 0.4),
            subtitle,
            &TextStyle::new(16.0, layout.subtitle),
            Alignment::Left,
        );
    }
    draw_text(
        page,
        Point::inches(10.5, layout.brand_top),
        Size::inches(2.5, 0.4),
        header.brand,
        &TextStyle::new(14.0, Palette::Primary).bold(),
        Alignment::Right,
    );
}

/// Appends `"{icon}  {label}"` to a text box as its own paragraph.
pub fn feature_bullet(
    page: &mut Page,
    text_box: ShapeId,
    icon: &str,
    label: &str,
    font_size: f64,
    color: impl Into<Color>,
) -> Result<()> {
    append_paragraph(
        page,
        text_box,
        &format!("{icon}  {label}"),
        &TextStyle::new(font_size, color),
        Alignment::Left,
        6.0,
        2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{Shape, ShapeKind};

    fn page() -> Page {
        Page::new(959.976, 540.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_icon_card_offsets() {
        let mut page = page();
        let anchor = Point::inches(1.0, 2.0);
        let card = IconCard {
            icon: "管",
            title: "94Manage",
            description: "學員資料 · 課程管理",
            background: Palette::White,
            badge: Palette::Primary,
        };
        let id = icon_card(&mut page, anchor, Size::inches(4.0, 2.5), &card);

        assert_eq!(id.index(), 0);
        let shapes = page.shapes();
        assert_eq!(shapes.len(), 5);
        assert!(matches!(shapes[0].kind, ShapeKind::RoundedRectangle(_)));
        assert_eq!(shapes[1].kind_name(), "oval");
        assert_close(shapes[1].frame.x(), inches(1.3));
        assert_close(shapes[1].frame.width(), inches(0.7));
        assert_eq!(shapes[2].frame, shapes[1].frame);

        assert_close(shapes[3].frame.x(), inches(2.15));
        assert_close(shapes[3].frame.width(), inches(2.5));
        assert_close(shapes[4].frame.y(), inches(2.75));
        assert_close(shapes[4].frame.height(), inches(1.5));
        assert_eq!(shapes[4].text().as_deref(), Some("學員資料 · 課程管理"));
    }

    #[test]
    fn test_icon_card_is_repeatable() {
        let card = IconCard {
            icon: "庫",
            title: "94Stock",
            description: "",
            background: Palette::Dark2,
            badge: Palette::Accent,
        };
        let mut first = page();
        let mut second = page();
        icon_card(&mut first, Point::inches(0.5, 0.5), Size::inches(3.8, 2.3), &card);
        icon_card(&mut second, Point::inches(0.5, 0.5), Size::inches(3.8, 2.3), &card);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stat_card() {
        let mut page = page();
        stat_card(&mut page, Point::inches(0.5, 1.5), "NT$0", "建置費", Palette::GreenCheck);

        let shapes = page.shapes();
        assert_eq!(shapes.len(), 4);
        assert_eq!(shapes[0].frame.size, STAT_CARD_SIZE);
        assert_close(shapes[1].frame.height(), inches(0.06));
        assert_eq!(
            shapes[1].fill().map(|fill| fill.color),
            Some(Palette::GreenCheck.color())
        );

        let number = shapes[2].text_frame().unwrap();
        assert_eq!(number.paragraphs()[0].style.font_size, 36.0);
        assert_eq!(number.paragraphs()[0].alignment, Alignment::Center);
        assert_close(shapes[3].frame.y(), inches(2.5));
    }

    #[test]
    fn test_light_page_header() {
        let mut page = page();
        page_header(
            &mut page,
            &PageHeader {
                title: "競品比較分析",
                subtitle: Some("為什麼 94Cram 是最佳選擇？"),
                brand: "94Cram 智慧補教",
                theme: HeaderTheme::Light,
            },
        );

        let shapes = page.shapes();
        assert_eq!(shapes.len(), 4);
        assert_eq!(shapes[0].frame.width(), page.width());
        assert_eq!(
            shapes[0].fill().map(|fill| fill.color),
            Some(Palette::Primary.color())
        );
        let title = &shapes[1].text_frame().unwrap().paragraphs()[0];
        assert_eq!(title.style.color, Palette::Dark.color());
        assert!(title.style.bold);
        assert_close(shapes[2].frame.y(), inches(0.95));

        let brand: &Shape = &shapes[3];
        assert_eq!(brand.text().as_deref(), Some("94Cram 智慧補教"));
        assert_close(brand.frame.x(), inches(10.5));
        assert_eq!(
            brand.text_frame().unwrap().paragraphs()[0].alignment,
            Alignment::Right
        );
    }

    #[test]
    fn test_dark_page_header_without_subtitle() {
        let mut page = page();
        page_header(
            &mut page,
            &PageHeader {
                title: "🔐 安全與合規",
                subtitle: None,
                brand: "94Cram 智慧補教",
                theme: HeaderTheme::Dark,
            },
        );

        let shapes = page.shapes();
        assert_eq!(shapes.len(), 3);
        assert_eq!(
            shapes[0].fill().map(|fill| fill.color),
            Some(Palette::Accent.color())
        );
        assert_close(shapes[1].frame.y(), inches(0.4));
        assert_eq!(
            shapes[1].text_frame().unwrap().paragraphs()[0].style.color,
            Palette::White.color()
        );
        assert_close(shapes[2].frame.y(), inches(0.45));
    }

    #[test]
    fn test_feature_bullet() {
        let mut page = page();
        let list = draw_text(
            &mut page,
            Point::origin(),
            Size::inches(4.0, 3.0),
            "功能",
            &TextStyle::default(),
            Alignment::Left,
        );
        feature_bullet(&mut page, list, "📱", "NFC 感應點名", 15.0, Palette::TextDark).unwrap();

        let frame = page.shape(list).and_then(Shape::text_frame).unwrap();
        let bullet = &frame.paragraphs()[1];
        assert_eq!(bullet.text, "📱  NFC 感應點名");
        assert_eq!(bullet.style.font_size, 15.0);
        assert_eq!((bullet.space_before, bullet.space_after), (6.0, 2.0));
    }
}
