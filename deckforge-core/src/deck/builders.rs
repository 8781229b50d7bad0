//! Page builders, one per slide layout.
//!
//! Each builder draws a content table from [`super::content`] onto a blank page
//! in a single top-to-bottom pass. Offsets are in inches relative to the block
//! anchor, as in the content tables.

use super::content::{
    AccentCardGrid, Architecture, Area, Banner, CardGrid, ChatModes, Comparison, CostBenefit,
    Element, FunnelOverview, HeroShowcase, Label, Onboarding, Poster, Pricing, ProcessFlow,
    RiskDashboard, SystemOverview, NOT_INCLUDED,
};
use crate::geometry::{inches, Point, Size};
use crate::graphics::Palette;
use crate::layout::{
    comparison_table, draw_circle, draw_rectangle, draw_rounded_rectangle, draw_text,
    ledger_table, page_header, stat_card, Banding, ComparisonTable, Grid, HeaderTheme,
    LedgerTable, PageHeader,
};
use crate::page::{Page, ShapeId};
use crate::text::{Alignment, TextStyle};

/// Grid shared by the six-card slides.
fn six_card_grid() -> Grid {
    Grid::new(Point::inches(0.5, 1.7), 3, Size::inches(4.2, 2.7))
}

fn at(anchor: Point, dx: f64, dy: f64) -> Point {
    anchor.offset(inches(dx), inches(dy))
}

fn text(
    page: &mut Page,
    pos: Point,
    (width, height): (f64, f64),
    content: &str,
    style: TextStyle,
    alignment: Alignment,
) -> ShapeId {
    draw_text(
        page,
        pos,
        Size::inches(width, height),
        content,
        &style,
        alignment,
    )
}

fn plain(size: f64, color: Palette) -> TextStyle {
    TextStyle::new(size, color)
}

fn bold(size: f64, color: Palette) -> TextStyle {
    TextStyle::new(size, color).bold()
}

/// Icons are drawn in the default text color.
fn icon(size: f64) -> TextStyle {
    TextStyle::new(size, Palette::TextDark)
}

fn draw_label(page: &mut Page, label: &Label) -> ShapeId {
    draw_text(
        page,
        label.area.origin(),
        label.area.size(),
        label.text,
        &label.style(),
        label.alignment,
    )
}

fn panel(page: &mut Page, area: Area, color: Palette) -> ShapeId {
    draw_rounded_rectangle(page, area.origin(), area.size(), color)
}

fn begin(page: &mut Page, header: &PageHeader) {
    let background = match header.theme {
        HeaderTheme::Light => Palette::Light,
        HeaderTheme::Dark => Palette::Dark,
    };
    page.set_background(background.color());
    page_header(page, header);
}

fn banner(page: &mut Page, panel_area: Area, banner: &Banner, text_left: f64, text_width: f64) {
    panel(page, panel_area, Palette::Dark);
    let (x, y) = (text_left, panel_area.y);
    text(
        page,
        Point::inches(x, y + 0.1),
        (text_width, 0.35),
        banner.headline,
        bold(17.0, Palette::White),
        Alignment::Center,
    );
    text(
        page,
        Point::inches(x, y + 0.45),
        (text_width, 0.3),
        banner.caption,
        plain(13.0, Palette::Light2),
        Alignment::Center,
    );
}

/// Free-form slide: background plus elements in order.
pub fn poster(page: &mut Page, poster: &Poster) {
    page.set_background(poster.background.color());
    for element in poster.elements {
        match *element {
            Element::TopBar(height, color) => {
                let size = Size::new(page.width(), inches(height));
                draw_rectangle(page, Point::origin(), size, color, None);
            }
            Element::Bar(area, color) => {
                draw_rectangle(page, area.origin(), area.size(), color, None);
            }
            Element::Panel(area, color) => {
                panel(page, area, color);
            }
            Element::Disc {
                x,
                y,
                diameter,
                color,
            } => {
                draw_circle(page, Point::inches(x, y), inches(diameter), color);
            }
            Element::Text(ref label) => {
                draw_label(page, label);
            }
        }
    }
}

/// Six white cards with a colored side bar, icon, title and description.
pub fn accent_card_grid(page: &mut Page, content: &AccentCardGrid) {
    begin(page, &content.header);

    let grid = six_card_grid();
    for (anchor, item) in grid.anchors(content.cards.len()).zip(content.cards) {
        let card = &item.card;
        draw_rounded_rectangle(page, anchor, Size::inches(3.8, 2.3), Palette::White);
        draw_rectangle(
            page,
            at(anchor, 0.0, 0.3),
            Size::inches(0.06, 1.7),
            item.color,
            None,
        );
        text(page, at(anchor, 0.3, 0.2), (0.6, 0.6), card.icon, icon(28.0), Alignment::Center);
        text(
            page,
            at(anchor, 0.9, 0.25),
            (2.7, 0.4),
            card.title,
            bold(18.0, item.color),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 0.3, 0.85),
            (3.2, 1.2),
            card.description,
            plain(13.0, Palette::TextLight),
            Alignment::Left,
        );
    }
}

/// Six dark cards with centered icon, title and description.
pub fn dark_card_grid(page: &mut Page, content: &CardGrid) {
    begin(page, &content.header);

    let grid = six_card_grid();
    for (anchor, card) in grid.anchors(content.cards.len()).zip(content.cards) {
        draw_rounded_rectangle(page, anchor, Size::inches(3.8, 2.4), Palette::Dark2);
        text(page, at(anchor, 0.0, 0.15), (3.8, 0.5), card.icon, icon(32.0), Alignment::Center);
        text(
            page,
            at(anchor, 0.0, 0.7),
            (3.8, 0.4),
            card.title,
            bold(18.0, Palette::White),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.3, 1.2),
            (3.2, 1.0),
            card.description,
            plain(13.0, Palette::Light2),
            Alignment::Center,
        );
    }
}

/// Product columns with a colored cap and badge, over a closing banner.
pub fn system_columns(page: &mut Page, content: &SystemOverview) {
    begin(page, &content.header);

    let row = Grid::row(Point::inches(0.5, 1.7), inches(4.2));
    for (anchor, system) in row.anchors(content.systems.len()).zip(content.systems) {
        draw_rounded_rectangle(page, anchor, Size::inches(3.8, 4.5), Palette::White);
        draw_rectangle(page, anchor, Size::inches(3.8, 0.8), system.color, None);

        let badge = at(anchor, 1.4, 0.08);
        draw_circle(page, badge, inches(0.65), Palette::White);
        text(
            page,
            badge,
            (0.65, 0.65),
            system.badge,
            bold(24.0, system.color),
            Alignment::Center,
        );

        text(
            page,
            at(anchor, 0.0, 0.95),
            (3.8, 0.5),
            system.name,
            bold(24.0, system.color),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.0, 1.4),
            (3.8, 0.4),
            system.tagline,
            plain(14.0, Palette::TextLight),
            Alignment::Center,
        );
        draw_rectangle(
            page,
            at(anchor, 0.5, 1.85),
            Size::inches(2.8, 0.02),
            Palette::Light2,
            None,
        );
        text(
            page,
            at(anchor, 0.4, 2.0),
            (3.0, 2.3),
            system.features,
            plain(13.0, Palette::TextDark),
            Alignment::Left,
        );
    }

    banner(
        page,
        Area {
            x: 0.5,
            y: 6.4,
            width: 12.3,
            height: 0.85,
        },
        &content.banner,
        1.5,
        10.0,
    );
}

/// Centered funnel bars on the left, a module list on the right.
pub fn funnel_overview(page: &mut Page, content: &FunnelOverview) {
    begin(page, &content.header);

    draw_rounded_rectangle(
        page,
        Point::inches(0.5, 1.6),
        Size::inches(6.0, 5.5),
        Palette::White,
    );
    text(
        page,
        Point::inches(0.8, 1.75),
        (5.0, 0.4),
        content.funnel_title,
        bold(20.0, Palette::Primary),
        Alignment::Left,
    );

    // bars are centered on the widest stage
    let widest = 5.0;
    let stages = Grid::column(Point::inches(0.0, 2.4), inches(0.75));
    for (row, stage) in stages.anchors(content.stages.len()).zip(content.stages) {
        let left = Point::new(inches(1.0 + (widest - stage.width) / 2.0), row.y);
        draw_rounded_rectangle(page, left, Size::inches(stage.width, 0.55), stage.color);
        text(
            page,
            at(left, 0.0, 0.05),
            (stage.width, 0.45),
            &format!("{}  {}", stage.stage, stage.share),
            bold(14.0, Palette::White),
            Alignment::Center,
        );
    }

    text(
        page,
        Point::inches(0.8, 6.2),
        (5.5, 0.5),
        content.funnel_caption,
        plain(12.0, Palette::TextLight),
        Alignment::Left,
    );

    let modules = Grid::column(Point::inches(6.8, 1.65), inches(0.9));
    for (anchor, module) in modules.anchors(content.modules.len()).zip(content.modules) {
        draw_rounded_rectangle(page, anchor, Size::inches(5.8, 0.78), Palette::White);
        text(page, at(anchor, 0.2, 0.05), (0.5, 0.5), module.icon, icon(22.0), Alignment::Center);
        text(
            page,
            at(anchor, 0.8, 0.05),
            (1.5, 0.35),
            module.title,
            bold(16.0, Palette::Dark),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 0.8, 0.38),
            (4.8, 0.35),
            module.description,
            plain(12.0, Palette::TextLight),
            Alignment::Left,
        );
    }
}

/// Warning signals on a light panel next to a dark risk dashboard.
pub fn risk_dashboard(page: &mut Page, content: &RiskDashboard) {
    begin(page, &content.header);

    draw_rounded_rectangle(
        page,
        Point::inches(0.5, 1.6),
        Size::inches(5.8, 5.5),
        Palette::White,
    );
    text(
        page,
        Point::inches(0.8, 1.8),
        (5.0, 0.4),
        content.signals_title,
        bold(20.0, Palette::Primary),
        Alignment::Left,
    );

    let signals = Grid::column(Point::inches(0.8, 2.4), inches(0.8));
    for (anchor, signal) in signals.anchors(content.signals.len()).zip(content.signals) {
        text(page, anchor, (0.5, 0.4), signal.icon, icon(20.0), Alignment::Left);
        text(
            page,
            at(anchor, 0.6, 0.0),
            (2.0, 0.35),
            signal.title,
            bold(15.0, Palette::Dark),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 0.6, 0.3),
            (4.5, 0.35),
            signal.description,
            plain(12.0, Palette::TextLight),
            Alignment::Left,
        );
    }

    draw_rounded_rectangle(
        page,
        Point::inches(6.6, 1.6),
        Size::inches(6.2, 5.5),
        Palette::Dark,
    );
    text(
        page,
        Point::inches(7.0, 1.85),
        (5.5, 0.4),
        content.dashboard_title,
        bold(20.0, Palette::White),
        Alignment::Left,
    );

    let levels = Grid::column(Point::inches(7.0, 2.5), inches(1.5));
    for (anchor, level) in levels.anchors(content.levels.len()).zip(content.levels) {
        draw_rounded_rectangle(page, anchor, Size::inches(5.4, 1.2), Palette::Dark2);
        draw_rectangle(page, anchor, Size::inches(0.08, 1.2), level.color, None);
        text(page, at(anchor, 0.3, 0.1), (0.4, 0.4), level.icon, icon(22.0), Alignment::Left);
        text(
            page,
            at(anchor, 0.8, 0.1),
            (1.5, 0.35),
            level.level,
            bold(18.0, level.color),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 3.0, 0.15),
            (2.0, 0.3),
            level.count,
            plain(16.0, Palette::White),
            Alignment::Right,
        );
        text(
            page,
            at(anchor, 0.3, 0.6),
            (5.0, 0.4),
            &format!("建議行動：{}", level.action),
            plain(12.0, Palette::Light2),
            Alignment::Left,
        );
    }

    text(
        page,
        Point::inches(7.0, 6.4),
        (5.5, 0.35),
        content.footnote,
        bold(14.0, Palette::Gold),
        Alignment::Center,
    );
}

/// Three colored hero cards over a row of small feature cards.
pub fn hero_showcase(page: &mut Page, content: &HeroShowcase) {
    begin(page, &content.header);

    let heroes = Grid::row(Point::inches(0.5, 1.6), inches(4.2));
    for (anchor, hero) in heroes.anchors(content.heroes.len()).zip(content.heroes) {
        draw_rounded_rectangle(page, anchor, Size::inches(3.8, 3.2), hero.color);
        text(page, at(anchor, 0.0, 0.25), (3.8, 0.5), hero.icon, icon(40.0), Alignment::Center);
        text(
            page,
            at(anchor, 0.0, 0.9),
            (3.8, 0.5),
            hero.title,
            bold(24.0, Palette::White),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.3, 1.5),
            (3.2, 0.35),
            hero.tagline,
            plain(16.0, Palette::Light2),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.3, 1.95),
            (3.2, 0.8),
            hero.description,
            plain(13.0, Palette::Light2),
            Alignment::Center,
        );
    }

    let features = Grid::row(Point::inches(0.5, 5.2), inches(2.55));
    for (anchor, feature) in features.anchors(content.features.len()).zip(content.features) {
        draw_rounded_rectangle(page, anchor, Size::inches(2.3, 1.8), Palette::White);
        text(
            page,
            at(anchor, 0.0, 0.15),
            (2.3, 0.35),
            feature.title,
            bold(14.0, Palette::Dark),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.15, 0.55),
            (2.0, 1.0),
            feature.description,
            plain(12.0, Palette::TextLight),
            Alignment::Center,
        );
    }
}

/// Process steps joined by arrows, over a row of highlight cards.
pub fn process_flow(page: &mut Page, content: &ProcessFlow) {
    begin(page, &content.header);

    const STEP_WIDTH: f64 = 2.7;
    const STEP_ADVANCE: f64 = 2.9;
    const ARROW_WIDTH: f64 = 0.6;

    let mut x = 0.3;
    for (i, step) in content.steps.iter().enumerate() {
        if i > 0 {
            text(
                page,
                Point::inches(x, 2.5),
                (ARROW_WIDTH, ARROW_WIDTH),
                content.arrow,
                bold(36.0, Palette::Accent),
                Alignment::Center,
            );
            x += ARROW_WIDTH;
        }

        let anchor = Point::inches(x, 1.6);
        draw_rounded_rectangle(page, anchor, Size::inches(STEP_WIDTH, 2.6), Palette::White);
        text(
            page,
            at(anchor, 0.0, 0.15),
            (STEP_WIDTH, 0.5),
            step.icon,
            icon(32.0),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.0, 0.7),
            (STEP_WIDTH, 0.4),
            step.title,
            bold(20.0, Palette::Dark),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.2, 1.2),
            (2.3, 1.2),
            step.description,
            plain(13.0, Palette::TextLight),
            Alignment::Center,
        );
        x += STEP_ADVANCE;
    }

    let highlights = Grid::row(Point::inches(0.5, 4.7), inches(3.2));
    for (anchor, item) in highlights.anchors(content.highlights.len()).zip(content.highlights) {
        let card = &item.card;
        draw_rounded_rectangle(page, anchor, Size::inches(2.9, 2.4), Palette::White);
        draw_rectangle(page, anchor, Size::inches(2.9, 0.06), item.color, None);
        text(page, at(anchor, 0.0, 0.2), (2.9, 0.5), card.icon, icon(28.0), Alignment::Center);
        text(
            page,
            at(anchor, 0.0, 0.75),
            (2.9, 0.4),
            card.title,
            bold(16.0, item.color),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.2, 1.2),
            (2.5, 1.0),
            card.description,
            plain(12.0, Palette::TextLight),
            Alignment::Center,
        );
    }
}

/// Two side-by-side chat panels: operator commands and parent queries.
pub fn chat_modes(page: &mut Page, content: &ChatModes) {
    begin(page, &content.header);

    let operator = &content.operator;
    let left = Point::inches(0.5, 1.7);
    chat_panel(page, left, operator.title, operator.accent, operator.footer);
    let commands = Grid::column(at(left, 0.3, 0.8), inches(0.68));
    for (anchor, command) in commands.anchors(operator.items.len()).zip(operator.items) {
        draw_rounded_rectangle(page, anchor, Size::inches(2.5, 0.5), Palette::Primary);
        text(
            page,
            at(anchor, 0.1, 0.05),
            (2.3, 0.4),
            command.utterance,
            bold(13.0, Palette::White),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 2.7, 0.05),
            (3.0, 0.4),
            command.outcome,
            plain(13.0, Palette::Light2),
            Alignment::Left,
        );
    }

    let parent = &content.parent;
    let right = Point::inches(6.8, 1.7);
    chat_panel(page, right, parent.title, parent.accent, parent.footer);
    let queries = Grid::column(at(right, 0.3, 0.8), inches(0.9));
    for (anchor, query) in queries.anchors(parent.items.len()).zip(parent.items) {
        draw_rounded_rectangle(page, anchor, Size::inches(5.4, 0.75), Palette::Dark);
        text(
            page,
            at(anchor, 0.2, 0.05),
            (1.5, 0.3),
            query.title,
            bold(14.0, parent.accent),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 0.2, 0.32),
            (5.0, 0.4),
            query.description,
            plain(11.0, Palette::Light2),
            Alignment::Left,
        );
    }
}

/// Panel background, title and footer pill; the items are drawn by the caller.
fn chat_panel(page: &mut Page, anchor: Point, title: &str, accent: Palette, footer: &str) {
    draw_rounded_rectangle(page, anchor, Size::inches(6.0, 5.3), Palette::Dark2);
    text(
        page,
        at(anchor, 0.3, 0.2),
        (5.5, 0.4),
        title,
        bold(18.0, accent),
        Alignment::Left,
    );
    draw_rounded_rectangle(page, at(anchor, 0.3, 4.7), Size::inches(5.5, 0.45), accent);
    text(
        page,
        at(anchor, 0.5, 4.75),
        (5.0, 0.35),
        footer,
        bold(13.0, Palette::White),
        Alignment::Center,
    );
}

/// Feature matrix against competitors.
pub fn comparison(page: &mut Page, content: &Comparison) {
    begin(page, &content.header);

    let widths: Vec<f64> = content.widths.iter().map(|w| inches(*w)).collect();
    comparison_table(
        page,
        &ComparisonTable {
            origin: Point::inches(0.5, 1.6),
            column_widths: &widths,
            header_height: inches(0.7),
            row_pitch: inches(0.4),
            row_height: inches(0.38),
            headers: content.columns,
            rows: content.rows,
            highlight_column: Some(content.highlight_column),
            banding: Banding::COMPARISON,
        },
    );

    draw_rounded_rectangle(
        page,
        Point::inches(0.5, 6.4),
        Size::inches(12.3, 0.8),
        Palette::Primary,
    );
    text(
        page,
        Point::inches(1.0, 6.48),
        (11.0, 0.3),
        content.footer.headline,
        bold(16.0, Palette::White),
        Alignment::Center,
    );
    text(
        page,
        Point::inches(1.0, 6.82),
        (11.0, 0.25),
        content.footer.caption,
        plain(13.0, Palette::Light2),
        Alignment::Center,
    );
}

/// Stacked architecture layers on the left, a two-column advantage grid on the right.
pub fn architecture(page: &mut Page, content: &Architecture) {
    begin(page, &content.header);

    let layers = Grid::column(Point::inches(0.5, 1.55), inches(0.9));
    for (anchor, layer) in layers.anchors(content.layers.len()).zip(content.layers) {
        draw_rounded_rectangle(page, anchor, Size::inches(2.0, 0.7), layer.color);
        text(
            page,
            at(anchor, 0.0, 0.1),
            (2.0, 0.5),
            layer.name,
            bold(15.0, Palette::White),
            Alignment::Center,
        );
        draw_rounded_rectangle(page, at(anchor, 2.2, 0.0), Size::inches(5.3, 0.7), Palette::White);
        text(
            page,
            at(anchor, 2.4, 0.1),
            (5.0, 0.5),
            layer.description,
            plain(13.0, Palette::TextDark),
            Alignment::Left,
        );
    }

    let grid = Grid::new(Point::inches(8.3, 1.55), 2, Size::inches(2.5, 1.85));
    for (anchor, card) in grid.anchors(content.advantages.len()).zip(content.advantages) {
        draw_rounded_rectangle(page, anchor, Size::inches(2.3, 1.65), Palette::White);
        text(page, at(anchor, 0.0, 0.1), (2.3, 0.4), card.icon, icon(26.0), Alignment::Center);
        text(
            page,
            at(anchor, 0.0, 0.55),
            (2.3, 0.35),
            card.title,
            bold(14.0, Palette::Dark),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.1, 0.9),
            (2.1, 0.65),
            card.description,
            plain(11.0, Palette::TextLight),
            Alignment::Center,
        );
    }
}

/// Stat tiles, a cost ledger and a returns panel.
pub fn cost_benefit(page: &mut Page, content: &CostBenefit) {
    begin(page, &content.header);

    let stats = Grid::row(Point::inches(0.5, 1.5), inches(3.15));
    for (anchor, stat) in stats.anchors(content.stats.len()).zip(content.stats) {
        stat_card(page, anchor, stat.number, stat.label, stat.color);
    }

    draw_rounded_rectangle(
        page,
        Point::inches(0.5, 3.5),
        Size::inches(6.0, 3.7),
        Palette::White,
    );
    text(
        page,
        Point::inches(0.8, 3.65),
        (5.0, 0.4),
        content.ledger_title,
        bold(18.0, Palette::Dark),
        Alignment::Left,
    );
    ledger_table(
        page,
        &LedgerTable {
            origin: Point::inches(0.8, 4.15),
            column_widths: &[inches(2.0), inches(1.7), inches(1.7)],
            row_pitch: inches(0.42),
            row_height: inches(0.38),
            font_size: 12.0,
            rows: content.ledger,
            total_rows: content.total_rows,
            banding: Banding::LEDGER,
            competitor_column: Some(2),
        },
    );

    draw_rounded_rectangle(
        page,
        Point::inches(6.8, 3.5),
        Size::inches(5.8, 3.7),
        Palette::Primary,
    );
    text(
        page,
        Point::inches(7.2, 3.7),
        (5.0, 0.4),
        content.returns_title,
        bold(20.0, Palette::White),
        Alignment::Left,
    );

    let returns = Grid::column(Point::inches(7.2, 4.25), inches(0.62));
    for (anchor, item) in returns.anchors(content.returns.len()).zip(content.returns) {
        text(
            page,
            anchor,
            (2.0, 0.3),
            item.title,
            bold(13.0, Palette::White),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 0.0, 0.25),
            (3.0, 0.25),
            item.description,
            plain(11.0, Palette::Light2),
            Alignment::Left,
        );
        text(
            page,
            at(anchor, 3.3, 0.05),
            (2.0, 0.3),
            item.result,
            bold(12.0, Palette::Gold),
            Alignment::Right,
        );
    }
}

/// Plan cards with a colored price cap and a feature checklist.
pub fn pricing(page: &mut Page, content: &Pricing) {
    begin(page, &content.header);

    let plans = Grid::row(Point::inches(0.5, 1.5), inches(4.2));
    for (i, (anchor, plan)) in plans
        .anchors(content.plans.len())
        .zip(content.plans)
        .enumerate()
    {
        if content.featured == Some(i) {
            draw_rounded_rectangle(
                page,
                at(anchor, 0.8, -0.15),
                Size::inches(2.2, 0.35),
                Palette::Accent,
            );
            text(
                page,
                at(anchor, 0.8, -0.13),
                (2.2, 0.33),
                content.ribbon,
                bold(12.0, Palette::White),
                Alignment::Center,
            );
        }

        let card = at(anchor, 0.0, 0.15);
        draw_rounded_rectangle(page, card, Size::inches(3.8, 5.7), Palette::White);
        draw_rectangle(page, card, Size::inches(3.8, 1.3), plan.color, None);
        text(
            page,
            at(anchor, 0.0, 0.3),
            (3.8, 0.4),
            plan.name,
            bold(22.0, Palette::White),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.0, 0.75),
            (3.8, 0.4),
            plan.price,
            bold(28.0, Palette::White),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.0, 1.15),
            (3.8, 0.3),
            plan.capacity,
            plain(13.0, Palette::Light2),
            Alignment::Center,
        );

        let checklist = Grid::column(at(anchor, 0.4, 1.7), inches(0.45));
        for (line, feature) in checklist.anchors(plan.features.len()).zip(plan.features) {
            if *feature == NOT_INCLUDED {
                text(
                    page,
                    line,
                    (3.0, 0.35),
                    NOT_INCLUDED,
                    plain(13.0, Palette::Light2),
                    Alignment::Left,
                );
            } else {
                text(
                    page,
                    line,
                    (3.0, 0.35),
                    &format!("✓  {feature}"),
                    plain(13.0, Palette::GreenCheck),
                    Alignment::Left,
                );
            }
        }
    }
}

/// Numbered steps joined by connectors, over a row of promise cards.
pub fn onboarding(page: &mut Page, content: &Onboarding) {
    begin(page, &content.header);

    let steps = Grid::row(Point::inches(0.5, 2.2), inches(3.3));
    let last = content.steps.len().saturating_sub(1);
    for (i, (anchor, step)) in steps
        .anchors(content.steps.len())
        .zip(content.steps)
        .enumerate()
    {
        draw_circle(page, at(anchor, 1.05, 0.0), inches(1.0), step.color);
        text(
            page,
            at(anchor, 1.05, 0.1),
            (1.0, 0.8),
            step.number,
            bold(36.0, Palette::White),
            Alignment::Center,
        );
        if i < last {
            draw_rectangle(
                page,
                at(anchor, 2.15, 0.45),
                Size::inches(1.3, 0.04),
                step.color,
                None,
            );
        }
        text(
            page,
            at(anchor, 0.0, 1.2),
            (3.1, 0.4),
            step.title,
            bold(22.0, step.color),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.2, 1.7),
            (2.7, 1.0),
            step.description,
            plain(14.0, Palette::TextLight),
            Alignment::Center,
        );
    }

    let promises = Grid::row(Point::inches(0.5, 5.3), inches(3.2));
    for (anchor, promise) in promises.anchors(content.promises.len()).zip(content.promises) {
        draw_rounded_rectangle(page, anchor, Size::inches(2.9, 1.2), Palette::White);
        text(
            page,
            at(anchor, 0.0, 0.15),
            (2.9, 0.35),
            promise.title,
            bold(15.0, Palette::GreenCheck),
            Alignment::Center,
        );
        text(
            page,
            at(anchor, 0.0, 0.55),
            (2.9, 0.35),
            promise.description,
            plain(12.0, Palette::TextLight),
            Alignment::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::content;
    use super::*;
    use crate::document::{SLIDE_HEIGHT, SLIDE_WIDTH};
    use crate::graphics::ShapeKind;

    fn page() -> Page {
        Page::new(SLIDE_WIDTH, SLIDE_HEIGHT)
    }

    fn texts(page: &Page) -> Vec<String> {
        page.shapes().iter().filter_map(|s| s.text()).collect()
    }

    #[test]
    fn test_poster_draws_every_element() {
        let mut page = page();
        poster(&mut page, &content::COVER);

        assert_eq!(page.background(), Some(Palette::Dark.color()));
        assert_eq!(page.shapes().len(), content::COVER.elements.len());
        assert_eq!(page.shapes()[0].kind_name(), "oval");
        assert_eq!(page.shapes()[2].frame.width(), SLIDE_WIDTH);
        assert_eq!(page.first_text().as_deref(), Some("94Cram"));
    }

    #[test]
    fn test_accent_card_grid_layout() {
        let mut page = page();
        accent_card_grid(&mut page, &content::PAIN_POINTS);

        // header (4) + six cards of five shapes
        assert_eq!(page.shapes().len(), 4 + 6 * 5);
        let fifth_card = &page.shapes()[4 + 4 * 5];
        assert!((fifth_card.frame.x() - inches(4.7)).abs() < 1e-9);
        assert!((fifth_card.frame.y() - inches(4.4)).abs() < 1e-9);
        assert_eq!(page.background(), Some(Palette::Light.color()));
    }

    #[test]
    fn test_dark_card_grid_uses_dark_header() {
        let mut page = page();
        dark_card_grid(&mut page, &content::SECURITY);
        assert_eq!(page.background(), Some(Palette::Dark.color()));
        assert_eq!(
            page.shapes()[0].fill().map(|fill| fill.color),
            Some(Palette::Accent.color())
        );
        assert_eq!(page.shapes().len(), 4 + 6 * 4);
    }

    #[test]
    fn test_system_columns_banner() {
        let mut page = page();
        system_columns(&mut page, &content::SOLUTION);
        let all = texts(&page);
        assert!(all.contains(&"94inClass".to_string()));
        assert!(all
            .last()
            .is_some_and(|t| t.starts_with("Telegram / LINE")));
    }

    #[test]
    fn test_funnel_bars_are_centered() {
        let mut page = page();
        funnel_overview(&mut page, &content::MANAGE);

        let bars: Vec<_> = page
            .shapes()
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::RoundedRectangle(_)))
            .skip(1)
            .take(content::MANAGE.stages.len())
            .collect();
        let center = inches(1.0 + 2.5);
        for bar in bars {
            assert!((bar.frame.center().x - center).abs() < 1e-9);
        }
        assert!(texts(&page).contains(&"正式報名  25%".to_string()));
    }

    #[test]
    fn test_risk_dashboard_action_prefix() {
        let mut page = page();
        risk_dashboard(&mut page, &content::CHURN_ALERT);
        assert!(texts(&page).contains(&"建議行動：維持現狀 · 定期關懷".to_string()));
    }

    #[test]
    fn test_process_flow_arrows_between_steps() {
        let mut page = page();
        process_flow(&mut page, &content::INVENTORY);

        let arrows: Vec<_> = page
            .shapes()
            .iter()
            .filter(|s| s.text().as_deref() == Some("→"))
            .collect();
        assert_eq!(arrows.len(), content::INVENTORY.steps.len() - 1);
        // 0.3 + 2.9 for the first step
        assert!((arrows[0].frame.x() - inches(3.2)).abs() < 1e-9);
    }

    #[test]
    fn test_chat_modes_footer_positions() {
        let mut page = page();
        chat_modes(&mut page, &content::CHAT_BOT);

        let footer = page
            .shapes()
            .iter()
            .find(|s| s.text().as_deref() == Some(content::CHAT_BOT.parent.footer))
            .unwrap();
        assert!((footer.frame.x() - inches(7.3)).abs() < 1e-9);
        assert!((footer.frame.y() - inches(6.45)).abs() < 1e-9);
    }

    #[test]
    fn test_comparison_marks_every_marker() {
        let mut page = page();
        comparison(&mut page, &content::COMPETITORS);
        let checks = page
            .shapes()
            .iter()
            .filter(|s| s.text().as_deref() == Some("✓"))
            .count();
        assert_eq!(checks, 14);
    }

    #[test]
    fn test_pricing_ribbon_only_on_featured_plan() {
        let mut page = page();
        pricing(&mut page, &content::PLANS);
        let all = texts(&page);
        assert_eq!(all.iter().filter(|t| *t == "⭐ 最受歡迎").count(), 1);
        assert_eq!(all.iter().filter(|t| *t == NOT_INCLUDED).count(), 4);
        assert!(all.contains(&"✓  API 整合".to_string()));
    }

    #[test]
    fn test_onboarding_connectors() {
        let mut page = page();
        onboarding(&mut page, &content::ONBOARDING);
        let connectors = page
            .shapes()
            .iter()
            .filter(|s| {
                matches!(s.kind, ShapeKind::Rectangle(_))
                    && (s.frame.height() - inches(0.04)).abs() < 1e-9
            })
            .count();
        assert_eq!(connectors, content::ONBOARDING.steps.len() - 1);
    }

    #[test]
    fn test_cost_benefit_uses_stat_cards() {
        let mut page = page();
        cost_benefit(&mut page, &content::COST_BENEFIT);
        let all = texts(&page);
        assert!(all.contains(&"99.95%".to_string()));
        assert!(all.contains(&"75%↓".to_string()));
    }
}
