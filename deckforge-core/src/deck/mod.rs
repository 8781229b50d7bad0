//! The reference deck: static slide content, the builders that draw it and the
//! assembly of slides into a [`Document`].
//!
//! ```rust
//! use deckforge::deck;
//!
//! let doc = deck::build_reference_deck()?;
//! assert_eq!(doc.page_count(), 15);
//! # Ok::<(), deckforge::DeckError>(())
//! ```

pub mod builders;
pub mod content;

use crate::document::Document;
use crate::error::Result;
use crate::graphics::Palette;
use crate::page::Page;
use tracing::debug;

/// File name of the reference deck, written next to the executable by the CLI.
pub const OUTPUT_FILE_NAME: &str = "94Cram_行銷簡報_Demo.pdf";

/// One slide: a page builder paired with its content table.
#[derive(Debug, Clone, Copy)]
pub enum Slide {
    Poster(&'static content::Poster),
    AccentCards(&'static content::AccentCardGrid),
    Systems(&'static content::SystemOverview),
    Funnel(&'static content::FunnelOverview),
    RiskDashboard(&'static content::RiskDashboard),
    Heroes(&'static content::HeroShowcase),
    ProcessFlow(&'static content::ProcessFlow),
    ChatModes(&'static content::ChatModes),
    Comparison(&'static content::Comparison),
    Architecture(&'static content::Architecture),
    DarkCards(&'static content::CardGrid),
    CostBenefit(&'static content::CostBenefit),
    Pricing(&'static content::Pricing),
    Onboarding(&'static content::Onboarding),
}

impl Slide {
    /// Draws the slide onto a blank page.
    pub fn render(&self, page: &mut Page) {
        match *self {
            Slide::Poster(poster) => builders::poster(page, poster),
            Slide::AccentCards(grid) => builders::accent_card_grid(page, grid),
            Slide::Systems(overview) => builders::system_columns(page, overview),
            Slide::Funnel(funnel) => builders::funnel_overview(page, funnel),
            Slide::RiskDashboard(dashboard) => builders::risk_dashboard(page, dashboard),
            Slide::Heroes(showcase) => builders::hero_showcase(page, showcase),
            Slide::ProcessFlow(flow) => builders::process_flow(page, flow),
            Slide::ChatModes(modes) => builders::chat_modes(page, modes),
            Slide::Comparison(comparison) => builders::comparison(page, comparison),
            Slide::Architecture(architecture) => builders::architecture(page, architecture),
            Slide::DarkCards(grid) => builders::dark_card_grid(page, grid),
            Slide::CostBenefit(cost) => builders::cost_benefit(page, cost),
            Slide::Pricing(pricing) => builders::pricing(page, pricing),
            Slide::Onboarding(onboarding) => builders::onboarding(page, onboarding),
        }
    }

    /// Short layout name used in logs and outlines.
    pub fn kind(&self) -> &'static str {
        match self {
            Slide::Poster(_) => "poster",
            Slide::AccentCards(_) => "accent-cards",
            Slide::Systems(_) => "systems",
            Slide::Funnel(_) => "funnel",
            Slide::RiskDashboard(_) => "risk-dashboard",
            Slide::Heroes(_) => "heroes",
            Slide::ProcessFlow(_) => "process-flow",
            Slide::ChatModes(_) => "chat-modes",
            Slide::Comparison(_) => "comparison",
            Slide::Architecture(_) => "architecture",
            Slide::DarkCards(_) => "dark-cards",
            Slide::CostBenefit(_) => "cost-benefit",
            Slide::Pricing(_) => "pricing",
            Slide::Onboarding(_) => "onboarding",
        }
    }
}

/// The fifteen slides of the reference deck, in order.
pub fn reference_slides() -> [Slide; 15] {
    [
        Slide::Poster(&content::COVER),
        Slide::AccentCards(&content::PAIN_POINTS),
        Slide::Systems(&content::SOLUTION),
        Slide::Funnel(&content::MANAGE),
        Slide::RiskDashboard(&content::CHURN_ALERT),
        Slide::Heroes(&content::ATTENDANCE),
        Slide::ProcessFlow(&content::INVENTORY),
        Slide::ChatModes(&content::CHAT_BOT),
        Slide::Comparison(&content::COMPETITORS),
        Slide::Architecture(&content::TECHNOLOGY),
        Slide::DarkCards(&content::SECURITY),
        Slide::CostBenefit(&content::COST_BENEFIT),
        Slide::Pricing(&content::PLANS),
        Slide::Onboarding(&content::ONBOARDING),
        Slide::Poster(&content::CLOSING),
    ]
}

/// Renders each slide onto its own widescreen page.
pub fn assemble(slides: &[Slide]) -> Result<Document> {
    let mut doc = Document::widescreen();
    for (index, slide) in slides.iter().enumerate() {
        let mut page = doc.new_page();
        slide.render(&mut page);
        debug!(
            slide = index + 1,
            kind = slide.kind(),
            shapes = page.shapes().len(),
            "rendered slide"
        );
        doc.add_page(page)?;
    }
    Ok(doc)
}

/// Assembles the reference deck with its document metadata.
pub fn build_reference_deck() -> Result<Document> {
    let mut doc = assemble(&reference_slides())?;
    doc.set_title("94Cram 智慧補教管理生態系");
    doc.set_author("94Cram");
    doc.set_subject("產品介紹簡報");
    doc.set_keywords("94Cram, 補教管理, 智慧點名, 庫存管理, AI");
    Ok(doc)
}

/// Summary of one rendered slide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlideOutline {
    /// 1-based slide number
    pub number: usize,
    pub kind: &'static str,
    /// Background as a palette name when it is one
    pub background: Option<Palette>,
    pub shapes: usize,
    pub first_text: Option<String>,
}

/// Renders every slide and summarizes the result.
pub fn outline(slides: &[Slide]) -> Result<Vec<SlideOutline>> {
    let doc = assemble(slides)?;
    Ok(slides
        .iter()
        .zip(doc.pages())
        .enumerate()
        .map(|(index, (slide, page))| SlideOutline {
            number: index + 1,
            kind: slide.kind(),
            background: page.background().and_then(Palette::from_color),
            shapes: page.shapes().len(),
            first_text: page.first_text(),
        })
        .collect())
}
