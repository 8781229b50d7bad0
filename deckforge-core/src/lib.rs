//! # deckforge
//!
//! A declarative slide-layout renderer. Decks are composed from typed content
//! blocks placed at absolute positions on fixed-size pages, then written once
//! as a PDF.
//!
//! ## Features
//!
//! - **Shape model**: rectangles, rounded rectangles, ovals and multi-paragraph
//!   text boxes on a top-left-origin canvas measured in points
//! - **Layout helpers**: primitives, composite blocks (icon card, stat card, page
//!   header, feature bullet), grid placement and banded comparison tables
//! - **Mixed-script text**: Latin runs in the standard Type1 fonts, CJK and other
//!   scripts through a predefined CID font, with word wrapping and alignment
//! - **Deterministic output**: identical input and metadata produce identical bytes
//! - **Reference deck**: the 15-slide 94Cram product deck as static content tables
//!
//! ## Quick Start
//!
//! ```rust
//! use deckforge::layout::{draw_rounded_rectangle, draw_text, stat_card};
//! use deckforge::{Alignment, Document, Palette, Point, Result, Size, TextStyle};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::widescreen();
//! doc.set_title("Quarterly review");
//!
//! let mut page = doc.new_page();
//! page.set_background(Palette::Light.color());
//!
//! draw_rounded_rectangle(&mut page, Point::inches(0.5, 0.5), Size::inches(6.0, 1.0), Palette::Primary);
//! draw_text(
//!     &mut page,
//!     Point::inches(0.5, 0.6),
//!     Size::inches(6.0, 0.8),
//!     "智慧補教 Revenue",
//!     &TextStyle::new(28.0, Palette::White).bold(),
//!     Alignment::Center,
//! );
//! stat_card(&mut page, Point::inches(0.5, 2.0), "99.95%", "Uptime", Palette::Secondary);
//!
//! doc.add_page(page)?;
//!
//! let mut buffer = Vec::new();
//! doc.write(&mut buffer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Document session: page size, page list, metadata, saving
//! - [`page`] - Pages and their display lists
//! - [`graphics`] - Colors, palette, shapes and path construction
//! - [`text`] - Text styles, paragraphs, font selection and line layout
//! - [`layout`] - Drawing helpers used to build slides
//! - [`deck`] - The reference deck content and its page builders
//! - [`objects`] / [`writer`] - Low-level PDF objects and serialization

pub mod deck;
pub mod document;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod layout;
pub mod objects;
pub mod page;
pub mod text;
pub mod writer;

pub use document::{Document, DocumentMetadata, SLIDE_HEIGHT, SLIDE_WIDTH};
pub use error::{DeckError, Result};
pub use geometry::{inches, Point, Rect, Size, POINTS_PER_INCH};
pub use graphics::{Color, Fill, GraphicsContext, Palette, Shape, ShapeKind, ROUNDED_CORNER_RATIO};
pub use page::{Page, ShapeId};
pub use text::{Alignment, Font, Insets, Paragraph, TextContext, TextFrame, TextStyle};

/// Current version of deckforge
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PDF version written by [`writer::PdfWriter`]
pub const PDF_VERSION: &str = "1.7";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_document() {
        let doc = Document::widescreen();
        assert_eq!(doc.pages.len(), 0);
    }

    #[test]
    fn test_create_page() {
        let page = Page::new(SLIDE_WIDTH, SLIDE_HEIGHT);
        assert_eq!(page.height(), 540.0);
        assert!(page.shapes().is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(PDF_VERSION, "1.7");
    }
}
