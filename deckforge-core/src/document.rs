use crate::error::{DeckError, Result};
use crate::geometry::POINTS_PER_INCH;
use crate::page::Page;
use crate::writer::PdfWriter;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Width of a 16:9 widescreen slide, 13.333 in.
pub const SLIDE_WIDTH: f64 = 13.333 * POINTS_PER_INCH;

/// Height of a 16:9 widescreen slide, 7.5 in.
pub const SLIDE_HEIGHT: f64 = 7.5 * POINTS_PER_INCH;

/// A deck of equally sized pages plus metadata, serialized once.
///
/// # Example
///
/// ```rust
/// use deckforge::{Color, Document};
///
/// let mut doc = Document::widescreen();
/// doc.set_title("Quarterly review");
///
/// let mut page = doc.new_page();
/// page.set_background(Color::white());
/// doc.add_page(page)?;
///
/// let mut buffer = Vec::new();
/// doc.write(&mut buffer)?;
/// assert!(buffer.starts_with(b"%PDF-1.7"));
/// # Ok::<(), deckforge::DeckError>(())
/// ```
pub struct Document {
    width: f64,
    height: f64,
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
    compress: bool,
}

/// Metadata for the document information dictionary.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    /// Software that created the original content
    pub creator: Option<String>,
    /// Software that produced the file
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: Some("deckforge".to_string()),
            producer: Some(format!("deckforge v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(now),
            modification_date: Some(now),
        }
    }
}

impl Document {
    /// Creates an empty document whose pages all measure `width` × `height` points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
            metadata: DocumentMetadata::default(),
            compress: cfg!(feature = "compression"),
        }
    }

    /// 13.333 × 7.5 in, the 16:9 presentation size.
    pub fn widescreen() -> Self {
        Self::new(SLIDE_WIDTH, SLIDE_HEIGHT)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// A blank page of the document's size, not yet part of the document.
    pub fn new_page(&self) -> Page {
        Page::new(self.width, self.height)
    }

    /// Appends a finished page.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::PageSizeMismatch`] when the page was not created at
    /// the document's size.
    pub fn add_page(&mut self, page: Page) -> Result<()> {
        if page.width() != self.width || page.height() != self.height {
            return Err(DeckError::PageSizeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                found_width: page.width(),
                found_height: page.height(),
            });
        }
        debug!(
            page = self.pages.len() + 1,
            shapes = page.shapes().len(),
            "added page"
        );
        self.pages.push(page);
        Ok(())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Gets the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Enables or disables Flate compression of content streams.
    ///
    /// Has no effect when the crate is built without the `compression` feature.
    pub fn set_compress(&mut self, compress: bool) {
        self.compress = compress && cfg!(feature = "compression");
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.metadata.keywords = Some(keywords.into());
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.metadata.producer = Some(producer.into());
    }

    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    pub fn set_modification_date(&mut self, date: DateTime<Utc>) {
        self.metadata.modification_date = Some(date);
    }

    /// Saves the document to a file, replacing any existing file.
    ///
    /// Dates are written as set; saving twice with the same metadata
    /// produces identical bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = PdfWriter::new(path)?;
        writer.write_document(self)?;
        info!(
            path = %path.display(),
            pages = self.pages.len(),
            bytes = writer.bytes_written(),
            "saved document"
        );
        Ok(())
    }

    /// Writes the document to a buffer.
    pub fn write(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let mut writer = PdfWriter::new_with_writer(buffer);
        writer.write_document(self)?;
        Ok(())
    }
}
