/// Fonts the writer can reference without embedding.
///
/// Latin runs use the standard Type 1 Helvetica pair. Everything else goes
/// through a Type 0 font over the `MSung-Light` CIDFont (Adobe-CNS1), which
/// PDF viewers resolve to an installed Traditional Chinese face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// CID-keyed Traditional Chinese font
    CjkSung,
}

impl Font {
    /// Get the PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::CjkSung => "MSung-Light",
        }
    }

    /// Key under `/Resources /Font`
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::CjkSung => "F3",
        }
    }

    /// Standard font used for Latin runs.
    pub fn latin(bold: bool) -> Font {
        if bold {
            Font::HelveticaBold
        } else {
            Font::Helvetica
        }
    }

    /// Whether strings for this font are written as 2-byte codes
    pub fn is_cid(&self) -> bool {
        matches!(self, Font::CjkSung)
    }
}
