use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page size {found_width}x{found_height} does not match document size {expected_width}x{expected_height}")]
    PageSizeMismatch {
        expected_width: f64,
        expected_height: f64,
        found_width: f64,
        found_height: f64,
    },

    #[error("Unknown shape: {0}")]
    UnknownShape(usize),

    #[error("Shape {0} is not a text box")]
    NotATextBox(usize),

    #[error("Compression error: {0}")]
    Compression(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
