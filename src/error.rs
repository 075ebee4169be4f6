//! Error types for pospdf library.

use std::io;
use thiserror::Error;

/// Result type alias for pospdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a safety-plan document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input payload cannot be decoded into a document request.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Error encoding PDF objects or serializing the document.
    #[error("PDF generation error: {0}")]
    Pdf(String),

    /// Error exporting the document story.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
