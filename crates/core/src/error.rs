//! Error types for deck building and serialization.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, writing or reading a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write or rename the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A colour string was not a six-digit hex value.
    #[error("Invalid colour '{0}': expected RRGGBB")]
    InvalidColor(String),

    /// ZIP archive error while packaging or opening a deck.
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML error while emitting or parsing a part.
    #[error("XML error: {0}")]
    Xml(String),

    /// A part required by the package structure is absent.
    #[error("Missing package part: {0}")]
    MissingPart(String),
}
