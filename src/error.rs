//! Error types for rs-jparser.
//!
//! Heuristic stages never fail; only input and configuration problems
//! surface here.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markup could not produce a document tree.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// A configured regular expression failed to compile or lacks the
    /// capture group the caller relies on.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// The configured base URL is not an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Serializing an extraction result failed.
    #[error("Extraction failed: {0}")]
    ExtractionError(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
