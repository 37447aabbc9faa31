//! Error types for the newsdesk library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for newsdesk operations.
///
/// Rejected engine commands are not errors; they come back as
/// [`Toggle::Rejected`](crate::Toggle::Rejected). This type covers everything
/// around the engine: loading catalogs, reading drafts, and validating a
/// selection for submission.
#[derive(Debug, Error)]
pub enum NewsdeskError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog endpoint failed or returned an unexpected response.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Catalog content is unusable (e.g. duplicate ids).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A selection cannot be submitted as-is.
    #[error("{0}")]
    Validation(String),

    /// A saved draft was built against a different catalog.
    #[error("Draft was saved against catalog {expected}, current catalog is {found}")]
    StaleDraft { expected: String, found: String },

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A string did not name one of the main groups.
    #[error("Unknown main category: {0}")]
    UnknownGroup(String),
}

/// Result type alias for newsdesk operations.
pub type Result<T> = std::result::Result<T, NewsdeskError>;
