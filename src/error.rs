// File: src/error.rs
use std::io;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request itself failed (DNS, TLS, connection reset, ...).
    #[error("Network request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("Server returned {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Zip archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The archive was readable but did not contain the expected file.
    #[error("Archive member '{0}' not found")]
    MemberNotFound(String),

    /// A Gutenberg start or end marker line was missing from the corpus.
    #[error("Corpus marker not found: {0}")]
    MissingMarker(&'static str),

    #[error("Failed to persist cache file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Two sources would share a file in the data directory, or a source
    /// is otherwise unusable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
