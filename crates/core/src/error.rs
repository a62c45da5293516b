//! Error types for vendor-alias
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vendor-alias operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for scanning an index and building alias maps
#[derive(Debug, Error)]
pub enum Error {
    /// Index path does not exist or is not a directory
    #[error("Index not found: {}", .0.display())]
    IndexNotFound(PathBuf),

    /// The index library refused to open the directory
    #[error("Failed to open index at {}: {reason}", path.display())]
    IndexOpen {
        /// Directory that was opened
        path: PathBuf,
        /// Library-reported cause
        reason: String,
    },

    /// Fetching the stored fields of a document failed
    #[error("Failed to read document {ordinal}: {reason}")]
    DocumentRead {
        /// Global document ordinal
        ordinal: u64,
        /// Library-reported cause
        reason: String,
    },

    /// Ordinal past the end of the index
    #[error("Document ordinal {ordinal} out of range (max_doc = {max_doc})")]
    OrdinalOutOfRange {
        /// Requested ordinal
        ordinal: u64,
        /// Total document count
        max_doc: u64,
    },

    /// Invalid option value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (output streams, input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl Error {
    /// Whether the error came from the index rather than the caller or the output streams
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Error::IndexNotFound(_)
                | Error::IndexOpen { .. }
                | Error::DocumentRead { .. }
                | Error::OrdinalOutOfRange { .. }
        )
    }
}
