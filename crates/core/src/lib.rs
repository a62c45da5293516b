//! Core types and scan loop for vendor-alias
//!
//! This crate defines everything that does not depend on a particular index
//! library:
//! - Error: Error type hierarchy
//! - StoredDocument: library-neutral view of one stored record
//! - Coordinate: group/artifact pair and its extraction rules
//! - GroupFilter: the group id allowlist
//! - DocumentSource: trait implemented by index backends
//! - ScanOptions / scan: the sequential scan and its diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coordinate;
pub mod document;
pub mod error;
pub mod filter;
pub mod options;
pub mod scan;
pub mod source;

// Re-export commonly used types
pub use coordinate::{extract, Coordinate, FieldNames, COMPOSITE_SEPARATOR};
pub use document::{StoredDocument, StoredField, StoredValue};
pub use error::{Error, Result};
pub use filter::{GroupFilter, GroupRule, DEFAULT_PREFIXES, DEFAULT_SUBSTRINGS};
pub use options::{ScanOptions, DEFAULT_PROGRESS_INTERVAL};
pub use scan::{dump_document, scan, write_opening, ScanReport, PROGRESS_MARKER};
pub use source::DocumentSource;
