//! Tantivy index backend for vendor-alias
//!
//! This crate provides:
//! - IndexScanner: read-only `DocumentSource` over an index directory
//! - testing: fixtures that build small, optionally multi-segment indexes
//!
//! # Usage
//!
//! ```ignore
//! use vendor_alias_core::{scan, ScanOptions};
//! use vendor_alias_index::IndexScanner;
//!
//! let scanner = IndexScanner::open("central-lucene-index")?;
//! let report = scan(&scanner, &ScanOptions::new(), &mut stdout, &mut stderr)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod directory;
mod error;
pub mod scanner;
pub mod testing;

pub use scanner::IndexScanner;
