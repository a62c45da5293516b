//! vendor-alias - allowlisted Maven coordinates from a search index
//!
//! Scans every stored document of a pre-built index, extracts the group and
//! artifact id (from the `g`/`a` fields, or the `u` composite field as a
//! fallback) and reports the pairs whose group matches a fixed allowlist.
//! The reported pairs can then be folded into an artifact → group alias map.
//!
//! # Quick Start
//!
//! ```ignore
//! use vendor_alias::{scan, AliasBuilder, IndexScanner, ScanOptions};
//!
//! let scanner = IndexScanner::open("central-index")?;
//! let mut lines = Vec::new();
//! scan(&scanner, &ScanOptions::new().quiet(true), &mut lines, &mut std::io::sink())?;
//!
//! let mut builder = AliasBuilder::new();
//! builder.ingest_reader(lines.as_slice())?;
//! let (aliases, _) = builder.finish();
//! ```
//!
//! # Architecture
//!
//! - `vendor-alias-core`: document model, extraction, filter, scan loop
//! - `vendor-alias-index`: tantivy-backed `DocumentSource`
//! - `vendor-alias-map`: alias map generation
//! - `vendor-alias-cli`: the `index-dump` and `alias-gen` binaries

pub use vendor_alias_core::*;
pub use vendor_alias_index::{testing, IndexScanner};
pub use vendor_alias_map::{check, AliasBuilder, AliasMap, AliasReport, SkipReason, SEED_ALIASES};
