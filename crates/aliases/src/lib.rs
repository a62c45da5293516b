//! Vendor alias map generation
//!
//! Turns the `group|artifact` lines of an index scan into a JSON object
//! mapping artifact ids to group ids. Consumers use it to resolve the vendor
//! of a bundle that is only known by its artifact (symbolic) name.
//!
//! # Usage
//!
//! ```
//! use vendor_alias_map::AliasBuilder;
//!
//! let mut builder = AliasBuilder::new();
//! builder.ingest_line("org.eclipse.jetty|jetty-server");
//! let (map, report) = builder.finish();
//! assert_eq!(map.get("jetty-server"), Some("org.eclipse.jetty"));
//! assert_eq!(report.accepted, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod map;
pub mod rules;

pub use map::{AliasBuilder, AliasMap, AliasReport, SEED_ALIASES};
pub use rules::{check, SkipReason};
