//! vendor-alias command line tools
//!
//! Two binaries share this library:
//! - **index-dump** `<INDEX_DIR>`: prints `group|artifact` for allowlisted groups
//! - **alias-gen** `[INPUT] [-o FILE]`: turns that output into an alias JSON map
//!
//! ```text
//! index-dump central-index > eclipse_artifacts.txt
//! alias-gen eclipse_artifacts.txt -o vendor-alias.json
//! ```

pub mod alias;
pub mod commands;
pub mod dump;
pub mod logging;

pub use commands::{build_alias_cli, build_dump_cli, parse_or_exit, EXIT_FAILURE};
pub use logging::init_logging;
