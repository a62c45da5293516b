//! Integration Tests
//!
//! End-to-end tests over real on-disk indexes, organized by concern:
//! - Extraction: direct fields vs composite fallback
//! - Filtering: allowlist behaviour through a full scan
//! - Pipeline: scan output folded into an alias map

mod common;

mod extraction;
mod filtering;
mod pipeline;
