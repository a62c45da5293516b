//! Shared helpers for integration tests

use std::path::Path;
use vendor_alias::testing::IndexFixture;
use vendor_alias::{scan, IndexScanner, ScanOptions, ScanReport};

/// Build an index from `fixture` in a fresh temp dir and scan it quietly.
///
/// Returns the report and the stdout lines.
pub fn scan_fixture(fixture: IndexFixture) -> (ScanReport, Vec<String>) {
    let tmp = tempfile::tempdir().expect("tempdir");
    fixture.write(tmp.path()).expect("write fixture");
    scan_dir(tmp.path())
}

/// Scan the index in `dir` quietly.
pub fn scan_dir(dir: &Path) -> (ScanReport, Vec<String>) {
    let scanner = IndexScanner::open(dir).expect("open index");
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let report = scan(
        &scanner,
        &ScanOptions::new().quiet(true),
        &mut out,
        &mut diag,
    )
    .expect("scan");
    assert!(diag.is_empty(), "quiet scan wrote diagnostics");

    let lines = String::from_utf8(out)
        .expect("utf8 output")
        .lines()
        .map(String::from)
        .collect();
    (report, lines)
}
