//! `index-dump`: scan an index and print allowlisted coordinates.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use vendor_alias_core::{scan, write_opening, ScanOptions, ScanReport};
use vendor_alias_index::IndexScanner;

/// Translate parsed flags into scan options.
pub fn options_from_matches(matches: &ArgMatches) -> ScanOptions {
    let mut options = ScanOptions::new()
        .quiet(matches.get_flag("quiet"))
        .debug_dump(!matches.get_flag("no-debug-dump"));
    if let Some(n) = matches.get_one::<u64>("progress-every") {
        options = options.progress_interval(*n);
    }
    options
}

/// Run the dump against the process stdout/stderr.
pub fn run(matches: &ArgMatches) -> Result<ScanReport> {
    let path = matches
        .get_one::<PathBuf>("index")
        .context("missing index path")?;
    let options = options_from_matches(matches);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    run_with(path, &options, &mut out, &mut diag)
}

/// Open `path` and scan it, writing matches to `out` and diagnostics to `diag`.
///
/// The scanner is dropped before returning, on success and on error.
pub fn run_with<O: Write, D: Write>(
    path: &Path,
    options: &ScanOptions,
    out: &mut O,
    diag: &mut D,
) -> Result<ScanReport> {
    options.validate()?;
    if !options.quiet {
        write_opening(diag, path)?;
    }

    let scanner = IndexScanner::open(path)?;
    let report = scan(&scanner, options, out, diag)
        .with_context(|| format!("scanning {}", path.display()))?;
    Ok(report)
}
