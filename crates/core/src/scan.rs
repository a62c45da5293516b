//! Sequential index scan
//!
//! Walks every ordinal of a [`DocumentSource`] in order, extracts the
//! coordinate of each document and writes `group|artifact` for every group
//! accepted by the filter. Human-readable diagnostics go to a separate writer.
//!
//! Output is flushed before an error is returned, so matches written ahead
//! of a failing document stay visible. A closed output (`BrokenPipe`) ends
//! the scan early without an error.

use crate::coordinate::extract;
use crate::document::StoredDocument;
use crate::error::Result;
use crate::options::ScanOptions;
use crate::source::DocumentSource;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Character written once per progress interval
pub const PROGRESS_MARKER: &str = ".";

/// Counters from a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Document count reported by the source
    pub total: u64,
    /// Documents actually fetched
    pub scanned: u64,
    /// Output lines written
    pub matched: u64,
}

/// Write the "opening" banner for `path`
pub fn write_opening<D: Write + ?Sized>(diag: &mut D, path: &Path) -> Result<()> {
    writeln!(diag, "Opening index at: {}", path.display())?;
    Ok(())
}

/// Scan every document of `source`
pub fn scan<S, O, D>(
    source: &S,
    options: &ScanOptions,
    out: &mut O,
    diag: &mut D,
) -> Result<ScanReport>
where
    S: DocumentSource + ?Sized,
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    options.validate()?;

    let mut report = ScanReport {
        total: source.max_doc(),
        ..ScanReport::default()
    };

    if !options.quiet {
        writeln!(diag, "Total documents to scan: {}", report.total)?;
    }

    let result = scan_documents(source, options, out, diag, &mut report);
    let flushed = out.flush();
    let outcome = match (result?, flushed) {
        (_, Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => Outcome::OutputClosed,
        (_, Err(e)) => return Err(e.into()),
        (outcome, Ok(())) => outcome,
    };

    if outcome == Outcome::OutputClosed {
        info!(
            target: "vendor_alias::scan",
            scanned = report.scanned,
            matched = report.matched,
            "Output closed, scan stopped"
        );
        return Ok(report);
    }

    if !options.quiet {
        writeln!(diag)?;
        writeln!(diag, "Done.")?;
    }
    diag.flush()?;

    info!(
        target: "vendor_alias::scan",
        location = %source.location().display(),
        total = report.total,
        scanned = report.scanned,
        matched = report.matched,
        "Scan finished"
    );

    Ok(report)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Finished,
    OutputClosed,
}

fn scan_documents<S, O, D>(
    source: &S,
    options: &ScanOptions,
    out: &mut O,
    diag: &mut D,
    report: &mut ScanReport,
) -> Result<Outcome>
where
    S: DocumentSource + ?Sized,
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    for ordinal in 0..report.total {
        let doc = source.document(ordinal)?;
        report.scanned += 1;

        if ordinal == 0 && options.debug_dump && !options.quiet {
            dump_document(diag, &doc)?;
        }

        if let Some(coordinate) = extract(&doc, &options.fields) {
            if options.filter.matches(&coordinate.group) {
                match writeln!(out, "{}", coordinate) {
                    Ok(()) => report.matched += 1,
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                        return Ok(Outcome::OutputClosed)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        if ordinal > 0 && ordinal % options.progress_interval == 0 {
            debug!(target: "vendor_alias::scan", ordinal, matched = report.matched, "Progress");
            if !options.quiet {
                write!(diag, "{}", PROGRESS_MARKER)?;
                diag.flush()?;
            }
        }
    }
    Ok(Outcome::Finished)
}

/// Write every field of `doc` as `Name: <name> | Value: <value>`
pub fn dump_document<D: Write + ?Sized>(diag: &mut D, doc: &StoredDocument) -> Result<()> {
    writeln!(diag, "--- DEBUG: Fields in Document {} ---", doc.ordinal)?;
    for field in doc.iter() {
        writeln!(diag, "Name: {} | Value: {}", field.name, field.value)?;
    }
    writeln!(diag, "-----------------------------------")?;
    Ok(())
}
