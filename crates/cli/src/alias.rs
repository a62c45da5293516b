//! `alias-gen`: build the vendor alias JSON from `index-dump` output.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use vendor_alias_map::{AliasBuilder, AliasMap, AliasReport};

/// Input path meaning "read stdin"
pub const STDIN_MARKER: &str = "-";

/// Run with the parsed flags, reporting on stdout.
pub fn run(matches: &ArgMatches) -> Result<(AliasMap, AliasReport)> {
    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input path")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("missing output path")?;

    let stdout = io::stdout();
    let mut status = stdout.lock();
    run_with(input, output, &mut status)
}

/// Read `input`, write the JSON map to `output`, progress lines to `status`.
pub fn run_with<W: Write>(
    input: &Path,
    output: &Path,
    status: &mut W,
) -> Result<(AliasMap, AliasReport)> {
    writeln!(status, "Reading {}...", input.display())?;

    let mut builder = AliasBuilder::new();
    if input == Path::new(STDIN_MARKER) {
        builder.ingest_reader(io::stdin().lock())?;
    } else {
        let file = File::open(input)
            .with_context(|| format!("opening {}", input.display()))?;
        builder.ingest_reader(BufReader::new(file))?;
    }
    let (map, report) = builder.finish();

    writeln!(status, "Generated {} aliases.", map.len())?;

    let file = File::create(output)
        .with_context(|| format!("creating {}", output.display()))?;
    map.write_json(BufWriter::new(file))?;

    writeln!(status, "Written to {}", output.display())?;
    Ok((map, report))
}
