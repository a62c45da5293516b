//! Clap command definitions.
//!
//! Builds the `clap::Command` for each binary, plus the shared parse step
//! that maps usage errors to exit status 1.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process;

/// Exit status for usage and runtime failures
pub const EXIT_FAILURE: i32 = 1;

/// Default input file of `alias-gen`
pub const DEFAULT_ALIAS_INPUT: &str = "eclipse_artifacts.txt";

/// Default output file of `alias-gen`
pub const DEFAULT_ALIAS_OUTPUT: &str = "vendor-alias.json";

/// Build the `index-dump` command.
pub fn build_dump_cli() -> Command {
    Command::new("index-dump")
        .about("Print group|artifact pairs of allowlisted groups from a search index")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("index")
                .value_name("INDEX_DIR")
                .help("Path to the unpacked index directory")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("No diagnostics or progress on stderr (matches are still printed)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-debug-dump")
                .long("no-debug-dump")
                .help("Do not print the fields of document 0")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress-every")
                .long("progress-every")
                .value_name("N")
                .help("Documents between progress markers")
                .default_value("5000000")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(verbose_arg())
}

/// Build the `alias-gen` command.
pub fn build_alias_cli() -> Command {
    Command::new("alias-gen")
        .about("Build an artifact -> group alias map from index-dump output")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("group|artifact lines, '-' for stdin")
                .default_value(DEFAULT_ALIAS_INPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("JSON file to write")
                .default_value(DEFAULT_ALIAS_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(verbose_arg())
}

fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .long("verbose")
        .short('v')
        .help("Log more (repeat for debug)")
        .action(ArgAction::Count)
}

/// Parse process arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit(cmd: Command) -> ArgMatches {
    parse_from_or_exit(cmd, std::env::args_os())
}

/// Like [`parse_or_exit`] with explicit arguments.
pub fn parse_from_or_exit<I, T>(cmd: Command, args: I) -> ArgMatches
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match cmd.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() { EXIT_FAILURE } else { 0 };
            process::exit(code);
        }
    }
}
