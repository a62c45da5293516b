//! index-dump: print group|artifact pairs of allowlisted groups from an index.

use std::process;

use vendor_alias_cli::{build_dump_cli, dump, init_logging, parse_or_exit, EXIT_FAILURE};

fn main() {
    // Usage errors exit here, before any index is opened.
    let matches = parse_or_exit(build_dump_cli());
    init_logging(matches.get_count("verbose"));

    if let Err(e) = dump::run(&matches) {
        eprintln!("Error: {:#}", e);
        process::exit(EXIT_FAILURE);
    }
}
