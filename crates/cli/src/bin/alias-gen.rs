//! alias-gen: build an artifact -> group alias map from index-dump output.

use std::process;

use vendor_alias_cli::{alias, build_alias_cli, init_logging, parse_or_exit, EXIT_FAILURE};

fn main() {
    let matches = parse_or_exit(build_alias_cli());
    init_logging(matches.get_count("verbose"));

    if let Err(e) = alias::run(&matches) {
        eprintln!("Error: {:#}", e);
        process::exit(EXIT_FAILURE);
    }
}
