//! Tracing subscriber setup.
//!
//! Structured log events go to stderr. The default level is `warn`, so a
//! plain run only shows the human-readable diagnostics.

use tracing::Level;

/// Map the `-v` count to a maximum level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
