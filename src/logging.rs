//! Logging setup for the `redfin` binary.
//!
//! Wires a `tracing-subscriber` formatter to stderr with an [`EnvFilter`]
//! built from the resolved log directive.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls are no-ops, so tests may
/// install their own subscribers first.
pub(crate) fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
