//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the process.
///
/// Filtering is controlled via `RUST_LOG` and defaults to `info`. Output is
/// compact single-line text; this app is read in a terminal, not by a log
/// collector.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(true)
        .try_init();
}
