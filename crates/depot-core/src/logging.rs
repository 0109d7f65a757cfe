//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so the TUI and table output own stdout. `RUST_LOG`
//! controls the filter; default level is `warn` to keep the CLI quiet.

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global subscriber. Safe to call more than once; a second
/// call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
