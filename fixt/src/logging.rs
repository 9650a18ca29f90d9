//! Development-time tracing for debugging the engine.
//!
//! Dev diagnostics only: plan construction and panic recovery emit `tracing`
//! events, routed to stderr via `RUST_LOG`. Test-facing output goes through
//! the host context's `log` capability instead and is unaffected.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for development logging.
///
/// Reads `RUST_LOG`; defaults to `warn` when unset. Output: stderr, compact.
///
/// # Example
/// ```bash
/// RUST_LOG=fixt=debug cargo test
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
