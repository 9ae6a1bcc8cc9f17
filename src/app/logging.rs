//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Variable checked first for a log filter directive.
pub const LOG_ENV: &str = "ARRAYGEN_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `ARRAYGEN_LOG`, then `RUST_LOG`, then `warn`. A
/// subscriber that is already installed is left in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
