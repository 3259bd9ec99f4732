//! Tracing subscriber setup for binaries embedding the service.
//!
//! Library code only ever uses the `tracing` macros; installing a subscriber
//! is the embedding binary's job. This helper wires the usual fmt subscriber
//! with an env-filter (`RUST_LOG`), defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Install the default subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
