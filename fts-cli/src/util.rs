//! Logging and panic-hook setup: a `tracing` subscriber and a panic hook that
//! routes panics through it instead of leaving them on bare stderr.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber reading `RUST_LOG`, defaulting to `info`.
pub fn setup_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

/// Routes panics through `tracing::error!` so they land wherever logs do,
/// instead of only on stderr.
pub fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
