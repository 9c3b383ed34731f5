//! Log subscriber construction.
//!
//! The subscriber is built by the caller and installed for the duration of a
//! run (`tracing::subscriber::with_default`) rather than set globally.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Timestamped, leveled lines on stdout. `RUST_LOG` overrides the level.
pub fn stdout_subscriber() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(false)
        .finish()
}
