//! Logging setup for the fruit selector binary.
//!
//! The filter comes from `RUST_LOG` first, then the settings file, then
//! [`DEFAULT_LOG_FILTER`]. Settings are loaded before the global subscriber
//! exists, so that load runs under a scoped bootstrap subscriber and its
//! fallback warnings still reach stderr.

use crate::constants::DEFAULT_LOG_FILTER;
use crate::settings::Settings;
use tracing_subscriber::EnvFilter;

/// Filter used before settings are known.
pub fn bootstrap_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Filter for a loaded configuration. An unparsable `log_filter` falls back
/// to the default.
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Run `f` with a temporary stderr subscriber on this thread.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(bootstrap_filter())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber for the rest of the process.
pub fn init(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .init();
}
