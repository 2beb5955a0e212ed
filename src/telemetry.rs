//! Tracing initialization.

use tracing_subscriber::{EnvFilter, fmt};

use docshelf_core::config::logging::LoggingConfig;

/// Initialize tracing/logging.
///
/// `RUST_LOG` wins over the configured level when set. Call once per
/// process; a second call panics inside the subscriber registry.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
