//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use linkshare_core::config::logging::LoggingConfig;

/// Initialize tracing/logging.
///
/// `RUST_LOG` overrides the configured level. Logs go to stderr so that
/// JSON output on stdout stays machine readable.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
