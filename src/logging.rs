//! Logging setup
//!
//! Installs the global tracing subscriber from `LoggingConfig`. `RUST_LOG`
//! takes precedence over the configured level.

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` if set, else `hvac_dashboard=<level>`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hvac_dashboard={}", config.level)))
}

/// Initialize the global subscriber
///
/// Logs go to stderr, or to `config.file` when set. Format is JSON when
/// `config.format` is `json`, human-readable otherwise.
pub fn init_logging(config: &LoggingConfig) -> std::io::Result<()> {
    let json = config.format.eq_ignore_ascii_case("json");
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let writer = Mutex::new(file);
            if json {
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                    .init();
            } else {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_ansi(false)
                            .with_writer(writer),
                    )
                    .init();
            }
        }
        None => {
            if json {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            } else {
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                    .init();
            }
        }
    }
    Ok(())
}
