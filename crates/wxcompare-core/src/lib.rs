pub mod config;
pub mod error;

pub use config::{Config, LoggingConfig, ValidationResult, CONFIG_PATH_ENV};
pub use error::{AppError, ConfigError, WeatherError};

use anyhow::Result;

/// Initialize logging with the default `info` level
///
/// # Errors
///
/// Fails if a global tracing subscriber is already installed.
pub fn init() -> Result<()> {
    init_with_level(&LoggingConfig::default().level)
}

/// Initialize logging; `RUST_LOG` takes precedence over `default_level`.
///
/// Logs go to stderr so stdout stays reserved for command output.
///
/// # Errors
///
/// Fails if a global tracing subscriber is already installed.
pub fn init_with_level(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("WeatherCompare core initialized");
    Ok(())
}
