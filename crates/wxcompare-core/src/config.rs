use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wxcompare_weather::AdviceThresholds;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "WXCOMPARE_CONFIG";

/// A single validation problem, scoped to a config field
#[derive(Debug, Clone, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

fn issue(field: &str, message: impl Into<String>) -> ConfigValidationError {
    ConfigValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get a one-line summary of all errors
    #[must_use]
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Advice rule thresholds
    #[serde(default)]
    pub advice: AdviceThresholds,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g. "info", "wxcompare_weather=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Fails when the config directory is unknown or the file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, writing defaults there if missing
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or when the file is not valid TOML for [`Config`].
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            tracing::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Validate the configuration
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        let advice = &self.advice;

        let thresholds = [
            ("advice.uv_index", advice.uv_index),
            ("advice.hot_temperature", advice.hot_temperature),
            ("advice.cold_temperature", advice.cold_temperature),
            ("advice.wind_speed", advice.wind_speed),
            ("advice.humidity", advice.humidity),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() {
                result
                    .errors
                    .push(issue(field, "Threshold must be a finite number"));
            }
        }

        // Temperatures may legitimately be below zero
        let non_negative = [
            ("advice.uv_index", advice.uv_index),
            ("advice.wind_speed", advice.wind_speed),
            ("advice.humidity", advice.humidity),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                result
                    .errors
                    .push(issue(field, "Threshold cannot be negative"));
            }
        }

        if advice.humidity > 100.0 {
            result.warnings.push(issue(
                "advice.humidity",
                "Humidity threshold above 100%, rule will never fire",
            ));
        }

        if advice.cold_temperature >= advice.hot_temperature {
            result.warnings.push(issue(
                "advice.cold_temperature",
                "Cold threshold is not below hot threshold",
            ));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            result
                .errors
                .push(issue("logging.level", format!("Invalid log filter: {}", e)));
        }

        result
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    ///
    /// Fails when the parent directory cannot be created or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Path to the configuration file, honoring `WXCOMPARE_CONFIG`
    ///
    /// # Errors
    ///
    /// Fails when no platform config directory exists and the override is unset.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("wxcompare");

        Ok(config_dir.join("config.toml"))
    }
}
