//! Centralized error types for the WeatherCompare application.
//!
//! Every error can produce a short user-facing message via `user_message()`
//! while `Display` keeps the full context for logs.

use thiserror::Error;
use wxcompare_weather::{AdviceError, CompareError};

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Json(_) => "The weather data is malformed. Check the input.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

impl From<AdviceError> for AppError {
    fn from(e: AdviceError) -> Self {
        AppError::Weather(e.into())
    }
}

impl From<CompareError> for AppError {
    fn from(e: CompareError) -> Self {
        AppError::Weather(e.into())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Weather evaluation errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not enough cities to compare: need {required}, have {actual}")]
    NotEnoughCities { required: usize, actual: usize },
}

impl WeatherError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::InvalidInput(_) => "Add a city to see weather advice.",
            WeatherError::NotEnoughCities { .. } => {
                "Add at least 2 cities to see a detailed comparison."
            }
        }
    }
}

impl From<AdviceError> for WeatherError {
    fn from(e: AdviceError) -> Self {
        match e {
            AdviceError::InvalidInput(s) => WeatherError::InvalidInput(s),
        }
    }
}

impl From<CompareError> for WeatherError {
    fn from(e: CompareError) -> Self {
        match e {
            CompareError::NotEnoughCities { required, actual } => {
                WeatherError::NotEnoughCities { required, actual }
            }
        }
    }
}
