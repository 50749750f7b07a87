//! Weather advice: turns a set of observations into prioritized recommendations.
//!
//! The rules are a fixed table evaluated in order over the aggregate extremes of
//! all observations. Each rule contributes at most one advisory. When nothing
//! fires a single "Moderate Conditions" advisory is returned. The result is
//! stable-sorted by priority, so equal priorities keep rule order.

use serde::{Deserialize, Serialize};

use crate::types::{AdviceError, AdviceIcon, Advisory, Observation, Priority, WeatherCondition};

pub const DEFAULT_UV_THRESHOLD: f64 = 6.0;
pub const DEFAULT_HOT_THRESHOLD: f64 = 35.0;
pub const DEFAULT_COLD_THRESHOLD: f64 = 5.0;
pub const DEFAULT_WIND_THRESHOLD: f64 = 25.0;
pub const DEFAULT_HUMIDITY_THRESHOLD: f64 = 80.0;

/// Rule thresholds. All comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdviceThresholds {
    /// UV index at or above which sun protection is advised
    #[serde(default = "default_uv")]
    pub uv_index: f64,
    /// Temperature (°C) at or above which hydration is advised
    #[serde(default = "default_hot")]
    pub hot_temperature: f64,
    /// Temperature (°C) at or below which warm clothing is advised
    #[serde(default = "default_cold")]
    pub cold_temperature: f64,
    /// Wind speed (km/h)
    #[serde(default = "default_wind")]
    pub wind_speed: f64,
    /// Relative humidity (%)
    #[serde(default = "default_humidity")]
    pub humidity: f64,
}

fn default_uv() -> f64 {
    DEFAULT_UV_THRESHOLD
}

fn default_hot() -> f64 {
    DEFAULT_HOT_THRESHOLD
}

fn default_cold() -> f64 {
    DEFAULT_COLD_THRESHOLD
}

fn default_wind() -> f64 {
    DEFAULT_WIND_THRESHOLD
}

fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY_THRESHOLD
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            uv_index: DEFAULT_UV_THRESHOLD,
            hot_temperature: DEFAULT_HOT_THRESHOLD,
            cold_temperature: DEFAULT_COLD_THRESHOLD,
            wind_speed: DEFAULT_WIND_THRESHOLD,
            humidity: DEFAULT_HUMIDITY_THRESHOLD,
        }
    }
}

/// Aggregate extremes across a set of observations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditions {
    pub max_temp: f64,
    pub min_temp: f64,
    #[serde(rename = "maxUV")]
    pub max_uv: f64,
    pub max_wind: f64,
    pub max_humidity: f64,
    pub any_rain_or_storm: bool,
    pub any_snow: bool,
    pub any_sunny: bool,
}

impl Conditions {
    /// Fold observations into their extremes.
    ///
    /// # Errors
    ///
    /// Returns `AdviceError::InvalidInput` for an empty slice since no extreme
    /// is defined.
    pub fn from_observations(observations: &[Observation]) -> Result<Self, AdviceError> {
        let (first, rest) = observations.split_first().ok_or_else(|| {
            AdviceError::InvalidInput("at least one observation is required".to_string())
        })?;

        let seed = Self {
            max_temp: first.temperature,
            min_temp: first.temperature,
            max_uv: first.uv_index,
            max_wind: first.wind_speed,
            max_humidity: first.humidity,
            any_rain_or_storm: first.condition.is_wet(),
            any_snow: first.condition == WeatherCondition::Snowy,
            any_sunny: first.condition == WeatherCondition::Sunny,
        };

        Ok(rest.iter().fold(seed, |acc, obs| Self {
            max_temp: acc.max_temp.max(obs.temperature),
            min_temp: acc.min_temp.min(obs.temperature),
            max_uv: acc.max_uv.max(obs.uv_index),
            max_wind: acc.max_wind.max(obs.wind_speed),
            max_humidity: acc.max_humidity.max(obs.humidity),
            any_rain_or_storm: acc.any_rain_or_storm || obs.condition.is_wet(),
            any_snow: acc.any_snow || obs.condition == WeatherCondition::Snowy,
            any_sunny: acc.any_sunny || obs.condition == WeatherCondition::Sunny,
        }))
    }
}

/// One row of the rule table
struct AdviceRule {
    name: &'static str,
    applies: fn(&Conditions, &AdviceThresholds) -> bool,
    advise: fn(&Conditions) -> Advisory,
}

const RULES: &[AdviceRule] = &[
    AdviceRule {
        name: "rain",
        applies: |c, _| c.any_rain_or_storm,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Umbrella,
                "Bring an Umbrella",
                "Rain is expected in some areas. Keep an umbrella handy for unexpected showers.",
                Priority::High,
            )
        },
    },
    AdviceRule {
        name: "uv",
        applies: |c, t| c.max_uv >= t.uv_index,
        advise: |c| {
            Advisory::new(
                AdviceIcon::Sunglasses,
                "UV Protection Needed",
                format!(
                    "UV index is {}. Wear sunscreen (SPF 30+), sunglasses, and seek shade during peak hours.",
                    c.max_uv
                ),
                Priority::High,
            )
        },
    },
    AdviceRule {
        name: "heat",
        applies: |c, t| c.max_temp >= t.hot_temperature,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Thermometer,
                "Stay Hydrated",
                "High temperatures expected. Drink plenty of water and avoid prolonged outdoor exposure.",
                Priority::High,
            )
        },
    },
    AdviceRule {
        name: "cold",
        applies: |c, t| c.min_temp <= t.cold_temperature,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Shirt,
                "Bundle Up",
                "Cold temperatures ahead. Layer up with warm clothing and protect extremities.",
                Priority::Medium,
            )
        },
    },
    AdviceRule {
        name: "snow",
        applies: |c, _| c.any_snow,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Snowflake,
                "Winter Conditions",
                "Snow expected. Drive carefully and wear appropriate winter footwear.",
                Priority::High,
            )
        },
    },
    AdviceRule {
        name: "wind",
        applies: |c, t| c.max_wind >= t.wind_speed,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Wind,
                "Strong Winds",
                "Windy conditions expected. Secure loose outdoor items and be cautious while driving.",
                Priority::Medium,
            )
        },
    },
    AdviceRule {
        name: "humidity",
        applies: |c, t| c.max_humidity >= t.humidity,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Droplets,
                "High Humidity",
                "Very humid conditions. Stay cool and consider indoor activities.",
                Priority::Low,
            )
        },
    },
    AdviceRule {
        name: "outdoor",
        applies: |c, t| c.any_sunny && c.max_uv < t.uv_index,
        advise: |_| {
            Advisory::new(
                AdviceIcon::Sun,
                "Great Outdoor Weather",
                "Perfect conditions for outdoor activities. Enjoy the sunshine!",
                Priority::Low,
            )
        },
    },
];

fn moderate_conditions() -> Advisory {
    Advisory::new(
        AdviceIcon::Alert,
        "Moderate Conditions",
        "Weather looks comfortable. A light jacket may be useful for cooler moments.",
        Priority::Low,
    )
}

/// Evaluate observations against the default thresholds.
///
/// # Errors
///
/// Returns `AdviceError::InvalidInput` when `observations` is empty.
pub fn evaluate(observations: &[Observation]) -> Result<Vec<Advisory>, AdviceError> {
    evaluate_with(observations, &AdviceThresholds::default())
}

/// Evaluate observations against custom thresholds.
///
/// # Errors
///
/// Returns `AdviceError::InvalidInput` when `observations` is empty.
pub fn evaluate_with(
    observations: &[Observation],
    thresholds: &AdviceThresholds,
) -> Result<Vec<Advisory>, AdviceError> {
    let conditions = Conditions::from_observations(observations)?;
    Ok(advise(&conditions, thresholds))
}

/// Run the rule table over precomputed conditions. Never returns an empty list.
#[must_use]
pub fn advise(conditions: &Conditions, thresholds: &AdviceThresholds) -> Vec<Advisory> {
    let mut advice: Vec<Advisory> = RULES
        .iter()
        .filter(|rule| (rule.applies)(conditions, thresholds))
        .map(|rule| {
            tracing::debug!("Advice rule fired: {}", rule.name);
            (rule.advise)(conditions)
        })
        .collect();

    if advice.is_empty() {
        advice.push(moderate_conditions());
    }

    // sort_by_key is stable: equal priorities stay in rule order
    advice.sort_by_key(|a| a.priority.rank());
    advice
}
