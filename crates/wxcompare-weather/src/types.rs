use serde::{Deserialize, Serialize};

/// Weather condition categories as shown on a city card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl WeatherCondition {
    /// Get a human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
            Self::Snowy => "Snowy",
        }
    }

    /// Get icon name (glyphs are resolved by the front end)
    #[must_use]
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::PartlyCloudy => "cloud_sun",
            Self::Cloudy => "cloud",
            Self::Rainy => "cloud_rain",
            Self::Stormy => "cloud_lightning",
            Self::Snowy => "cloud_snow",
        }
    }

    /// Rain or thunderstorms, the conditions that call for an umbrella
    #[must_use]
    pub fn is_wet(&self) -> bool {
        matches!(self, Self::Rainy | Self::Stormy)
    }
}

/// One city's point-in-time weather reading.
///
/// Units are metric: temperature in °C, wind speed in km/h, humidity in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub uv_index: f64,
    pub condition: WeatherCondition,
}

/// A city's reading together with the extra fields shown in the comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityReport {
    pub id: String,
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(flatten)]
    pub observation: Observation,
    pub feels_like: f64,
    /// Visibility in kilometres
    pub visibility: f64,
}

/// Advisory priority. Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high=0, medium=1, low=2
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon tag attached to an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceIcon {
    Umbrella,
    Sunglasses,
    Thermometer,
    Shirt,
    Snowflake,
    Wind,
    Droplets,
    Sun,
    Alert,
}

/// A recommendation derived from one or more observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub icon: AdviceIcon,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Advisory {
    #[must_use]
    pub fn new(
        icon: AdviceIcon,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
            priority,
        }
    }
}

/// Advice evaluation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdviceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// City comparison errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    #[error("Comparison needs at least {required} cities, got {actual}")]
    NotEnoughCities { required: usize, actual: usize },
}
