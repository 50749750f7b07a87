//! Side-by-side city comparison.
//!
//! For each metric, every city's value is tagged relative to the other cities:
//! the extreme that is preferable is `Best`, otherwise the extremes are tagged
//! `Highest`/`Lowest` and everything else is `Neutral`.

use serde::Serialize;

use crate::types::{CityReport, CompareError};

/// Minimum number of cities for a meaningful comparison
pub const MIN_CITIES: usize = 2;

/// Metrics shown in the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    UvIndex,
    Visibility,
}

impl Metric {
    /// All metrics, in table order
    pub const ALL: [Metric; 6] = [
        Metric::Temperature,
        Metric::FeelsLike,
        Metric::Humidity,
        Metric::WindSpeed,
        Metric::UvIndex,
        Metric::Visibility,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::FeelsLike => "Feels Like",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind Speed",
            Self::UvIndex => "UV Index",
            Self::Visibility => "Visibility",
        }
    }

    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature | Self::FeelsLike => "°C",
            Self::Humidity => "%",
            Self::WindSpeed => "km/h",
            Self::UvIndex => "",
            Self::Visibility => "km",
        }
    }

    /// `None` when neither direction is preferable (temperatures)
    #[must_use]
    pub fn higher_is_better(&self) -> Option<bool> {
        match self {
            Self::Temperature | Self::FeelsLike => None,
            Self::Humidity | Self::WindSpeed | Self::UvIndex => Some(false),
            Self::Visibility => Some(true),
        }
    }

    #[must_use]
    pub fn value(&self, report: &CityReport) -> f64 {
        match self {
            Self::Temperature => report.observation.temperature,
            Self::FeelsLike => report.feels_like,
            Self::Humidity => report.observation.humidity,
            Self::WindSpeed => report.observation.wind_speed,
            Self::UvIndex => report.observation.uv_index,
            Self::Visibility => report.visibility,
        }
    }

    /// Classify `value` within the `[min, max]` range of this metric
    #[must_use]
    pub fn trend(&self, value: f64, min: f64, max: f64) -> Trend {
        if value == max && value != min {
            return match self.higher_is_better() {
                Some(true) => Trend::Best,
                _ => Trend::Highest,
            };
        }
        if value == min && value != max {
            return match self.higher_is_better() {
                Some(false) => Trend::Best,
                _ => Trend::Lowest,
            };
        }
        Trend::Neutral
    }
}

/// How a city's value ranks among the compared cities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Best,
    Highest,
    Lowest,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCell {
    pub city_id: String,
    pub value: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    pub cells: Vec<ComparisonCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    /// Display names of the compared cities, in input order
    pub cities: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    #[must_use]
    pub fn row(&self, metric: Metric) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }
}

/// Build the comparison table for two or more cities.
///
/// # Errors
///
/// Returns `CompareError::NotEnoughCities` for fewer than [`MIN_CITIES`] reports.
pub fn compare(reports: &[CityReport]) -> Result<ComparisonTable, CompareError> {
    if reports.len() < MIN_CITIES {
        return Err(CompareError::NotEnoughCities {
            required: MIN_CITIES,
            actual: reports.len(),
        });
    }

    let rows = Metric::ALL
        .iter()
        .map(|metric| {
            let values: Vec<f64> = reports.iter().map(|r| metric.value(r)).collect();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            let cells = reports
                .iter()
                .zip(&values)
                .map(|(report, &value)| ComparisonCell {
                    city_id: report.id.clone(),
                    value,
                    trend: metric.trend(value, min, max),
                })
                .collect();

            ComparisonRow {
                metric: *metric,
                label: metric.label(),
                unit: metric.unit(),
                cells,
            }
        })
        .collect();

    tracing::debug!("Compared {} cities", reports.len());

    Ok(ComparisonTable {
        cities: reports.iter().map(|r| r.city.clone()).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_without_preference() {
        let m = Metric::Temperature;
        assert_eq!(m.trend(30.0, 10.0, 30.0), Trend::Highest);
        assert_eq!(m.trend(10.0, 10.0, 30.0), Trend::Lowest);
        assert_eq!(m.trend(20.0, 10.0, 30.0), Trend::Neutral);
    }

    #[test]
    fn test_trend_lower_is_better() {
        let m = Metric::Humidity;
        assert_eq!(m.trend(90.0, 40.0, 90.0), Trend::Highest);
        assert_eq!(m.trend(40.0, 40.0, 90.0), Trend::Best);
    }

    #[test]
    fn test_trend_higher_is_better() {
        let m = Metric::Visibility;
        assert_eq!(m.trend(10.0, 2.0, 10.0), Trend::Best);
        assert_eq!(m.trend(2.0, 2.0, 10.0), Trend::Lowest);
    }

    #[test]
    fn test_trend_all_equal_is_neutral() {
        assert_eq!(Metric::Visibility.trend(5.0, 5.0, 5.0), Trend::Neutral);
        assert_eq!(Metric::Humidity.trend(5.0, 5.0, 5.0), Trend::Neutral);
    }

    #[test]
    fn test_metric_table_order() {
        let labels: Vec<&str> = Metric::ALL.iter().map(Metric::label).collect();
        assert_eq!(
            labels,
            vec!["Temperature", "Feels Like", "Humidity", "Wind Speed", "UV Index", "Visibility"]
        );
        assert_eq!(Metric::UvIndex.unit(), "");
        assert_eq!(Metric::WindSpeed.unit(), "km/h");
    }

    #[test]
    fn test_compare_rejects_empty_input() {
        let err = compare(&[]).unwrap_err();
        assert_eq!(
            err,
            CompareError::NotEnoughCities {
                required: 2,
                actual: 0
            }
        );
    }
}
