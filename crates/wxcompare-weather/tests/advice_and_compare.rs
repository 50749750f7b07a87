//! Integration tests for the advice evaluator and city comparison.
//!
//! Inputs are built from JSON the way the front end hands them over.

#![allow(clippy::unwrap_used)]

use wxcompare_weather::{
    compare, evaluate, AdviceError, CityReport, CompareError, Metric, Observation, Priority, Trend,
};

/// Helper to create an observation from JSON
fn observation(temperature: f64, humidity: f64, wind: f64, uv: f64, condition: &str) -> Observation {
    serde_json::from_value(serde_json::json!({
        "temperature": temperature,
        "humidity": humidity,
        "windSpeed": wind,
        "uvIndex": uv,
        "condition": condition
    }))
    .unwrap()
}

/// Helper to create a city report from JSON
fn report(id: &str, temperature: f64, humidity: f64, visibility: f64) -> CityReport {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "city": format!("City {}", id),
        "country": "XX",
        "temperature": temperature,
        "feelsLike": temperature - 1.0,
        "humidity": humidity,
        "windSpeed": 10,
        "uvIndex": 3,
        "visibility": visibility,
        "condition": "cloudy"
    }))
    .unwrap()
}

fn is_sorted_by_priority(priorities: &[Priority]) -> bool {
    priorities.windows(2).all(|w| w[0].rank() <= w[1].rank())
}

#[test]
fn test_advice_sorted_and_non_empty() {
    let inputs = vec![
        vec![observation(20.0, 50.0, 10.0, 3.0, "sunny")],
        vec![observation(-8.0, 85.0, 40.0, 0.0, "snowy")],
        vec![
            observation(36.0, 30.0, 5.0, 10.0, "sunny"),
            observation(4.0, 90.0, 30.0, 0.0, "stormy"),
            observation(15.0, 60.0, 12.0, 2.0, "partly-cloudy"),
        ],
    ];

    for input in inputs {
        let advice = evaluate(&input).unwrap();
        assert!(!advice.is_empty());
        let priorities: Vec<Priority> = advice.iter().map(|a| a.priority).collect();
        assert!(is_sorted_by_priority(&priorities), "unsorted: {:?}", priorities);
    }
}

#[test]
fn test_every_rule_fires_in_order() {
    let advice = evaluate(&[
        observation(36.0, 30.0, 5.0, 10.0, "sunny"),
        observation(4.0, 90.0, 30.0, 0.0, "stormy"),
        observation(-2.0, 70.0, 10.0, 0.0, "snowy"),
    ])
    .unwrap();

    let titles: Vec<&str> = advice.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Bring an Umbrella",
            "UV Protection Needed",
            "Stay Hydrated",
            "Winter Conditions",
            "Bundle Up",
            "Strong Winds",
            "High Humidity",
        ]
    );
}

#[test]
fn test_rain_and_snow_scenario() {
    let advice = evaluate(&[
        observation(2.0, 60.0, 10.0, 1.0, "rainy"),
        observation(30.0, 60.0, 10.0, 1.0, "snowy"),
    ])
    .unwrap();

    let summary: Vec<(&str, Priority)> = advice
        .iter()
        .map(|a| (a.title.as_str(), a.priority))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Bring an Umbrella", Priority::High),
            ("Winter Conditions", Priority::High),
            ("Bundle Up", Priority::Medium),
        ]
    );
}

#[test]
fn test_evaluate_is_idempotent() {
    let input = vec![
        observation(38.0, 50.0, 10.0, 8.0, "sunny"),
        observation(3.0, 82.0, 26.0, 1.0, "rainy"),
    ];
    assert_eq!(evaluate(&input).unwrap(), evaluate(&input).unwrap());
}

#[test]
fn test_evaluate_empty_input() {
    assert!(matches!(evaluate(&[]), Err(AdviceError::InvalidInput(_))));
}

#[test]
fn test_advisory_serializes_for_front_end() {
    let advice = evaluate(&[observation(20.0, 40.0, 5.0, 2.0, "cloudy")]).unwrap();
    let json = serde_json::to_value(&advice).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "icon": "alert",
            "title": "Moderate Conditions",
            "description": "Weather looks comfortable. A light jacket may be useful for cooler moments.",
            "priority": "low"
        }])
    );
}

#[test]
fn test_compare_requires_two_cities() {
    let err = compare(&[report("a", 20.0, 50.0, 10.0)]).unwrap_err();
    assert_eq!(
        err,
        CompareError::NotEnoughCities {
            required: 2,
            actual: 1
        }
    );
}

#[test]
fn test_compare_trends() {
    let table = compare(&[
        report("a", 25.0, 40.0, 10.0),
        report("b", 15.0, 90.0, 4.0),
        report("c", 20.0, 60.0, 7.0),
    ])
    .unwrap();

    assert_eq!(table.cities, vec!["City a", "City b", "City c"]);
    assert_eq!(table.rows.len(), Metric::ALL.len());

    let trends = |metric: Metric| -> Vec<Trend> {
        table
            .row(metric)
            .unwrap()
            .cells
            .iter()
            .map(|c| c.trend)
            .collect()
    };

    assert_eq!(
        trends(Metric::Temperature),
        vec![Trend::Highest, Trend::Lowest, Trend::Neutral]
    );
    assert_eq!(
        trends(Metric::Humidity),
        vec![Trend::Best, Trend::Highest, Trend::Neutral]
    );
    assert_eq!(
        trends(Metric::Visibility),
        vec![Trend::Best, Trend::Lowest, Trend::Neutral]
    );
    // Identical wind and UV everywhere
    assert_eq!(trends(Metric::WindSpeed), vec![Trend::Neutral; 3]);
    assert_eq!(trends(Metric::UvIndex), vec![Trend::Neutral; 3]);
}

#[test]
fn test_compare_cells_keep_city_order() {
    let table = compare(&[report("x", 10.0, 50.0, 10.0), report("y", 12.0, 50.0, 10.0)]).unwrap();
    let row = table.row(Metric::FeelsLike).unwrap();
    assert_eq!(row.label, "Feels Like");
    assert_eq!(row.unit, "°C");
    let ids: Vec<&str> = row.cells.iter().map(|c| c.city_id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
    assert_eq!(row.cells[0].value, 9.0);
    assert_eq!(row.cells[1].value, 11.0);
}
