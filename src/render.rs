//! Input parsing and text output for the command line.

use wxcompare_core::AppError;
use wxcompare_weather::{
    compare, compare::MIN_CITIES, evaluate_with, AdviceThresholds, Advisory, CityReport,
    ComparisonTable, Observation, Trend,
};

/// Accepted input documents: full city reports, or bare observations
#[derive(Debug)]
pub enum Input {
    Reports(Vec<CityReport>),
    Observations(Vec<Observation>),
}

/// Parse a JSON array of city reports or observations.
///
/// An array where any element carries an `id` is read strictly as city
/// reports, so a report missing a field is an error rather than an observation.
///
/// # Errors
///
/// Returns `AppError::Json` for malformed JSON or records with missing fields.
pub fn parse_input(raw: &str) -> Result<Input, AppError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let has_reports = value
        .as_array()
        .is_some_and(|items| items.iter().any(|item| item.get("id").is_some()));

    if has_reports {
        Ok(Input::Reports(serde_json::from_value(value)?))
    } else {
        Ok(Input::Observations(serde_json::from_value(value)?))
    }
}

/// Render advice, plus the comparison table when there are enough city reports.
///
/// # Errors
///
/// Returns `AppError::Weather` when there is nothing to evaluate.
pub fn render(input: &Input, thresholds: &AdviceThresholds) -> Result<String, AppError> {
    let mut lines = Vec::new();

    match input {
        Input::Reports(reports) => {
            let observations: Vec<Observation> = reports.iter().map(|r| r.observation).collect();
            advice_lines(&evaluate_with(&observations, thresholds)?, &mut lines);

            if reports.len() >= MIN_CITIES {
                lines.push(String::new());
                table_lines(&compare(reports)?, &mut lines);
            }
        }
        Input::Observations(observations) => {
            advice_lines(&evaluate_with(observations, thresholds)?, &mut lines);
        }
    }

    lines.push(String::new());
    Ok(lines.join("\n"))
}

fn advice_lines(advice: &[Advisory], lines: &mut Vec<String>) {
    lines.push("Weather Advice".to_string());
    for item in advice {
        lines.push(format!(
            "  [{}] {}: {}",
            item.priority, item.title, item.description
        ));
    }
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Best => "best",
        Trend::Highest => "↑",
        Trend::Lowest => "↓",
        Trend::Neutral => "-",
    }
}

fn table_lines(table: &ComparisonTable, lines: &mut Vec<String>) {
    lines.push("City Comparison".to_string());

    let mut header = format!("  {:<12}", "Metric");
    for city in &table.cities {
        header.push_str(&format!(" {:>16}", city));
    }
    lines.push(header);

    for row in &table.rows {
        let mut line = format!("  {:<12}", row.label);
        for cell in &row.cells {
            let shown = format!("{}{} {}", cell.value, row.unit, trend_marker(cell.trend));
            line.push_str(&format!(" {:>16}", shown));
        }
        lines.push(line);
    }
}
