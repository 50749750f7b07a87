mod render;

use std::io::Read;
use std::process::ExitCode;

use wxcompare_core::{AppError, Config, ConfigError};
use wxcompare_weather::AdviceThresholds;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let thresholds = load_thresholds()?;

    let source = std::env::args().nth(1);
    let raw = read_input(source.as_deref())?;
    let input = render::parse_input(&raw)?;

    print!("{}", render::render(&input, &thresholds)?);
    Ok(())
}

/// Load config, set up logging at the configured level, then validate
fn load_thresholds() -> Result<AdviceThresholds, AppError> {
    let config = match Config::load() {
        Ok(config) => {
            wxcompare_core::init_with_level(&config.logging.level)?;
            config
        }
        Err(e) => {
            wxcompare_core::init()?;
            let err = ConfigError::ParseError(format!("{:#}", e));
            tracing::warn!("{}; {}", err, err.user_message());
            Config::default()
        }
    };

    let validation = config.validate();
    if !validation.is_valid() {
        return Err(ConfigError::Invalid(validation.error_summary()).into());
    }
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    Ok(config.advice)
}

fn read_input(source: Option<&str>) -> Result<String, AppError> {
    let mut raw = String::new();
    match source {
        None | Some("-") => {
            std::io::stdin().read_to_string(&mut raw)?;
        }
        Some(path) => {
            tracing::debug!("Reading observations from {}", path);
            raw = std::fs::read_to_string(path)?;
        }
    }
    Ok(raw)
}
