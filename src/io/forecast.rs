//! Read/write forecast JSON files.
//!
//! Forecast JSON is the "portable" representation of one forecast run:
//! - the fitted model (slope + intercept)
//! - its held-out evaluation
//! - the projected points
//! - run metadata (symbol, range, source)
//!
//! The schema is defined by `domain::ForecastFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{AnalysisConfig, ForecastFile};
use crate::error::AppError;
use crate::forecast::ForecastOutcome;

/// Write a forecast JSON file.
pub fn write_forecast_json(
    path: &Path,
    outcome: &ForecastOutcome,
    config: &AnalysisConfig,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to create forecast JSON '{}': {e}",
            path.display()
        ))
    })?;

    let artifact = ForecastFile {
        tool: "mt".to_string(),
        symbol: config.symbol.clone(),
        start_date: config.start_date,
        end_date: config.end_date,
        source: config.source,
        model: outcome.model,
        evaluation: outcome.evaluation,
        forecast: outcome.forecast.clone(),
    };

    serde_json::to_writer_pretty(file, &artifact)
        .map_err(|e| AppError::data(format!("Failed to write forecast JSON: {e}")))?;

    Ok(())
}

/// Read a forecast JSON file.
pub fn read_forecast_json(path: &Path) -> Result<ForecastFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to open forecast JSON '{}': {e}",
            path.display()
        ))
    })?;
    let artifact: ForecastFile = serde_json::from_reader(file)
        .map_err(|e| AppError::data(format!("Invalid forecast JSON: {e}")))?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        EvaluationResult, FitModel, ForecastPoint, ForecastResult, SourceKind, SyntheticMode,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn forecast_json_round_trips() {
        let outcome = ForecastOutcome {
            model: FitModel {
                slope: 2.0,
                intercept: 100.0,
            },
            evaluation: EvaluationResult {
                mean_squared_error: 0.5,
            },
            forecast: ForecastResult {
                points: vec![ForecastPoint {
                    date: date(2025, 4, 1),
                    predicted_price: 160.0,
                }],
            },
        };
        let config = AnalysisConfig {
            symbol: "SPX".to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 3, 31),
            source: SourceKind::Synthetic,
            synthetic_mode: SyntheticMode::Uniform,
            horizon_days: 30,
            test_fraction: 0.2,
            seed: 42,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_series: None,
            export_forecast: None,
            export_json: None,
        };

        let dir = std::env::temp_dir();
        let path = dir.join("mt_forecast_json_test.json");
        write_forecast_json(&path, &outcome, &config).unwrap();
        let loaded = read_forecast_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.tool, "mt");
        assert_eq!(loaded.symbol, "SPX");
        assert_eq!(loaded.source, SourceKind::Synthetic);
        assert_eq!(loaded.model, outcome.model);
        assert_eq!(loaded.forecast, outcome.forecast);
    }
}
