//! Export series and forecast tables to CSV.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{ForecastResult, Series};
use crate::error::AppError;

/// Write the observed series to a CSV file.
pub fn write_series_csv(path: &Path, series: &Series) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "date,price,volume")
        .map_err(|e| AppError::data(format!("Failed to write CSV header: {e}")))?;

    for obs in series.observations() {
        writeln!(file, "{},{:.2},{}", obs.date, obs.price, obs.volume)
            .map_err(|e| AppError::data(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the projected prices to a CSV file.
pub fn write_forecast_csv(path: &Path, forecast: &ForecastResult) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "date,predicted_price")
        .map_err(|e| AppError::data(format!("Failed to write CSV header: {e}")))?;

    for point in &forecast.points {
        writeln!(file, "{},{:.2}", point.date, point.predicted_price)
            .map_err(|e| AppError::data(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastPoint, Observation};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn series_csv_has_header_and_one_row_per_observation() {
        let series = Series::new(vec![
            Observation {
                date: date(2025, 3, 1),
                price: 1234.5,
                volume: 50_000,
            },
            Observation {
                date: date(2025, 3, 2),
                price: 1240.0,
                volume: 51_000,
            },
        ])
        .unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join("mt_series_export_test.csv");
        write_series_csv(&path, &series).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,price,volume");
        assert_eq!(lines[1], "2025-03-01,1234.50,50000");
    }

    #[test]
    fn forecast_csv_round_trips_dates_and_prices() {
        let forecast = ForecastResult {
            points: vec![ForecastPoint {
                date: date(2025, 4, 1),
                predicted_price: 99.125,
            }],
        };

        let dir = std::env::temp_dir();
        let path = dir.join("mt_forecast_export_test.csv");
        write_forecast_csv(&path, &forecast).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(contents, "date,predicted_price\n2025-04-01,99.12\n");
    }
}
