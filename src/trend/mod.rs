//! Trend analysis over a fetched series.
//!
//! A pure transform: the input series is borrowed, never mutated. Output is
//! presentation-ready:
//!
//! - summary statistics (price/volume extrema)
//! - price-over-time and volume-over-time series for plotting
//! - day-over-day price deltas

use chrono::NaiveDate;

use crate::domain::{Series, SeriesStats};
use crate::error::AppError;

/// Everything the front-end needs to render the trend view.
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub stats: SeriesStats,
    pub price_series: Vec<(NaiveDate, f64)>,
    pub volume_series: Vec<(NaiveDate, u64)>,
    /// Price change versus the previous observation (`n - 1` entries, keyed
    /// by the later date).
    pub daily_deltas: Vec<(NaiveDate, f64)>,
}

/// Analyze a series.
///
/// Fails with `InvalidInput` for fewer than 2 observations; a single point
/// cannot express a trend.
pub fn analyze(series: &Series) -> Result<TrendReport, AppError> {
    if series.len() < 2 {
        return Err(AppError::invalid_input(format!(
            "Trend analysis requires at least 2 observations, got {}.",
            series.len()
        )));
    }

    let stats = compute_stats(series);

    let price_series = series
        .observations()
        .iter()
        .map(|o| (o.date, o.price))
        .collect();
    let volume_series = series
        .observations()
        .iter()
        .map(|o| (o.date, o.volume))
        .collect();
    let daily_deltas = series
        .observations()
        .windows(2)
        .map(|pair| (pair[1].date, pair[1].price - pair[0].price))
        .collect();

    Ok(TrendReport {
        stats,
        price_series,
        volume_series,
        daily_deltas,
    })
}

fn compute_stats(series: &Series) -> SeriesStats {
    let mut price_min = f64::INFINITY;
    let mut price_max = f64::NEG_INFINITY;
    let mut price_max_date = series.first().date;
    let mut volume_min = u64::MAX;
    let mut volume_max = 0u64;

    for obs in series.observations() {
        price_min = price_min.min(obs.price);
        if obs.price > price_max {
            price_max = obs.price;
            price_max_date = obs.date;
        }
        volume_min = volume_min.min(obs.volume);
        volume_max = volume_max.max(obs.volume);
    }

    SeriesStats {
        n_obs: series.len(),
        price_min,
        price_max,
        price_max_date,
        volume_min,
        volume_max,
    }
}
