//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during analysis and forecasting
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which backend serves the price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Deterministic generated data (no network, no API key).
    Synthetic,
    /// Live daily closes from the Alpha Vantage API.
    Alphavantage,
}

impl SourceKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SourceKind::Synthetic => "synthetic",
            SourceKind::Alphavantage => "Alpha Vantage",
        }
    }
}

/// Shape of the generated series when the synthetic source is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SyntheticMode {
    /// Independent uniform draws per day (no trend to learn).
    Uniform,
    /// Drifted random walk with Gaussian noise (gives the fit a real trend).
    Walk,
}

/// A single daily market observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
}

/// An ordered, validated price/volume series.
///
/// Invariants, enforced by [`Series::new`]:
/// - non-empty
/// - dates strictly increasing (unique)
/// - every price finite and > 0
///
/// Pipeline stages borrow the series immutably; nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    pub fn new(observations: Vec<Observation>) -> Result<Self, AppError> {
        if observations.is_empty() {
            return Err(AppError::invalid_input("Series must not be empty."));
        }
        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AppError::invalid_input(format!(
                    "Series dates must be strictly increasing ({} follows {}).",
                    pair[1].date, pair[0].date
                )));
            }
        }
        for obs in &observations {
            if !(obs.price.is_finite() && obs.price > 0.0) {
                return Err(AppError::invalid_input(format!(
                    "Invalid price {} on {}; prices must be positive.",
                    obs.price, obs.date
                )));
            }
        }
        Ok(Self { observations })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        // Constructor rejects empty input, so this is always false.
        self.observations.is_empty()
    }

    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// Whole days between `date` and the first observation (day 0).
    ///
    /// Anchoring day 0 at the earliest observation makes the fitted model
    /// invariant to absolute calendar dates.
    pub fn elapsed_days(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.first().date).num_days()
    }
}

/// Train/test partition of the `(elapsed_days, price)` regression pairs.
///
/// `train` and `test` together cover the input pairs exactly once each;
/// both halves are sorted by elapsed day for stable output.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDataset {
    pub train: Vec<(i64, f64)>,
    pub test: Vec<(i64, f64)>,
}

/// Fitted linear trend, immutable once fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitModel {
    pub slope: f64,
    pub intercept: f64,
}

impl FitModel {
    /// Predicted price for a given elapsed day.
    pub fn predict(&self, day: i64) -> f64 {
        self.slope * day as f64 + self.intercept
    }
}

/// Held-out evaluation of a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub mean_squared_error: f64,
}

/// One projected future price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_price: f64,
}

/// Ordered projections for the forecast horizon, starting the day after the
/// last observed date. Created per request, never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub points: Vec<ForecastPoint>,
}

/// Summary statistics over a series (for the trend report).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStats {
    pub n_obs: usize,
    pub price_min: f64,
    pub price_max: f64,
    /// Date of the maximum price (highlighted in the series table).
    pub price_max_date: NaiveDate,
    pub volume_min: u64,
    pub volume_max: u64,
}

/// A saved forecast file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastFile {
    pub tool: String,
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub source: SourceKind,
    pub model: FitModel,
    pub evaluation: EvaluationResult,
    pub forecast: ForecastResult,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults). Every core operation takes
/// its inputs from here explicitly; there is no ambient session state.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub source: SourceKind,
    pub synthetic_mode: SyntheticMode,

    /// Number of future days to project.
    pub horizon_days: u32,
    /// Fraction of observations held out for evaluation.
    pub test_fraction: f64,
    /// Seed for the train/test shuffle (and synthetic generation).
    pub seed: u64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_series: Option<PathBuf>,
    pub export_forecast: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}
