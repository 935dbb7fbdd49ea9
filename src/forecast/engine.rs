//! Forecast engine: trend fit, held-out evaluation, forward projection.
//!
//! The full request is one pure, synchronous computation:
//!
//! 1. feature extraction: whole days elapsed since the first observation
//! 2. seeded shuffle split into train/test
//! 3. closed-form least squares fit of `price = intercept + slope * day`
//! 4. mean squared error over the held-out set
//! 5. projection for days `1..=horizon` past the last observed date
//!
//! Projections are raw line extrapolations: negative predicted prices pass
//! through unclamped, and nothing guards against projecting far beyond the
//! observed range. Known limitation of the demo model, not an error.

use chrono::Duration;

use crate::domain::{EvaluationResult, FitModel, ForecastPoint, ForecastResult, Series};
use crate::error::AppError;
use crate::forecast::split::split_train_test;
use crate::math::fit_line;

/// All outputs of a single forecast request.
///
/// Owned by the caller, immutable once built; no partial results exist on the
/// error path.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub model: FitModel,
    pub evaluation: EvaluationResult,
    pub forecast: ForecastResult,
}

/// Fit a linear trend on `series` and project `horizon_days` forward.
///
/// `horizon_days` must be at least 1 (a zero horizon is rejected as invalid
/// input rather than producing an empty forecast). `test_fraction` must lie
/// in (0, 1). Identical `(series, horizon_days, test_fraction, seed)` inputs
/// yield bit-identical outcomes.
pub fn forecast(
    series: &Series,
    horizon_days: u32,
    test_fraction: f64,
    seed: u64,
) -> Result<ForecastOutcome, AppError> {
    if horizon_days == 0 {
        return Err(AppError::invalid_input(
            "Forecast horizon must be at least 1 day.",
        ));
    }

    let pairs = day_price_pairs(series);
    let split = split_train_test(&pairs, test_fraction, seed)?;
    let model = fit_trend(&split.train)?;
    let evaluation = evaluate(&model, &split.test);
    let forecast = project(series, &model, horizon_days)?;

    Ok(ForecastOutcome {
        model,
        evaluation,
        forecast,
    })
}

/// Regression pairs: `(elapsed_days, price)` with day 0 at the first observation.
pub fn day_price_pairs(series: &Series) -> Vec<(i64, f64)> {
    series
        .observations()
        .iter()
        .map(|o| (series.elapsed_days(o.date), o.price))
        .collect()
}

/// Closed-form least squares fit over the train pairs.
pub fn fit_trend(train: &[(i64, f64)]) -> Result<FitModel, AppError> {
    let days: Vec<f64> = train.iter().map(|&(day, _)| day as f64).collect();
    let prices: Vec<f64> = train.iter().map(|&(_, price)| price).collect();

    let (intercept, slope) = fit_line(&days, &prices).ok_or_else(|| {
        AppError::insufficient_data("Train split is too degenerate for a least-squares fit.")
    })?;

    Ok(FitModel { slope, intercept })
}

/// Mean squared error of the model over the held-out pairs.
///
/// The split guarantees a non-empty test set.
pub fn evaluate(model: &FitModel, test: &[(i64, f64)]) -> EvaluationResult {
    debug_assert!(!test.is_empty());
    let sse: f64 = test
        .iter()
        .map(|&(day, price)| {
            let err = price - model.predict(day);
            err * err
        })
        .sum();

    EvaluationResult {
        mean_squared_error: sse / test.len() as f64,
    }
}

fn project(
    series: &Series,
    model: &FitModel,
    horizon_days: u32,
) -> Result<ForecastResult, AppError> {
    let last = series.last();
    let last_day = series.elapsed_days(last.date);

    let mut points = Vec::with_capacity(horizon_days as usize);
    for d in 1..=i64::from(horizon_days) {
        let date = last
            .date
            .checked_add_signed(Duration::days(d))
            .ok_or_else(|| AppError::invalid_input("Forecast horizon overflows the calendar."))?;
        points.push(ForecastPoint {
            date,
            predicted_price: model.predict(last_day + d),
        });
    }

    Ok(ForecastResult { points })
}
