//! Deterministic synthetic market data.
//!
//! Stands in for the live API in demos and tests. The generator is seeded
//! from the full request (symbol, range, user seed), so the same request
//! always yields the same series: a new request-local RNG per call, never
//! process-wide entropy.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::data::{MarketDataSource, validate_range};
use crate::domain::{Observation, Series, SyntheticMode};
use crate::error::AppError;

/// Uniform-mode price band (dollars).
const PRICE_MIN: f64 = 1_000.0;
const PRICE_MAX: f64 = 5_000.0;

/// Daily volume band (shares).
const VOLUME_MIN: u64 = 10_000;
const VOLUME_MAX: u64 = 100_000;

/// Walk-mode daily noise scale (dollars).
const WALK_SIGMA: f64 = 25.0;

/// Prices never walk below this floor.
const WALK_PRICE_FLOOR: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct SyntheticSource {
    seed: u64,
    mode: SyntheticMode,
}

impl SyntheticSource {
    pub fn new(seed: u64, mode: SyntheticMode) -> Self {
        Self { seed, mode }
    }
}

impl MarketDataSource for SyntheticSource {
    fn fetch(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Series, AppError> {
        validate_range(start_date, end_date)?;

        let mut rng = StdRng::seed_from_u64(request_seed(symbol, start_date, end_date, self.seed));
        let dates: Vec<NaiveDate> = start_date
            .iter_days()
            .take_while(|d| *d <= end_date)
            .collect();

        let observations = match self.mode {
            SyntheticMode::Uniform => uniform_series(&mut rng, &dates),
            SyntheticMode::Walk => walk_series(&mut rng, &dates)?,
        };

        Series::new(observations)
    }
}

/// Independent uniform draws per day, one price and one volume each.
fn uniform_series(rng: &mut StdRng, dates: &[NaiveDate]) -> Vec<Observation> {
    dates
        .iter()
        .map(|&date| Observation {
            date,
            price: round_cents(rng.gen_range(PRICE_MIN..PRICE_MAX)),
            volume: rng.gen_range(VOLUME_MIN..VOLUME_MAX),
        })
        .collect()
}

/// Drifted random walk: a per-series drift plus Gaussian daily noise.
///
/// This mode gives the downstream trend fit something to actually recover,
/// unlike independent uniform draws.
fn walk_series(rng: &mut StdRng, dates: &[NaiveDate]) -> Result<Vec<Observation>, AppError> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::data(format!("Noise distribution error: {e}")))?;

    let drift = rng.gen_range(-2.0..4.0);
    let mut price = rng.gen_range(PRICE_MIN..PRICE_MAX);

    let mut observations = Vec::with_capacity(dates.len());
    for &date in dates {
        observations.push(Observation {
            date,
            price: round_cents(price),
            volume: rng.gen_range(VOLUME_MIN..VOLUME_MAX),
        });
        let z: f64 = normal.sample(rng);
        price = (price + drift + WALK_SIGMA * z).max(WALK_PRICE_FLOOR);
    }

    Ok(observations)
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

fn request_seed(symbol: &str, start_date: NaiveDate, end_date: NaiveDate, seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    symbol.hash(&mut hasher);
    start_date.hash(&mut hasher);
    end_date.hash(&mut hasher);
    seed.hash(&mut hasher);
    hasher.finish()
}
