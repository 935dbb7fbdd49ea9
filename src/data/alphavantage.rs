//! Alpha Vantage daily time-series client.
//!
//! Uses the `TIME_SERIES_DAILY` endpoint; only the close price and volume are
//! consumed. Response parsing is kept in a free function so it can be tested
//! against JSON fixtures without touching the network.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::{MarketDataSource, validate_range};
use crate::domain::{Observation, Series};
use crate::error::AppError;

const BASE_URL: &str = "https://www.alphavantage.co/query";

pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
}

impl AlphaVantageClient {
    /// Build a client from `ALPHA_VANTAGE_API_KEY` in the environment (`.env`
    /// files are honored).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("ALPHA_VANTAGE_API_KEY")
            .map_err(|_| AppError::data("Missing ALPHA_VANTAGE_API_KEY in environment (.env)."))?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }
}

impl MarketDataSource for AlphaVantageClient {
    fn fetch(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Series, AppError> {
        validate_range(start_date, end_date)?;

        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("outputsize", "full"),
                ("apikey", &self.api_key),
            ])
            .send()
            .map_err(|e| AppError::data(format!("Alpha Vantage request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::data(format!(
                "Alpha Vantage request failed with status {}.",
                resp.status()
            )));
        }

        let body: DailyResponse = resp
            .json()
            .map_err(|e| AppError::data(format!("Failed to parse Alpha Vantage response: {e}")))?;

        series_from_response(symbol, &body, start_date, end_date)
    }
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<BTreeMap<NaiveDate, DailyBar>>,
    /// Set when the API rejects the request (bad symbol, bad key).
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    /// Set when the free-tier rate limit is hit.
    #[serde(rename = "Note")]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DailyBar {
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

/// Convert a parsed API response into a validated series over the range.
fn series_from_response(
    symbol: &str,
    body: &DailyResponse,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Series, AppError> {
    if let Some(msg) = &body.error_message {
        return Err(AppError::data(format!(
            "Alpha Vantage rejected the request: {msg}"
        )));
    }
    if let Some(note) = &body.note {
        return Err(AppError::data(format!("Alpha Vantage throttled the request: {note}")));
    }

    let Some(time_series) = &body.time_series else {
        return Err(AppError::data(format!(
            "No daily time series for {symbol} in Alpha Vantage response."
        )));
    };

    // BTreeMap keys ascend, so the collected observations are already sorted.
    let mut observations = Vec::new();
    for (&date, bar) in time_series.range(start_date..=end_date) {
        let price = parse_field(&bar.close)
            .ok_or_else(|| AppError::data(format!("Invalid close '{}' on {date}.", bar.close)))?;
        let volume = bar
            .volume
            .trim()
            .parse::<u64>()
            .map_err(|_| AppError::data(format!("Invalid volume '{}' on {date}.", bar.volume)))?;
        observations.push(Observation {
            date,
            price,
            volume,
        });
    }

    if observations.is_empty() {
        return Err(AppError::data(format!(
            "No observations for {symbol} between {start_date} and {end_date}."
        )));
    }

    Series::new(observations)
}

fn parse_field(raw: &str) -> Option<f64> {
    let v = raw.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
