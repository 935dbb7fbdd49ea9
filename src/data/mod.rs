//! Market data sources.
//!
//! The pipeline depends only on the [`MarketDataSource`] trait; concrete
//! backends are:
//!
//! - [`AlphaVantageClient`]: live daily closes from the Alpha Vantage API
//! - [`SyntheticSource`]: deterministic generated data for demos and tests
//!
//! Both validate the requested range the same way before doing any work.

use chrono::NaiveDate;

use crate::domain::Series;
use crate::error::AppError;

pub mod alphavantage;
pub mod synthetic;

pub use alphavantage::AlphaVantageClient;
pub use synthetic::SyntheticSource;

/// Longest requestable range, in inclusive days.
pub const MAX_SPAN_DAYS: i64 = 3_650;

/// A provider of daily price/volume observations.
pub trait MarketDataSource {
    /// Fetch observations for `symbol` over `[start_date, end_date]`, both ends
    /// inclusive. The returned series satisfies the `Series` invariants.
    fn fetch(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Series, AppError>;
}

/// Validate a requested date range before hitting a source.
pub fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if start_date > end_date {
        return Err(AppError::range(format!(
            "Start date {start_date} is after end date {end_date}."
        )));
    }
    let span = end_date.signed_duration_since(start_date).num_days() + 1;
    if span > MAX_SPAN_DAYS {
        return Err(AppError::range(format!(
            "Requested range spans {span} days; the maximum is {MAX_SPAN_DAYS}."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn validate_range_accepts_single_day() {
        let d = date(2025, 6, 1);
        assert!(validate_range(d, d).is_ok());
    }

    #[test]
    fn validate_range_rejects_reversed_range() {
        let err = validate_range(date(2025, 6, 2), date(2025, 6, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn validate_range_rejects_oversized_span() {
        let start = date(2010, 1, 1);
        let end = date(2025, 1, 1);
        let err = validate_range(start, end).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        // Exactly at the limit is fine.
        let end_ok = start + chrono::Duration::days(MAX_SPAN_DAYS - 1);
        assert!(validate_range(start, end_ok).is_ok());
    }
}
