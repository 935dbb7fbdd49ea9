//! Shared pipeline logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! fetch -> trend analysis -> forecast (fit + evaluate + project)
//!
//! The CLI can then focus on presentation (printing, plots, exports). Each
//! run is a pure, synchronous computation over its own request-scoped state;
//! independent runs never share anything mutable.

use crate::data::{AlphaVantageClient, MarketDataSource, SyntheticSource};
use crate::domain::{AnalysisConfig, Series, SourceKind};
use crate::error::AppError;
use crate::forecast::ForecastOutcome;
use crate::trend::TrendReport;

/// Outputs of a `mt trend` run.
#[derive(Debug, Clone)]
pub struct TrendRun {
    pub series: Series,
    pub trend: TrendReport,
}

/// Outputs of a `mt forecast` run.
#[derive(Debug, Clone)]
pub struct ForecastRun {
    pub series: Series,
    pub trend: TrendReport,
    pub outcome: ForecastOutcome,
}

/// Build the data source selected by the configuration.
pub fn source_for(config: &AnalysisConfig) -> Result<Box<dyn MarketDataSource>, AppError> {
    match config.source {
        SourceKind::Synthetic => Ok(Box::new(SyntheticSource::new(
            config.seed,
            config.synthetic_mode,
        ))),
        SourceKind::Alphavantage => Ok(Box::new(AlphaVantageClient::from_env()?)),
    }
}

/// Fetch the series and run trend analysis.
pub fn run_trend(config: &AnalysisConfig) -> Result<TrendRun, AppError> {
    let source = source_for(config)?;
    let series = source.fetch(&config.symbol, config.start_date, config.end_date)?;
    let trend = crate::trend::analyze(&series)?;

    Ok(TrendRun { series, trend })
}

/// Fetch the series, run trend analysis, then fit and project.
pub fn run_forecast(config: &AnalysisConfig) -> Result<ForecastRun, AppError> {
    let TrendRun { series, trend } = run_trend(config)?;

    let outcome = crate::forecast::forecast(
        &series,
        config.horizon_days,
        config.test_fraction,
        config.seed,
    )?;

    Ok(ForecastRun {
        series,
        trend,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SyntheticMode;
    use chrono::NaiveDate;

    fn config() -> AnalysisConfig {
        AnalysisConfig {
            symbol: "SPX".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            source: SourceKind::Synthetic,
            synthetic_mode: SyntheticMode::Walk,
            horizon_days: 30,
            test_fraction: 0.2,
            seed: 42,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_series: None,
            export_forecast: None,
            export_json: None,
        }
    }

    #[test]
    fn forecast_run_produces_horizon_points_end_to_end() {
        let run = run_forecast(&config()).unwrap();

        assert_eq!(run.series.len(), 90);
        assert_eq!(run.trend.stats.n_obs, 90);
        assert_eq!(run.outcome.forecast.points.len(), 30);

        let first_projected = run.outcome.forecast.points[0].date;
        assert_eq!(
            first_projected,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
    }

    #[test]
    fn identical_configs_reproduce_identical_runs() {
        let a = run_forecast(&config()).unwrap();
        let b = run_forecast(&config()).unwrap();

        assert_eq!(a.series, b.series);
        assert_eq!(a.outcome, b.outcome);
    }
}
