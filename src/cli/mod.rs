//! Command-line parsing for the market trend analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the analysis/forecasting code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{SourceKind, SyntheticMode};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mt", version, about = "Market trend analysis and price forecasting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a series and print the trend view (tables, stats, plots).
    Trend(MarketArgs),
    /// Fetch a series, fit the trend model, and print the forecast.
    Forecast(MarketArgs),
    /// Plot a previously exported forecast JSON.
    Plot(PlotArgs),
}

/// Common options for trend analysis and forecasting.
#[derive(Debug, Parser, Clone)]
pub struct MarketArgs {
    /// Market symbol to analyze.
    #[arg(short, long, default_value = "SPX")]
    pub symbol: String,

    /// First day of the requested range (YYYY-MM-DD).
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the requested range (YYYY-MM-DD).
    #[arg(long)]
    pub end: NaiveDate,

    /// Data source backing the series.
    #[arg(long, value_enum, default_value_t = SourceKind::Synthetic)]
    pub source: SourceKind,

    /// Synthetic generator mode (ignored for live sources).
    #[arg(long, value_enum, default_value_t = SyntheticMode::Uniform)]
    pub synthetic_mode: SyntheticMode,

    /// Number of future days to project.
    #[arg(long, default_value_t = 30)]
    pub horizon: u32,

    /// Fraction of observations held out for evaluation.
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Seed for the train/test shuffle (and synthetic generation).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Render ASCII plots in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the fetched series to CSV.
    #[arg(long = "export-series")]
    pub export_series: Option<PathBuf>,

    /// Export the forecast table to CSV.
    #[arg(long = "export-forecast")]
    pub export_forecast: Option<PathBuf>,

    /// Export the forecast (model + evaluation + points) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for plotting a saved forecast.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Forecast JSON file produced by `mt forecast --export-json`.
    #[arg(long, value_name = "JSON")]
    pub forecast: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_args_parse_with_defaults() {
        let cli = Cli::try_parse_from([
            "mt",
            "forecast",
            "--start",
            "2025-01-01",
            "--end",
            "2025-03-31",
        ])
        .unwrap();

        let Command::Forecast(args) = cli.command else {
            panic!("expected forecast subcommand");
        };
        assert_eq!(args.symbol, "SPX");
        assert_eq!(args.horizon, 30);
        assert!((args.test_fraction - 0.2).abs() < 1e-12);
        assert_eq!(args.seed, 42);
        assert_eq!(args.source, SourceKind::Synthetic);
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn source_and_mode_parse_from_kebab_values() {
        let cli = Cli::try_parse_from([
            "mt",
            "trend",
            "--start",
            "2025-01-01",
            "--end",
            "2025-01-31",
            "--source",
            "alphavantage",
            "--synthetic-mode",
            "walk",
        ])
        .unwrap();

        let Command::Trend(args) = cli.command else {
            panic!("expected trend subcommand");
        };
        assert_eq!(args.source, SourceKind::Alphavantage);
        assert_eq!(args.synthetic_mode, SyntheticMode::Walk);
    }

    #[test]
    fn malformed_dates_are_rejected_at_parse_time() {
        let res = Cli::try_parse_from([
            "mt",
            "trend",
            "--start",
            "not-a-date",
            "--end",
            "2025-01-31",
        ]);
        assert!(res.is_err());
    }
}
