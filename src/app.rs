//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - fetches market data
//! - runs trend analysis and (optionally) the forecast
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, MarketArgs, PlotArgs};
use crate::domain::AnalysisConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `mt` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Trend(args) => handle_market(args, OutputMode::TrendOnly),
        Command::Forecast(args) => handle_market(args, OutputMode::Full),
        Command::Plot(args) => handle_plot(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    TrendOnly,
    Full,
}

fn handle_market(args: MarketArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args);

    let (run, outcome) = match mode {
        OutputMode::TrendOnly => {
            let run = pipeline::run_trend(&config)?;
            (run, None)
        }
        OutputMode::Full => {
            let run = pipeline::run_forecast(&config)?;
            (
                pipeline::TrendRun {
                    series: run.series,
                    trend: run.trend,
                },
                Some(run.outcome),
            )
        }
    };

    println!("{}", crate::report::format_run_summary(&config, &run.trend));
    println!("{}", crate::report::format_series_table(&run.series, &run.trend));

    if let Some(outcome) = &outcome {
        println!("{}", crate::report::format_evaluation(&outcome.evaluation));
        println!("{}", crate::report::format_forecast_table(&outcome.forecast));
    }

    if config.plot {
        let price_plot = crate::plot::render_price_plot(
            &run.series,
            outcome.as_ref().map(|o| &o.forecast),
            config.plot_width,
            config.plot_height,
        );
        println!("{price_plot}");

        let volume_plot =
            crate::plot::render_volume_plot(&run.series, config.plot_width, config.plot_height);
        println!("{volume_plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_series {
        crate::io::write_series_csv(path, &run.series)?;
    }
    if let Some(outcome) = &outcome {
        if let Some(path) = &config.export_forecast {
            crate::io::write_forecast_csv(path, &outcome.forecast)?;
        }
        if let Some(path) = &config.export_json {
            crate::io::write_forecast_json(path, outcome, &config)?;
        }
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let artifact = crate::io::read_forecast_json(&args.forecast)?;

    println!(
        "Forecast for {} ({} to {}, {}):",
        artifact.symbol,
        artifact.start_date,
        artifact.end_date,
        artifact.source.display_name()
    );
    println!("{}", crate::report::format_evaluation(&artifact.evaluation));

    let plot = crate::plot::render_forecast_file_plot(&artifact, args.width, args.height);
    println!("{plot}");

    Ok(())
}

pub fn analysis_config_from_args(args: &MarketArgs) -> AnalysisConfig {
    AnalysisConfig {
        symbol: args.symbol.clone(),
        start_date: args.start,
        end_date: args.end,
        source: args.source,
        synthetic_mode: args.synthetic_mode,
        horizon_days: args.horizon,
        test_fraction: args.test_fraction,
        seed: args.seed,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_series: args.export_series.clone(),
        export_forecast: args.export_forecast.clone(),
        export_json: args.export_json.clone(),
    }
}
