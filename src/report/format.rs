//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the analysis/forecast code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{AnalysisConfig, EvaluationResult, ForecastResult, Series};
use crate::trend::TrendReport;

/// Format the run header (symbol, range, source, dataset stats).
pub fn format_run_summary(config: &AnalysisConfig, trend: &TrendReport) -> String {
    let mut out = String::new();

    out.push_str("=== mt - Market Trends ===\n");
    out.push_str(&format!("Symbol: {}\n", config.symbol));
    out.push_str(&format!(
        "Range: {} to {}\n",
        config.start_date, config.end_date
    ));
    out.push_str(&format!("Source: {}\n", config.source.display_name()));
    out.push_str(&format!(
        "Points: n={} | price=[{}, {}] | volume=[{}, {}]\n",
        trend.stats.n_obs,
        fmt_currency(trend.stats.price_min),
        fmt_currency(trend.stats.price_max),
        trend.stats.volume_min,
        trend.stats.volume_max,
    ));

    out
}

/// Format the observed series as a table.
///
/// The maximum-price row is marked with `*`; the change column shows the
/// delta versus the previous observation.
pub fn format_series_table(series: &Series, trend: &TrendReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {:<12} {:>14} {:>10} {:>12}\n",
        "date", "price", "volume", "change"
    ));
    out.push_str(&format!("  {:-<12} {:-<14} {:-<10} {:-<12}\n", "", "", "", ""));

    for (i, obs) in series.observations().iter().enumerate() {
        let mark = if obs.date == trend.stats.price_max_date {
            '*'
        } else {
            ' '
        };
        // daily_deltas[i - 1] belongs to observation i (keyed by later date).
        let change = if i == 0 {
            String::new()
        } else {
            fmt_signed(trend.daily_deltas[i - 1].1)
        };
        out.push_str(&format!(
            "{mark} {:<12} {:>14} {:>10} {:>12}\n",
            obs.date.to_string(),
            fmt_currency(obs.price),
            obs.volume,
            change,
        ));
    }

    out
}

fn fmt_signed(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{delta:.2}")
    } else {
        format!("{delta:.2}")
    }
}

/// Format the model evaluation line.
pub fn format_evaluation(evaluation: &EvaluationResult) -> String {
    format!(
        "Model mean squared error (MSE): {:.2}\n",
        evaluation.mean_squared_error
    )
}

/// Format the projected prices as a table.
pub fn format_forecast_table(forecast: &ForecastResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Forecasted prices for the next {} days:\n",
        forecast.points.len()
    ));
    out.push_str(&format!("{:<12} {:>16}\n", "date", "predicted"));
    out.push_str(&format!("{:-<12} {:-<16}\n", "", ""));

    for point in &forecast.points {
        out.push_str(&format!(
            "{:<12} {:>16}\n",
            point.date.to_string(),
            fmt_currency(point.predicted_price),
        ));
    }

    out
}

/// Currency formatting with thousands separators, e.g. `$1,234.50`.
///
/// Negative values (the unclamped forecast can produce them) render as
/// `-$1,234.50`.
pub fn fmt_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rem = cents % 100;
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{rem:02}", group_thousands(dollars))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
