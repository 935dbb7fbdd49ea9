//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed closes: `o`
//! - projected trend: `-` line
//! - volume bars: `#`

use crate::domain::{ForecastFile, ForecastResult, Series};

/// Render the price history, optionally with the forecast line appended.
pub fn render_price_plot(
    series: &Series,
    forecast: Option<&ForecastResult>,
    width: usize,
    height: usize,
) -> String {
    let observed: Vec<(f64, f64)> = series
        .observations()
        .iter()
        .map(|o| (series.elapsed_days(o.date) as f64, o.price))
        .collect();

    let line: Option<Vec<(f64, f64)>> = forecast.map(|f| {
        f.points
            .iter()
            .map(|p| (series.elapsed_days(p.date) as f64, p.predicted_price))
            .collect()
    });

    render_plot(&observed, line.as_deref(), width, height)
}

/// Render a saved forecast on its own (no observed overlay).
pub fn render_forecast_file_plot(file: &ForecastFile, width: usize, height: usize) -> String {
    let line: Vec<(f64, f64)> = file
        .forecast
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.predicted_price))
        .collect();

    render_plot(&[], Some(&line), width, height)
}

/// Render daily volumes as a bar chart.
pub fn render_volume_plot(series: &Series, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let volumes: Vec<u64> = series.observations().iter().map(|o| o.volume).collect();
    let v_max = volumes.iter().copied().max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("Volume: n={} | max={v_max}\n", volumes.len()));

    if v_max == 0 {
        for _ in 0..height {
            out.push_str(&" ".repeat(width));
            out.push('\n');
        }
        return out;
    }

    // Each column shows the nearest observation's volume, scaled to height.
    let n = volumes.len();
    let mut levels = vec![0usize; width];
    for (x, level) in levels.iter_mut().enumerate() {
        let u = if width > 1 {
            x as f64 / (width as f64 - 1.0)
        } else {
            0.0
        };
        let idx = (u * (n as f64 - 1.0)).round() as usize;
        *level = ((volumes[idx] as f64 / v_max as f64) * height as f64).round() as usize;
    }

    for row in 0..height {
        let needed = height - row;
        let line: String = levels
            .iter()
            .map(|&level| if level >= needed { '#' } else { ' ' })
            .collect();
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn render_plot(
    observed: &[(f64, f64)],
    line: Option<&[(f64, f64)]>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(observed, line).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(observed, line).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the projected line first so observed points can overlay it.
    if let Some(line) = line {
        draw_polyline(&mut grid, line, x_min, x_max, y_min, y_max);
    }

    for &(x, y) in observed {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: day=[{x_min:.0}, {x_max:.0}] | price=[{y_min:.2}, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(observed: &[(f64, f64)], line: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in observed.iter().chain(line.unwrap_or(&[])) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(observed: &[(f64, f64)], line: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in observed.iter().chain(line.unwrap_or(&[])) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(
    grid: &mut [Vec<char>],
    line: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if line.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in line {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((col0, row0)) = prev {
            draw_line(grid, col0, row0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn price_plot_golden_snapshot_small() {
        let series = Series::new(vec![
            Observation {
                date: date(2025, 3, 1),
                price: 100.0,
                volume: 1_000,
            },
            Observation {
                date: date(2025, 3, 10),
                price: 110.0,
                volume: 1_000,
            },
        ])
        .unwrap();

        let txt = render_price_plot(&series, None, 10, 5);
        let expected = concat!(
            "Plot: day=[0, 9] | price=[99.50, 110.50]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn volume_plot_golden_snapshot_small() {
        let series = Series::new(vec![
            Observation {
                date: date(2025, 3, 1),
                price: 100.0,
                volume: 50_000,
            },
            Observation {
                date: date(2025, 3, 2),
                price: 100.0,
                volume: 100_000,
            },
        ])
        .unwrap();

        // Width/height floor to 10x5; halves of the chart show each bar.
        let txt = render_volume_plot(&series, 10, 5);
        // Bar levels: round(0.5 * 5) = 3 rows for the half-volume day,
        // 5 rows for the max-volume day.
        let expected = concat!(
            "Volume: n=2 | max=100000\n",
            "     #####\n",
            "     #####\n",
            "##########\n",
            "##########\n",
            "##########\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn forecast_overlay_draws_a_line_beyond_the_observations() {
        let series = Series::new(
            (0..5)
                .map(|d| Observation {
                    date: date(2025, 3, 1) + chrono::Duration::days(d),
                    price: 100.0 + d as f64,
                    volume: 1_000,
                })
                .collect(),
        )
        .unwrap();
        let outcome = crate::forecast::forecast(&series, 10, 0.25, 1).unwrap();

        let txt = render_price_plot(&series, Some(&outcome.forecast), 40, 10);
        assert!(txt.contains('o'));
        assert!(txt.contains('-'));
        // Deterministic: same inputs, same picture.
        assert_eq!(txt, render_price_plot(&series, Some(&outcome.forecast), 40, 10));
    }
}
