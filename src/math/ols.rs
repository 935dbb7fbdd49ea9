//! Least squares fit of the linear trend model.
//!
//! The forecast model `price = intercept + slope * day` is linear in its two
//! parameters, so the ordinary least squares fit is a single solve of the
//! `n x 2` design matrix, with no iterative optimizer.
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly for tall matrices
//!   (many observations, two columns). Nalgebra's `QR::solve` is intended for
//!   square systems and will panic for non-square matrices.
//! - With a two-column design, SVD cost is negligible at any realistic series
//!   length.

use nalgebra::{DMatrix, DVector};

/// Fit `price = intercept + slope * day` by ordinary least squares.
///
/// Returns `(intercept, slope)`, or `None` if the system is too
/// ill-conditioned to solve robustly (e.g. all days identical).
pub fn fit_line(days: &[f64], prices: &[f64]) -> Option<(f64, f64)> {
    debug_assert_eq!(days.len(), prices.len());
    let n = days.len();
    if n < 2 {
        return None;
    }

    let x = DMatrix::from_fn(n, 2, |row, col| if col == 0 { 1.0 } else { days[row] });
    let y = DVector::from_row_slice(prices);

    let svd = x.svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(&y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some((beta[0], beta[1]));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_line_recovers_exact_line() {
        // price = 100 + 2 * day on days [0, 1, 2, 3]
        let days = [0.0, 1.0, 2.0, 3.0];
        let prices = [100.0, 102.0, 104.0, 106.0];

        let (intercept, slope) = fit_line(&days, &prices).unwrap();
        assert!((intercept - 100.0).abs() < 1e-9);
        assert!((slope - 2.0).abs() < 1e-9);
    }

    #[test]
    fn fit_line_flat_series_has_zero_slope() {
        let days = [0.0, 1.0, 2.0, 5.0, 9.0];
        let prices = [42.0; 5];

        let (intercept, slope) = fit_line(&days, &prices).unwrap();
        assert!((intercept - 42.0).abs() < 1e-9);
        assert!(slope.abs() < 1e-9);
    }

    #[test]
    fn fit_line_minimizes_squared_error_on_noisy_points() {
        // Two points pin the line exactly; a symmetric third keeps the slope.
        let days = [0.0, 1.0, 2.0];
        let prices = [10.0, 13.0, 10.0];

        let (intercept, slope) = fit_line(&days, &prices).unwrap();
        assert!(slope.abs() < 1e-9);
        assert!((intercept - 11.0).abs() < 1e-9);
    }

    #[test]
    fn fit_line_rejects_underdetermined_input() {
        assert!(fit_line(&[1.0], &[5.0]).is_none());
        assert!(fit_line(&[], &[]).is_none());
    }
}
