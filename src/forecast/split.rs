//! Seeded train/test partition of the regression pairs.
//!
//! The shuffle is keyed by an explicit, request-local `StdRng` so the same
//! seed always reproduces the same split. Concurrent requests each build
//! their own generator; nothing is drawn from shared global entropy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::SplitDataset;
use crate::error::AppError;

/// Partition `(elapsed_days, price)` pairs into train and test sets.
///
/// The held-out size is `ceil(n * test_fraction)`, so the test set is
/// non-empty for any fraction in (0, 1). Both halves come back sorted by
/// elapsed day.
pub fn split_train_test(
    pairs: &[(i64, f64)],
    test_fraction: f64,
    seed: u64,
) -> Result<SplitDataset, AppError> {
    if !(test_fraction.is_finite() && test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(AppError::invalid_input(format!(
            "Test fraction must be in (0, 1), got {test_fraction}."
        )));
    }

    let n = pairs.len();
    let n_test = ((n as f64) * test_fraction).ceil() as usize;

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);
    let mut train: Vec<(i64, f64)> = train_idx.iter().map(|&i| pairs[i]).collect();
    let mut test: Vec<(i64, f64)> = test_idx.iter().map(|&i| pairs[i]).collect();
    train.sort_by_key(|&(day, _)| day);
    test.sort_by_key(|&(day, _)| day);

    if train.len() < 2 {
        return Err(AppError::insufficient_data(format!(
            "Train split has {} point(s); at least 2 are required for a line fit.",
            train.len()
        )));
    }

    Ok(SplitDataset { train, test })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn pairs(n: i64) -> Vec<(i64, f64)> {
        (0..n).map(|d| (d, 100.0 + d as f64)).collect()
    }

    #[test]
    fn split_is_a_disjoint_cover_of_the_input() {
        let input = pairs(20);
        let split = split_train_test(&input, 0.2, 9).unwrap();

        assert_eq!(split.train.len() + split.test.len(), input.len());

        let mut days: Vec<i64> = split
            .train
            .iter()
            .chain(split.test.iter())
            .map(|&(day, _)| day)
            .collect();
        days.sort_unstable();
        let expected: Vec<i64> = (0..20).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn test_size_is_the_ceiling_of_the_fraction() {
        let split = split_train_test(&pairs(10), 0.2, 1).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 8);

        // ceil(7 * 0.2) = 2
        let split = split_train_test(&pairs(7), 0.2, 1).unwrap();
        assert_eq!(split.test.len(), 2);

        // Any fraction in (0, 1) holds out at least one point.
        let split = split_train_test(&pairs(50), 0.001, 1).unwrap();
        assert_eq!(split.test.len(), 1);
    }

    #[test]
    fn same_seed_reproduces_the_same_split() {
        let input = pairs(30);
        let a = split_train_test(&input, 0.25, 7).unwrap();
        let b = split_train_test(&input, 0.25, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn split_rejects_out_of_range_fractions() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = split_train_test(&pairs(10), bad, 1).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "fraction {bad}");
        }
    }

    #[test]
    fn split_rejects_trains_smaller_than_two() {
        // n=2, fraction=0.5 -> one test point, one train point.
        let err = split_train_test(&pairs(2), 0.5, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
