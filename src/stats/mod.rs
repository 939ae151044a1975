//! Summary statistics over probe outputs
//!
//! Every function guards its preconditions explicitly: an empty sample
//! series or a zero trial count is a caller contract violation surfaced as
//! `AppError::Statistics`, never a silent NaN.

use crate::error::{AppError, Result};

/// Arithmetic mean of a latency sample series, in milliseconds
pub fn mean(samples_ms: &[f64]) -> Result<f64> {
    if samples_ms.is_empty() {
        return Err(AppError::statistics(
            "Cannot compute mean of an empty sample series",
        ));
    }
    Ok(samples_ms.iter().sum::<f64>() / samples_ms.len() as f64)
}

/// Smallest sample in a latency series
pub fn min(samples_ms: &[f64]) -> Result<f64> {
    samples_ms
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, x| {
            Some(acc.map_or(x, |m| m.min(x)))
        })
        .ok_or_else(|| AppError::statistics("Cannot compute min of an empty sample series"))
}

/// Largest sample in a latency series
pub fn max(samples_ms: &[f64]) -> Result<f64> {
    samples_ms
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, x| {
            Some(acc.map_or(x, |m| m.max(x)))
        })
        .ok_or_else(|| AppError::statistics("Cannot compute max of an empty sample series"))
}

/// Fraction of consistency trials that were misses
pub fn miss_ratio(misses: u32, trials: u32) -> Result<f64> {
    if trials == 0 {
        return Err(AppError::statistics(
            "Cannot compute miss ratio over zero trials",
        ));
    }
    if misses > trials {
        return Err(AppError::statistics(format!(
            "Miss count {} exceeds trial count {}",
            misses, trials
        )));
    }
    Ok(f64::from(misses) / f64::from(trials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mean_of_known_series() {
        let samples = vec![10.0, 20.0, 30.0];
        assert_eq!(mean(&samples).unwrap(), 20.0);

        let single = vec![42.5];
        assert_eq!(mean(&single).unwrap(), 42.5);
    }

    #[test]
    fn test_mean_rejects_empty_series() {
        let result = mean(&[]);
        assert!(matches!(result, Err(AppError::Statistics(_))));
    }

    #[test]
    fn test_min_max() {
        let samples = vec![12.5, 3.0, 99.9, 47.0];
        assert_eq!(min(&samples).unwrap(), 3.0);
        assert_eq!(max(&samples).unwrap(), 99.9);

        assert!(min(&[]).is_err());
        assert!(max(&[]).is_err());
    }

    #[test]
    fn test_miss_ratio_bounds() {
        assert_eq!(miss_ratio(0, 10).unwrap(), 0.0);
        assert_eq!(miss_ratio(10, 10).unwrap(), 1.0);
        assert_eq!(miss_ratio(3, 10).unwrap(), 0.3);
    }

    #[test]
    fn test_miss_ratio_rejects_zero_trials() {
        assert!(matches!(miss_ratio(0, 0), Err(AppError::Statistics(_))));
    }

    #[test]
    fn test_miss_ratio_rejects_excess_misses() {
        assert!(matches!(miss_ratio(11, 10), Err(AppError::Statistics(_))));
    }

    proptest! {
        #[test]
        fn prop_miss_ratio_is_exact_division(trials in 1u32..10_000, misses_seed in 0u32..10_000) {
            let misses = misses_seed % (trials + 1);
            let ratio = miss_ratio(misses, trials).unwrap();
            prop_assert_eq!(ratio, f64::from(misses) / f64::from(trials));
            prop_assert!((0.0..=1.0).contains(&ratio));
        }

        #[test]
        fn prop_mean_stays_within_sample_bounds(samples in prop::collection::vec(0.0f64..10_000.0, 1..200)) {
            let m = mean(&samples).unwrap();
            let lo = min(&samples).unwrap();
            let hi = max(&samples).unwrap();
            prop_assert!(m >= lo - 1e-9);
            prop_assert!(m <= hi + 1e-9);
            prop_assert!(m.is_finite());
        }
    }
}
