//! Rolling min/max over a trailing window.
//!
//! Provides the Lowest Low Value / Highest High Value building blocks used by
//! the support/resistance scan.

use crate::core::error::QuantError;
use crate::core::Result;

/// Calculate rolling minimum over a period.
///
/// Returns `None` for the first (period - 1) values where insufficient data
/// exists. NaN samples are skipped.
pub fn rolling_min(data: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    rolling_fold(data, period, f64::INFINITY, f64::min)
}

/// Calculate rolling maximum over a period.
///
/// Returns `None` for the first (period - 1) values where insufficient data
/// exists. NaN samples are skipped.
pub fn rolling_max(data: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    rolling_fold(data, period, f64::NEG_INFINITY, f64::max)
}

fn rolling_fold(
    data: &[f64],
    period: usize,
    init: f64,
    pick: fn(f64, f64) -> f64,
) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(QuantError::invalid_input("period must be at least 1"));
    }

    let n = data.len();
    let mut result = vec![None; n];

    for i in period.saturating_sub(1)..n {
        let start = i + 1 - period;
        let value = data[start..=i]
            .iter()
            .fold(init, |a, &b| if b.is_nan() { a } else { pick(a, b) });
        result[i] = if value.is_infinite() { None } else { Some(value) };
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_min() {
        let data = vec![5.0, 3.0, 8.0, 2.0, 7.0, 1.0, 9.0];
        let result = rolling_min(&data, 3).unwrap();

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_eq!(result[2], Some(3.0)); // min(5, 3, 8)
        assert_eq!(result[3], Some(2.0)); // min(3, 8, 2)
        assert_eq!(result[4], Some(2.0)); // min(8, 2, 7)
        assert_eq!(result[5], Some(1.0)); // min(2, 7, 1)
        assert_eq!(result[6], Some(1.0)); // min(7, 1, 9)
    }

    #[test]
    fn test_rolling_max() {
        let data = vec![5.0, 3.0, 8.0, 2.0, 7.0, 1.0, 9.0];
        let result = rolling_max(&data, 3).unwrap();

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_eq!(result[2], Some(8.0)); // max(5, 3, 8)
        assert_eq!(result[3], Some(8.0)); // max(3, 8, 2)
        assert_eq!(result[4], Some(8.0)); // max(8, 2, 7)
        assert_eq!(result[5], Some(7.0)); // max(2, 7, 1)
        assert_eq!(result[6], Some(9.0)); // max(7, 1, 9)
    }

    #[test]
    fn test_all_nan_window() {
        let data = vec![f64::NAN, f64::NAN, 1.0];
        let result = rolling_min(&data, 2).unwrap();
        assert_eq!(result[1], None);
        assert_eq!(result[2], Some(1.0));
    }

    #[test]
    fn test_invalid_period() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(rolling_min(&data, 0).is_err());
        assert!(rolling_max(&data, 0).is_err());
    }
}
