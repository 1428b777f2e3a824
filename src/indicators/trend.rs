//! Trend indicators: SMA, EMA.

use crate::core::error::QuantError;
use crate::core::Result;

/// Simple Moving Average.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period
///
/// # Returns
/// One entry per input sample; the first `period - 1` are `None`.
pub fn sma(data: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(QuantError::invalid_input("SMA period must be > 0"));
    }

    let n = data.len();
    let mut result = vec![None; n];

    if period > n {
        return Ok(result);
    }

    // Calculate first SMA
    let mut sum: f64 = data[..period].iter().sum();
    result[period - 1] = Some(sum / period as f64);

    // Sliding window for remaining values
    for i in period..n {
        sum = sum - data[i - period] + data[i];
        result[i] = Some(sum / period as f64);
    }

    Ok(result)
}

/// Exponential Moving Average.
///
/// Smoothing factor `k = 2 / (period + 1)`, seeded with the first sample so
/// the output is defined at every index.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (used to calculate smoothing factor)
pub fn ema(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(QuantError::invalid_input("EMA period must be > 0"));
    }
    if data.is_empty() {
        return Ok(vec![]);
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    Ok(ema_with_alpha(data, alpha, data[0]))
}

/// EMA with custom smoothing factor and seed.
pub(crate) fn ema_with_alpha(data: &[f64], alpha: f64, initial: f64) -> Vec<f64> {
    let n = data.len();
    let mut result = Vec::with_capacity(n);

    if n == 0 {
        return result;
    }

    result.push(initial);
    for i in 1..n {
        let prev = result[i - 1];
        result.push(data[i] * alpha + prev * (1.0 - alpha));
    }

    result
}
