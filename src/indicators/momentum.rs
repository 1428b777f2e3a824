//! Momentum indicators: RSI, MACD.

use serde::{Deserialize, Serialize};

use super::trend::ema;
use crate::core::config::IndicatorDefaults;
use crate::core::error::QuantError;
use crate::core::Result;

/// Relative Strength Index from the first `period` price changes.
///
/// `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`, saturating at 100 when
/// there were no losses.
///
/// # Errors
/// * `InvalidInput` for a zero period.
/// * `InsufficientData` with fewer than `period + 1` samples.
pub fn calculate_rsi(data: &[f64], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(QuantError::invalid_input("RSI period must be > 0"));
    }
    if data.len() < period + 1 {
        return Err(QuantError::insufficient_data(period + 1, data.len()));
    }

    let (gain_sum, loss_sum) = data[..=period]
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(g, l), change| {
            if change > 0.0 {
                (g + change, l)
            } else {
                (g, l - change)
            }
        });

    Ok(rsi_from_averages(gain_sum / period as f64, loss_sum / period as f64))
}

#[inline]
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI across the whole series with Wilder's smoothing.
///
/// # Returns
/// Vector of RSI values (0-100 scale, `None` for the first `period` samples)
pub fn rsi_series(data: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(QuantError::invalid_input("RSI period must be > 0"));
    }

    let n = data.len();
    let mut result = vec![None; n];
    if period >= n {
        return Ok(result);
    }

    // Calculate price changes
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];

    for i in 1..n {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    // Calculate initial average gain/loss using SMA
    let mut avg_gain: f64 = gains[1..=period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[1..=period].iter().sum::<f64>() / period as f64;
    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Smoothed moving average for remaining values (Wilder's smoothing)
    let alpha = 1.0 / period as f64;
    for i in (period + 1)..n {
        avg_gain = alpha * gains[i] + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * losses[i] + (1.0 - alpha) * avg_loss;
        result[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(result)
}

/// MACD result structure. All three lines are aligned with the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    /// MACD line (fast EMA - slow EMA).
    pub macd: Vec<f64>,
    /// Signal line (EMA of MACD line).
    pub signal: Vec<f64>,
    /// Histogram (MACD line - signal line).
    pub histogram: Vec<f64>,
}

/// MACD with the default periods from [`IndicatorDefaults`] (12/26/9).
pub fn macd(data: &[f64]) -> Result<MacdResult> {
    let defaults = IndicatorDefaults::default();
    macd_with_periods(data, defaults.macd_fast, defaults.macd_slow, defaults.macd_signal)
}

/// Moving Average Convergence Divergence with custom periods.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `fast_period` - Fast EMA period
/// * `slow_period` - Slow EMA period
/// * `signal_period` - Signal line EMA period
pub fn macd_with_periods(
    data: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdResult> {
    if fast_period == 0 || slow_period == 0 || signal_period == 0 {
        return Err(QuantError::invalid_input("MACD periods must be > 0"));
    }
    if fast_period >= slow_period {
        return Err(QuantError::invalid_input("MACD fast period must be < slow period"));
    }

    let fast_ema = ema(data, fast_period)?;
    let slow_ema = ema(data, slow_period)?;

    let macd: Vec<f64> = fast_ema.iter().zip(&slow_ema).map(|(f, s)| f - s).collect();
    let signal = ema(&macd, signal_period)?;
    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    Ok(MacdResult { macd, signal, histogram })
}
