//! Least-squares trend forecasting.

use serde::{Deserialize, Serialize};

use crate::core::error::QuantError;
use crate::core::Result;

/// Extrapolated values and fit diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// `horizon` values continuing the fitted line past the last sample.
    pub forecast: Vec<f64>,
    /// `1 - mean(|residual| / y)`. Not clamped: poor fits can go negative,
    /// and the sign of `y` is kept, so negative series can exceed 1.
    pub confidence: f64,
    pub slope: f64,
    pub intercept: f64,
}

/// Fit `y = slope * x + intercept` over `x = 0..n` and extrapolate.
///
/// # Errors
/// * `InsufficientData` with fewer than two samples.
/// * `DivisionByZero` when any sample is zero (relative residual undefined).
pub fn linear_regression_forecast(data: &[f64], horizon: usize) -> Result<ForecastResult> {
    let n = data.len();
    if n < 2 {
        return Err(QuantError::insufficient_data(2, n));
    }
    if data.iter().any(|&y| y == 0.0) {
        return Err(QuantError::division_by_zero("regression confidence (zero sample)"));
    }

    let nf = n as f64;
    let mean_x = (nf - 1.0) / 2.0;
    let mean_y = data.iter().sum::<f64>() / nf;

    let (sxy, sxx) = data.iter().enumerate().fold((0.0, 0.0), |(sxy, sxx), (i, &y)| {
        let dx = i as f64 - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let mean_relative_error = data
        .iter()
        .enumerate()
        .map(|(i, &y)| (y - (slope * i as f64 + intercept)).abs() / y)
        .sum::<f64>()
        / nf;

    let forecast = (n..n + horizon).map(|x| slope * x as f64 + intercept).collect();

    Ok(ForecastResult { forecast, confidence: 1.0 - mean_relative_error, slope, intercept })
}
