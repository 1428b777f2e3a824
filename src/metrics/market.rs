//! Benchmark-relative statistics: beta/alpha, correlation, put-call ratio.

use serde::{Deserialize, Serialize};

use super::streaming::PairedStats;
use crate::core::error::{ensure_non_negative, QuantError};
use crate::core::Result;

/// Regression of asset returns on market returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaAlpha {
    /// `Cov(returns, market) / Var(market)`.
    pub beta: f64,
    /// `mean(returns) - beta * mean(market)`.
    pub alpha: f64,
}

fn paired(returns: &[f64], market_returns: &[f64]) -> Result<PairedStats> {
    if returns.len() != market_returns.len() {
        return Err(QuantError::length_mismatch(returns.len(), market_returns.len()));
    }
    if returns.len() < 2 {
        return Err(QuantError::insufficient_data(2, returns.len()));
    }

    let mut stats = PairedStats::new();
    for (&r, &m) in returns.iter().zip(market_returns) {
        if !r.is_finite() || !m.is_finite() {
            return Err(QuantError::invalid_input("returns must be finite"));
        }
        stats.update(r, m);
    }
    Ok(stats)
}

/// Beta and alpha of `returns` against `market_returns`.
///
/// # Errors
/// * `LengthMismatch` when the series differ in length.
/// * `InsufficientData` with fewer than two samples.
/// * `DivisionByZero` when the market series has zero variance.
pub fn calculate_beta_alpha(returns: &[f64], market_returns: &[f64]) -> Result<BetaAlpha> {
    let stats = paired(returns, market_returns)?;

    let market_m2 = stats.m2_y();
    if market_m2 == 0.0 {
        return Err(QuantError::division_by_zero("beta (zero market variance)"));
    }

    let beta = stats.co_moment() / market_m2;
    let alpha = stats.mean_x() - beta * stats.mean_y();
    Ok(BetaAlpha { beta, alpha })
}

/// Pearson correlation of two aligned series.
///
/// # Errors
/// As [`calculate_beta_alpha`], with `DivisionByZero` when either series is
/// constant.
pub fn correlation(a: &[f64], b: &[f64]) -> Result<f64> {
    let stats = paired(a, b)?;

    let denom = (stats.m2_x() * stats.m2_y()).sqrt();
    if denom == 0.0 {
        return Err(QuantError::division_by_zero("correlation (zero variance)"));
    }
    Ok((stats.co_moment() / denom).clamp(-1.0, 1.0))
}

/// Put-call ratio: put open interest over call open interest.
///
/// # Errors
/// `DivisionByZero` when call open interest is zero.
pub fn put_call_ratio(put_open_interest: f64, call_open_interest: f64) -> Result<f64> {
    ensure_non_negative("put open interest", put_open_interest)?;
    ensure_non_negative("call open interest", call_open_interest)?;
    if call_open_interest == 0.0 {
        return Err(QuantError::division_by_zero("put-call ratio (zero call open interest)"));
    }
    Ok(put_open_interest / call_open_interest)
}
