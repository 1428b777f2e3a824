//! Return-series performance measures: Sharpe, Sortino, drawdown.

use super::streaming::ReturnStats;
use crate::core::error::QuantError;
use crate::core::Result;

/// Annualized Sharpe ratio.
///
/// # Arguments
/// * `returns` - Per-period returns (NaN samples are skipped)
/// * `periods_per_year` - Number of periods per year (e.g., 252 for daily)
/// * `risk_free_rate` - Annual risk-free rate
///
/// # Errors
/// `InsufficientData` under two samples, `DivisionByZero` for zero volatility.
pub fn sharpe_ratio(returns: &[f64], periods_per_year: f64, risk_free_rate: f64) -> Result<f64> {
    let stats = ReturnStats::from_slice(returns);
    if stats.count() < 2 {
        return Err(QuantError::insufficient_data(2, stats.count()));
    }
    let std = stats.std_dev();
    if std == 0.0 {
        return Err(QuantError::division_by_zero("Sharpe ratio (zero volatility)"));
    }

    let rf_per_period = risk_free_rate / periods_per_year;
    let annualized_excess = (stats.mean() - rf_per_period) * periods_per_year;
    let annualized_std = std * periods_per_year.sqrt();

    Ok(annualized_excess / annualized_std)
}

/// Annualized Sortino ratio against a zero target.
///
/// # Errors
/// `InsufficientData` under two samples, `DivisionByZero` when there is no
/// downside deviation.
pub fn sortino_ratio(returns: &[f64], periods_per_year: f64) -> Result<f64> {
    sortino_ratio_with_target(returns, periods_per_year, 0.0)
}

/// Annualized Sortino ratio against a per-period minimum acceptable return.
///
/// Both the excess return and the downside deviation are measured from
/// `target_return`.
pub fn sortino_ratio_with_target(
    returns: &[f64],
    periods_per_year: f64,
    target_return: f64,
) -> Result<f64> {
    let mut stats = ReturnStats::new().with_target_return(target_return);
    stats.update_all(returns);
    if stats.count() < 2 {
        return Err(QuantError::insufficient_data(2, stats.count()));
    }
    let downside_std = stats.downside_std_dev();
    if downside_std == 0.0 {
        return Err(QuantError::division_by_zero("Sortino ratio (no downside deviation)"));
    }

    let annualized_excess = (stats.mean() - target_return) * periods_per_year;
    let annualized_downside_std = downside_std * periods_per_year.sqrt();

    Ok(annualized_excess / annualized_downside_std)
}

/// Calculate drawdown curve from an equity curve, in percent of running peak.
pub fn drawdown_curve(equity_curve: &[f64]) -> Vec<f64> {
    let mut peak = match equity_curve.first() {
        Some(&first) => first,
        None => return vec![],
    };

    equity_curve
        .iter()
        .map(|&value| {
            if value > peak {
                peak = value;
            }
            if peak > 0.0 {
                (peak - value) / peak * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Maximum drawdown as percentage.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    drawdown_curve(equity_curve).iter().fold(0.0f64, |a, &b| a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharpe_ratio() {
        let returns = [0.01, 0.02, -0.005, 0.015, 0.0];
        let sharpe = sharpe_ratio(&returns, 252.0, 0.0).unwrap();
        assert!(sharpe > 0.0);

        let flat = [0.01; 10];
        assert!(matches!(
            sharpe_ratio(&flat, 252.0, 0.0),
            Err(QuantError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_sortino_ratio() {
        let returns = [0.02, -0.01, 0.03, -0.02, 0.01];
        assert!(sortino_ratio(&returns, 252.0).unwrap() > 0.0);
        assert!(sortino_ratio(&[0.01, 0.02], 252.0).is_err());
    }

    #[test]
    fn test_sortino_with_target() {
        let returns = [0.02, -0.01, 0.03, -0.02, 0.01];
        assert_eq!(
            sortino_ratio_with_target(&returns, 252.0, 0.0).unwrap(),
            sortino_ratio(&returns, 252.0).unwrap()
        );

        // shortfalls below 1%: -0.02, -0.03 -> sqrt(0.0013 / 4)
        let downside = (0.0013f64 / 4.0).sqrt();
        let expected = (0.006 - 0.01) * 252.0 / (downside * 252.0f64.sqrt());
        let sortino = sortino_ratio_with_target(&returns, 252.0, 0.01).unwrap();
        assert!((sortino - expected).abs() < 1e-9);
        assert!(sortino < 0.0);

        // Nothing falls below a -5% floor
        assert!(matches!(
            sortino_ratio_with_target(&returns, 252.0, -0.05),
            Err(QuantError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_max_drawdown() {
        let equity = [100.0, 120.0, 90.0, 110.0, 130.0, 117.0];
        // peak 120 -> 90 = 25%
        assert!((max_drawdown(&equity) - 25.0).abs() < 1e-10);
        assert_eq!(drawdown_curve(&[]), Vec::<f64>::new());
        assert_eq!(max_drawdown(&[100.0, 101.0, 102.0]), 0.0);
    }
}
