//! Integration tests for portfolio statistics.

use quantedge::metrics::{
    calculate_beta_alpha, calculate_cvar, calculate_var, correlation, max_drawdown,
    sharpe_ratio, sortino_ratio,
};
use quantedge::QuantError;

fn daily_returns() -> (Vec<f64>, Vec<f64>) {
    // 60 days of market returns and an asset with beta 1.2 plus noise
    let market: Vec<f64> = (0..60).map(|i| (i as f64 * 0.7).sin() * 0.01 + 0.0005).collect();
    let asset: Vec<f64> = market
        .iter()
        .enumerate()
        .map(|(i, m)| 1.2 * m + 0.0003 + (i as f64 * 1.3).cos() * 0.001)
        .collect();
    (asset, market)
}

#[test]
fn test_reference_var() {
    assert_eq!(calculate_var(&[-10.0, -5.0, 0.0, 5.0, 10.0], 0.8).unwrap(), -5.0);
}

#[test]
fn test_tail_risk_ordering() {
    let (asset, _) = daily_returns();
    for confidence in [0.9, 0.95, 0.99] {
        let var = calculate_var(&asset, confidence).unwrap();
        let cvar = calculate_cvar(&asset, confidence).unwrap();
        assert!(cvar <= var, "CVaR {} above VaR {} at {}", cvar, var, confidence);
    }
    // Higher confidence looks further into the tail
    assert!(calculate_var(&asset, 0.99).unwrap() <= calculate_var(&asset, 0.9).unwrap());
}

#[test]
fn test_beta_alpha_against_market() {
    let (asset, market) = daily_returns();
    let result = calculate_beta_alpha(&asset, &market).unwrap();

    assert!((result.beta - 1.2).abs() < 0.1, "beta was {}", result.beta);
    assert!(result.alpha.abs() < 0.001);
    assert!(correlation(&asset, &market).unwrap() > 0.9);
}

#[test]
fn test_undefined_ratios_are_errors() {
    assert!(matches!(
        calculate_beta_alpha(&[0.01, 0.02], &[0.0, 0.0]),
        Err(QuantError::DivisionByZero { .. })
    ));
    assert!(matches!(
        sharpe_ratio(&[0.0; 20], 252.0, 0.0),
        Err(QuantError::DivisionByZero { .. })
    ));
    assert!(matches!(
        sortino_ratio(&[0.01; 20], 252.0),
        Err(QuantError::DivisionByZero { .. })
    ));
}

#[test]
fn test_performance_of_equity_curve() {
    let (asset, _) = daily_returns();
    let mut equity = vec![100_000.0];
    for r in &asset {
        let last = equity[equity.len() - 1];
        equity.push(last * (1.0 + r));
    }

    let drawdown = max_drawdown(&equity);
    assert!(drawdown > 0.0 && drawdown < 100.0);

    let sharpe = sharpe_ratio(&asset, 252.0, 0.0).unwrap();
    let sortino = sortino_ratio(&asset, 252.0).unwrap();
    assert!(sharpe.is_finite() && sortino.is_finite());
    assert_eq!(sharpe.signum(), sortino.signum());
}
