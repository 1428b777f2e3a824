//! Historical Value-at-Risk and Conditional Value-at-Risk.

use crate::core::error::QuantError;
use crate::core::Result;

/// Absorbs representation error in `(1 - confidence) * n` (e.g. 0.2 * 5
/// evaluating to 0.9999999999999998) before flooring.
const QUANTILE_EPSILON: f64 = 1e-9;

fn validate(returns: &[f64], confidence: f64) -> Result<()> {
    if returns.is_empty() {
        return Err(QuantError::insufficient_data(1, 0));
    }
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(QuantError::invalid_input(format!(
            "confidence must be in (0, 1), got {confidence}"
        )));
    }
    if returns.iter().any(|r| !r.is_finite()) {
        return Err(QuantError::invalid_input("returns must be finite"));
    }
    Ok(())
}

fn quantile_index(n: usize, confidence: f64) -> usize {
    let raw = ((1.0 - confidence) * n as f64 + QUANTILE_EPSILON).floor() as usize;
    raw.min(n - 1)
}

/// Historical VaR: the return at the `(1 - confidence)` quantile of the
/// ascending-sorted sample. Reported as a return (typically negative).
///
/// # Errors
/// * `InsufficientData` for an empty sample.
/// * `InvalidInput` for confidence outside (0, 1) or non-finite returns.
pub fn calculate_var(returns: &[f64], confidence: f64) -> Result<f64> {
    validate(returns, confidence)?;

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted[quantile_index(sorted.len(), confidence)])
}

/// Historical CVaR (expected shortfall): mean of all returns at or below VaR.
pub fn calculate_cvar(returns: &[f64], confidence: f64) -> Result<f64> {
    let var = calculate_var(returns, confidence)?;

    let (sum, count) = returns
        .iter()
        .filter(|&&r| r <= var)
        .fold((0.0, 0usize), |(s, c), &r| (s + r, c + 1));

    // VaR is itself a sample, so the tail is never empty.
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_reference() {
        let returns = [-10.0, -5.0, 0.0, 5.0, 10.0];
        assert_eq!(calculate_var(&returns, 0.8).unwrap(), -5.0);
    }

    #[test]
    fn test_var_unsorted_input() {
        let returns = [5.0, -10.0, 10.0, 0.0, -5.0];
        assert_eq!(calculate_var(&returns, 0.8).unwrap(), -5.0);
        // floor(0.05 * 5) = 0
        assert_eq!(calculate_var(&returns, 0.95).unwrap(), -10.0);
    }

    #[test]
    fn test_cvar() {
        let returns = [-10.0, -5.0, 0.0, 5.0, 10.0];
        assert_eq!(calculate_cvar(&returns, 0.8).unwrap(), -7.5);
        assert!(calculate_cvar(&returns, 0.8).unwrap() <= calculate_var(&returns, 0.8).unwrap());
    }

    #[test]
    fn test_guards() {
        assert!(calculate_var(&[], 0.95).is_err());
        assert!(calculate_var(&[1.0], 1.0).is_err());
        assert!(calculate_var(&[1.0], 0.0).is_err());
        assert!(calculate_var(&[f64::NAN], 0.9).is_err());
    }

    #[test]
    fn test_low_confidence_clamps_index() {
        let returns = [1.0, 2.0, 3.0];
        // floor(0.99 * 3) = 2
        assert_eq!(calculate_var(&returns, 0.01).unwrap(), 3.0);
    }
}
