//! Kelly-criterion sizing.
//!
//! f* = (p * b - q) / b
//!
//! where p is the win probability, q = 1 - p and b the reward:risk payoff.
//! The result is floored at zero: a negative edge means no bet, never a
//! recommendation to take the other side.

/// Full Kelly fraction from a win rate in percent and a reward:risk ratio.
///
/// Returns 0 for non-positive or non-finite payoffs and for any input that
/// would otherwise yield NaN.
pub fn calculate_kelly_criterion(win_rate_percent: f64, risk_reward_ratio: f64) -> f64 {
    if !win_rate_percent.is_finite() || !risk_reward_ratio.is_finite() || risk_reward_ratio <= 0.0 {
        return 0.0;
    }

    let p = (win_rate_percent / 100.0).clamp(0.0, 1.0);
    let q = 1.0 - p;
    let b = risk_reward_ratio;

    let fraction = (p * b - q) / b;
    if fraction.is_finite() {
        fraction.max(0.0)
    } else {
        0.0
    }
}

/// Kelly fraction scaled by `fraction` (e.g. 0.5 for half-Kelly), capped at 1.
pub fn fractional_kelly(win_rate_percent: f64, risk_reward_ratio: f64, fraction: f64) -> f64 {
    if !fraction.is_finite() || fraction <= 0.0 {
        return 0.0;
    }
    (calculate_kelly_criterion(win_rate_percent, risk_reward_ratio) * fraction.min(1.0)).min(1.0)
}
