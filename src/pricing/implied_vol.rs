//! Implied volatility solver.

use super::black_scholes::{price_option, OptionParameters};
use crate::core::error::{ensure_positive, QuantError};
use crate::core::types::OptionType;
use crate::core::Result;

const MIN_VOL: f64 = 1e-4;
const MAX_VOL: f64 = 5.0;
const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;

/// Solve for the volatility that reproduces `market_price`.
///
/// Newton-Raphson on vega, falling back to bisection whenever a Newton step
/// leaves the bracket or vega vanishes. `params.volatility` is used as the
/// starting guess when it lies inside the bracket.
///
/// # Errors
/// * `InvalidInput` when the price lies outside the no-arbitrage bounds.
/// * `DegenerateInput` when the solver does not converge.
pub fn implied_volatility(market_price: f64, params: &OptionParameters) -> Result<f64> {
    ensure_positive("market_price", market_price)?;
    params.validate()?;

    let t = params.time_to_expiry_years;
    let fwd_spot = params.spot * (-params.dividend_yield * t).exp();
    let pv_strike = params.strike * (-params.risk_free_rate * t).exp();
    let (lower_bound, upper_bound) = match params.option_type {
        OptionType::Call => ((fwd_spot - pv_strike).max(0.0), fwd_spot),
        OptionType::Put => ((pv_strike - fwd_spot).max(0.0), pv_strike),
    };
    if market_price < lower_bound || market_price >= upper_bound {
        return Err(QuantError::invalid_input(format!(
            "market price {market_price} outside no-arbitrage bounds [{lower_bound}, {upper_bound})"
        )));
    }

    let price_at = |vol: f64| -> Result<(f64, f64)> {
        let trial = OptionParameters { volatility: vol, ..*params };
        let greeks = price_option(&trial)?;
        // vega is quoted per percentage point
        Ok((greeks.price - market_price, greeks.vega * 100.0))
    };

    let mut lo = MIN_VOL;
    let mut hi = MAX_VOL;
    let mut vol = if params.volatility > lo && params.volatility < hi {
        params.volatility
    } else {
        0.2
    };

    for iteration in 0..MAX_ITERATIONS {
        let (diff, vega) = price_at(vol)?;
        if diff.abs() < TOLERANCE {
            tracing::debug!(iterations = iteration + 1, implied_vol = vol, "implied vol converged");
            return Ok(vol);
        }

        // price is increasing in volatility
        if diff > 0.0 {
            hi = vol;
        } else {
            lo = vol;
        }

        let newton = if vega > 1e-12 { vol - diff / vega } else { f64::NAN };
        vol = if newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        if hi - lo < TOLERANCE * 1e-3 {
            return Ok(vol);
        }
    }

    tracing::warn!(market_price, last_vol = vol, "implied vol did not converge");
    Err(QuantError::degenerate_input(format!(
        "implied volatility did not converge after {MAX_ITERATIONS} iterations"
    )))
}
