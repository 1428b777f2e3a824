//! Black-Scholes(-Merton) pricing and Greeks for a single European option.

use serde::{Deserialize, Serialize};

use super::normal::{norm_cdf, norm_pdf};
use crate::core::error::{ensure_finite, ensure_non_negative, ensure_positive, QuantError};
use crate::core::types::OptionType;
use crate::core::Result;

/// Below this `sigma * sqrt(T)` the d1/d2 terms are numerically meaningless.
const MIN_SIGMA_SQRT_T: f64 = 1e-12;

/// Calendar days used to express theta as per-day decay.
const DAYS_PER_YEAR: f64 = 365.0;

/// Inputs for one pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Underlying price S.
    pub spot: f64,
    /// Strike price K.
    pub strike: f64,
    /// Time to expiry T in years (e.g. 7.0 / 365.0).
    pub time_to_expiry_years: f64,
    /// Continuously compounded risk-free rate r.
    pub risk_free_rate: f64,
    /// Annualized volatility sigma.
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// Continuous dividend yield q.
    #[serde(default)]
    pub dividend_yield: f64,
}

impl OptionParameters {
    /// Create parameters with no dividend yield.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry_years: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry_years,
            risk_free_rate,
            volatility,
            option_type,
            dividend_yield: 0.0,
        }
    }

    /// Set the continuous dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Same parameters on the other side of the market.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Check every field's domain.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry_years", self.time_to_expiry_years)?;
        ensure_positive("volatility", self.volatility)?;
        ensure_non_negative("risk_free_rate", self.risk_free_rate)?;
        ensure_non_negative("dividend_yield", self.dividend_yield)?;
        Ok(())
    }

    /// Intrinsic value: `max(0, S - K)` for calls, `max(0, K - S)` for puts.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }
}

/// Fair value and sensitivities for one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    /// Per calendar day.
    pub theta: f64,
    /// Per 1 percentage point of volatility.
    pub vega: f64,
    /// Per 1 percentage point of rate.
    pub rho: f64,
    pub intrinsic_value: f64,
    pub time_value: f64,
}

/// Compute `(d1, d2)`, failing when `sigma * sqrt(T)` collapses toward zero.
pub fn d1_d2(params: &OptionParameters) -> Result<(f64, f64)> {
    let sqrt_t = params.time_to_expiry_years.sqrt();
    let sigma_sqrt_t = params.volatility * sqrt_t;
    if !(sigma_sqrt_t >= MIN_SIGMA_SQRT_T) {
        tracing::warn!(
            volatility = params.volatility,
            time_to_expiry = params.time_to_expiry_years,
            "rejecting degenerate sigma*sqrt(T)"
        );
        return Err(QuantError::degenerate_input(format!(
            "volatility * sqrt(T) = {sigma_sqrt_t:e} is too small"
        )));
    }

    let drift = params.risk_free_rate - params.dividend_yield
        + 0.5 * params.volatility * params.volatility;
    let d1 = ((params.spot / params.strike).ln() + drift * params.time_to_expiry_years)
        / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;

    if !d1.is_finite() || !d2.is_finite() {
        return Err(QuantError::degenerate_input(format!(
            "d1/d2 not finite (d1 = {d1}, d2 = {d2})"
        )));
    }
    Ok((d1, d2))
}

/// Price a European option and compute its Greeks.
///
/// # Errors
/// * `InvalidInput` for non-positive spot, strike, expiry or volatility, or a
///   negative rate or dividend yield.
/// * `DegenerateInput` when `sigma * sqrt(T)` underflows.
pub fn price_option(params: &OptionParameters) -> Result<GreeksResult> {
    params.validate()?;
    let (d1, d2) = d1_d2(params)?;

    let s = params.spot;
    let k = params.strike;
    let t = params.time_to_expiry_years;
    let r = params.risk_free_rate;
    let q = params.dividend_yield;
    let sigma = params.volatility;
    let sqrt_t = t.sqrt();

    let disc_r = (-r * t).exp();
    let disc_q = (-q * t).exp();
    let pdf_d1 = norm_pdf(d1);

    let gamma = disc_q * pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * disc_q * pdf_d1 * sqrt_t / 100.0;
    let decay = -s * disc_q * pdf_d1 * sigma / (2.0 * sqrt_t);

    let (raw_price, delta, theta, rho) = match params.option_type {
        OptionType::Call => {
            let nd1 = norm_cdf(d1);
            let nd2 = norm_cdf(d2);
            let price = s * disc_q * nd1 - k * disc_r * nd2;
            let theta = (decay - r * k * disc_r * nd2 + q * s * disc_q * nd1) / DAYS_PER_YEAR;
            let rho = k * t * disc_r * nd2 / 100.0;
            (price, disc_q * nd1, theta, rho)
        }
        OptionType::Put => {
            let n_neg_d1 = norm_cdf(-d1);
            let n_neg_d2 = norm_cdf(-d2);
            let price = k * disc_r * n_neg_d2 - s * disc_q * n_neg_d1;
            let theta =
                (decay + r * k * disc_r * n_neg_d2 - q * s * disc_q * n_neg_d1) / DAYS_PER_YEAR;
            let rho = -k * t * disc_r * n_neg_d2 / 100.0;
            (price, disc_q * (norm_cdf(d1) - 1.0), theta, rho)
        }
    };

    let price = raw_price.max(0.0);
    ensure_finite("price", price)?;
    let intrinsic_value = params.intrinsic_value();

    Ok(GreeksResult {
        price,
        delta,
        gamma,
        theta,
        vega,
        rho,
        intrinsic_value,
        time_value: (price - intrinsic_value).max(0.0),
    })
}
