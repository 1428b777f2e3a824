//! Position inputs and deterministic position sizing.

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, ensure_non_negative, ensure_positive, QuantError};
use crate::core::types::{PositionType, Price, VolatilityLevel};
use crate::core::Result;

/// A proposed trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionInput {
    /// Account equity.
    pub account_size: f64,
    /// Percentage of the account put at risk, in (0, 100].
    pub risk_percent: f64,
    pub entry_price: Price,
    pub stop_loss: Price,
    #[serde(default)]
    pub target_price: Option<Price>,
    /// Leverage multiplier, at least 1.
    pub leverage: f64,
    pub volatility_level: VolatilityLevel,
    pub position_type: PositionType,
}

impl PositionInput {
    /// Create an unlevered long position with no target.
    pub fn new(account_size: f64, risk_percent: f64, entry_price: Price, stop_loss: Price) -> Self {
        Self {
            account_size,
            risk_percent,
            entry_price,
            stop_loss,
            target_price: None,
            leverage: 1.0,
            volatility_level: VolatilityLevel::Medium,
            position_type: PositionType::Long,
        }
    }

    /// Set the profit target.
    pub fn with_target(mut self, target: Price) -> Self {
        self.target_price = Some(target);
        self
    }

    /// Set leverage.
    pub fn with_leverage(mut self, leverage: f64) -> Self {
        self.leverage = leverage;
        self
    }

    /// Set the volatility regime.
    pub fn with_volatility(mut self, level: VolatilityLevel) -> Self {
        self.volatility_level = level;
        self
    }

    /// Set the direction.
    pub fn with_position_type(mut self, position_type: PositionType) -> Self {
        self.position_type = position_type;
        self
    }

    /// Check every field's domain.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("account_size", self.account_size)?;
        ensure_positive("entry_price", self.entry_price)?;
        ensure_positive("stop_loss", self.stop_loss)?;
        ensure_finite("risk_percent", self.risk_percent)?;
        if !(self.risk_percent > 0.0 && self.risk_percent <= 100.0) {
            return Err(QuantError::invalid_input(format!(
                "risk_percent must be in (0, 100], got {}",
                self.risk_percent
            )));
        }
        ensure_finite("leverage", self.leverage)?;
        if self.leverage < 1.0 {
            return Err(QuantError::invalid_input(format!(
                "leverage must be >= 1, got {}",
                self.leverage
            )));
        }
        if let Some(target) = self.target_price {
            ensure_non_negative("target_price", target)?;
        }
        if self.stop_loss == self.entry_price {
            return Err(QuantError::invalid_input(
                "stop_loss equals entry_price: zero risk per unit",
            ));
        }
        Ok(())
    }

    /// Absolute distance between entry and stop.
    #[inline]
    pub fn risk_per_unit(&self) -> f64 {
        (self.entry_price - self.stop_loss).abs()
    }
}

/// Outcome of position sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSizingResult {
    /// Whole units to trade (floor-truncated).
    pub quantity: u64,
    /// `quantity * entry_price`.
    pub total_value: f64,
    /// `quantity * risk_per_unit`.
    pub max_risk: f64,
    /// Potential gain over potential loss; 0 without a target.
    pub risk_reward_ratio: f64,
    /// `account_size * risk_percent / 100`.
    pub risk_amount: f64,
    pub risk_per_unit: f64,
    pub potential_gain: f64,
    pub potential_loss: f64,
}

/// Size a position from account risk, stop distance, leverage and volatility.
///
/// # Errors
/// `InvalidInput` for non-positive account, entry or stop, out-of-range risk
/// percentage or leverage, or a stop equal to the entry.
pub fn size_position(input: &PositionInput) -> Result<PositionSizingResult> {
    input.validate()?;

    let risk_amount = input.account_size * input.risk_percent / 100.0;
    let risk_per_unit = input.risk_per_unit();
    let raw_size =
        risk_amount / risk_per_unit * input.leverage * input.volatility_level.size_multiplier();
    ensure_finite("position size", raw_size)?;

    let quantity = raw_size.floor() as u64;
    let potential_gain = input
        .target_price
        .map(|target| (target - input.entry_price).abs() * raw_size)
        .unwrap_or(0.0);
    let potential_loss = risk_per_unit * raw_size;
    let risk_reward_ratio =
        if potential_loss > 0.0 { potential_gain / potential_loss } else { 0.0 };

    Ok(PositionSizingResult {
        quantity,
        total_value: quantity as f64 * input.entry_price,
        max_risk: quantity as f64 * risk_per_unit,
        risk_reward_ratio,
        risk_amount,
        risk_per_unit,
        potential_gain,
        potential_loss,
    })
}

/// Total open risk as a fraction of account equity.
///
/// # Errors
/// `InvalidInput` for a non-positive account or a negative open risk.
pub fn portfolio_heat(open_risks: &[f64], account_size: f64) -> Result<f64> {
    ensure_positive("account_size", account_size)?;
    let mut total = 0.0;
    for &risk in open_risks {
        ensure_non_negative("open risk", risk)?;
        total += risk;
    }
    Ok(total / account_size)
}
