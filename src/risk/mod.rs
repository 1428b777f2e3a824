//! Position risk: sizing, Kelly, Monte Carlo outcomes, risk metrics and suggestions.

pub mod kelly;
pub mod metrics;
pub mod monte_carlo;
pub mod position;
pub mod suggestions;

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, ensure_non_negative, ensure_positive};
use crate::core::types::{Price, VolatilityLevel};
use crate::core::Result;

pub use kelly::{calculate_kelly_criterion, fractional_kelly};
pub use metrics::{calculate_risk_metrics, RiskMetrics};
pub use monte_carlo::{run_monte_carlo_simulation, MonteCarloResult};
pub use position::{portfolio_heat, size_position, PositionInput, PositionSizingResult};
pub use suggestions::{generate_trading_suggestions, Severity, SuggestionInputs, TradingSuggestion};

/// Snapshot of the traded instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Current price.
    pub price: Price,
    /// Recent traded volume in units.
    pub volume: f64,
    pub volatility: VolatilityLevel,
    /// Trend strength in [0, 1]; 0 is directionless.
    #[serde(default)]
    pub trend_strength: f64,
}

impl MarketData {
    /// Create a snapshot with neutral trend strength (0.5).
    pub fn new(price: Price, volume: f64, volatility: VolatilityLevel) -> Self {
        Self { price, volume, volatility, trend_strength: 0.5 }
    }

    /// Set the trend strength.
    pub fn with_trend_strength(mut self, trend_strength: f64) -> Self {
        self.trend_strength = trend_strength;
        self
    }

    /// Check field domains.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("market price", self.price)?;
        ensure_non_negative("volume", self.volume)?;
        ensure_finite("trend_strength", self.trend_strength)?;
        Ok(())
    }
}
