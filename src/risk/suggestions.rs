//! Rule-based trading suggestions.
//!
//! Each rule looks at one aspect of the trade and fires independently; the
//! output carries no meaningful order.

use serde::{Deserialize, Serialize};

use super::metrics::RiskMetrics;
use super::position::{PositionInput, PositionSizingResult};
use super::MarketData;
use crate::core::config::SuggestionThresholds;
use crate::core::types::{PositionType, VolatilityLevel};

/// How urgently a suggestion should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One advisory message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSuggestion {
    pub severity: Severity,
    pub message: String,
    pub action: String,
}

impl TradingSuggestion {
    fn new(severity: Severity, message: String, action: &str) -> Self {
        Self { severity, message, action: action.to_string() }
    }
}

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInputs<'a> {
    pub position: &'a PositionInput,
    pub sizing: &'a PositionSizingResult,
    pub metrics: &'a RiskMetrics,
    pub market: &'a MarketData,
    /// Open risk across the portfolio as a fraction of equity.
    pub portfolio_heat: f64,
}

/// Evaluate every rule and collect the ones that fire.
pub fn generate_trading_suggestions(
    inputs: &SuggestionInputs<'_>,
    thresholds: &SuggestionThresholds,
) -> Vec<TradingSuggestion> {
    let mut suggestions = Vec::new();

    let rr = inputs.sizing.risk_reward_ratio;
    if inputs.position.target_price.is_some() && rr < thresholds.min_risk_reward {
        suggestions.push(TradingSuggestion::new(
            Severity::Warning,
            format!(
                "Risk:reward of {rr:.2} is below the {:.2} minimum",
                thresholds.min_risk_reward
            ),
            "Move the target further out or tighten the stop",
        ));
    }

    if inputs.portfolio_heat > thresholds.max_portfolio_heat {
        suggestions.push(TradingSuggestion::new(
            Severity::Critical,
            format!(
                "Portfolio heat of {:.0}% exceeds the {:.0}% limit",
                inputs.portfolio_heat * 100.0,
                thresholds.max_portfolio_heat * 100.0
            ),
            "Reduce or close existing positions before adding risk",
        ));
    }

    if inputs.market.volatility == VolatilityLevel::High
        && inputs.metrics.volatility_impact > thresholds.max_volatility_impact
    {
        suggestions.push(TradingSuggestion::new(
            Severity::Warning,
            format!(
                "High volatility: stop distance impact of {:.1}% exceeds {:.1}%",
                inputs.metrics.volatility_impact * 100.0,
                thresholds.max_volatility_impact * 100.0
            ),
            "Reduce position size or widen the stop to account for volatility",
        ));
    }

    let volume_cap = inputs.market.volume * thresholds.max_volume_share;
    if inputs.sizing.quantity as f64 > volume_cap {
        suggestions.push(TradingSuggestion::new(
            Severity::Warning,
            format!(
                "Position of {} units exceeds {:.1}% of traded volume",
                inputs.sizing.quantity,
                thresholds.max_volume_share * 100.0
            ),
            "Split the order or scale in to limit market impact",
        ));
    }

    if inputs.position.position_type == PositionType::Long
        && inputs.market.trend_strength < thresholds.weak_trend
    {
        suggestions.push(TradingSuggestion::new(
            Severity::Info,
            format!(
                "Trend strength {:.2} is weak for a long entry",
                inputs.market.trend_strength
            ),
            "Wait for trend confirmation or reduce size",
        ));
    }

    suggestions
}
