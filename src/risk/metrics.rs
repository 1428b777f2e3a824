//! Market-dependent risk metrics for a sized position.

use serde::{Deserialize, Serialize};

use super::position::{size_position, PositionInput};
use super::MarketData;
use crate::core::error::QuantError;
use crate::core::types::LiquidityRisk;
use crate::core::Result;

/// Risk profile of a position against current market conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Stop distance scaled by the ATR multiplier, as a fraction of price.
    pub volatility_impact: f64,
    pub liquidity_risk: LiquidityRisk,
    /// Position notional over traded volume.
    pub position_impact: f64,
    /// Estimated slippage in percent.
    pub slippage_estimate_pct: f64,
    /// Sized quantity the metrics were computed for.
    pub quantity: u64,
}

/// Compute volatility, liquidity, impact and slippage metrics.
///
/// # Errors
/// * Any sizing error from [`size_position`].
/// * `DivisionByZero` when the market volume is zero.
pub fn calculate_risk_metrics(
    position: &PositionInput,
    market: &MarketData,
) -> Result<RiskMetrics> {
    market.validate()?;
    let sizing = size_position(position)?;
    if market.volume == 0.0 {
        return Err(QuantError::division_by_zero("position impact (zero volume)"));
    }

    let volatility_impact = (market.price - position.stop_loss).abs()
        * market.volatility.atr_multiplier()
        / market.price;
    let liquidity_risk = LiquidityRisk::from_volume(market.volume);
    let position_impact = sizing.quantity as f64 * market.price / market.volume;
    let slippage_estimate_pct = position_impact * 100.0 * liquidity_risk.slippage_multiplier();

    Ok(RiskMetrics {
        volatility_impact,
        liquidity_risk,
        position_impact,
        slippage_estimate_pct,
        quantity: sizing.quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::VolatilityLevel;

    #[test]
    fn test_metrics_values() {
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 95.0);
        let market = MarketData::new(100.0, 200_000.0, VolatilityLevel::High);
        let m = calculate_risk_metrics(&position, &market).unwrap();

        assert_eq!(m.quantity, 200);
        // |100 - 95| * 2 / 100
        assert!((m.volatility_impact - 0.1).abs() < 1e-12);
        assert_eq!(m.liquidity_risk, LiquidityRisk::Medium);
        // 200 * 100 / 200_000
        assert!((m.position_impact - 0.1).abs() < 1e-12);
        assert!((m.slippage_estimate_pct - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_volume() {
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 95.0);
        let market = MarketData::new(100.0, 0.0, VolatilityLevel::Low);
        assert!(matches!(
            calculate_risk_metrics(&position, &market),
            Err(QuantError::DivisionByZero { .. })
        ));
    }
}
