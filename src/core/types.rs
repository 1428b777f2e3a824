//! Core data types for quantedge.

use serde::{Deserialize, Serialize};

/// Type alias for price values.
pub type Price = f64;

/// Option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// True for calls.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// Trading direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum PositionType {
    /// Long position (profits when price rises).
    Long = 1,
    /// Short position (profits when price falls).
    Short = -1,
}

impl PositionType {
    /// Convert direction to multiplier for P&L calculations.
    #[inline]
    pub fn multiplier(self) -> f64 {
        self as i8 as f64
    }
}

impl Default for PositionType {
    fn default() -> Self {
        PositionType::Long
    }
}

/// Categorical volatility regime used by the risk module lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl Default for VolatilityLevel {
    fn default() -> Self {
        VolatilityLevel::Medium
    }
}

impl VolatilityLevel {
    /// Position size scaling; smaller positions in volatile markets.
    #[inline]
    pub fn size_multiplier(self) -> f64 {
        match self {
            VolatilityLevel::Low => 1.2,
            VolatilityLevel::Medium => 1.0,
            VolatilityLevel::High => 0.8,
        }
    }

    /// Daily move amplitude for the random-walk simulation.
    #[inline]
    pub fn daily_volatility(self) -> f64 {
        match self {
            VolatilityLevel::Low => 0.01,
            VolatilityLevel::Medium => 0.015,
            VolatilityLevel::High => 0.02,
        }
    }

    /// ATR-like multiplier applied to the stop distance.
    #[inline]
    pub fn atr_multiplier(self) -> f64 {
        match self {
            VolatilityLevel::Low => 1.0,
            VolatilityLevel::Medium => 1.5,
            VolatilityLevel::High => 2.0,
        }
    }
}

/// Liquidity bucket derived from traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityRisk {
    Low,
    Medium,
    High,
}

impl LiquidityRisk {
    /// Bucket a volume figure.
    pub fn from_volume(volume: f64) -> Self {
        if volume < 100_000.0 {
            LiquidityRisk::High
        } else if volume < 500_000.0 {
            LiquidityRisk::Medium
        } else {
            LiquidityRisk::Low
        }
    }

    /// Slippage scaling for this bucket.
    #[inline]
    pub fn slippage_multiplier(self) -> f64 {
        match self {
            LiquidityRisk::Low => 1.0,
            LiquidityRisk::Medium => 1.5,
            LiquidityRisk::High => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_multiplier() {
        assert_eq!(PositionType::Long.multiplier(), 1.0);
        assert_eq!(PositionType::Short.multiplier(), -1.0);
    }

    #[test]
    fn test_volatility_tables() {
        assert_eq!(VolatilityLevel::High.size_multiplier(), 0.8);
        assert_eq!(VolatilityLevel::Medium.daily_volatility(), 0.015);
        assert_eq!(VolatilityLevel::Low.atr_multiplier(), 1.0);
    }

    #[test]
    fn test_liquidity_buckets() {
        assert_eq!(LiquidityRisk::from_volume(50_000.0), LiquidityRisk::High);
        assert_eq!(LiquidityRisk::from_volume(100_000.0), LiquidityRisk::Medium);
        assert_eq!(LiquidityRisk::from_volume(499_999.0), LiquidityRisk::Medium);
        assert_eq!(LiquidityRisk::from_volume(500_000.0), LiquidityRisk::Low);
        assert_eq!(LiquidityRisk::High.slippage_multiplier(), 2.0);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&VolatilityLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: PositionType = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(parsed, PositionType::Short);
    }
}
