//! Tunable parameters for the analytics engine.
//!
//! Every struct carries the documented defaults via `Default` and accepts
//! partial JSON documents through `#[serde(default)]`. Nothing here is global;
//! callers own a config value and pass it into the functions that need it.

use serde::{Deserialize, Serialize};

use super::error::{QuantError, Result};

/// Configuration for the trade-outcome Monte Carlo simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Number of simulated price paths.
    pub iterations: usize,
    /// Maximum number of daily steps per path.
    pub max_days: usize,
    /// Base seed; each path derives its own stream from it.
    pub seed: u64,
    /// Run paths on the rayon thread pool.
    pub parallel: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { iterations: 1000, max_days: 20, seed: 42, parallel: true }
    }
}

/// Thresholds for the rule-based trading suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionThresholds {
    /// Flag trades whose reward:risk is below this.
    pub min_risk_reward: f64,
    /// Flag when total open risk exceeds this fraction of the account.
    pub max_portfolio_heat: f64,
    /// Flag high-volatility setups whose stop distance exceeds this fraction.
    pub max_volatility_impact: f64,
    /// Flag positions larger than this fraction of traded volume.
    pub max_volume_share: f64,
    /// Trend strength (0..1) below which a long is considered against a weak trend.
    pub weak_trend: f64,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            min_risk_reward: 1.5,
            max_portfolio_heat: 0.4,
            max_volatility_impact: 0.15,
            max_volume_share: 0.01,
            weak_trend: 0.3,
        }
    }
}

/// Default periods for the indicator set.
///
/// [`macd`](crate::indicators::macd) reads its periods from here; the other
/// indicator functions take explicit arguments and callers pass these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorDefaults {
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub rsi_period: usize,
    pub pattern_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub var_confidence: f64,
}

impl Default for IndicatorDefaults {
    fn default() -> Self {
        Self {
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            rsi_period: 14,
            pattern_window: 5,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            var_confidence: 0.95,
        }
    }
}

/// Aggregate configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub monte_carlo: MonteCarloConfig,
    pub suggestions: SuggestionThresholds,
    pub indicators: IndicatorDefaults,
}

impl AnalyticsConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value domains.
    pub fn validate(&self) -> Result<()> {
        let mc = &self.monte_carlo;
        if mc.iterations == 0 {
            return Err(QuantError::invalid_config("monte_carlo.iterations must be > 0"));
        }
        if mc.max_days == 0 {
            return Err(QuantError::invalid_config("monte_carlo.max_days must be > 0"));
        }

        let s = &self.suggestions;
        for (name, value) in [
            ("suggestions.min_risk_reward", s.min_risk_reward),
            ("suggestions.max_portfolio_heat", s.max_portfolio_heat),
            ("suggestions.max_volatility_impact", s.max_volatility_impact),
            ("suggestions.max_volume_share", s.max_volume_share),
            ("suggestions.weak_trend", s.weak_trend),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(QuantError::invalid_config(format!("{name} must be >= 0")));
            }
        }

        let ind = &self.indicators;
        if ind.bollinger_period == 0 || ind.rsi_period == 0 || ind.macd_signal == 0 {
            return Err(QuantError::invalid_config("indicator periods must be > 0"));
        }
        if ind.macd_fast == 0 || ind.macd_fast >= ind.macd_slow {
            return Err(QuantError::invalid_config(
                "indicators.macd_fast must be > 0 and < macd_slow",
            ));
        }
        if ind.pattern_window < 5 {
            return Err(QuantError::invalid_config("indicators.pattern_window must be >= 5"));
        }
        if !(ind.bollinger_std_dev >= 0.0) {
            return Err(QuantError::invalid_config("indicators.bollinger_std_dev must be >= 0"));
        }
        if !(ind.var_confidence > 0.0 && ind.var_confidence < 1.0) {
            return Err(QuantError::invalid_config(
                "indicators.var_confidence must be in (0, 1)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyticsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.monte_carlo.iterations, 1000);
        assert_eq!(config.monte_carlo.max_days, 20);
        assert_eq!(config.suggestions.min_risk_reward, 1.5);
        assert_eq!(config.indicators.bollinger_period, 20);
    }

    #[test]
    fn test_partial_json() {
        let config =
            AnalyticsConfig::from_json(r#"{"monte_carlo": {"iterations": 250, "seed": 7}}"#)
                .unwrap();
        assert_eq!(config.monte_carlo.iterations, 250);
        assert_eq!(config.monte_carlo.seed, 7);
        assert_eq!(config.monte_carlo.max_days, 20);
        assert_eq!(config.indicators.rsi_period, 14);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = AnalyticsConfig::from_json(r#"{"monte_carlo": {"iterations": 0}}"#);
        assert!(matches!(err, Err(QuantError::InvalidConfig { .. })));

        let err = AnalyticsConfig::from_json(r#"{"indicators": {"macd_fast": 30}}"#);
        assert!(matches!(err, Err(QuantError::InvalidConfig { .. })));

        let err = AnalyticsConfig::from_json("not json");
        assert!(matches!(err, Err(QuantError::InvalidConfig { .. })));
    }
}
