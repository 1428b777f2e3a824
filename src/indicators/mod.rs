//! Technical indicators for quantedge.
//!
//! All indicators are implemented as pure functions that take slice inputs
//! and return owned outputs. Warmup periods are reported as `None` rather
//! than NaN so undefined values cannot leak into downstream arithmetic.

pub mod levels;
pub mod momentum;
pub mod patterns;
pub mod regression;
pub mod rolling;
pub mod trend;
pub mod volatility;

pub use levels::{find_support_resistance, PriceLevel, SupportResistance};
pub use momentum::{calculate_rsi, macd, macd_with_periods, rsi_series, MacdResult};
pub use patterns::{recognize_patterns, Pattern, PatternKind, MIN_PATTERN_WINDOW};
pub use regression::{linear_regression_forecast, ForecastResult};
pub use rolling::{rolling_max, rolling_min};
pub use trend::{ema, sma};
pub use volatility::{bollinger_bands, BollingerBand};
