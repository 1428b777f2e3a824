//! QuantEdge - Quantitative analytics engine for trading decisions.
//!
//! This crate provides:
//! - Black-Scholes-Merton option pricing, Greeks and implied volatility
//! - Position sizing, Kelly criterion and Monte Carlo trade outcome estimates
//! - Risk metrics and rule-based trading suggestions
//! - Technical indicators (SMA, EMA, MACD, Bollinger Bands, RSI, etc.)
//! - Support/resistance levels, chart patterns and regression forecasts
//! - Portfolio statistics (VaR, CVaR, beta/alpha, Sharpe, Sortino)
//!
//! Every fallible operation returns [`Result`]; undefined values during an
//! indicator's warm-up window are `None` rather than NaN.

pub mod core;
pub mod indicators;
pub mod metrics;
pub mod pricing;
pub mod risk;

pub use crate::core::{AnalyticsConfig, QuantError, Result};
