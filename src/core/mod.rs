//! Core types and utilities for quantedge.

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyticsConfig, IndicatorDefaults, MonteCarloConfig, SuggestionThresholds};
pub use error::{QuantError, Result};
pub use types::*;
