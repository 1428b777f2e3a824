//! Support and resistance from local extrema.
//!
//! A sample is support when it is the lowest value within `sensitivity`
//! positions on both sides, resistance when it is the highest. Equality
//! counts, so a flat run qualifies as both.

use serde::{Deserialize, Serialize};

use super::rolling::{rolling_max, rolling_min};
use crate::core::error::QuantError;
use crate::core::Result;

/// A price level anchored at a series index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub index: usize,
    pub price: f64,
}

/// Detected support and resistance levels, in series order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: Vec<PriceLevel>,
    pub resistance: Vec<PriceLevel>,
}

/// Scan for local minima (support) and maxima (resistance).
///
/// Only indices with a full `sensitivity` neighbourhood on both sides are
/// considered.
///
/// # Errors
/// `InvalidInput` when `sensitivity` is zero.
pub fn find_support_resistance(data: &[f64], sensitivity: usize) -> Result<SupportResistance> {
    if sensitivity == 0 {
        return Err(QuantError::invalid_input("sensitivity must be > 0"));
    }

    let mut levels = SupportResistance::default();
    let n = data.len();
    let span = 2 * sensitivity + 1;
    if n < span {
        return Ok(levels);
    }

    // A trailing window ending at i + s is the centred window around i.
    let lows = rolling_min(data, span)?;
    let highs = rolling_max(data, span)?;

    for i in sensitivity..(n - sensitivity) {
        let price = data[i];
        if lows[i + sensitivity].is_some_and(|low| price <= low) {
            levels.support.push(PriceLevel { index: i, price });
        }
        if highs[i + sensitivity].is_some_and(|high| price >= high) {
            levels.resistance.push(PriceLevel { index: i, price });
        }
    }

    Ok(levels)
}
