//! Volatility indicators: Bollinger Bands.

use serde::{Deserialize, Serialize};

use super::trend::sma;
use crate::core::error::QuantError;
use crate::core::Result;

/// One Bollinger Bands sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBand {
    /// Middle band + std_dev * multiplier.
    pub upper: f64,
    /// Middle band (SMA).
    pub middle: f64,
    /// Middle band - std_dev * multiplier.
    pub lower: f64,
}

impl BollingerBand {
    /// `(upper - lower) / middle`, `None` when the middle band is zero.
    pub fn bandwidth(&self) -> Option<f64> {
        if self.middle.abs() > f64::EPSILON {
            Some((self.upper - self.lower) / self.middle.abs())
        } else {
            None
        }
    }

    /// Position of `price` within the bands, `None` when the bands are flat.
    pub fn percent_b(&self, price: f64) -> Option<f64> {
        let width = self.upper - self.lower;
        if width > f64::EPSILON {
            Some((price - self.lower) / width)
        } else {
            None
        }
    }
}

/// Bollinger Bands.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period (default: 20)
/// * `std_dev_multiplier` - Standard deviation multiplier (default: 2.0)
///
/// # Returns
/// One entry per sample, `None` during the SMA warmup.
pub fn bollinger_bands(
    data: &[f64],
    period: usize,
    std_dev_multiplier: f64,
) -> Result<Vec<Option<BollingerBand>>> {
    if period == 0 {
        return Err(QuantError::invalid_input("Bollinger Bands period must be > 0"));
    }
    if !(std_dev_multiplier >= 0.0) || !std_dev_multiplier.is_finite() {
        return Err(QuantError::invalid_input(
            "Bollinger Bands std_dev multiplier must be finite and >= 0",
        ));
    }

    let middle = sma(data, period)?;

    let bands = middle
        .iter()
        .enumerate()
        .map(|(i, mean)| {
            mean.map(|mean| {
                let window = &data[i + 1 - period..=i];

                // Population variance
                let variance: f64 =
                    window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
                let half_width = std_dev_multiplier * variance.sqrt();

                BollingerBand { upper: mean + half_width, middle: mean, lower: mean - half_width }
            })
        })
        .collect();

    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_bands() {
        let data: Vec<f64> = (1..=30).map(|x| x as f64 + (x as f64 * 0.1).sin()).collect();

        let result = bollinger_bands(&data, 20, 2.0).unwrap();

        // Bands should be valid from index 19
        assert!(result[18].is_none());
        let band = result[19].unwrap();

        // Upper > Middle > Lower
        assert!(band.upper > band.middle);
        assert!(band.middle > band.lower);

        // %B should be between 0 and 1 for data within bands
        let pb = band.percent_b(data[19]).unwrap();
        assert!(pb >= -0.5 && pb <= 1.5);
    }

    #[test]
    fn test_known_width() {
        // window [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, population std 2
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let band = bollinger_bands(&data, 8, 2.0).unwrap()[7].unwrap();
        assert!((band.middle - 5.0).abs() < 1e-12);
        assert!((band.upper - 9.0).abs() < 1e-12);
        assert!((band.lower - 1.0).abs() < 1e-12);
        assert!((band.bandwidth().unwrap() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_flat_series_collapses() {
        let data = vec![3.0; 10];
        let band = bollinger_bands(&data, 5, 2.0).unwrap()[9].unwrap();
        assert_eq!(band.upper, band.lower);
        assert_eq!(band.percent_b(3.0), None);
    }

    #[test]
    fn test_invalid_params() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(bollinger_bands(&data, 0, 2.0).is_err());
        assert!(bollinger_bands(&data, 2, -1.0).is_err());
    }
}
