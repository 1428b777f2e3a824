//! Geometric chart-pattern recognition.
//!
//! Every length-`window_size` sub-window is min-max normalised to [0, 1] and
//! reduced to five key points (start, quarter, middle, three-quarter, end).
//! Fixed threshold rules on those points classify the window. This is a
//! deterministic rule-set, not a statistical classifier; the thresholds have
//! not been validated against labelled data.

use serde::{Deserialize, Serialize};

use crate::core::error::QuantError;
use crate::core::Result;

/// Smallest window that yields five distinct key points.
pub const MIN_PATTERN_WINDOW: usize = 5;

/// Recognised chart shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    HeadAndShoulders,
    DoubleTop,
    DoubleBottom,
    Triangle,
}

/// A classified window, identified by its first index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub index: usize,
}

/// Five normalised key points of one window.
#[derive(Debug, Clone, Copy)]
struct Shape([f64; 5]);

impl Shape {
    fn from_window(window: &[f64]) -> Option<Self> {
        if window.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let min = window.iter().copied().fold(f64::INFINITY, f64::min);
        let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        if range <= 0.0 {
            return None;
        }

        let last = window.len() - 1;
        let mut points = [0.0; 5];
        for (k, point) in points.iter_mut().enumerate() {
            let idx = (k * last + 2) / 4;
            *point = (window[idx] - min) / range;
        }
        Some(Shape(points))
    }

    fn classify(&self) -> Option<PatternKind> {
        if self.is_head_and_shoulders() {
            Some(PatternKind::HeadAndShoulders)
        } else if self.is_double_top() {
            Some(PatternKind::DoubleTop)
        } else if self.is_double_bottom() {
            Some(PatternKind::DoubleBottom)
        } else if self.is_triangle() {
            Some(PatternKind::Triangle)
        } else {
            None
        }
    }

    fn is_head_and_shoulders(&self) -> bool {
        let [start, left, head, right, end] = self.0;
        head >= 0.9
            && head - left.max(right) >= 0.15
            && (left - right).abs() <= 0.15
            && start < left
            && end < right
    }

    fn is_double_top(&self) -> bool {
        let [_, first, trough, second, _] = self.0;
        first >= 0.8 && second >= 0.8 && (first - second).abs() <= 0.1 && trough <= 0.5
    }

    fn is_double_bottom(&self) -> bool {
        let [_, first, peak, second, _] = self.0;
        first <= 0.2 && second <= 0.2 && (first - second).abs() <= 0.1 && peak >= 0.5
    }

    /// Alternating swings that shrink at every step.
    fn is_triangle(&self) -> bool {
        let p = self.0;
        let swings: Vec<f64> = p.windows(2).map(|w| w[1] - w[0]).collect();
        swings.windows(2).all(|s| s[0] * s[1] < 0.0 && s[1].abs() < s[0].abs())
    }
}

/// Classify every sliding window of `window_size` samples.
///
/// Windows that are flat or contain non-finite values are skipped; at most one
/// pattern is reported per window (checked in the order head-and-shoulders,
/// double top, double bottom, triangle).
///
/// # Errors
/// `InvalidInput` when `window_size` is below [`MIN_PATTERN_WINDOW`].
pub fn recognize_patterns(data: &[f64], window_size: usize) -> Result<Vec<Pattern>> {
    if window_size < MIN_PATTERN_WINDOW {
        return Err(QuantError::invalid_input(format!(
            "pattern window must be >= {MIN_PATTERN_WINDOW}, got {window_size}"
        )));
    }

    Ok(data
        .windows(window_size)
        .enumerate()
        .filter_map(|(index, window)| {
            Shape::from_window(window)
                .and_then(|shape| shape.classify())
                .map(|kind| Pattern { kind, index })
        })
        .collect())
}
