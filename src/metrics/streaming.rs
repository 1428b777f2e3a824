//! Streaming statistics using Welford's algorithm.
//!
//! Enables single-pass calculation of mean, variance and covariance without
//! storing the samples.

/// Univariate running statistics.
#[derive(Debug, Clone, Default)]
pub struct ReturnStats {
    /// Number of observations.
    count: usize,
    /// Running mean.
    mean: f64,
    /// Running M2 for variance calculation.
    m2: f64,
    /// Running sum of squared shortfalls below `target_return`.
    downside_sq: f64,
    /// Target return for downside deviation (default: 0).
    target_return: f64,
}

impl ReturnStats {
    /// Create a new accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom target return for downside deviation.
    ///
    /// Must be set before any update; earlier samples keep the old target.
    pub fn with_target_return(mut self, target: f64) -> Self {
        self.target_return = target;
        self
    }

    /// Build from a slice, skipping NaN samples.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut stats = Self::new();
        stats.update_all(values);
        stats
    }

    /// Update with every non-NaN sample of a slice.
    pub fn update_all(&mut self, values: &[f64]) {
        for &v in values {
            if !v.is_nan() {
                self.update(v);
            }
        }
    }

    /// Update with a new observation.
    pub fn update(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        let downside = (value - self.target_return).min(0.0);
        self.downside_sq += downside * downside;
    }

    /// Get the number of observations.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get the running mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the sample variance.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        self.m2 / (self.count - 1) as f64
    }

    /// Get the population variance.
    pub fn variance_population(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.m2 / self.count as f64
    }

    /// Get the sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Get the downside standard deviation (for Sortino).
    pub fn downside_std_dev(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.downside_sq / (self.count - 1) as f64).sqrt()
    }

    /// Merge another accumulator into this one (parallel reduction).
    pub fn merge(&mut self, other: &ReturnStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let combined = self.count + other.count;
        let delta = other.mean - self.mean;
        self.mean += delta * other.count as f64 / combined as f64;
        self.m2 += other.m2
            + delta * delta * self.count as f64 * other.count as f64 / combined as f64;
        self.downside_sq += other.downside_sq;
        self.count = combined;
    }
}

/// Bivariate running statistics (co-moments of two aligned series).
#[derive(Debug, Clone, Default)]
pub struct PairedStats {
    count: usize,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    c_xy: f64,
}

impl PairedStats {
    /// Create a new accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update with one `(x, y)` pair.
    pub fn update(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;

        let dx = x - self.mean_x;
        self.mean_x += dx / n;
        let dy = y - self.mean_y;
        self.mean_y += dy / n;

        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.c_xy += dx * (y - self.mean_y);
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn mean_x(&self) -> f64 {
        self.mean_x
    }

    #[inline]
    pub fn mean_y(&self) -> f64 {
        self.mean_y
    }

    /// Sum of squared deviations of x.
    #[inline]
    pub fn m2_x(&self) -> f64 {
        self.m2_x
    }

    /// Sum of squared deviations of y.
    #[inline]
    pub fn m2_y(&self) -> f64 {
        self.m2_y
    }

    /// Sum of cross deviations.
    #[inline]
    pub fn co_moment(&self) -> f64 {
        self.c_xy
    }

    /// Population covariance.
    pub fn covariance_population(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.c_xy / self.count as f64
    }
}
