//! Monte Carlo trade-outcome simulation.
//!
//! Each path is a discrete random walk that starts at the market price and is
//! nudged toward the target every day. A path ends when it crosses the stop
//! (loss), the target (win), or the day cap. Paths are independent and each
//! owns a generator derived from `(seed, path index)`, so results do not
//! depend on whether or how the work is split across threads.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::position::PositionInput;
use super::MarketData;
use crate::core::config::MonteCarloConfig;
use crate::core::error::QuantError;
use crate::core::types::PositionType;
use crate::core::Result;

/// Aggregate statistics over all simulated paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Share of winning paths, in [0, 100].
    pub win_probability_percent: f64,
    /// Mean number of days until a path resolved, in [0, max_days].
    pub average_days_to_outcome: f64,
    /// Blend of win probability and speed, in [0, 100].
    pub confidence_score_percent: f64,
    pub iterations: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Simple xoshiro256** PRNG for deterministic parallel simulation.
#[derive(Clone)]
struct Xoshiro256 {
    s: [u64; 4],
}

impl Xoshiro256 {
    fn new(seed: u64) -> Self {
        // SplitMix64 to seed all 4 state words
        let mut z = seed;
        let mut s = [0u64; 4];
        for item in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
            *item = x ^ (x >> 31);
        }
        Self { s }
    }

    /// Independent stream for one path.
    fn for_path(seed: u64, path: usize) -> Self {
        Self::new(seed ^ (path as u64).wrapping_mul(0xd1b54a32d192ed03))
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Generate uniform f64 in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Outcome of one simulated path.
#[derive(Debug, Clone, Copy)]
struct PathOutcome {
    win: bool,
    days: usize,
}

struct PathModel {
    start: f64,
    stop: f64,
    target: f64,
    daily_volatility: f64,
    direction: PositionType,
    max_days: usize,
}

impl PathModel {
    fn hit_stop(&self, price: f64) -> bool {
        match self.direction {
            PositionType::Long => price <= self.stop,
            PositionType::Short => price >= self.stop,
        }
    }

    fn hit_target(&self, price: f64) -> bool {
        match self.direction {
            PositionType::Long => price >= self.target,
            PositionType::Short => price <= self.target,
        }
    }

    fn simulate(&self, rng: &mut Xoshiro256) -> PathOutcome {
        let mut price = self.start;
        for day in 1..=self.max_days {
            let drift = (self.target - price) / (price * 100.0);
            let random_move = (rng.next_f64() - 0.5) * self.daily_volatility;
            price *= 1.0 + drift + random_move;

            if self.hit_stop(price) {
                return PathOutcome { win: false, days: day };
            }
            if self.hit_target(price) {
                return PathOutcome { win: true, days: day };
            }
        }

        // Unresolved at the cap: judged against the target alone, on the position's side.
        PathOutcome { win: self.hit_target(price), days: self.max_days }
    }
}

/// Simulate trade outcomes for a position.
///
/// # Errors
/// `InvalidInput` when the position has no target, the market price is not
/// positive, or the config asks for zero iterations or days.
pub fn run_monte_carlo_simulation(
    position: &PositionInput,
    market: &MarketData,
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult> {
    position.validate()?;
    market.validate()?;
    let target = position
        .target_price
        .ok_or_else(|| QuantError::invalid_input("Monte Carlo simulation needs a target price"))?;
    if config.iterations == 0 || config.max_days == 0 {
        return Err(QuantError::invalid_input("iterations and max_days must be > 0"));
    }

    let model = PathModel {
        start: market.price,
        stop: position.stop_loss,
        target,
        daily_volatility: market.volatility.daily_volatility(),
        direction: position.position_type,
        max_days: config.max_days,
    };

    let run_path = |path: usize| {
        let mut rng = Xoshiro256::for_path(config.seed, path);
        model.simulate(&mut rng)
    };

    // (wins, total days)
    let (wins, total_days) = if config.parallel {
        (0..config.iterations)
            .into_par_iter()
            .map(run_path)
            .map(|o| (o.win as usize, o.days))
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    } else {
        (0..config.iterations)
            .map(run_path)
            .fold((0, 0), |acc, o| (acc.0 + o.win as usize, acc.1 + o.days))
    };

    let n = config.iterations as f64;
    let win_probability_percent = 100.0 * wins as f64 / n;
    let average_days_to_outcome = total_days as f64 / n;
    let speed = (1.0 - average_days_to_outcome / config.max_days as f64).max(0.0);
    let confidence_score_percent = 100.0 * (0.7 * win_probability_percent / 100.0 + 0.3 * speed);

    tracing::debug!(
        iterations = config.iterations,
        wins,
        win_probability_percent,
        average_days_to_outcome,
        "monte carlo simulation complete"
    );

    Ok(MonteCarloResult {
        win_probability_percent,
        average_days_to_outcome,
        confidence_score_percent,
        iterations: config.iterations,
        wins,
        losses: config.iterations - wins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::VolatilityLevel;

    fn long_setup() -> (PositionInput, MarketData) {
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 95.0).with_target(110.0);
        let market = MarketData::new(100.0, 1_000_000.0, VolatilityLevel::Medium);
        (position, market)
    }

    #[test]
    fn test_rng_uniform_range() {
        let mut rng = Xoshiro256::new(7);
        for _ in 0..10_000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_output_ranges() {
        let (position, market) = long_setup();
        let result =
            run_monte_carlo_simulation(&position, &market, &MonteCarloConfig::default()).unwrap();
        assert!((0.0..=100.0).contains(&result.win_probability_percent));
        assert!((0.0..=20.0).contains(&result.average_days_to_outcome));
        assert!((0.0..=100.0).contains(&result.confidence_score_percent));
        assert_eq!(result.wins + result.losses, 1000);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (position, market) = long_setup();
        let parallel = MonteCarloConfig { seed: 99, ..Default::default() };
        let sequential = MonteCarloConfig { parallel: false, ..parallel.clone() };
        let a = run_monte_carlo_simulation(&position, &market, &parallel).unwrap();
        let b = run_monte_carlo_simulation(&position, &market, &sequential).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_target_beside_price_wins_immediately() {
        // Target a hair above the market: the upward drift term alone crosses it.
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 50.0).with_target(100.001);
        let market = MarketData::new(100.0, 1_000_000.0, VolatilityLevel::Low);
        let config = MonteCarloConfig { iterations: 200, ..Default::default() };
        let result = run_monte_carlo_simulation(&position, &market, &config).unwrap();
        assert!(result.win_probability_percent > 40.0);
        assert!(result.average_days_to_outcome <= 20.0);
    }

    #[test]
    fn test_unreachable_target_never_wins() {
        // Low volatility compounds to at most ~1.22x over 20 days.
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 50.0).with_target(150.0);
        let market = MarketData::new(100.0, 1_000_000.0, VolatilityLevel::Low);
        let result =
            run_monte_carlo_simulation(&position, &market, &MonteCarloConfig::default()).unwrap();

        assert_eq!(result.wins, 0);
        assert_eq!(result.losses, 1000);
        assert_eq!(result.win_probability_percent, 0.0);
        assert_eq!(result.average_days_to_outcome, 20.0);
        assert_eq!(result.confidence_score_percent, 0.0);
    }

    #[test]
    fn test_unreachable_short_target_never_wins() {
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 200.0)
            .with_target(60.0)
            .with_position_type(PositionType::Short);
        let market = MarketData::new(100.0, 1_000_000.0, VolatilityLevel::Low);
        let result =
            run_monte_carlo_simulation(&position, &market, &MonteCarloConfig::default()).unwrap();
        assert_eq!(result.wins, 0);
    }

    #[test]
    fn test_short_position_mirrors() {
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 110.0)
            .with_target(99.0)
            .with_position_type(PositionType::Short);
        let market = MarketData::new(100.0, 1_000_000.0, VolatilityLevel::High);
        let result =
            run_monte_carlo_simulation(&position, &market, &MonteCarloConfig::default()).unwrap();
        // A 1% drop to the target is reached on most paths; the stop is 10% away.
        assert!(result.win_probability_percent > 50.0);
    }

    #[test]
    fn test_rejects_non_positive_market_price() {
        let (position, market) = long_setup();
        for price in [0.0, -100.0] {
            let result = run_monte_carlo_simulation(
                &position,
                &MarketData { price, ..market },
                &MonteCarloConfig::default(),
            );
            assert!(matches!(result, Err(QuantError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_requires_target() {
        let position = PositionInput::new(100_000.0, 1.0, 100.0, 95.0);
        let market = MarketData::new(100.0, 1_000_000.0, VolatilityLevel::Medium);
        let result = run_monte_carlo_simulation(&position, &market, &MonteCarloConfig::default());
        assert!(matches!(result, Err(QuantError::InvalidInput { .. })));
    }
}
