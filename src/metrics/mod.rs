//! Portfolio statistics: tail risk, benchmark regression and performance.

pub mod market;
pub mod performance;
pub mod streaming;
pub mod tail_risk;

pub use market::{calculate_beta_alpha, correlation, put_call_ratio, BetaAlpha};
pub use performance::{
    drawdown_curve, max_drawdown, sharpe_ratio, sortino_ratio, sortino_ratio_with_target,
};
pub use streaming::{PairedStats, ReturnStats};
pub use tail_risk::{calculate_cvar, calculate_var};
