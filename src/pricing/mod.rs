//! Option pricing: Black-Scholes fair value, Greeks and implied volatility.

pub mod black_scholes;
pub mod implied_vol;
pub mod normal;

pub use black_scholes::{d1_d2, price_option, GreeksResult, OptionParameters};
pub use implied_vol::implied_volatility;
pub use normal::{erf, norm_cdf, norm_pdf};
