//! # Black-Scholes-Lib: Closed-Form European Option Pricing
//!
//! `black-scholes-lib` prices a European call and a European put on a
//! non-dividend-paying underlying with the Black-Scholes closed form. Given five
//! market/contract parameters it returns two prices, deterministically and without
//! side effects.
//!
//! ## Core Features
//!
//! - **Black-Scholes Pricing**: call and put from one set of inputs, with the
//!   standard normal CDF evaluated through the error function
//! - **Expiry Handling**: a maturity of exactly zero collapses to intrinsic value
//! - **No Hidden Validation**: nonsensical inputs yield NaN/infinite prices instead
//!   of errors; opt-in validation lives in [`PricingInputs::validate`]
//! - **Console Front-End**: TOML configuration, argument/prompt parsing and text or
//!   JSON rendering for the `bs-price` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use black_scholes_lib::{price, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2);
//! let prices = price(&inputs);
//!
//! assert!((prices.call_price - 10.4506).abs() < 1e-4);
//! assert!((prices.put_price - 5.5735).abs() < 1e-4);
//! assert!(inputs.parity_gap(&prices).abs() < 1e-9);
//! ```
//!
//! ## Thread Safety
//!
//! Every pricing entry point is a pure function over `Copy` values. Calls can be
//! made from any number of threads without synchronization.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core input/output records
pub use pricing::types::{OptionPrices, PricingInputs};

// Engine and model abstraction
pub use models::bs::{bs_call_put_price, BlackScholes};
pub use models::traits::PricingModel;
pub use models::utils::norm_cdf;

// Configuration and console glue
#[cfg(feature = "serde")]
pub use pricing::config::{OutputConfig, OutputFormat, PricingConfig};

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European call and put from a [`PricingInputs`] record.
///
/// # Pricing Methodology
///
/// 1. **Expired option** (`maturity == 0.0`, exact comparison): intrinsic value,
///    `max(S - K, 0)` for the call and `max(K - S, 0)` for the put
/// 2. **Auxiliary terms**:
///    ```text
///    d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
///    d2 = (ln(S/K) + (r - σ²/2)·T) / (σ·√T)
///    ```
/// 3. **Prices**, with `Φ(x) = (1 + erf(x/√2)) / 2`:
///    ```text
///    call = S·Φ(d1) - K·e^(-rT)·Φ(d2)
///    put  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1)
///    ```
///
/// # Error Handling
///
/// This function never fails and never panics. Inputs are not range-checked:
/// zero volatility with a non-zero maturity, a non-positive spot or a non-positive
/// strike propagate through the arithmetic as NaN or infinities. Call
/// [`PricingInputs::validate`] first, or check [`OptionPrices::is_finite`]
/// afterwards, when stricter guarantees are needed.
///
/// # Example
///
/// ```rust
/// use black_scholes_lib::{price, PricingInputs};
///
/// // In-the-money call at expiry: intrinsic value only
/// let prices = price(&PricingInputs::new(120.0, 100.0, 0.0, 0.0, 0.2));
/// assert_eq!(prices.call_price, 20.0);
/// assert_eq!(prices.put_price, 0.0);
/// ```
pub fn price(inputs: &PricingInputs) -> OptionPrices {
    BlackScholes.price(inputs)
}

/// Price a European call and put from the five raw parameters.
///
/// Argument order is spot, strike, rate, maturity (years), volatility. See
/// [`price`] for the formulas and the handling of degenerate inputs.
pub fn price_call_put(
    spot: f64,
    strike: f64,
    rate: f64,
    maturity: f64,
    volatility: f64,
) -> OptionPrices {
    bs_call_put_price(spot, strike, rate, maturity, volatility)
}
