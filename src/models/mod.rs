pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::pricing::types::{OptionPrices, PricingInputs};

    /// A model that maps one parameter set to a call/put price pair.
    ///
    /// Implementations are pure: no I/O, no interior mutability, and identical
    /// inputs give identical outputs.
    pub trait PricingModel: Send + Sync {
        /// Returns the name of the model (e.g., "black-scholes")
        fn model_name(&self) -> &str;

        /// Price a European call and put for the given inputs
        fn price(&self, inputs: &PricingInputs) -> OptionPrices;
    }
}

/// Utility functions for option pricing and calculations
pub mod utils {
    /// Standard normal cumulative distribution function via the error function:
    /// Φ(x) = 0.5 * [1 + erf(x / sqrt(2))]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
    }

    /// Intrinsic `(call, put)` value of an option exercised immediately.
    pub fn intrinsic_value(spot: f64, strike: f64) -> (f64, f64) {
        ((spot - strike).max(0.0), (strike - spot).max(0.0))
    }

    /// Present value of the strike, `K * exp(-r * T)`.
    pub fn discounted_strike(strike: f64, rate: f64, maturity: f64) -> f64 {
        strike * (-rate * maturity).exp()
    }

}
