// Closed-form Black-Scholes pricing of a European call/put pair on a
// non-dividend-paying underlying. Inputs are not range-checked here: invalid
// combinations propagate as NaN or infinities, and validation is left to callers
// (see `PricingInputs::validate`).

use crate::models::traits::PricingModel;
use crate::models::utils::{discounted_strike, intrinsic_value, norm_cdf};
use crate::pricing::types::{OptionPrices, PricingInputs};

/// Auxiliary Black-Scholes terms `(d1, d2)`.
///
/// Both terms are evaluated from `ln(S/K)` directly instead of deriving `d2` as
/// `d1 - sigma * sqrt(T)`. Division by `sigma * sqrt(T)` is unguarded.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let log_moneyness = (S / K).ln();
    let half_var = 0.5 * sigma * sigma;
    let denom = sigma * T.sqrt();
    let d1 = (log_moneyness + (r + half_var) * T) / denom;
    let d2 = (log_moneyness + (r - half_var) * T) / denom;
    (d1, d2)
}

/// Prices of a European call and put under Black-Scholes assumptions.
///
/// A maturity of exactly `0.0` collapses both prices to intrinsic value. The test
/// is an exact comparison, so a maturity that is merely close to zero takes the
/// general branch.
#[allow(non_snake_case)]
pub fn bs_call_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> OptionPrices {
    if T == 0.0 {
        let (call_price, put_price) = intrinsic_value(S, K);
        return OptionPrices {
            call_price,
            put_price,
        };
    }

    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    let pv_strike = discounted_strike(K, r, T);

    OptionPrices {
        call_price: S * norm_cdf(d1) - pv_strike * norm_cdf(d2),
        put_price: pv_strike * norm_cdf(-d2) - S * norm_cdf(-d1),
    }
}

/// Stateless Black-Scholes engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, inputs: &PricingInputs) -> OptionPrices {
        bs_call_put_price(
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.maturity,
            inputs.volatility,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_atm_prices() {
        let prices = bs_call_put_price(100.0, 100.0, 0.05, 1.0, 0.2);
        assert!((prices.call_price - 10.4506).abs() < 1e-4);
        assert!((prices.put_price - 5.5735).abs() < 1e-4);
    }

    #[test]
    fn test_expired_option_is_intrinsic() {
        let prices = bs_call_put_price(120.0, 100.0, 0.0, 0.0, 0.2);
        assert_eq!(prices.call_price, 20.0);
        assert_eq!(prices.put_price, 0.0);

        let prices = bs_call_put_price(100.0, 100.0, 0.0, 0.0, 0.2);
        assert_eq!(prices.call_price, 0.0);
        assert_eq!(prices.put_price, 0.0);
    }

    #[test]
    fn test_negative_zero_maturity_takes_expiry_branch() {
        // -0.0 == 0.0 under IEEE comparison
        let prices = bs_call_put_price(80.0, 100.0, 0.05, -0.0, 0.2);
        assert_eq!(prices.call_price, 0.0);
        assert_eq!(prices.put_price, 20.0);
    }

    #[test]
    fn test_tiny_maturity_takes_general_branch() {
        let prices = bs_call_put_price(120.0, 100.0, 0.0, 1e-300, 0.2);
        // Converges to intrinsic value but through the closed form
        assert!((prices.call_price - 20.0).abs() < 1e-9);
        assert!(prices.put_price.abs() < 1e-9);
    }

    #[test]
    fn test_d1_d2_spread() {
        let (d1, d2) = d1_d2(100.0, 90.0, 0.03, 0.5, 0.25);
        let expected_spread = 0.25 * 0.5_f64.sqrt();
        assert!((d1 - d2 - expected_spread).abs() < 1e-12);
    }

    #[test]
    fn test_zero_volatility_is_not_guarded() {
        let prices = bs_call_put_price(100.0, 100.0, 0.0, 1.0, 0.0);
        assert!(prices.call_price.is_nan());
        assert!(prices.put_price.is_nan());
    }

    #[test]
    fn test_engine_matches_free_function() {
        let inputs = PricingInputs::new(105.0, 100.0, 0.01, 0.75, 0.3);
        let via_trait = BlackScholes.price(&inputs);
        let direct = bs_call_put_price(105.0, 100.0, 0.01, 0.75, 0.3);
        assert_eq!(via_trait, direct);
        assert_eq!(BlackScholes.model_name(), "black-scholes");
    }
}
