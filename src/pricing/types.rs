use anyhow::{bail, Result};

use crate::models::utils::discounted_strike;

/// The five market/contract parameters of a single pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Current price of the underlying (S)
    pub spot: f64,
    /// Exercise price (K)
    pub strike: f64,
    /// Continuously-compounded risk-free annual rate (r), any sign
    pub rate: f64,
    /// Time to expiry in years (T)
    pub maturity: f64,
    /// Annualized volatility of log-returns (sigma, as decimal)
    pub volatility: f64,
}

impl PricingInputs {
    pub fn new(spot: f64, strike: f64, rate: f64, maturity: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            maturity,
            volatility,
        }
    }

    /// Check the inputs against the economic constraints of the model.
    ///
    /// The pricing engine never calls this. It exists for callers that want to
    /// reject nonsensical parameter sets instead of receiving NaN or infinite prices.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                bail!("Invalid parameters: {} must be finite, got {}", name, value);
            }
        }

        if self.spot < 0.0 {
            bail!("Invalid parameters: spot={} must be >= 0", self.spot);
        }
        if self.strike <= 0.0 {
            bail!("Invalid parameters: strike={} must be > 0", self.strike);
        }
        if self.maturity < 0.0 {
            bail!("Invalid parameters: maturity={} must be >= 0", self.maturity);
        }
        if self.volatility < 0.0 {
            bail!(
                "Invalid parameters: volatility={} must be >= 0",
                self.volatility
            );
        }
        if self.volatility == 0.0 && self.maturity != 0.0 {
            bail!(
                "Invalid parameters: volatility must be > 0 when maturity={} is non-zero",
                self.maturity
            );
        }

        Ok(())
    }

    /// Put-call parity residual `(C - P) - (S - K * exp(-r * T))`.
    ///
    /// Zero up to rounding for any finite price pair produced by the model.
    pub fn parity_gap(&self, prices: &OptionPrices) -> f64 {
        let forward_value = self.spot - discounted_strike(self.strike, self.rate, self.maturity);
        (prices.call_price - prices.put_price) - forward_value
    }
}

/// Theoretical prices of a European call and put sharing the same inputs.
///
/// With the `serde` feature, non-finite prices serialize as the strings `"NaN"`,
/// `"inf"` and `"-inf"` so that degenerate results survive formats without IEEE
/// special values (JSON would otherwise write `null`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    /// Fair value of the call
    #[cfg_attr(feature = "serde", serde(with = "non_finite_f64"))]
    pub call_price: f64,
    /// Fair value of the put
    #[cfg_attr(feature = "serde", serde(with = "non_finite_f64"))]
    pub put_price: f64,
}

/// Serde adapter writing finite values as numbers and NaN/infinities as strings.
#[cfg(feature = "serde")]
mod non_finite_f64 {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            // Display gives "NaN", "inf" or "-inf", all accepted by f64::from_str
            serializer.collect_str(value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(value) => Ok(value),
            NumberOrText::Text(text) => match text.parse::<f64>() {
                Ok(value) if !value.is_finite() => Ok(value),
                _ => Err(D::Error::custom(format!(
                    "expected a number, \"NaN\", \"inf\" or \"-inf\", got {:?}",
                    text
                ))),
            },
        }
    }
}

impl OptionPrices {
    /// True when both prices are finite numbers (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.call_price.is_finite() && self.put_price.is_finite()
    }
}
