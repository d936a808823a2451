use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pricing::types::PricingInputs;

/// How priced results are rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Call == ...` / `Put == ...` lines
    #[default]
    Text,
    /// `{"call_price": ..., "put_price": ...}`
    Json,
}

/// Display and validation settings for the console front-end
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for text output
    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default)]
    pub format: OutputFormat,

    /// Validate inputs before pricing instead of letting NaN/inf through
    #[serde(default)]
    pub strict: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
            strict: false,
        }
    }
}

/// Main configuration struct, typically read from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub inputs: PricingInputs,

    #[serde(default)]
    pub output: OutputConfig,
}

impl PricingConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PricingConfig =
            toml::from_str(text).context("Failed to parse pricing configuration")?;
        tracing::debug!(
            spot = config.inputs.spot,
            strike = config.inputs.strike,
            rate = config.inputs.rate,
            maturity = config.inputs.maturity,
            volatility = config.inputs.volatility,
            "pricing configuration parsed"
        );
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }
}

fn default_precision() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let text = r#"
            [inputs]
            spot = 100.0
            strike = 95.0
            rate = 0.05
            maturity = 0.5
            volatility = 0.25

            [output]
            precision = 4
            format = "json"
            strict = true
        "#;
        let config = PricingConfig::from_toml_str(text).unwrap();
        assert_eq!(
            config.inputs,
            PricingInputs::new(100.0, 95.0, 0.05, 0.5, 0.25)
        );
        assert_eq!(config.output.precision, 4);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.strict);
    }

    #[test]
    fn test_output_section_defaults() {
        let text = r#"
            [inputs]
            spot = 100.0
            strike = 100.0
            rate = 0.0
            maturity = 0.0
            volatility = 0.2
        "#;
        let config = PricingConfig::from_toml_str(text).unwrap();
        assert_eq!(config.output.precision, 6);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.strict);
    }

    #[test]
    fn test_missing_input_field_is_error() {
        let text = r#"
            [inputs]
            spot = 100.0
            strike = 100.0
            rate = 0.0
            maturity = 1.0
        "#;
        assert!(PricingConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn test_unknown_format_is_error() {
        let text = r#"
            [inputs]
            spot = 100.0
            strike = 100.0
            rate = 0.0
            maturity = 1.0
            volatility = 0.2

            [output]
            format = "xml"
        "#;
        assert!(PricingConfig::from_toml_str(text).is_err());
    }
}
