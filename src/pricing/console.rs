//! Console glue around the pricing engine: reading the five inputs from
//! arguments or interactive prompts, and rendering the resulting price pair.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};

use crate::pricing::config::{OutputConfig, OutputFormat};
use crate::pricing::types::{OptionPrices, PricingInputs};

/// Prompt labels in input order: S, K, r, T, sigma.
pub const PROMPTS: [&str; 5] = [
    "Stock Price:",
    "Strike:",
    "Interest Rate:",
    "Time to Maturity:",
    "Volatility:",
];

fn parse_value(label: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("Could not parse {} {:?} as a number", label, raw.trim()))
}

fn inputs_from_values(values: [f64; 5]) -> PricingInputs {
    let [spot, strike, rate, maturity, volatility] = values;
    PricingInputs::new(spot, strike, rate, maturity, volatility)
}

/// Parse five positional values in the order `S K r T sigma`.
pub fn parse_inputs(args: &[String]) -> Result<PricingInputs> {
    if args.len() != PROMPTS.len() {
        bail!(
            "Expected {} values (spot strike rate maturity volatility), got {}",
            PROMPTS.len(),
            args.len()
        );
    }

    let mut values = [0.0; 5];
    for ((slot, label), raw) in values.iter_mut().zip(PROMPTS).zip(args) {
        *slot = parse_value(label.trim_end_matches(':'), raw)?;
    }
    Ok(inputs_from_values(values))
}

/// Ask for each input on `writer` and read the values from `reader`.
///
/// Values are whitespace-separated tokens and may span lines, so all five can be
/// typed on one line. Every prompt is still written, in order.
pub fn prompt_inputs<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<PricingInputs> {
    let mut values = [0.0; 5];
    let mut pending: VecDeque<String> = VecDeque::new();
    let mut line = String::new();

    for (slot, label) in values.iter_mut().zip(PROMPTS) {
        writeln!(writer, "{}", label)?;
        writer.flush()?;

        while pending.is_empty() {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(anyhow!("Input ended before {} was provided", label));
            }
            pending.extend(line.split_whitespace().map(str::to_string));
        }
        if let Some(token) = pending.pop_front() {
            *slot = parse_value(label.trim_end_matches(':'), &token)?;
        }
    }

    if !pending.is_empty() {
        tracing::warn!(extra = pending.len(), "ignoring extra values after volatility");
    }
    Ok(inputs_from_values(values))
}

/// Render a price pair according to the output settings.
///
/// JSON keeps non-finite prices as the strings `"NaN"`, `"inf"` or `"-inf"`, so
/// the report always parses back into [`OptionPrices`].
pub fn render_prices(prices: &OptionPrices, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(format!(
            "Call == {:.prec$}\nPut == {:.prec$}",
            prices.call_price,
            prices.put_price,
            prec = output.precision
        )),
        OutputFormat::Json => {
            serde_json::to_string(prices).context("Failed to serialize option prices")
        }
    }
}
