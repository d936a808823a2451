// bs-price: price a European call/put pair from the command line.
//
// With neither positional values nor a config file the inputs are prompted for on
// stdin.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use black_scholes_lib::pricing::console::{parse_inputs, prompt_inputs, render_prices};
use black_scholes_lib::{price, OutputConfig, OutputFormat, PricingConfig, PricingInputs};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bs-price")]
#[command(about = "Black-Scholes prices for a European call and put")]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(long, short)]
    config: Option<String>,

    /// Print prices as JSON
    #[arg(long)]
    json: bool,

    /// Reject inputs outside the model's domain instead of printing NaN/inf
    #[arg(long)]
    strict: bool,

    /// Decimal places for text output
    #[arg(long, short)]
    precision: Option<usize>,

    /// Spot, strike, rate, maturity (years) and volatility
    #[arg(value_name = "S K r T sigma", allow_negative_numbers = true)]
    values: Vec<String>,
}

fn resolve<R: BufRead, W: Write>(
    args: &Args,
    reader: &mut R,
    writer: &mut W,
) -> Result<(PricingInputs, OutputConfig)> {
    let (inputs, mut output) = match (&args.config, args.values.is_empty()) {
        (Some(_), false) => bail!("Pass either --config or positional values, not both"),
        (Some(path), true) => {
            let config = PricingConfig::from_file(path)?;
            tracing::info!(path = %path, "loaded pricing configuration");
            (config.inputs, config.output)
        }
        (None, false) => (parse_inputs(&args.values)?, OutputConfig::default()),
        (None, true) => (prompt_inputs(reader, writer)?, OutputConfig::default()),
    };

    if args.json {
        output.format = OutputFormat::Json;
    }
    if args.strict {
        output.strict = true;
    }
    if let Some(precision) = args.precision {
        output.precision = precision;
    }
    Ok((inputs, output))
}

fn run<R: BufRead, W: Write>(args: &Args, reader: &mut R, writer: &mut W) -> Result<()> {
    let (inputs, output) = resolve(args, reader, writer)?;

    if output.strict {
        inputs.validate()?;
    }

    let prices = price(&inputs);
    tracing::debug!(
        spot = inputs.spot,
        strike = inputs.strike,
        rate = inputs.rate,
        maturity = inputs.maturity,
        volatility = inputs.volatility,
        call = prices.call_price,
        put = prices.put_price,
        "priced option pair"
    );
    if !prices.is_finite() {
        tracing::warn!(
            ?inputs,
            "non-finite prices; inputs are outside the model's domain"
        );
    }

    let report = render_prices(&prices, &output)?;
    writeln!(writer, "{}", report)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    if let Err(e) = run(&args, &mut reader, &mut stdout) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
