// demos/pricing_demo.rs

//! Demonstration of Black-Scholes call/put pricing
//!
//! This example shows how to:
//! 1. Price a single option pair from raw parameters
//! 2. Sweep spot and volatility to see how the prices move
//! 3. Check put-call parity on the results
//! 4. Observe what happens with expired and degenerate inputs

use black_scholes_lib::{price, price_call_put, PricingInputs};

fn main() {
    println!("Black-Scholes Call/Put Pricing Demo");
    println!("===================================");

    let base = PricingInputs::new(100.0, 100.0, 0.02, 3.0, 0.2);
    let prices = price(&base);

    println!("\nStep 1: Single option pair");
    println!("  Inputs: {:?}", base);
    println!("  Call == {:.6}", prices.call_price);
    println!("  Put  == {:.6}", prices.put_price);
    println!("  Parity gap: {:.2e}", base.parity_gap(&prices));

    println!("\nStep 2: Spot ladder (K=100, r=2%, T=3y, vol=20%)");
    println!("{:<8} {:<12} {:<12}", "Spot", "Call", "Put");
    println!("{}", "-".repeat(34));
    for spot in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let p = price(&PricingInputs { spot, ..base });
        println!("{:<8.0} {:<12.4} {:<12.4}", spot, p.call_price, p.put_price);
    }

    println!("\nStep 3: Volatility ladder (S=K=100, r=2%, T=3y)");
    println!("{:<8} {:<12} {:<12}", "Vol", "Call", "Put");
    println!("{}", "-".repeat(34));
    for volatility in [0.1, 0.2, 0.3, 0.5] {
        let p = price(&PricingInputs { volatility, ..base });
        println!(
            "{:<8.2} {:<12.4} {:<12.4}",
            volatility, p.call_price, p.put_price
        );
    }

    println!("\nStep 4: Edge cases");
    let expired = price_call_put(120.0, 100.0, 0.0, 0.0, 0.2);
    println!(
        "  Expired ITM call: call={} put={}",
        expired.call_price, expired.put_price
    );

    let degenerate = PricingInputs::new(100.0, 100.0, 0.0, 1.0, 0.0);
    let p = price(&degenerate);
    println!(
        "  Zero vol before expiry: call={} put={} (finite: {})",
        p.call_price,
        p.put_price,
        p.is_finite()
    );
    if let Err(e) = degenerate.validate() {
        println!("  validate() would have rejected it: {}", e);
    }
}
