//! Walkthrough of the three chain policies, factory steps, and guards.
//!
//! Run with: cargo run --example demo

use relay::{every, map, some_with, steps, ChainError};
use serde_json::{json, Value};

fn main() -> Result<(), ChainError> {
    // ========================================================================
    // map: transform-all
    // ========================================================================

    println!("=== map: transform-all ===");

    let pricing = map(steps! {
        net: plain |x: Option<f64>| x.map(|v| v * 0.9),
        tax: factory |rate: f64| move |x: Option<f64>| x.map(|v| v * (1.0 + rate)),
        round_cents: plain |x: Option<f64>| x.map(|v| (v * 100.0).round() / 100.0),
    })?;

    let gross = pricing
        .step("net")?
        .configure("tax", 0.2)?
        .step("round_cents")?
        .call(Some(49.99));
    println!("  49.99 -> net -> tax(0.2) -> round_cents = {gross:?}");

    // Nothing pending: the handler is an identity passthrough.
    println!("  empty chain: {:?}", pricing.call(Some(49.99)));

    // ========================================================================
    // every: all-must-pass
    // ========================================================================

    println!("\n=== every: all-must-pass ===");

    let validate = every(steps! {
        number: plain |x: Option<Value>| match x {
            Some(Value::Number(n)) => n.as_i64().map(Value::from),
            _ => None,
        },
        positive: plain |x: Option<Value>| match x {
            Some(Value::Number(n)) if n.as_i64().is_some_and(|v| v >= 0) => {
                Some(Value::Number(n))
            }
            _ => None,
        },
    })?;

    for input in [json!(5), json!(-5), json!("five")] {
        let result = validate
            .step("number")?
            .step("positive")?
            .call(Some(input.clone()));
        println!("  {input} -> {result:?}");
    }

    // ========================================================================
    // some: first-match
    // ========================================================================

    println!("\n=== some: first-match ===");

    // Custom guard: a parse only counts if it produced a string.
    let describe = some_with(
        steps! {
            currency: factory |symbol: Value| move |x: Option<Value>| {
                match (&symbol, x) {
                    (Value::String(sym), Some(Value::String(s))) => s
                        .strip_prefix(sym.as_str())
                        .map(|rest| json!(format!("{rest} units of {sym}"))),
                    _ => None,
                }
            },
            word: plain |x: Option<Value>| match x {
                Some(Value::String(s)) => Some(json!(format!("the word {s:?}"))),
                _ => None,
            },
        },
        |value: &Option<Value>| matches!(value, Some(Value::String(_))),
    )?;

    for input in [json!("$12.50"), json!("hello"), json!(42)] {
        let result = describe
            .configure("currency", json!("$"))?
            .step("word")?
            .call(Some(input.clone()));
        println!("  {input} -> {result:?}");
    }

    Ok(())
}
