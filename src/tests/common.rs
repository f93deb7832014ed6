//! Shared step sets for tests.

use serde_json::Value;

use crate::step::StepFn;
use crate::steps;

/// Plain arithmetic steps over `i64`.
pub fn arithmetic() -> Vec<(&'static str, StepFn<i64>)> {
    steps! {
        add_one: plain |x: Option<i64>| x.map(|v| v + 1),
        double: plain |x: Option<i64>| x.map(|v| v * 2),
    }
}

/// Factory arithmetic steps over `i64`, configured with an operand.
pub fn calculator() -> Vec<(&'static str, StepFn<i64>)> {
    steps! {
        add: factory |v: i64| move |x: Option<i64>| x.map(|n| n + v),
        multiply: factory |v: i64| move |x: Option<i64>| x.map(|n| n * v),
    }
}

/// Plain and factory arithmetic steps combined.
pub fn mixed() -> Vec<(&'static str, StepFn<i64>)> {
    let mut set = arithmetic();
    set.extend(calculator());
    set
}

/// Type-coercing steps over JSON values.
///
/// `number` doubles numeric input, `string` appends `!` to string input;
/// each rejects everything else with `None`.
pub fn coercions() -> Vec<(&'static str, StepFn<Value>)> {
    steps! {
        number: plain |x: Option<Value>| match x {
            Some(Value::Number(n)) => n.as_i64().map(|v| Value::from(v * 2)),
            _ => None,
        },
        string: plain |x: Option<Value>| match x {
            Some(Value::String(s)) => Some(Value::from(format!("{s}!"))),
            _ => None,
        },
    }
}

/// Validating steps over JSON values: `number` doubles numbers, `positive`
/// passes non-negative numbers through. Each rejects anything else.
pub fn validators() -> Vec<(&'static str, StepFn<Value>)> {
    steps! {
        number: plain |x: Option<Value>| match x {
            Some(Value::Number(n)) => n.as_i64().map(|v| Value::from(v * 2)),
            _ => None,
        },
        positive: plain |x: Option<Value>| match x {
            Some(Value::Number(n)) if n.as_i64().is_some_and(|v| v >= 0) => {
                Some(Value::Number(n))
            }
            _ => None,
        },
    }
}
