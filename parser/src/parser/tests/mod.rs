use assert_matches::assert_matches;

use super::*;
use crate::{tokenize, ParseFailure};

mod nesting;

fn env() -> Environment<f64> {
    Environment::new()
        .with_var("x", 3.0)
        .with_var("y", -2.0)
        .with_var("π", core::f64::consts::PI)
}

fn eval(input: &str) -> Result<f64, ParseFailure<'_>> {
    evaluate(input, &env())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{actual} is not close to {expected}"
    );
}

#[test]
fn parsing_from_cursor() {
    let tokens = tokenize("1 + 2");
    let value: f64 = parse(tokens.cursor(), &env()).unwrap();
    assert_close(value, 3.0);

    let tokens = tokenize("1 2");
    let failure = parse::<f64>(tokens.cursor(), &env()).unwrap_err();
    assert_matches!(failure.reason(), FailureReason::Incomplete);
    assert_eq!(failure.position().index(), 1);
}

#[test]
fn parsing_with_f32() {
    let env = Environment::new().with_var("x", 0.5_f32);
    let value = evaluate("4 * x + 1", &env).unwrap();
    assert_eq!(value, 3.0);
}
