//! Tests for deeply nested and long inputs.

use super::eval;
use crate::{alloc::String, FailureReason};

/// Far beyond what a call stack of a test thread can handle with one frame per group.
const DEPTH: usize = 100_000;

fn nested(depth: usize, inner: &str) -> String {
    let mut input = "(".repeat(depth);
    input.push_str(inner);
    input.push_str(&")".repeat(depth));
    input
}

#[test]
fn deeply_nested_parentheses() {
    assert_eq!(eval(&nested(DEPTH, "1")).unwrap(), 1.0);
    assert_eq!(eval(&nested(DEPTH, "x + 1")).unwrap(), 4.0);
}

#[test]
fn deeply_nested_signs() {
    let mut input = "-(".repeat(DEPTH + 1);
    input.push('2');
    input.push_str(&")".repeat(DEPTH + 1));
    assert_eq!(eval(&input).unwrap(), -2.0);
}

#[test]
fn long_power_chain() {
    let input = "1 ^ ".repeat(DEPTH) + "1";
    assert_eq!(eval(&input).unwrap(), 1.0);

    let input = String::from("2") + &" ^ -1".repeat(DEPTH);
    assert_eq!(eval(&input).unwrap(), 0.5);
}

#[test]
fn long_sum() {
    let input = "1 + ".repeat(DEPTH - 1) + "1";
    assert_eq!(eval(&input).unwrap(), 100_000.0);
}

#[test]
fn failures_in_deeply_nested_input() {
    let mut input = "(".repeat(DEPTH);
    input.push('1');
    let failure = eval(&input).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::Expected { token: ")" });
    assert_eq!(failure.position().index(), DEPTH + 1);

    let mut input = nested(DEPTH, "1");
    input.push(')');
    let failure = eval(&input).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::Incomplete);
    assert_eq!(failure.position().index(), 2 * DEPTH + 1);

    let input = nested(DEPTH, "z");
    let failure = eval(&input).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::UnknownVariable);
    assert_eq!(failure.position().index(), DEPTH);

    let input = nested(DEPTH, "1 +");
    let failure = eval(&input).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::BadFactor);
    assert_eq!(failure.offending_token().text(), ")");
}
