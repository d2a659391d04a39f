// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

// ─────────────────────────────────────────────────────────────────────────────
// Numeric coercion
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    string_int = { Value::from("7"), 7 },
    string_padded = { Value::from(" 12 "), 12 },
    integer = { Value::from(42_i64), 42 },
    float_truncates = { Value::from(3.9), 3 },
    negative_float_clamps = { Value::from(-3.9), 0 },
    negative_string_clamps = { Value::from("-5"), 0 },
    garbage = { Value::from("abc"), 0 },
    float_string_is_not_an_integer = { Value::from("3.5"), 0 },
    empty = { Value::from(""), 0 },
    boolean = { Value::from(true), 0 },
)]
fn coerce_nonneg_int_cases(value: Value, expected: i64) {
    assert_eq!(coerce_nonneg_int(&value), expected);
}

#[test]
fn coerce_nonneg_int_non_finite_is_zero() {
    assert_eq!(coerce_nonneg_int(&Value::Num(f64::NAN)), 0);
    assert_eq!(coerce_nonneg_int(&Value::Num(f64::INFINITY)), 0);
}

#[parameterized(
    int = { json!(1), 1 },
    float = { json!(1.0), 1 },
    float_fraction = { json!(10.7), 10 },
    string = { json!("25"), 25 },
    null = { json!(null), 0 },
    array = { json!([1]), 0 },
)]
fn coerce_json_nonneg_int_cases(value: serde_json::Value, expected: i64) {
    assert_eq!(coerce_json_nonneg_int(&value), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Boolean coercion
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    true_lower = { "true", Some(true) },
    true_upper = { "TRUE", Some(true) },
    yes = { "yes", Some(true) },
    one = { "1", Some(true) },
    false_lower = { "false", Some(false) },
    no = { "No", Some(false) },
    zero = { "0", Some(false) },
    unknown = { "maybe", None },
)]
fn coerce_bool_from_string(input: &str, expected: Option<bool>) {
    assert_eq!(Value::from(input).coerce_bool(), expected);
}

#[test]
fn coerce_bool_from_typed_values() {
    assert_eq!(Value::Bool(false).coerce_bool(), Some(false));
    assert_eq!(Value::Num(2.0).coerce_bool(), Some(true));
    assert_eq!(Value::Num(0.0).coerce_bool(), Some(false));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn from_json_scalars() {
    assert_eq!(Value::from_json(&json!("a")), Some(Value::from("a")));
    assert_eq!(Value::from_json(&json!(2)), Some(Value::Num(2.0)));
    assert_eq!(Value::from_json(&json!(false)), Some(Value::Bool(false)));
    assert_eq!(Value::from_json(&json!(null)), None);
    assert_eq!(Value::from_json(&json!({"a": 1})), None);
}

#[test]
fn wire_string_rendering() {
    assert_eq!(Value::from("Foo").to_wire_string(), "Foo");
    assert_eq!(Value::Num(3.0).to_wire_string(), "3");
    assert_eq!(Value::Num(2.5).to_wire_string(), "2.5");
    assert_eq!(Value::Bool(true).to_wire_string(), "true");
}
