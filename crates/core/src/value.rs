// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic leaf values and the coercion rules applied at compile time.
//!
//! Wire filters always carry leaf values as strings. Coercion to the target
//! field's type is deferred until compilation, where the field kind and the
//! comparison kind are known.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamic scalar carried by a leaf comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Value {
    /// Builds a value from a JSON scalar, or `None` for null, arrays and objects.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::String(s) => Some(Value::Str(s.clone())),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Num),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value the way it travels on the wire: always as a string.
    pub fn to_wire_string(&self) -> String {
        self.to_string()
    }

    /// Coerces the value for a boolean-kind field.
    ///
    /// Recognises `true/false/yes/no/1/0` (any case) and non-zero numbers.
    /// Returns `None` when the value has no boolean reading.
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Num(n) => Some(*n != 0.0),
            Value::Str(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Num(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Coerces a value to a non-negative integer.
///
/// Integers pass through, floats truncate toward zero, strings parse as
/// integers. Anything else, or a failed parse, yields 0. Negative results
/// clamp to 0. Never fails.
pub fn coerce_nonneg_int(value: &Value) -> i64 {
    let n = match value {
        Value::Num(n) if n.is_finite() => n.trunc() as i64,
        Value::Str(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    n.max(0)
}

/// Same rule as [`coerce_nonneg_int`], applied to an untyped JSON value.
///
/// Used for wire integers that may arrive as JSON floats.
pub fn coerce_json_nonneg_int(json: &serde_json::Value) -> i64 {
    Value::from_json(json)
        .map(|v| coerce_nonneg_int(&v))
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
