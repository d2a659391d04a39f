// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled predicates and their store-native document form.
//!
//! A [`Predicate`] is the typed output of compilation. It is rendered into the
//! store's JSON query vocabulary by [`Predicate::to_document`]:
//!
//! ```text
//! And / Or        {"$and": [...]}  /  {"$or": [...]}
//! Exists          {field: {"$exists": true}}
//! Regex           {field: {"$regex": pattern, "$options": "i"}}
//! Compare         {field: {"$<comparison>": operand}}
//! Range           {field: {"$gte": start, "$lte": end}}   ($lt when exclusive)
//! Scoped          {"$<comparison>": ["$$<scope>.<field>", value]}
//! Unconstrained   {}
//! ```

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{json, Map, Value as Json};

use crate::filter::{ComparisonKind, Operator};
use crate::oid::ObjectId;
use crate::value::Value;

/// A compiled boolean query fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    /// A condition on one document field (possibly a dotted path).
    Field { path: String, condition: Condition },
    /// A comparison against a field of a bound array element.
    Scoped {
        comparison: ComparisonKind,
        variable: String,
        field: String,
        value: Value,
    },
    /// Matches everything. Emitted where a constraint degrades away.
    Unconstrained,
}

/// What a [`Predicate::Field`] requires of its field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Exists(bool),
    Regex {
        pattern: String,
        case_insensitive: bool,
    },
    Compare {
        comparison: ComparisonKind,
        operand: Operand,
    },
    Range {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        end_exclusive: bool,
    },
}

/// The right-hand side of a comparator, after type coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Str(String),
    Int(i64),
    Num(f64),
    Bool(bool),
    Instant(DateTime<FixedOffset>),
    ObjectId(ObjectId),
}

impl Predicate {
    /// Joins children under a boolean operator.
    pub fn combine(operator: Operator, children: Vec<Predicate>) -> Self {
        match operator {
            Operator::And => Predicate::And(children),
            Operator::Or => Predicate::Or(children),
        }
    }

    pub fn field(path: impl Into<String>, condition: Condition) -> Self {
        Predicate::Field {
            path: path.into(),
            condition,
        }
    }

    /// Case-insensitive regex match on `path`.
    pub fn regex(path: impl Into<String>, pattern: impl Into<String>) -> Self {
        Predicate::field(
            path,
            Condition::Regex {
                pattern: pattern.into(),
                case_insensitive: true,
            },
        )
    }

    pub fn compare(path: impl Into<String>, comparison: ComparisonKind, operand: Operand) -> Self {
        Predicate::field(
            path,
            Condition::Compare {
                comparison,
                operand,
            },
        )
    }

    /// Renders the predicate in the store's query vocabulary.
    pub fn to_document(&self) -> Json {
        match self {
            Predicate::And(children) | Predicate::Or(children) => {
                let key = match self {
                    Predicate::And(_) => "$and",
                    _ => "$or",
                };
                let rendered: Vec<Json> = children.iter().map(Predicate::to_document).collect();
                json!({ key: rendered })
            }
            Predicate::Field { path, condition } => {
                json!({ path.as_str(): condition.to_document() })
            }
            Predicate::Scoped {
                comparison,
                variable,
                field,
                value,
            } => {
                let key = format!("${comparison}");
                let reference = format!("$${variable}.{field}");
                json!({ key: [reference, Operand::from(value).to_document()] })
            }
            Predicate::Unconstrained => Json::Object(Map::new()),
        }
    }
}

impl Condition {
    fn to_document(&self) -> Json {
        match self {
            Condition::Exists(exists) => json!({ "$exists": exists }),
            Condition::Regex {
                pattern,
                case_insensitive,
            } => {
                let mut doc = Map::new();
                doc.insert("$regex".into(), Json::String(pattern.clone()));
                if *case_insensitive {
                    doc.insert("$options".into(), Json::String("i".into()));
                }
                Json::Object(doc)
            }
            Condition::Compare {
                comparison,
                operand,
            } => {
                json!({ format!("${comparison}"): operand.to_document() })
            }
            Condition::Range {
                start,
                end,
                end_exclusive,
            } => {
                let upper = if *end_exclusive { "$lt" } else { "$lte" };
                json!({ "$gte": instant_document(start), upper: instant_document(end) })
            }
        }
    }
}

impl Operand {
    fn to_document(&self) -> Json {
        match self {
            Operand::Str(s) => Json::String(s.clone()),
            Operand::Int(n) => Json::from(*n),
            Operand::Num(n) => Json::from(*n),
            Operand::Bool(b) => Json::Bool(*b),
            Operand::Instant(instant) => instant_document(instant),
            Operand::ObjectId(oid) => oid.to_extended_json(),
        }
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        match value {
            Value::Str(s) => Operand::Str(s.clone()),
            Value::Num(n) => Operand::Num(*n),
            Value::Bool(b) => Operand::Bool(*b),
        }
    }
}

fn instant_document(instant: &DateTime<FixedOffset>) -> Json {
    json!({ "$date": instant.to_rfc3339_opts(SecondsFormat::Nanos, true) })
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
