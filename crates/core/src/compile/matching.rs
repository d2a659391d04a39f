// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match compilation: field-kind dispatch for each leaf.

use chrono::Datelike;
use tracing::{debug, warn};

use super::Compiler;
use crate::dates::{self, parse_instant};
use crate::error::{Error, Result};
use crate::field::{Field, FieldKind};
use crate::filter::{ComparisonKind, FilterNode};
use crate::oid::ObjectId;
use crate::predicate::{Condition, Operand, Predicate};
use crate::value::{coerce_nonneg_int, Value};

impl Compiler<'_> {
    pub(super) fn match_node(&self, node: &FilterNode) -> Result<Predicate> {
        match node {
            FilterNode::Combinator { operator, children } => {
                let compiled = children
                    .iter()
                    .map(|child| self.match_node(child))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Predicate::combine(*operator, compiled))
            }
            FilterNode::Leaf {
                field_id,
                comparison,
                value,
            } => self.match_leaf(field_id, *comparison, value),
        }
    }

    fn match_leaf(
        &self,
        field_id: &str,
        comparison: ComparisonKind,
        value: &Value,
    ) -> Result<Predicate> {
        // Presence checks never depend on the field's kind.
        match comparison {
            ComparisonKind::Nempty => {
                return Ok(Predicate::field(field_id, Condition::Exists(true)));
            }
            ComparisonKind::Empty => {
                return Ok(Predicate::field(field_id, Condition::Exists(false)));
            }
            _ => {}
        }

        let Some(field) = self.registry.lookup(field_id) else {
            debug!(field = field_id, %comparison, "field not in registry, compiling as a path");
            return unregistered(field_id, comparison, value);
        };

        match field.kind() {
            FieldKind::Text => Ok(text(field_id, comparison, value)),
            FieldKind::Number => Ok(Predicate::compare(
                field_id,
                comparison,
                Operand::Int(coerce_nonneg_int(value)),
            )),
            FieldKind::Boolean => Ok(boolean(field_id, comparison, value)),
            FieldKind::Date => self.date(field_id, comparison, value),
            kind => Ok(fallback(field_id, kind, comparison, value)),
        }
    }

    fn date(&self, field_id: &str, comparison: ComparisonKind, value: &Value) -> Result<Predicate> {
        if comparison == ComparisonKind::DateNeDay {
            let Some(instant) = parse_instant(value) else {
                return self.drop_date(field_id, comparison, value, "unparseable date");
            };
            let Some(day) = dates::day_window(instant.day(), self.now) else {
                return self.drop_date(field_id, comparison, value, "day outside calendar range");
            };
            return Ok(Predicate::Or(vec![
                Predicate::compare(field_id, ComparisonKind::Lt, Operand::Instant(day.start)),
                Predicate::compare(field_id, ComparisonKind::Gt, Operand::Instant(day.end)),
            ]));
        }

        if comparison.is_relative_date() {
            if comparison == ComparisonKind::DateEqDay && parse_instant(value).is_none() {
                if self.options.strict_dates {
                    return Err(date_failure(field_id, value));
                }
                warn!(field = field_id, %comparison, %value, "unparseable date, using day 1");
            }
            let Some(window) = dates::resolve(comparison, value, self.now) else {
                return self.drop_date(field_id, comparison, value, "window outside calendar range");
            };
            return Ok(Predicate::field(
                field_id,
                Condition::Range {
                    start: window.start,
                    end: window.end,
                    end_exclusive: window.end_exclusive,
                },
            ));
        }

        match parse_instant(value) {
            Some(instant) => Ok(Predicate::compare(
                field_id,
                comparison,
                Operand::Instant(instant),
            )),
            None => self.drop_date(field_id, comparison, value, "unparseable date"),
        }
    }

    /// Drops a date constraint that cannot be built, or fails in strict mode.
    fn drop_date(
        &self,
        field_id: &str,
        comparison: ComparisonKind,
        value: &Value,
        reason: &str,
    ) -> Result<Predicate> {
        if self.options.strict_dates {
            return Err(date_failure(field_id, value));
        }
        warn!(field = field_id, %comparison, %value, reason, "dropping date constraint");
        Ok(Predicate::Unconstrained)
    }
}

/// Heuristics for ids with no registry entry.
fn unregistered(field_id: &str, comparison: ComparisonKind, value: &Value) -> Result<Predicate> {
    match comparison {
        ComparisonKind::Contain => Ok(Predicate::regex(field_id, value.to_wire_string())),
        ComparisonKind::EqRefId => {
            let oid = ObjectId::parse(&value.to_wire_string())?;
            Ok(Predicate::compare(
                field_id,
                ComparisonKind::Eq,
                Operand::ObjectId(oid),
            ))
        }
        _ => Ok(Predicate::compare(field_id, comparison, Operand::from(value))),
    }
}

fn text(field_id: &str, comparison: ComparisonKind, value: &Value) -> Predicate {
    match comparison {
        ComparisonKind::Contain => Predicate::regex(field_id, value.to_wire_string()),
        // Whole string, anchored, with no position starting the substring.
        ComparisonKind::Ncontain => Predicate::regex(field_id, format!("^((?!{value}).)*$")),
        _ => Predicate::compare(field_id, comparison, Operand::from(value)),
    }
}

fn boolean(field_id: &str, comparison: ComparisonKind, value: &Value) -> Predicate {
    let operand = match value.coerce_bool() {
        Some(b) => Operand::Bool(b),
        None => {
            warn!(field = field_id, %comparison, %value, "unrecognised boolean, passing value through");
            Operand::from(value)
        }
    };
    Predicate::compare(field_id, comparison, operand)
}

fn fallback(field_id: &str, kind: FieldKind, comparison: ComparisonKind, value: &Value) -> Predicate {
    if comparison == ComparisonKind::Ne {
        return Predicate::compare(field_id, ComparisonKind::Ne, Operand::from(value));
    }
    warn!(
        field = field_id,
        %kind,
        %comparison,
        %value,
        "no comparison rule for field kind, falling back to regex match"
    );
    Predicate::regex(field_id, value.to_wire_string())
}

fn date_failure(field_id: &str, value: &Value) -> Error {
    Error::DateParseFailure {
        field: field_id.to_string(),
        value: value.to_wire_string(),
    }
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
