// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser and serializer for the wire filter format.
//!
//! ```text
//! {"operator": "and", "filters": [<filter>, ...]}
//! {"comparison": "contain", "id": "title", "value": "Foo"}
//! ```
//!
//! Leaf values are always coerced to strings while parsing; typed coercion
//! happens later, when the target field's kind is known.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{json, Map, Value as Json};

use crate::error::{Error, Result};
use crate::options::CompileOptions;
use crate::value::Value;

use super::expr::{ComparisonKind, FilterNode, Operator};

/// Parse a filter expression from its untyped wire representation.
///
/// # Errors
///
/// Returns [`Error::MalformedFilter`] naming the offending key when a
/// required key is missing or has the wrong type, [`Error::InvalidOperator`]
/// for operators other than `and`/`or`, and [`Error::UnknownComparison`] for
/// unrecognised comparison names.
pub fn parse(raw: &Json) -> Result<FilterNode> {
    parse_with(raw, &CompileOptions::default())
}

/// Parse a filter expression, enforcing the size limits in `options`.
pub fn parse_with(raw: &Json, options: &CompileOptions) -> Result<FilterNode> {
    let mut parser = Parser {
        options,
        leaves: 0,
    };
    parser.node(raw, 0)
}

/// Parse a filter expression from JSON text.
pub fn parse_str(input: &str) -> Result<FilterNode> {
    let raw: Json = serde_json::from_str(input)?;
    parse(&raw)
}

/// Serialize a filter tree back into the wire representation.
///
/// Leaf values are written as strings, matching what [`parse`] produces.
pub fn to_wire(node: &FilterNode) -> Json {
    match node {
        FilterNode::Combinator { operator, children } => json!({
            "operator": operator.as_str(),
            "filters": children.iter().map(to_wire).collect::<Vec<_>>(),
        }),
        FilterNode::Leaf {
            field_id,
            comparison,
            value,
        } => json!({
            "comparison": comparison.as_str(),
            "id": field_id,
            "value": value.to_wire_string(),
        }),
    }
}

struct Parser<'a> {
    options: &'a CompileOptions,
    leaves: usize,
}

impl Parser<'_> {
    fn node(&mut self, raw: &Json, depth: usize) -> Result<FilterNode> {
        let map = raw.as_object().ok_or_else(|| match depth {
            0 => Error::malformed("filter", "must be an object"),
            _ => Error::malformed("filters", "must contain only objects"),
        })?;

        match map.get("filters").and_then(Json::as_array) {
            Some(children) if !children.is_empty() => self.combinator(map, children, depth),
            _ => self.leaf(map),
        }
    }

    fn combinator(
        &mut self,
        map: &Map<String, Json>,
        children: &[Json],
        depth: usize,
    ) -> Result<FilterNode> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return Err(Error::LimitExceeded {
                what: "nesting depth",
                limit: self.options.max_depth,
            });
        }

        let operator: Operator = required_str(map, "operator")?.parse()?;
        let children = children
            .iter()
            .map(|child| self.node(child, depth))
            .collect::<Result<Vec<_>>>()?;

        Ok(FilterNode::Combinator { operator, children })
    }

    fn leaf(&mut self, map: &Map<String, Json>) -> Result<FilterNode> {
        self.leaves += 1;
        if self.leaves > self.options.max_leaves {
            return Err(Error::LimitExceeded {
                what: "leaf comparison",
                limit: self.options.max_leaves,
            });
        }

        let comparison: ComparisonKind = required_str(map, "comparison")?.parse()?;
        let field_id = required_str(map, "id")?.to_string();
        let value = match map.get("value") {
            None => return Err(Error::malformed("value", "is missing")),
            Some(Json::String(s)) => s.clone(),
            Some(Json::Number(n)) => n.to_string(),
            Some(Json::Bool(b)) => b.to_string(),
            Some(_) => {
                return Err(Error::malformed(
                    "value",
                    "must be a string, number or boolean",
                ))
            }
        };

        Ok(FilterNode::Leaf {
            field_id,
            comparison,
            value: Value::Str(value),
        })
    }
}

fn required_str<'m>(map: &'m Map<String, Json>, key: &str) -> Result<&'m str> {
    match map.get(key) {
        None => Err(Error::malformed(key, "is missing")),
        Some(Json::String(s)) => Ok(s),
        Some(_) => Err(Error::malformed(key, "must be a string")),
    }
}

impl Serialize for FilterNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_wire(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
