// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query configuration carried by a request.
//!
//! A query bundles the schema (`fields`), an optional filter, and sort and
//! pagination settings. Sorting and pagination are carried for the storage
//! layer; only the filter is compiled here.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::compile::Compiler;
use crate::error::Result;
use crate::filter::FilterNode;
use crate::options::CompileOptions;
use crate::predicate::Predicate;
use crate::registry::FieldRegistry;
use crate::value::coerce_json_nonneg_int;

/// Sort key and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SortConfig {
    pub id: String,
    /// `1` ascending, `-1` descending.
    #[serde(default)]
    pub order: i64,
}

impl SortConfig {
    pub fn is_descending(&self) -> bool {
        self.order < 0
    }
}

/// The body of a query request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterNode>,
    #[serde(deserialize_with = "nonneg_int")]
    pub limit: i64,
    #[serde(deserialize_with = "nonneg_int")]
    pub skip: i64,
    pub sort: Vec<SortConfig>,
    pub fields: FieldRegistry,
}

impl QueryConfig {
    /// The field registry built from this query's `fields`.
    pub fn registry(&self) -> &FieldRegistry {
        &self.fields
    }

    /// Compiles the carried filter, or matches everything when there is none.
    pub fn compile_match(
        &self,
        now: DateTime<FixedOffset>,
        options: &CompileOptions,
    ) -> Result<Predicate> {
        match &self.filter {
            Some(filter) => Compiler::new(&self.fields, now)
                .with_options(options.clone())
                .compile_match(filter),
            None => Ok(Predicate::Unconstrained),
        }
    }
}

/// Pagination values go through the same lenient coercion as numeric fields.
fn nonneg_int<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_json_nonneg_int(&raw))
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
