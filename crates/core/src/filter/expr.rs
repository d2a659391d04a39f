// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter tree types.
//!
//! A filter tree is either a boolean combinator over child filters or a
//! leaf comparison of one field against a value.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::value::Value;

/// Boolean combinator joining child filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

/// Kind of comparison performed by a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonKind {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Contain,
    Ncontain,
    Similar,
    Different,
    Empty,
    Nempty,
    /// Equality against an opaque reference identifier.
    EqRefId,
    DateEqDay,
    DateNeDay,
    DateNextYear,
    DateNextMonth,
    DateNextWeek,
    DateThisYear,
    DateThisMonth,
    DateThisWeek,
    DateLastYear,
    DateLastMonth,
    DateLastWeek,
    DateNextNDays,
    DatePastNDays,
}

impl ComparisonKind {
    /// Every comparison kind, in wire order.
    pub const ALL: [ComparisonKind; 27] = [
        ComparisonKind::Eq,
        ComparisonKind::Ne,
        ComparisonKind::Lt,
        ComparisonKind::Lte,
        ComparisonKind::Gt,
        ComparisonKind::Gte,
        ComparisonKind::In,
        ComparisonKind::Contain,
        ComparisonKind::Ncontain,
        ComparisonKind::Similar,
        ComparisonKind::Different,
        ComparisonKind::Empty,
        ComparisonKind::Nempty,
        ComparisonKind::EqRefId,
        ComparisonKind::DateEqDay,
        ComparisonKind::DateNeDay,
        ComparisonKind::DateNextYear,
        ComparisonKind::DateNextMonth,
        ComparisonKind::DateNextWeek,
        ComparisonKind::DateThisYear,
        ComparisonKind::DateThisMonth,
        ComparisonKind::DateThisWeek,
        ComparisonKind::DateLastYear,
        ComparisonKind::DateLastMonth,
        ComparisonKind::DateLastWeek,
        ComparisonKind::DateNextNDays,
        ComparisonKind::DatePastNDays,
    ];

    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonKind::Eq => "eq",
            ComparisonKind::Ne => "ne",
            ComparisonKind::Lt => "lt",
            ComparisonKind::Lte => "lte",
            ComparisonKind::Gt => "gt",
            ComparisonKind::Gte => "gte",
            ComparisonKind::In => "in",
            ComparisonKind::Contain => "contain",
            ComparisonKind::Ncontain => "ncontain",
            ComparisonKind::Similar => "similar",
            ComparisonKind::Different => "different",
            ComparisonKind::Empty => "empty",
            ComparisonKind::Nempty => "nempty",
            ComparisonKind::EqRefId => "eq-ref-id",
            ComparisonKind::DateEqDay => "date-eq-day",
            ComparisonKind::DateNeDay => "date-ne-day",
            ComparisonKind::DateNextYear => "date-next-year",
            ComparisonKind::DateNextMonth => "date-next-month",
            ComparisonKind::DateNextWeek => "date-next-week",
            ComparisonKind::DateThisYear => "date-this-year",
            ComparisonKind::DateThisMonth => "date-this-month",
            ComparisonKind::DateThisWeek => "date-this-week",
            ComparisonKind::DateLastYear => "date-last-year",
            ComparisonKind::DateLastMonth => "date-last-month",
            ComparisonKind::DateLastWeek => "date-last-week",
            ComparisonKind::DateNextNDays => "date-next-n-days",
            ComparisonKind::DatePastNDays => "date-past-n-days",
        }
    }

    /// Returns valid comparison names for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(ComparisonKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// True for the kinds resolved to a calendar window relative to "now".
    ///
    /// `date-ne-day` is excluded: it compiles to the complement of a window.
    pub fn is_relative_date(&self) -> bool {
        matches!(
            self,
            ComparisonKind::DateEqDay
                | ComparisonKind::DateNextYear
                | ComparisonKind::DateNextMonth
                | ComparisonKind::DateNextWeek
                | ComparisonKind::DateThisYear
                | ComparisonKind::DateThisMonth
                | ComparisonKind::DateThisWeek
                | ComparisonKind::DateLastYear
                | ComparisonKind::DateLastMonth
                | ComparisonKind::DateLastWeek
                | ComparisonKind::DateNextNDays
                | ComparisonKind::DatePastNDays
        )
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComparisonKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Older clients still send the store-specific spelling.
        if s == "eq-mongo-oid" {
            return Ok(ComparisonKind::EqRefId);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownComparison(s.to_string()))
    }
}

/// A parsed filter expression.
///
/// Built once per request, either from the wire format or programmatically,
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    /// Boolean combination of child filters (non-empty when parsed).
    Combinator {
        operator: Operator,
        children: Vec<FilterNode>,
    },
    /// Comparison of one field against a value.
    Leaf {
        field_id: String,
        comparison: ComparisonKind,
        value: Value,
    },
}

impl FilterNode {
    /// Creates an `and` combinator.
    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::Combinator {
            operator: Operator::And,
            children,
        }
    }

    /// Creates an `or` combinator.
    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Combinator {
            operator: Operator::Or,
            children,
        }
    }

    /// Creates a leaf comparison.
    pub fn leaf(
        field_id: impl Into<String>,
        comparison: ComparisonKind,
        value: impl Into<Value>,
    ) -> Self {
        FilterNode::Leaf {
            field_id: field_id.into(),
            comparison,
            value: value.into(),
        }
    }

    /// Number of leaf comparisons in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            FilterNode::Combinator { children, .. } => {
                children.iter().map(FilterNode::leaf_count).sum()
            }
            FilterNode::Leaf { .. } => 1,
        }
    }

    /// Combinator nesting depth; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            FilterNode::Combinator { children, .. } => {
                1 + children.iter().map(FilterNode::depth).max().unwrap_or(0)
            }
            FilterNode::Leaf { .. } => 0,
        }
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
