// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Element-scoped compilation.

use crate::filter::FilterNode;
use crate::predicate::Predicate;

/// Every leaf becomes `{"$<comparison>": ["$$<scope>.<field>", value]}`,
/// whatever the field's kind.
pub(super) fn compile(node: &FilterNode, scope: &str) -> Predicate {
    match node {
        FilterNode::Combinator { operator, children } => Predicate::combine(
            *operator,
            children.iter().map(|child| compile(child, scope)).collect(),
        ),
        FilterNode::Leaf {
            field_id,
            comparison,
            value,
        } => Predicate::Scoped {
            comparison: *comparison,
            variable: scope.to_string(),
            field: field_id.clone(),
            value: value.clone(),
        },
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
