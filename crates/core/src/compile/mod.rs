// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of filter trees into store predicates.
//!
//! Two entry points exist:
//!
//! - [`compile_match`] builds a top-level match predicate. Leaves are
//!   dispatched on the kind of the field they name, looked up in a
//!   [`FieldRegistry`]. Fields missing from the registry (typically dotted
//!   paths into related records) get heuristic handling.
//! - [`compile_element`] builds a predicate over one element of an
//!   already-joined related array, bound to a named variable. It never
//!   consults the registry.
//!
//! Compilation is a pure function of the tree, the registry and an explicit
//! reference instant. Nothing reads the system clock.

mod element;
mod matching;

use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::filter::FilterNode;
use crate::options::CompileOptions;
use crate::predicate::Predicate;
use crate::registry::FieldRegistry;

/// Compiles filters against one registry at one reference instant.
#[derive(Debug, Clone)]
pub struct Compiler<'a> {
    registry: &'a FieldRegistry,
    now: DateTime<FixedOffset>,
    options: CompileOptions,
}

impl<'a> Compiler<'a> {
    pub fn new(registry: &'a FieldRegistry, now: DateTime<FixedOffset>) -> Self {
        Compiler {
            registry,
            now,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles a top-level match predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidReferenceId`] when an `eq-ref-id`
    /// value is not a valid identifier, and [`crate::Error::DateParseFailure`]
    /// for unparseable dates when strict dates are enabled. No partial
    /// predicate is returned on error.
    pub fn compile_match(&self, node: &FilterNode) -> Result<Predicate> {
        self.match_node(node)
    }

    /// Compiles a predicate over the array element bound to `scope`.
    pub fn compile_element(&self, node: &FilterNode, scope: &str) -> Predicate {
        element::compile(node, scope)
    }
}

/// Compiles a match predicate with default options.
pub fn compile_match(
    node: &FilterNode,
    registry: &FieldRegistry,
    now: DateTime<FixedOffset>,
) -> Result<Predicate> {
    Compiler::new(registry, now).compile_match(node)
}

/// Compiles an element-scoped predicate.
pub fn compile_element(node: &FilterNode, scope: &str) -> Predicate {
    element::compile(node, scope)
}
