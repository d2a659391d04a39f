// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! docfilter-core: compiles user filter expressions into document-store
//! query predicates.
//!
//! A request carries a filter tree in a small JSON wire format together with
//! the schema of the collection being queried. This crate parses the tree,
//! resolves each leaf against the schema, and emits a predicate in the
//! store's native query vocabulary.
//!
//! ```text
//! wire JSON --parse--> FilterNode --compile_match--> Predicate --to_document--> store JSON
//!                                  (FieldRegistry, now)
//! ```

pub mod compile;
pub mod dates;
pub mod error;
pub mod field;
pub mod filter;
pub mod oid;
pub mod options;
pub mod predicate;
pub mod query;
pub mod registry;
pub mod value;

pub use compile::{compile_element, compile_match, Compiler};
pub use dates::DateWindow;
pub use error::{Error, Result};
pub use field::{Field, FieldDefinition, FieldKind};
pub use filter::{parse, ComparisonKind, FilterNode, Operator};
pub use oid::{DbRef, ObjectId};
pub use options::CompileOptions;
pub use predicate::{Condition, Operand, Predicate};
pub use query::{QueryConfig, SortConfig};
pub use registry::{lookup_field, FieldRegistry};
pub use value::{coerce_nonneg_int, Value};
