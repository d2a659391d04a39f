// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter trees and their wire format.
//!
//! A filter is a recursive expression of boolean combinators over field
//! comparisons:
//!
//! ```text
//! {"operator": "and", "filters": [
//!     {"comparison": "contain", "id": "title", "value": "Foo"},
//!     {"comparison": "date-this-week", "id": "createdAt", "value": ""}
//! ]}
//! ```
//!
//! # Comparisons
//!
//! - Generic: `eq`, `ne`, `lt`, `lte`, `gt`, `gte`, `in`, `similar`, `different`
//! - Text: `contain`, `ncontain`
//! - Presence: `empty`, `nempty`
//! - References: `eq-ref-id` (legacy spelling `eq-mongo-oid`)
//! - Calendar: `date-eq-day`, `date-ne-day`, `date-{this,next,last}-{week,month,year}`,
//!   `date-next-n-days`, `date-past-n-days`

mod expr;
mod parser;

pub use expr::{ComparisonKind, FilterNode, Operator};
pub use parser::{parse, parse_str, parse_with, to_wire};
