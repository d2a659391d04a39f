// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for filter parsing and predicate compilation.

use thiserror::Error;

/// All possible errors that can occur while parsing or compiling a filter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed filter: key '{key}' {reason}")]
    MalformedFilter { key: String, reason: String },

    #[error("invalid operator: '{0}'\n  hint: valid operators are: and, or")]
    InvalidOperator(String),

    #[error("unknown comparison: '{0}'\n  hint: valid comparisons are: {valid}", valid = crate::filter::ComparisonKind::valid_names())]
    UnknownComparison(String),

    #[error("invalid reference id: '{0}'\n  hint: expected 24 hexadecimal characters")]
    InvalidReferenceId(String),

    #[error("cannot parse date '{value}' for field '{field}'\n  hint: expected an RFC3339 timestamp like 2024-03-13T12:00:00Z")]
    DateParseFailure { field: String, value: String },

    #[error("unknown field kind: '{0}'\n  hint: valid kinds are: {valid}", valid = crate::field::FieldKind::valid_names())]
    UnknownFieldKind(String),

    #[error("filter exceeds the {what} limit of {limit}")]
    LimitExceeded { what: &'static str, limit: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::MalformedFilter`] naming the offending key.
    pub(crate) fn malformed(key: &str, reason: impl Into<String>) -> Self {
        Error::MalformedFilter {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by the caller's input rather than the
    /// environment, i.e. errors a request layer should report as a client error.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Io(_))
    }
}

/// A specialized Result type for docfilter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
