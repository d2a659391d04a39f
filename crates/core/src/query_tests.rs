// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::field::{Field, FieldKind};
use serde_json::json;
use yare::parameterized;

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-03-13T12:00:00Z").unwrap()
}

#[test]
fn deserializes_full_request() {
    let query: QueryConfig = serde_json::from_value(json!({
        "filter": {"comparison": "contain", "id": "title", "value": "Foo"},
        "limit": 20,
        "skip": 40,
        "sort": [{"id": "createdAt", "order": -1}],
        "fields": [
            {"type": "text", "id": "title"},
            {"type": "date", "id": "createdAt"}
        ]
    }))
    .unwrap();

    assert_eq!(query.limit, 20);
    assert_eq!(query.skip, 40);
    assert!(query.sort[0].is_descending());
    assert_eq!(query.registry().len(), 2);
    assert_eq!(
        query.registry().lookup("createdAt").map(|f| f.kind()),
        Some(FieldKind::Date)
    );
}

#[test]
fn missing_keys_default() {
    let query: QueryConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(query, QueryConfig::default());
    assert!(query.filter.is_none());
    assert!(query.registry().is_empty());
}

#[parameterized(
    float_truncates = { json!(7.9), 7 },
    negative_clamps = { json!(-5), 0 },
    numeric_string = { json!("12"), 12 },
    garbage = { json!("many"), 0 },
    null = { json!(null), 0 },
)]
fn limit_is_coerced(raw: serde_json::Value, expected: i64) {
    let query: QueryConfig = serde_json::from_value(json!({"limit": raw})).unwrap();
    assert_eq!(query.limit, expected);
}

#[test]
fn compile_without_filter_is_unconstrained() {
    let query = QueryConfig::default();
    let p = query.compile_match(now(), &CompileOptions::default()).unwrap();
    assert_eq!(p, Predicate::Unconstrained);
}

#[test]
fn compile_uses_query_fields() {
    let query: QueryConfig = serde_json::from_value(json!({
        "filter": {"operator": "and", "filters": [
            {"comparison": "gte", "id": "count", "value": "3"},
            {"comparison": "date-this-year", "id": "createdAt", "value": ""}
        ]},
        "fields": [
            {"type": "number", "id": "count"},
            {"type": "date", "id": "createdAt"}
        ]
    }))
    .unwrap();

    let p = query.compile_match(now(), &CompileOptions::default()).unwrap();
    assert_eq!(
        p.to_document(),
        json!({"$and": [
            {"count": {"$gte": 3}},
            {"createdAt": {
                "$gte": {"$date": "2024-01-01T00:00:00.000000000Z"},
                "$lte": {"$date": "2024-12-31T23:59:59.999999999Z"}
            }}
        ]})
    );
}

#[test]
fn compile_honours_strict_options() {
    let query: QueryConfig = serde_json::from_value(json!({
        "filter": {"comparison": "lt", "id": "createdAt", "value": "yesterday"},
        "fields": [{"type": "date", "id": "createdAt"}]
    }))
    .unwrap();

    assert!(query.compile_match(now(), &CompileOptions::default()).is_ok());
    let err = query.compile_match(now(), &CompileOptions::strict()).unwrap_err();
    assert!(matches!(err, crate::Error::DateParseFailure { .. }));
}

#[test]
fn invalid_filter_fails_deserialization() {
    let result: std::result::Result<QueryConfig, _> =
        serde_json::from_value(json!({"filter": {"operator": "xor", "filters": [
            {"comparison": "eq", "id": "a", "value": "b"}
        ]}}));
    assert!(result.unwrap_err().to_string().contains("invalid operator"));
}
