// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

const HEX: &str = "5f1d7f9a2c3b4a0012345678";

#[test]
fn parse_and_display() {
    let oid = ObjectId::parse(HEX).unwrap();
    assert_eq!(oid.to_string(), HEX);
    assert_eq!(oid.bytes()[0], 0x5f);
}

#[test]
fn parse_uppercase_displays_lowercase() {
    let oid = ObjectId::parse(&HEX.to_uppercase()).unwrap();
    assert_eq!(oid.to_string(), HEX);
}

#[parameterized(
    empty = { "" },
    too_short = { "5f1d7f9a" },
    too_long = { "5f1d7f9a2c3b4a001234567800" },
    not_hex = { "zz1d7f9a2c3b4a0012345678" },
)]
fn parse_invalid(input: &str) {
    let err = ObjectId::parse(input).unwrap_err();
    assert!(matches!(err, Error::InvalidReferenceId(_)));
}

#[test]
fn extended_json_form() {
    let oid = ObjectId::parse(HEX).unwrap();
    assert_eq!(oid.to_extended_json(), json!({"$oid": HEX}));
}

#[test]
fn serde_as_hex_string() {
    let oid = ObjectId::from_bytes([1; 12]);
    let text = serde_json::to_string(&oid).unwrap();
    assert_eq!(text, "\"010101010101010101010101\"");
    assert_eq!(serde_json::from_str::<ObjectId>(&text).unwrap(), oid);
    assert!(serde_json::from_str::<ObjectId>("\"nope\"").is_err());
}

#[test]
fn db_ref_from_store_map() {
    let raw = json!({"$ref": "users", "$id": HEX, "$db": "main"});
    let dbref = DbRef::from_store_map(raw.as_object().unwrap()).unwrap();
    assert_eq!(dbref.collection, "users");
    assert_eq!(dbref.id, ObjectId::parse(HEX).unwrap());
    assert_eq!(dbref.database, "main");
}

#[test]
fn db_ref_invalid_id() {
    let raw = json!({"$ref": "users", "$id": "bad", "$db": "main"});
    let err = DbRef::from_store_map(raw.as_object().unwrap()).unwrap_err();
    assert!(matches!(err, Error::InvalidReferenceId(_)));
}

#[test]
fn db_ref_missing_key() {
    let raw = json!({"$ref": "users", "$id": HEX});
    let err = DbRef::from_store_map(raw.as_object().unwrap()).unwrap_err();
    assert!(err.to_string().contains("$db"));
}

#[test]
fn db_ref_serde_uses_underscore_keys() {
    let dbref = DbRef {
        collection: "users".into(),
        id: ObjectId::parse(HEX).unwrap(),
        database: "main".into(),
    };
    assert_eq!(
        serde_json::to_value(&dbref).unwrap(),
        json!({"_ref": "users", "_id": HEX, "_db": "main"})
    );
}
