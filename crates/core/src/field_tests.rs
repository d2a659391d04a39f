// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::filter::ComparisonKind;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    any = { "any", FieldKind::Any },
    boolean = { "boolean", FieldKind::Boolean },
    text = { "text", FieldKind::Text },
    number = { "number", FieldKind::Number },
    date = { "date", FieldKind::Date },
    reference = { "reference", FieldKind::Reference },
    reverse_reference = { "reverse-reference", FieldKind::ReverseReference },
    relation_reference = { "relation-reference", FieldKind::RelationReference },
    collection_lookup = { "collection-lookup", FieldKind::CollectionLookup },
    data_transfer = { "data-transfer", FieldKind::DataTransfer },
)]
fn field_kind_names(name: &str, kind: FieldKind) {
    assert_eq!(name.parse::<FieldKind>().unwrap(), kind);
    assert_eq!(kind.as_str(), name);
    assert!(FieldKind::valid_names().contains(name));
}

#[test]
fn field_kind_unknown() {
    let err = "timestamp".parse::<FieldKind>().unwrap_err();
    assert!(matches!(err, Error::UnknownFieldKind(_)));
}

#[parameterized(
    any = { FieldKind::Any },
    text = { FieldKind::Text },
    date = { FieldKind::Date },
    reference = { FieldKind::Reference },
    relation_reference = { FieldKind::RelationReference },
    collection_lookup = { FieldKind::CollectionLookup },
    data_transfer = { FieldKind::DataTransfer },
)]
fn new_keeps_kind_and_id(kind: FieldKind) {
    let field = FieldDefinition::new(kind, "f");
    assert_eq!(field.kind(), kind);
    assert_eq!(field.id(), "f");
}

#[test]
fn parse_plain_field() {
    let field = FieldDefinition::from_json(&json!({"type": "text", "id": "title"})).unwrap();
    assert_eq!(field, FieldDefinition::text("title"));
    assert_eq!(field.kind(), FieldKind::Text);
    assert!(field.filter().is_none());
    assert!(field.fields().is_empty());
}

#[test]
fn parse_reference_with_nested_filter_and_fields() {
    let raw = json!({
        "type": "reference",
        "id": "owner",
        "otherCollection": "users",
        "isSingle": true,
        "filter": {"comparison": "eq", "id": "active", "value": "true"},
        "fields": [
            {"type": "text", "id": "name"},
            {"type": "date", "id": "joinedAt"},
        ],
    });
    let field = FieldDefinition::from_json(&raw).unwrap();

    let FieldDefinition::Reference(reference) = &field else {
        panic!("expected reference, got {field:?}");
    };
    assert_eq!(reference.other_collection, "users");
    assert!(reference.is_single);
    assert_eq!(
        field.filter(),
        Some(&FilterNode::leaf("active", ComparisonKind::Eq, "true"))
    );
    assert_eq!(field.fields().len(), 2);
    assert_eq!(field.fields()[1].kind(), FieldKind::Date);
}

#[test]
fn parse_reverse_reference() {
    let raw = json!({
        "type": "reverse-reference",
        "id": "posts",
        "otherCollection": "posts",
        "nameInOtherCollection": "author",
    });
    let field = FieldDefinition::from_json(&raw).unwrap();
    assert_eq!(
        field,
        FieldDefinition::from(ReverseReferenceField::new("posts", "posts", "author", false))
    );
}

#[test]
fn parse_relation_reference() {
    let raw = json!({
        "type": "relation-reference",
        "id": "tags",
        "relationCollection": "post-tags",
        "nameInRelationCollection": "post",
        "otherCollection": "tags",
        "nameOfOtherCollectionInRelationCollection": "tag",
        "relationFilter": {"comparison": "nempty", "id": "tag", "value": ""},
        "otherCollectionFilter": {"comparison": "contain", "id": "label", "value": "rust"},
        "otherCollectionFields": [{"type": "text", "id": "label"}],
    });
    let field = FieldDefinition::from_json(&raw).unwrap();

    let FieldDefinition::RelationReference(relation) = &field else {
        panic!("expected relation reference, got {field:?}");
    };
    assert_eq!(relation.relation_collection, "post-tags");
    assert_eq!(relation.name_of_other_collection_in_relation_collection, "tag");
    assert_eq!(
        relation.other_collection_filter,
        Some(FilterNode::leaf("label", ComparisonKind::Contain, "rust"))
    );
    assert_eq!(relation.other_collection_fields.len(), 1);
    // The generic accessor exposes the relation-row filter.
    assert_eq!(
        field.filter(),
        Some(&FilterNode::leaf("tag", ComparisonKind::Nempty, ""))
    );
}

#[test]
fn parse_collection_lookup_without_id() {
    let raw = json!({
        "type": "collection-lookup",
        "from": "invoices",
        "localField": "_id",
        "foreignField": "customer",
        "isSingle": false,
    });
    let field = FieldDefinition::from_json(&raw).unwrap();
    assert_eq!(
        field,
        FieldDefinition::from(CollectionLookupField::new("invoices", "customer", "_id", false))
    );
    assert_eq!(field.id(), "");
}

#[test]
fn parse_unknown_kind() {
    let err = FieldDefinition::from_json(&json!({"type": "blob", "id": "x"})).unwrap_err();
    assert!(matches!(err, Error::UnknownFieldKind(ref k) if k == "blob"));
}

#[test]
fn parse_missing_kind() {
    let err = FieldDefinition::from_json(&json!({"id": "x"})).unwrap_err();
    assert!(matches!(err, Error::MalformedFilter { ref key, .. } if key == "type"));
}

#[test]
fn parse_missing_id() {
    let err = FieldDefinition::from_json(&json!({"type": "text"})).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn parse_invalid_nested_filter() {
    let raw = json!({
        "type": "reference",
        "id": "owner",
        "filter": {"operator": "xor", "filters": [{"comparison": "eq", "id": "a", "value": "1"}]},
    });
    let err = FieldDefinition::from_json(&raw).unwrap_err();
    assert!(err.to_string().contains("xor"));
}

#[test]
fn json_round_trip() {
    let field: FieldDefinition = ReferenceField::new("owner", "users", true)
        .with_filter(FilterNode::leaf("active", ComparisonKind::Eq, "true"))
        .with_fields(vec![FieldDefinition::text("name")])
        .into();

    let raw = field.to_json().unwrap();
    assert_eq!(raw["type"], "reference");
    assert_eq!(raw["otherCollection"], "users");
    assert_eq!(raw["fields"][0]["type"], "text");

    assert_eq!(FieldDefinition::from_json(&raw).unwrap(), field);
}

#[test]
fn serde_deserialize_list() {
    let fields: Vec<FieldDefinition> = serde_json::from_str(
        r#"[{"type": "number", "id": "count"}, {"type": "boolean", "id": "done"}]"#,
    )
    .unwrap();
    assert_eq!(
        fields,
        vec![FieldDefinition::number("count"), FieldDefinition::boolean("done")]
    );
}

#[test]
fn relation_reference_builders_set_both_field_lists() {
    let field: FieldDefinition =
        RelationReferenceField::new("members", "memberships", "team", "users", "user")
            .with_fields(vec![FieldDefinition::text("role")])
            .with_other_collection_fields(vec![FieldDefinition::text("name")])
            .into();

    assert_eq!(field.fields(), &[FieldDefinition::text("role")]);
    let raw = field.to_json().unwrap();
    assert_eq!(raw["fields"][0]["id"], "role");
    assert_eq!(raw["otherCollectionFields"][0]["id"], "name");
    assert_eq!(FieldDefinition::from_json(&raw).unwrap(), field);
}
