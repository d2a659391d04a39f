// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field definitions.
//!
//! A schema is an ordered list of field definitions. Each definition is one
//! of a closed set of kinds; the specialised kinds carry the attributes the
//! store-access layer needs to follow references and lookups.
//!
//! Wire shape:
//!
//! ```text
//! {"type": "text", "id": "title"}
//! {"type": "reference", "id": "owner", "otherCollection": "users", "isSingle": true}
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filter::FilterNode;

/// Kind of a field, deciding how comparisons against it are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Fetched as-is, without interpreting the inner data.
    Any,
    Boolean,
    Text,
    Number,
    Date,
    /// Points at records of another collection.
    Reference,
    /// Records of another collection pointing back at this one.
    ReverseReference,
    /// Many-to-many link through a relation collection.
    RelationReference,
    /// Joins another collection on a local/foreign field pair.
    CollectionLookup,
    DataTransfer,
}

impl FieldKind {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Any => "any",
            FieldKind::Boolean => "boolean",
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Reference => "reference",
            FieldKind::ReverseReference => "reverse-reference",
            FieldKind::RelationReference => "relation-reference",
            FieldKind::CollectionLookup => "collection-lookup",
            FieldKind::DataTransfer => "data-transfer",
        }
    }

    /// Returns valid kind names for error messages.
    pub fn valid_names() -> &'static str {
        "any, boolean, text, number, date, reference, reverse-reference, relation-reference, collection-lookup, data-transfer"
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "any" => Ok(FieldKind::Any),
            "boolean" => Ok(FieldKind::Boolean),
            "text" => Ok(FieldKind::Text),
            "number" => Ok(FieldKind::Number),
            "date" => Ok(FieldKind::Date),
            "reference" => Ok(FieldKind::Reference),
            "reverse-reference" => Ok(FieldKind::ReverseReference),
            "relation-reference" => Ok(FieldKind::RelationReference),
            "collection-lookup" => Ok(FieldKind::CollectionLookup),
            "data-transfer" => Ok(FieldKind::DataTransfer),
            _ => Err(Error::UnknownFieldKind(s.to_string())),
        }
    }
}

/// Accessors shared by every field kind.
pub trait Field {
    fn id(&self) -> &str;

    fn kind(&self) -> FieldKind;

    /// Filter applied to the records this field pulls in, if any.
    fn filter(&self) -> Option<&FilterNode> {
        None
    }

    /// Sub-fields projected from the records this field pulls in.
    fn fields(&self) -> &[FieldDefinition] {
        &[]
    }
}

/// A field with no attributes beyond its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainField {
    pub id: String,
}

/// A field pointing at records of another collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceField {
    pub id: String,
    #[serde(default)]
    pub other_collection: String,
    #[serde(default)]
    pub is_single: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
}

impl ReferenceField {
    pub fn new(id: impl Into<String>, other_collection: impl Into<String>, is_single: bool) -> Self {
        ReferenceField {
            id: id.into(),
            other_collection: other_collection.into(),
            is_single,
            filter: None,
            fields: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: FilterNode) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }
}

impl Field for ReferenceField {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Reference
    }

    fn filter(&self) -> Option<&FilterNode> {
        self.filter.as_ref()
    }

    fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// Records of another collection that reference this one through
/// `name_in_other_collection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseReferenceField {
    pub id: String,
    #[serde(default)]
    pub other_collection: String,
    #[serde(default)]
    pub name_in_other_collection: String,
    #[serde(default)]
    pub is_single: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
}

impl ReverseReferenceField {
    pub fn new(
        id: impl Into<String>,
        other_collection: impl Into<String>,
        name_in_other_collection: impl Into<String>,
        is_single: bool,
    ) -> Self {
        ReverseReferenceField {
            id: id.into(),
            other_collection: other_collection.into(),
            name_in_other_collection: name_in_other_collection.into(),
            is_single,
            filter: None,
            fields: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: FilterNode) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }
}

impl Field for ReverseReferenceField {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::ReverseReference
    }

    fn filter(&self) -> Option<&FilterNode> {
        self.filter.as_ref()
    }

    fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// A many-to-many link: rows of `relation_collection` pair this record
/// (under `name_in_relation_collection`) with records of `other_collection`
/// (under `name_of_other_collection_in_relation_collection`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationReferenceField {
    pub id: String,
    #[serde(default)]
    pub relation_collection: String,
    #[serde(default)]
    pub name_in_relation_collection: String,
    #[serde(default)]
    pub other_collection: String,
    #[serde(default)]
    pub name_of_other_collection_in_relation_collection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_filter: Option<FilterNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_collection_filter: Option<FilterNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_collection_fields: Vec<FieldDefinition>,
}

impl RelationReferenceField {
    pub fn new(
        id: impl Into<String>,
        relation_collection: impl Into<String>,
        name_in_relation_collection: impl Into<String>,
        other_collection: impl Into<String>,
        name_of_other_collection_in_relation_collection: impl Into<String>,
    ) -> Self {
        RelationReferenceField {
            id: id.into(),
            relation_collection: relation_collection.into(),
            name_in_relation_collection: name_in_relation_collection.into(),
            other_collection: other_collection.into(),
            name_of_other_collection_in_relation_collection:
                name_of_other_collection_in_relation_collection.into(),
            relation_filter: None,
            other_collection_filter: None,
            fields: Vec::new(),
            other_collection_fields: Vec::new(),
        }
    }

    pub fn with_relation_filter(mut self, filter: FilterNode) -> Self {
        self.relation_filter = Some(filter);
        self
    }

    pub fn with_other_collection_filter(mut self, filter: FilterNode) -> Self {
        self.other_collection_filter = Some(filter);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_other_collection_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.other_collection_fields = fields;
        self
    }
}

impl Field for RelationReferenceField {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::RelationReference
    }

    /// The filter over the relation rows themselves.
    fn filter(&self) -> Option<&FilterNode> {
        self.relation_filter.as_ref()
    }

    fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// Joins `from` where `foreign_field` equals this record's `local_field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLookupField {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub local_field: String,
    #[serde(default)]
    pub foreign_field: String,
    #[serde(default)]
    pub is_single: bool,
}

impl CollectionLookupField {
    pub fn new(
        from: impl Into<String>,
        foreign_field: impl Into<String>,
        local_field: impl Into<String>,
        is_single: bool,
    ) -> Self {
        CollectionLookupField {
            id: String::new(),
            from: from.into(),
            local_field: local_field.into(),
            foreign_field: foreign_field.into(),
            is_single,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Field for CollectionLookupField {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::CollectionLookup
    }
}

/// One entry of a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldDefinition {
    Any(PlainField),
    Boolean(PlainField),
    Text(PlainField),
    Number(PlainField),
    Date(PlainField),
    Reference(ReferenceField),
    ReverseReference(ReverseReferenceField),
    RelationReference(RelationReferenceField),
    CollectionLookup(CollectionLookupField),
    DataTransfer(PlainField),
}

impl FieldDefinition {
    /// Creates a plain field of one of the attribute-less kinds.
    ///
    /// Kinds with attributes get an empty default of their view type.
    pub fn new(kind: FieldKind, id: impl Into<String>) -> Self {
        let id = id.into();
        match kind {
            FieldKind::Any => FieldDefinition::Any(PlainField { id }),
            FieldKind::Boolean => FieldDefinition::Boolean(PlainField { id }),
            FieldKind::Text => FieldDefinition::Text(PlainField { id }),
            FieldKind::Number => FieldDefinition::Number(PlainField { id }),
            FieldKind::Date => FieldDefinition::Date(PlainField { id }),
            FieldKind::DataTransfer => FieldDefinition::DataTransfer(PlainField { id }),
            FieldKind::Reference => ReferenceField::new(id, "", false).into(),
            FieldKind::ReverseReference => ReverseReferenceField::new(id, "", "", false).into(),
            FieldKind::RelationReference => {
                RelationReferenceField::new(id, "", "", "", "").into()
            }
            FieldKind::CollectionLookup => {
                CollectionLookupField::new("", "", "", false).with_id(id).into()
            }
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(FieldKind::Text, id)
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(FieldKind::Number, id)
    }

    pub fn boolean(id: impl Into<String>) -> Self {
        Self::new(FieldKind::Boolean, id)
    }

    pub fn date(id: impl Into<String>) -> Self {
        Self::new(FieldKind::Date, id)
    }

    pub fn any(id: impl Into<String>) -> Self {
        Self::new(FieldKind::Any, id)
    }

    /// Parses a definition from its untyped wire representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFieldKind`] for an unrecognised `type`, and
    /// [`Error::Json`] when the attributes do not fit the kind.
    pub fn from_json(raw: &Json) -> Result<Self> {
        let kind_name = raw
            .get("type")
            .and_then(Json::as_str)
            .ok_or_else(|| Error::malformed("type", "must be a field kind string"))?;
        let kind: FieldKind = kind_name.parse()?;

        let mut attrs = raw.clone();
        if let Some(map) = attrs.as_object_mut() {
            map.remove("type");
        }
        let plain = |attrs: Json| serde_json::from_value::<PlainField>(attrs);

        let definition = match kind {
            FieldKind::Any => FieldDefinition::Any(plain(attrs)?),
            FieldKind::Boolean => FieldDefinition::Boolean(plain(attrs)?),
            FieldKind::Text => FieldDefinition::Text(plain(attrs)?),
            FieldKind::Number => FieldDefinition::Number(plain(attrs)?),
            FieldKind::Date => FieldDefinition::Date(plain(attrs)?),
            FieldKind::DataTransfer => FieldDefinition::DataTransfer(plain(attrs)?),
            FieldKind::Reference => FieldDefinition::Reference(serde_json::from_value(attrs)?),
            FieldKind::ReverseReference => {
                FieldDefinition::ReverseReference(serde_json::from_value(attrs)?)
            }
            FieldKind::RelationReference => {
                FieldDefinition::RelationReference(serde_json::from_value(attrs)?)
            }
            FieldKind::CollectionLookup => {
                FieldDefinition::CollectionLookup(serde_json::from_value(attrs)?)
            }
        };
        Ok(definition)
    }

    /// Serializes the definition into its wire representation.
    pub fn to_json(&self) -> Result<Json> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Field for FieldDefinition {
    fn id(&self) -> &str {
        match self {
            FieldDefinition::Any(f)
            | FieldDefinition::Boolean(f)
            | FieldDefinition::Text(f)
            | FieldDefinition::Number(f)
            | FieldDefinition::Date(f)
            | FieldDefinition::DataTransfer(f) => &f.id,
            FieldDefinition::Reference(f) => &f.id,
            FieldDefinition::ReverseReference(f) => &f.id,
            FieldDefinition::RelationReference(f) => &f.id,
            FieldDefinition::CollectionLookup(f) => &f.id,
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            FieldDefinition::Any(_) => FieldKind::Any,
            FieldDefinition::Boolean(_) => FieldKind::Boolean,
            FieldDefinition::Text(_) => FieldKind::Text,
            FieldDefinition::Number(_) => FieldKind::Number,
            FieldDefinition::Date(_) => FieldKind::Date,
            FieldDefinition::Reference(_) => FieldKind::Reference,
            FieldDefinition::ReverseReference(_) => FieldKind::ReverseReference,
            FieldDefinition::RelationReference(_) => FieldKind::RelationReference,
            FieldDefinition::CollectionLookup(_) => FieldKind::CollectionLookup,
            FieldDefinition::DataTransfer(_) => FieldKind::DataTransfer,
        }
    }

    fn filter(&self) -> Option<&FilterNode> {
        match self {
            FieldDefinition::Reference(f) => f.filter(),
            FieldDefinition::ReverseReference(f) => f.filter(),
            FieldDefinition::RelationReference(f) => f.filter(),
            _ => None,
        }
    }

    fn fields(&self) -> &[FieldDefinition] {
        match self {
            FieldDefinition::Reference(f) => f.fields(),
            FieldDefinition::ReverseReference(f) => f.fields(),
            FieldDefinition::RelationReference(f) => f.fields(),
            _ => &[],
        }
    }
}

impl From<ReferenceField> for FieldDefinition {
    fn from(field: ReferenceField) -> Self {
        FieldDefinition::Reference(field)
    }
}

impl From<ReverseReferenceField> for FieldDefinition {
    fn from(field: ReverseReferenceField) -> Self {
        FieldDefinition::ReverseReference(field)
    }
}

impl From<RelationReferenceField> for FieldDefinition {
    fn from(field: RelationReferenceField) -> Self {
        FieldDefinition::RelationReference(field)
    }
}

impl From<CollectionLookupField> for FieldDefinition {
    fn from(field: CollectionLookupField) -> Self {
        FieldDefinition::CollectionLookup(field)
    }
}

impl<'de> Deserialize<'de> for FieldDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        FieldDefinition::from_json(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
