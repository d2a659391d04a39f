// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque record identifiers and cross-collection references.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as Json};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A 12-byte record identifier, written as 24 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        ObjectId(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Parses an identifier from its hex form.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Extended-JSON form used inside predicates: `{"$oid": "<hex>"}`.
    pub fn to_extended_json(&self) -> Json {
        serde_json::json!({ "$oid": self.to_string() })
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 24 {
            return Err(Error::InvalidReferenceId(s.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|_| Error::InvalidReferenceId(s.to_string()))?;
        Ok(ObjectId(bytes))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A reference to a record in another collection, possibly another database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbRef {
    #[serde(rename = "_ref")]
    pub collection: String,
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "_db")]
    pub database: String,
}

impl DbRef {
    /// Reads a reference from the store's `{"$ref", "$id", "$db"}` shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFilter`] when a key is missing or not a
    /// string, and [`Error::InvalidReferenceId`] when `$id` does not parse.
    pub fn from_store_map(map: &Map<String, Json>) -> Result<Self> {
        let get = |key: &str| {
            map.get(key)
                .and_then(Json::as_str)
                .ok_or_else(|| Error::malformed(key, "must be a string"))
        };
        Ok(DbRef {
            collection: get("$ref")?.to_string(),
            id: get("$id")?.parse()?,
            database: get("$db")?.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "oid_tests.rs"]
mod tests;
