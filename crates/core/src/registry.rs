// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered field registry.

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldDefinition};

/// The schema consulted while compiling: an ordered list of definitions.
///
/// Ids are expected to be unique but this is not enforced; lookups return
/// the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRegistry {
    fields: Vec<FieldDefinition>,
}

impl FieldRegistry {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        FieldRegistry { fields }
    }

    /// Returns the first definition whose id equals `id`.
    pub fn lookup(&self, id: &str) -> Option<&FieldDefinition> {
        lookup_field(&self.fields, id)
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<FieldDefinition>> for FieldRegistry {
    fn from(fields: Vec<FieldDefinition>) -> Self {
        FieldRegistry::new(fields)
    }
}

impl FromIterator<FieldDefinition> for FieldRegistry {
    fn from_iter<I: IntoIterator<Item = FieldDefinition>>(iter: I) -> Self {
        FieldRegistry::new(iter.into_iter().collect())
    }
}

/// Linear scan for the first definition with the given id.
pub fn lookup_field<'a>(fields: &'a [FieldDefinition], id: &str) -> Option<&'a FieldDefinition> {
    fields.iter().find(|field| field.id() == id)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
