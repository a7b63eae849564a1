//! Domain model for card records shared across cache namespaces

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single card record.
///
/// Identity is `id`; every other field lives in the open attribute map
/// (name, set, ownership metadata, whatever the backing queries return)
/// and is replaceable via patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardEntity {
    pub id: String,
    /// Open set of mutable attributes
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CardEntity {
    /// Create an entity with no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Shallow merge: fields in `patch` overwrite, all others are preserved.
    /// The id is never touched by a merge.
    pub fn merged(&self, patch: &Map<String, Value>) -> Self {
        let mut fields = self.fields.clone();
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
        Self {
            id: self.id.clone(),
            fields,
        }
    }
}
