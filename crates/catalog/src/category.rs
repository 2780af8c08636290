use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::CategoryId;

/// A named grouping of products carrying custom attribute definitions.
///
/// Name and description are fixed at construction; the attribute set may
/// grow afterwards. Name uniqueness is enforced by the store
/// ([`Catalog`](crate::store::Catalog)), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    attributes: BTreeMap<String, String>,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a category with an empty attribute map.
    ///
    /// No validation happens here; callers reject empty names before
    /// construction.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            attributes: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Live view of the attribute map, not a defensive copy.
    ///
    /// Iteration order (the map's sorted key order) is the category's
    /// attribute iteration order used for seeding and display.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Insert or overwrite an attribute definition. Existing keys are
    /// silently replaced.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }
}
