use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, ProductId};

/// A sellable item: price, stock quantity, one category, attribute values.
///
/// Prices are held in the smallest currency unit (cents); quantities are
/// non-negative by construction. The product references its category by id;
/// the store owns the category and resolves the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: u64,
    quantity: u64,
    category: CategoryId,
    attributes: BTreeMap<String, String>,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with an empty attribute map.
    ///
    /// Seeding values from the category's attribute keys is the factory's
    /// job, see [`crate::factory::build_product`].
    pub fn new(
        name: impl Into<String>,
        price: u64,
        quantity: u64,
        category: CategoryId,
    ) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            price,
            quantity,
            category,
            attributes: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in the smallest currency unit (cents).
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Live view of the attribute map, not a defensive copy.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Direct overwrite. The store's withdraw path is the one that clamps;
    /// non-negativity here is structural (`u64`).
    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    /// Insert or overwrite an attribute value. Existing keys are silently
    /// replaced.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Produce an independent copy under a fresh identifier.
    ///
    /// Name, price, quantity and the attribute map are copied; the category
    /// reference is shared. Attribute edits on the copy do not touch the
    /// original, while category edits remain visible to both.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ProductId::new(),
            created_at: Utc::now(),
            ..self.clone()
        }
    }
}
