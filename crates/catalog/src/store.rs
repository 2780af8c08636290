//! The in-memory catalog store.

use stockroom_core::{CatalogError, CatalogResult, CategoryId, ProductId};

use crate::category::Category;
use crate::product::Product;

/// In-memory store owning every category and product for the process.
///
/// Constructed once by the composition root and passed by mutable reference;
/// all mutation goes through its operations. Category names are unique under
/// case-insensitive comparison; product names are not, and name lookup only
/// ever reaches the first match in insertion order.
#[derive(Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Unicode-aware case folding; names are user input, not ASCII-only.
fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category. A name that collides case-insensitively with an
    /// existing one is rejected and the store is left unchanged.
    pub fn add_category(&mut self, category: Category) -> CatalogResult<CategoryId> {
        if self.find_category(category.name()).is_some() {
            return Err(CatalogError::duplicate_category(category.name()));
        }
        let id = category.id();
        self.categories.push(category);
        Ok(id)
    }

    /// First case-insensitive match in insertion order.
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| names_match(c.name(), name))
    }

    pub fn find_category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| names_match(c.name(), name))
    }

    /// Resolve a product's category reference.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Append unconditionally; duplicate product names are allowed.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// First case-insensitive match in insertion order. With duplicate
    /// names, later products are unreachable by name lookup.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| names_match(p.name(), name))
    }

    pub fn find_product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| names_match(p.name(), name))
    }

    /// Duplicate the first product matching `name` and append the copy.
    pub fn clone_product(&mut self, name: &str) -> CatalogResult<ProductId> {
        let copy = self
            .find_product(name)
            .ok_or_else(CatalogError::not_found)?
            .duplicate();
        Ok(self.add_product(copy))
    }

    /// Reduce stock, clamping at zero. Returns the new quantity, or `None`
    /// when no product matches (the adjustment is then a silent no-op).
    pub fn withdraw(&mut self, name: &str, amount: u64) -> Option<u64> {
        let product = self.find_product_mut(name)?;
        let quantity = product.quantity().saturating_sub(amount);
        product.set_quantity(quantity);
        Some(quantity)
    }

    /// Increase stock. Same miss semantics as [`Catalog::withdraw`].
    pub fn deposit(&mut self, name: &str, amount: u64) -> Option<u64> {
        let product = self.find_product_mut(name)?;
        let quantity = product.quantity().saturating_add(amount);
        product.set_quantity(quantity);
        Some(quantity)
    }

    /// Full ordered product sequence for display.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
