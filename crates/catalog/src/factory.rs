//! Product construction with category attribute seeding.

use std::collections::BTreeMap;

use crate::category::Category;
use crate::product::Product;

/// Build a product under `category`, seeding one attribute value for every
/// key the category declares, in the category's attribute iteration order.
///
/// `values` holds the already-resolved key → value pairs (collected by the
/// presentation layer); keys the map misses seed as empty strings, and keys
/// the category does not declare are ignored. Attributes added to the
/// category afterwards are not retroactively applied; this is one-shot
/// seeding, not a live binding.
pub fn build_product(
    name: impl Into<String>,
    price: u64,
    quantity: u64,
    category: &Category,
    values: &BTreeMap<String, String>,
) -> Product {
    let mut product = Product::new(name, price, quantity, category.id());
    for key in category.attributes().keys() {
        let value = values.get(key).cloned().unwrap_or_default();
        product.add_attribute(key.clone(), value);
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electronics() -> Category {
        let mut category = Category::new("Electronics", "Devices and appliances");
        category.add_attribute("voltage", "Operating voltage");
        category.add_attribute("weight", "Shipping weight");
        category
    }

    #[test]
    fn seeds_every_declared_attribute() {
        let category = electronics();
        let mut values = BTreeMap::new();
        values.insert("voltage".to_string(), "120V".to_string());
        values.insert("weight".to_string(), "2kg".to_string());

        let product = build_product("Fan", 1000, 5, &category, &values);

        assert_eq!(
            product.attributes().get("voltage").map(String::as_str),
            Some("120V")
        );
        assert_eq!(
            product.attributes().get("weight").map(String::as_str),
            Some("2kg")
        );
        assert_eq!(product.category(), category.id());
    }

    #[test]
    fn missing_values_seed_as_empty_strings() {
        let category = electronics();
        let values = BTreeMap::new();

        let product = build_product("Fan", 1000, 5, &category, &values);

        assert_eq!(product.attributes().len(), 2);
        assert_eq!(
            product.attributes().get("voltage").map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn undeclared_keys_are_ignored() {
        let category = electronics();
        let mut values = BTreeMap::new();
        values.insert("color".to_string(), "white".to_string());

        let product = build_product("Fan", 1000, 5, &category, &values);

        assert!(!product.attributes().contains_key("color"));
    }

    #[test]
    fn attributes_added_later_are_not_applied() {
        let mut category = electronics();
        let product = build_product("Fan", 1000, 5, &category, &BTreeMap::new());

        category.add_attribute("warranty", "Months of coverage");

        assert!(!product.attributes().contains_key("warranty"));
    }
}
