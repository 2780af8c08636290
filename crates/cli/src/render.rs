//! Console rendering of catalog entities.

use colored::Colorize;

use stockroom_catalog::{Catalog, Category, Product};

const RULE: &str = "------------------------";

/// Print the full inventory, or a notice when the catalog holds nothing.
pub fn inventory(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The inventory is empty.");
        return;
    }
    println!("{RULE}");
    for item in catalog.products() {
        product(catalog, item);
        println!("{RULE}");
    }
}

/// Print one product, resolving its category name through the catalog.
pub fn product(catalog: &Catalog, product: &Product) {
    let category = catalog
        .category(product.category())
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "<unknown>".to_string());

    println!("Product: {}", product.name().bold());
    println!("Price: {}", format_price(product.price()));
    println!("Quantity: {}", product.quantity());
    println!("Category: {category}");
    for (key, value) in product.attributes() {
        println!("  {key}: {value}");
    }
}

/// Print one category with its attribute definitions.
pub fn category(category: &Category) {
    println!("Category: {}", category.name().bold());
    println!("Description: {}", category.description());
    for (key, value) in category.attributes() {
        println!("  {key}: {value}");
    }
}

fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_renders_dollars_and_cents() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(1000), "$10.00");
        assert_eq!(format_price(1050), "$10.50");
        assert_eq!(format_price(123456), "$1234.56");
    }
}
