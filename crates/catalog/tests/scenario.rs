//! End-to-end catalog walkthrough mirroring an interactive session.

use std::collections::BTreeMap;

use stockroom_catalog::{Catalog, Category, build_product};

#[test]
fn electronics_walkthrough() {
    let mut catalog = Catalog::new();

    // Define the category and its custom attribute.
    let mut electronics = Category::new("Electronics", "Devices and appliances");
    electronics.add_attribute("voltage", "Operating voltage");
    let category_id = catalog.add_category(electronics).unwrap();

    // A second registration under a different casing is refused.
    assert!(
        catalog
            .add_category(Category::new("electronics", "duplicate"))
            .is_err()
    );

    // Create "Fan" at $10.00, quantity 5, seeded with the resolved value.
    let category = catalog.find_category("ELECTRONICS").unwrap();
    let mut values = BTreeMap::new();
    values.insert("voltage".to_string(), "120V".to_string());
    let fan = build_product("Fan", 1000, 5, category, &values);
    assert_eq!(
        fan.attributes().get("voltage").map(String::as_str),
        Some("120V")
    );
    catalog.add_product(fan);

    // Stock adjustments clamp at zero.
    assert_eq!(catalog.withdraw("Fan", 3), Some(2));
    assert_eq!(catalog.withdraw("Fan", 10), Some(0));

    // Cloning appends an independent copy under the same category.
    let clone_id = catalog.clone_product("fan").unwrap();
    assert_eq!(catalog.len(), 2);

    let original = &catalog.products()[0];
    let copy = catalog.products().last().unwrap();
    assert_eq!(copy.id(), clone_id);
    assert_eq!(copy.name(), "Fan");
    assert_eq!(copy.price(), 1000);
    assert_eq!(copy.quantity(), 0);
    assert_eq!(copy.category(), category_id);
    assert_eq!(copy.attributes(), original.attributes());
    assert_ne!(copy.id(), original.id());

    // Restocking the catalog only ever reaches the first "Fan".
    assert_eq!(catalog.deposit("Fan", 4), Some(4));
    assert_eq!(catalog.products()[0].quantity(), 4);
    assert_eq!(catalog.products()[1].quantity(), 0);
}

#[test]
fn category_edits_are_visible_to_original_and_clone() {
    let mut catalog = Catalog::new();
    let mut appliances = Category::new("Appliances", "");
    appliances.add_attribute("color", "Finish color");
    catalog.add_category(appliances).unwrap();

    let category = catalog.find_category("Appliances").unwrap();
    let mut values = BTreeMap::new();
    values.insert("color".to_string(), "white".to_string());
    let toaster = build_product("Toaster", 2599, 3, category, &values);
    catalog.add_product(toaster);
    catalog.clone_product("Toaster").unwrap();

    // A definition added later shows up through both products' category
    // references, but is not retroactively seeded onto either product.
    catalog
        .find_category_mut("Appliances")
        .unwrap()
        .add_attribute("wattage", "Power draw");

    for product in catalog.products() {
        let resolved = catalog.category(product.category()).unwrap();
        assert!(resolved.attributes().contains_key("wattage"));
        assert!(!product.attributes().contains_key("wattage"));
    }
}
