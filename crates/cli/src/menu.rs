//! Menu dispatch and the interactive flows.
//!
//! Raw input is validated here; the catalog only ever sees non-empty names
//! and non-negative numbers.

use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;

use stockroom_catalog::{Catalog, Category, build_product};

use crate::{input, render};

/// Run the menu loop until the user quits or stdin closes.
pub fn run(catalog: &mut Catalog) -> Result<()> {
    loop {
        println!();
        println!("{}", "--- MAIN MENU ---".bold());
        println!("1. Create category");
        println!("2. Create product");
        println!("3. Clone product");
        println!("4. Show inventory");
        println!("5. Update stock");
        println!("6. Quit");

        match input::read_u64("Select an option: ")? {
            1 => create_category(catalog)?,
            2 => create_product(catalog)?,
            3 => clone_product(catalog)?,
            4 => render::inventory(catalog),
            5 => update_stock(catalog)?,
            6 => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("{}", "Invalid option.".yellow()),
        }
    }
}

fn create_category(catalog: &mut Catalog) -> Result<()> {
    let name = input::read_line("Category name: ")?;
    if name.trim().is_empty() {
        println!("{}", "The name cannot be empty.".red());
        return Ok(());
    }
    let description = input::read_line("Description: ")?;
    let mut category = Category::new(name.clone(), description);

    let count = input::read_u64("How many attributes to add?: ")?;
    for _ in 0..count {
        let key = input::read_line("Attribute name: ")?;
        if key.trim().is_empty() {
            println!("{}", "The attribute name cannot be empty.".yellow());
            continue;
        }
        let value = input::read_line("Attribute description: ")?;
        category.add_attribute(key, value);
    }

    match catalog.add_category(category) {
        Ok(id) => {
            tracing::info!(%id, name = %name, "category created");
            println!("{}", "Category created:".green());
            if let Some(created) = catalog.find_category(&name) {
                render::category(created);
            }
        }
        Err(err) => println!("{}", err.to_string().yellow()),
    }
    Ok(())
}

fn create_product(catalog: &mut Catalog) -> Result<()> {
    let category_name = input::read_line("Category name: ")?;
    if category_name.trim().is_empty() {
        println!("{}", "The category name cannot be empty.".red());
        return Ok(());
    }

    // Work on a snapshot so the prompts below do not hold a borrow of the
    // store. A missing category is created on the spot so the product can
    // still be captured in one sitting.
    let category = match catalog.find_category(&category_name) {
        Some(existing) => existing.clone(),
        None => {
            println!("Category not found. Creating it...");
            let created = Category::new(
                category_name.clone(),
                "Automatically created category.",
            );
            let snapshot = created.clone();
            catalog.add_category(created)?;
            snapshot
        }
    };

    let name = input::read_line("Product name: ")?;
    if name.trim().is_empty() {
        println!("{}", "The product name cannot be empty.".red());
        return Ok(());
    }
    let price = input::read_price("Price: ")?;
    let quantity = input::read_u64("Stock quantity: ")?;

    // One resolved value per declared attribute, then hand construction to
    // the factory.
    let mut values = BTreeMap::new();
    for key in category.attributes().keys() {
        let value = input::read_line(&format!("Value for '{key}': "))?;
        values.insert(key.clone(), value);
    }

    let product = build_product(name, price, quantity, &category, &values);
    let id = catalog.add_product(product);
    tracing::info!(%id, "product created");

    println!("{}", "Product created:".green());
    if let Some(created) = catalog.products().last() {
        render::product(catalog, created);
    }
    Ok(())
}

fn clone_product(catalog: &mut Catalog) -> Result<()> {
    let name = input::read_line("Name of the product to clone: ")?;
    if name.trim().is_empty() {
        println!("{}", "The name cannot be empty.".red());
        return Ok(());
    }

    match catalog.clone_product(&name) {
        Ok(id) => {
            tracing::info!(%id, "product cloned");
            println!("{}", "Product cloned:".green());
            if let Some(copy) = catalog.products().last() {
                render::product(catalog, copy);
            }
        }
        Err(_) => println!("{}", "Product not found.".yellow()),
    }
    Ok(())
}

fn update_stock(catalog: &mut Catalog) -> Result<()> {
    let name = input::read_line("Product name: ")?;
    if name.trim().is_empty() {
        println!("{}", "The name cannot be empty.".red());
        return Ok(());
    }
    if catalog.find_product(&name).is_none() {
        println!("{}", "Product not found.".yellow());
        return Ok(());
    }

    let delta = input::read_i64("Amount to add (+) or withdraw (-): ")?;
    let magnitude = delta.unsigned_abs();
    let updated = if delta >= 0 {
        catalog.deposit(&name, magnitude)
    } else {
        catalog.withdraw(&name, magnitude)
    };

    if let Some(quantity) = updated {
        tracing::debug!(product = %name, quantity, "stock adjusted");
        println!("{}", "Stock updated:".green());
        if let Some(product) = catalog.find_product(&name) {
            render::product(catalog, product);
        }
    }
    Ok(())
}
