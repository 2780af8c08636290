//! Interactive inventory console.
//!
//! The catalog lives here: one store per process, constructed in `main` and
//! handed to the menu loop by mutable reference.

use anyhow::Result;

use stockroom_catalog::Catalog;

mod input;
mod menu;
mod render;

fn main() -> Result<()> {
    stockroom_observability::init();

    let mut catalog = Catalog::new();
    menu::run(&mut catalog)
}
