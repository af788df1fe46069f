//! Inventory handler.

use reelstore_engine::Catalog;

use crate::{Output, Result};

/// Handle Inventory: every movie, genres in registry order, sort order within.
pub fn inventory(catalog: &Catalog) -> Result<Output> {
    let lines = catalog.inventory().map(|movie| movie.to_string()).collect();
    Ok(Output::Inventory { lines })
}
