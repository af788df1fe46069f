//! History handler.

use reelstore_core::{CustomerId, Error};
use reelstore_engine::Catalog;

use crate::{Output, Result};

/// Handle History: the customer's transactions, oldest first.
pub fn history(catalog: &Catalog, customer: CustomerId) -> Result<Output> {
    let handle = catalog
        .find_customer(&customer)
        .ok_or_else(|| Error::CustomerNotFound {
            id: customer.to_string(),
        })?;

    Ok(Output::History {
        customer,
        name: catalog.customer(handle).display_name(),
        lines: catalog
            .history_text(handle)
            .lines()
            .map(str::to_string)
            .collect(),
    })
}
