//! Borrow and Return handlers.
//!
//! Both resolve the customer, then the movie, then check the one rule that
//! can refuse the request. State changes only after every check passes: the
//! stock moves by one and a transaction is appended to the customer.

use tracing::debug;

use reelstore_core::{CustomerHandle, Error, MovieHandle, TransactionKind};
use reelstore_engine::Catalog;

use crate::command::MovieRequest;
use crate::{Output, Result};

fn resolve(catalog: &Catalog, request: &MovieRequest) -> Result<(CustomerHandle, MovieHandle)> {
    let customer = catalog
        .find_customer(&request.customer)
        .ok_or_else(|| Error::CustomerNotFound {
            id: request.customer.to_string(),
        })?;
    let movie = catalog
        .find_movie(request.genre, &request.search_key)
        .ok_or_else(|| Error::MovieNotFound {
            genre: request.genre,
            key: request.search_key.clone(),
        })?;
    Ok((customer, movie))
}

fn confirmation(
    catalog: &Catalog,
    kind: TransactionKind,
    customer: CustomerHandle,
    movie: MovieHandle,
) -> Output {
    let holder = catalog.customer(customer);
    Output::Rental {
        kind,
        customer: holder.id().clone(),
        name: holder.display_name(),
        movie: catalog.movie(movie).to_string(),
    }
}

/// Handle Borrow: take one copy out of stock.
///
/// # Errors
///
/// [`Error::OutOfStock`] when no copy is on hand; stock and history are
/// left untouched.
pub fn borrow(catalog: &mut Catalog, request: &MovieRequest) -> Result<Output> {
    let (customer, movie) = resolve(catalog, request)?;

    if !catalog.movie_mut(movie).borrow_copy() {
        return Err(Error::OutOfStock {
            customer: catalog.customer(customer).display_name(),
            title: catalog.movie(movie).title().to_string(),
        });
    }
    catalog
        .customer_mut(customer)
        .record(TransactionKind::Borrow, movie);

    debug!(
        target: "reelstore::dispatch",
        customer = %request.customer,
        movie = %catalog.movie(movie).describe(),
        stock = catalog.movie(movie).stock(),
        "Borrowed"
    );
    Ok(confirmation(catalog, TransactionKind::Borrow, customer, movie))
}

/// Handle Return: put one copy back.
///
/// # Errors
///
/// [`Error::NotBorrowed`] unless the customer's borrows of this movie
/// outnumber their returns.
pub fn return_movie(catalog: &mut Catalog, request: &MovieRequest) -> Result<Output> {
    let (customer, movie) = resolve(catalog, request)?;

    if !catalog.customer(customer).has_borrowed(movie) {
        return Err(Error::NotBorrowed {
            customer: catalog.customer(customer).display_name(),
            title: catalog.movie(movie).title().to_string(),
        });
    }
    catalog.movie_mut(movie).return_copy();
    catalog
        .customer_mut(customer)
        .record(TransactionKind::Return, movie);

    debug!(
        target: "reelstore::dispatch",
        customer = %request.customer,
        movie = %catalog.movie(movie).describe(),
        stock = catalog.movie(movie).stock(),
        "Returned"
    );
    Ok(confirmation(catalog, TransactionKind::Return, customer, movie))
}
