//! The catalog: sole owner of every movie and customer
//!
//! Records live in two arenas (`movies`, `customers`). Everything else holds
//! handles into them:
//!
//! - one [`OrderedIndex`] of [`MovieHandle`] per registered genre, ordered by
//!   the genre's sort key
//! - one [`KeyedIndex`] from [`CustomerId`] to [`CustomerHandle`]
//! - each customer's transactions
//!
//! Nothing is ever removed, so a handle issued by a catalog stays valid for
//! that catalog's lifetime. Handles from a different catalog are a caller bug
//! and index out of bounds.

use std::fmt;

use tracing::debug;

use reelstore_core::{
    Customer, CustomerHandle, CustomerId, Error, Movie, MovieHandle, MovieRegistry, Result,
};
use reelstore_storage::{KeyedIndex, OrderedIndex, DEFAULT_BUCKETS};

/// One genre's index, tagged with its code.
#[derive(Debug)]
struct GenreIndex {
    code: char,
    index: OrderedIndex<MovieHandle>,
}

/// The store's in-memory state.
#[derive(Debug)]
pub struct Catalog {
    registry: MovieRegistry,
    movies: Vec<Box<dyn Movie>>,
    /// Registration order, which is also inventory order
    genres: Vec<GenreIndex>,
    customers: Vec<Customer>,
    customer_index: KeyedIndex<CustomerId, CustomerHandle>,
}

impl Catalog {
    /// Empty catalog over the standard genres.
    pub fn new() -> Self {
        Self::with_registry(MovieRegistry::standard(), DEFAULT_BUCKETS)
    }

    /// Empty catalog with one index per genre in `registry`.
    pub fn with_registry(registry: MovieRegistry, customer_buckets: usize) -> Self {
        let genres = registry
            .codes()
            .map(|code| GenreIndex {
                code,
                index: OrderedIndex::new(),
            })
            .collect();
        Self {
            registry,
            movies: Vec::new(),
            genres,
            customers: Vec::new(),
            customer_index: KeyedIndex::with_buckets(customer_buckets),
        }
    }

    /// The genre registry this catalog was built over.
    pub fn registry(&self) -> &MovieRegistry {
        &self.registry
    }

    /// Take ownership of `movie` and index it under its genre.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownGenre`] if the catalog has no index for the movie's
    /// genre; the movie is dropped.
    pub fn add_movie(&mut self, movie: Box<dyn Movie>) -> Result<MovieHandle> {
        let code = movie.movie_type();
        let slot = self
            .genres
            .iter()
            .position(|genre| genre.code == code)
            .ok_or(Error::UnknownGenre { code })?;

        let handle = MovieHandle::new(self.movies.len());
        debug!(target: "reelstore::catalog", movie = %movie.describe(), "Movie added");
        self.movies.push(movie);

        let movies = &self.movies;
        self.genres[slot].index.insert(handle, |a, b| {
            movies[a.index()].compare(movies[b.index()].as_ref())
        });
        Ok(handle)
    }

    /// Take ownership of `customer` and index it by id.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateCustomer`] if the id is taken; the first customer is
    /// kept and `customer` is dropped.
    pub fn add_customer(&mut self, customer: Customer) -> Result<CustomerHandle> {
        let handle = CustomerHandle::new(self.customers.len());
        if !self.customer_index.insert(customer.id().clone(), handle) {
            return Err(Error::DuplicateCustomer {
                id: customer.id().to_string(),
            });
        }
        debug!(target: "reelstore::catalog", id = %customer.id(), "Customer added");
        self.customers.push(customer);
        Ok(handle)
    }

    /// Look up a customer by id.
    pub fn find_customer(&self, id: &CustomerId) -> Option<CustomerHandle> {
        self.customer_index.get(id).copied()
    }

    /// Look up a movie by its canonical search key within one genre.
    ///
    /// Search keys do not follow the index's sort order, so this is a full
    /// in-order scan of the genre.
    pub fn find_movie(&self, genre: char, search_key: &str) -> Option<MovieHandle> {
        let index = self.genre_index(genre)?;
        index
            .find_by_predicate(|handle| self.movies[handle.index()].search_key() == search_key)
            .copied()
    }

    /// The customer behind `handle`.
    pub fn customer(&self, handle: CustomerHandle) -> &Customer {
        &self.customers[handle.index()]
    }

    /// The customer behind `handle`, mutable.
    pub fn customer_mut(&mut self, handle: CustomerHandle) -> &mut Customer {
        &mut self.customers[handle.index()]
    }

    /// The movie behind `handle`.
    pub fn movie(&self, handle: MovieHandle) -> &dyn Movie {
        self.movies[handle.index()].as_ref()
    }

    /// The movie behind `handle`, mutable.
    pub fn movie_mut(&mut self, handle: MovieHandle) -> &mut dyn Movie {
        self.movies[handle.index()].as_mut()
    }

    /// Movies of one genre in ascending sort-key order.
    pub fn genre(&self, code: char) -> impl Iterator<Item = &dyn Movie> + '_ {
        self.genre_index(code)
            .into_iter()
            .flat_map(move |index| index.iter().map(move |handle| self.movie(*handle)))
    }

    /// Every movie: genres in registration order, sort-key order within each.
    pub fn inventory(&self) -> impl Iterator<Item = &dyn Movie> + '_ {
        self.genres.iter().flat_map(move |genre| {
            genre
                .index
                .iter()
                .map(move |handle| self.movie(*handle))
        })
    }

    /// Write one display line per movie, in inventory order.
    pub fn display_inventory(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for movie in self.inventory() {
            movie.display(out)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Write a customer's history block.
    ///
    /// ```text
    /// History for 1234 Doe John:
    /// Borrow Fargo Doe John Fargo, 1996, Joel Coen (2) - Comedy
    /// ```
    ///
    /// or `No history for Doe John` when the customer has no transactions.
    pub fn display_history(&self, handle: CustomerHandle, out: &mut dyn fmt::Write) -> fmt::Result {
        let customer = self.customer(handle);
        let name = customer.display_name();
        writeln!(out, "History for {} {}:", customer.id(), name)?;
        if customer.transactions().is_empty() {
            return writeln!(out, "No history for {}", name);
        }
        for transaction in customer.transactions() {
            let movie = self.movie(transaction.movie());
            write!(out, "{} {} {} ", transaction.kind(), movie.title(), name)?;
            movie.display(out)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// The history block of [`display_history`](Self::display_history) as a string.
    pub fn history_text(&self, handle: CustomerHandle) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.display_history(handle, &mut text);
        text
    }

    /// Number of movies
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of customers
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Customer index, for inspection
    pub fn customer_index(&self) -> &KeyedIndex<CustomerId, CustomerHandle> {
        &self.customer_index
    }

    fn genre_index(&self, code: char) -> Option<&OrderedIndex<MovieHandle>> {
        self.genres
            .iter()
            .find(|genre| genre.code == code)
            .map(|genre| &genre.index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
