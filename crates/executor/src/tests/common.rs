//! Shared fixtures for executor tests.

use std::io::Cursor;

use reelstore_engine::Catalog;

use crate::Session;

pub const MOVIES: &str = "\
F, 3, Joel Coen, Fargo, 1996
F, 10, Nora Ephron, You've Got Mail, 1998
D, 10, Steven Spielberg, Schindler's List, 1993
D, 0, Barry Levinson, Good Morning Vietnam, 1988
C, 10, George Cukor, Holiday, Katherine Hepburn 9 1938
C, 1, Victor Fleming, The Wizard of Oz, Judy Garland 7 1939
";

pub const CUSTOMERS: &str = "\
1234 Doe John
8000 Wacky Wally
";

/// Catalog loaded from the fixtures above.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.load_customers(Cursor::new(CUSTOMERS)).unwrap();
    catalog.load_movies(Cursor::new(MOVIES)).unwrap();
    catalog
}

/// Session over [`catalog`].
pub fn session() -> Session {
    Session::new(catalog())
}

/// Stock of the movie found by genre and search key.
pub fn stock(session: &Session, genre: char, key: &str) -> u32 {
    let catalog = session.catalog();
    let handle = catalog.find_movie(genre, key).unwrap();
    catalog.movie(handle).stock()
}

/// Transaction count of a customer.
pub fn history_len(session: &Session, id: &str) -> usize {
    let catalog = session.catalog();
    let id = reelstore_core::CustomerId::parse(id).unwrap();
    let handle = catalog.find_customer(&id).unwrap();
    catalog.customer(handle).transactions().len()
}
