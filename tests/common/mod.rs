//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use reelstore::{Catalog, CustomerId, Session};
use tempfile::TempDir;

pub const MOVIES: &str = "\
F, 10, Nora Ephron, You've Got Mail, 1998
D, 10, Steven Spielberg, Schindler's List, 1993
C, 10, George Cukor, Holiday, Katherine Hepburn 9 1938
C, 10, George Cukor, Holiday, Cary Grant 9 1938
Z, 10, Hal Ashby, Harold and Maude, Ruth Gordon 2 1971
D, 10, Phillippe De Broca, King of Hearts, 1967
F, 3, Joel Coen, Fargo, 1996
F, 0, Rob Reiner, When Harry Met Sally, 1989
C, 10, Victor Fleming, The Wizard of Oz, Judy Garland 7 1939
";

pub const CUSTOMERS: &str = "\
3333 Witch Wicked
8888 Pig Porky
1234 Doe John
4444 Moose Bullwinkle
";

/// Catalog loaded from [`MOVIES`] and [`CUSTOMERS`].
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

/// Stock of the movie with this genre and search key.
pub fn stock(catalog: &Catalog, genre: char, key: &str) -> u32 {
    let handle = catalog
        .find_movie(genre, key)
        .unwrap_or_else(|| panic!("no movie {} {}", genre, key));
    catalog.movie(handle).stock()
}

/// Number of transactions recorded for a customer.
pub fn transactions(catalog: &Catalog, id: &str) -> usize {
    let id = CustomerId::parse(id).unwrap();
    let handle = catalog.find_customer(&id).unwrap();
    catalog.customer(handle).transactions().len()
}

/// Run `input` through `session`, returning (stdout, stderr).
pub fn run(session: &mut Session, input: &str) -> (String, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    session.run(Cursor::new(input), &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

/// Temp directory holding the three input files.
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    pub fn new(movies: &str, customers: &str, commands: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data4movies.txt"), movies).unwrap();
        std::fs::write(dir.path().join("data4customers.txt"), customers).unwrap();
        std::fs::write(dir.path().join("data4commands.txt"), commands).unwrap();
        DataDir { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn movies(&self) -> PathBuf {
        self.path().join("data4movies.txt")
    }

    pub fn customers(&self) -> PathBuf {
        self.path().join("data4customers.txt")
    }

    pub fn commands(&self) -> PathBuf {
        self.path().join("data4commands.txt")
    }
}
