//! Reelstore - an in-memory video rental store
//!
//! Loads a movie catalog and a customer roster from text files, then replays
//! a file of commands (inventory, history, borrow, return) against them.
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use reelstore::{Catalog, Session};
//!
//! let mut catalog = Catalog::new();
//! catalog.load_customers(Cursor::new("1234 Doe John\n")).unwrap();
//! catalog.load_movies(Cursor::new("F, 3, Joel Coen, Fargo, 1996\n")).unwrap();
//!
//! let mut session = Session::new(catalog);
//! let output = session.execute_line("B 1234 D F Fargo, 1996").unwrap();
//! assert_eq!(output.to_string(), "Borrow 1234 Doe John Fargo, 1996, Joel Coen (2) - Comedy");
//! ```
//!
//! # Architecture
//!
//! | Crate | Role |
//! |-------|------|
//! | `reelstore-core` | errors, ids and handles, movie genres, customers |
//! | `reelstore-storage` | `OrderedIndex` (BST) and `KeyedIndex` (hash table) |
//! | `reelstore-engine` | `Catalog`, loaders, `StoreConfig` |
//! | `reelstore-executor` | commands, dispatch loop |

pub use reelstore_core::{
    Classic, Comedy, Customer, CustomerHandle, CustomerId, Drama, Error, ErrorCategory, Movie,
    MovieData, MovieHandle, MovieRegistry, Result, Transaction, TransactionKind,
};
pub use reelstore_engine::{Catalog, InitReport, LoadReport, RejectedLine, StoreConfig};
pub use reelstore_executor::{
    Command, CommandRegistry, Executor, MovieRequest, Output, RunSummary, Session,
};
pub use reelstore_storage::{KeyedIndex, OrderedIndex};
