//! Core types and traits for reelstore
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: Error type hierarchy with a category per failure class
//! - MovieHandle / CustomerHandle: stable handles into catalog-owned arenas
//! - CustomerId: validated four-digit customer identifier
//! - Movie: capability trait shared by every genre (Comedy, Drama, Classic)
//! - MovieRegistry: genre code -> blank-record constructor
//! - Customer / Transaction: customers and their append-only history
//! - lossy_lines: per-line reading that tolerates invalid UTF-8

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod customer;
pub mod error;
pub mod lines;
pub mod movie;
pub mod types;

pub use customer::{Customer, Transaction, TransactionKind};
pub use error::{Error, ErrorCategory, Result};
pub use lines::{lossy_lines, LossyLines};
pub use movie::{Classic, Comedy, Drama, Movie, MovieConstructor, MovieData, MovieRegistry};
pub use types::{CustomerHandle, CustomerId, MovieHandle, MEDIA_DVD};
