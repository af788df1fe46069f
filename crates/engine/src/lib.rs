//! Catalog engine for reelstore
//!
//! This crate owns the store's state and gets it off disk:
//! - Catalog: movie and customer arenas plus their indices
//! - Loaders: customer and movie sources, line by line, with a LoadReport
//! - StoreConfig: optional `reelstore.toml`
//!
//! The catalog is the only component that knows how handles map to records.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod loader;

pub use catalog::Catalog;
pub use config::{StoreConfig, CONFIG_FILE_NAME};
pub use loader::{parse_movie_line, InitReport, LoadReport, RejectedLine};
