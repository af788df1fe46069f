//! # Reelstore Executor
//!
//! The command layer of the store. It provides:
//! - [`Command`] - one variant per store operation, built from a text line
//! - [`CommandRegistry`] - command code -> parameter parser
//! - [`Executor`] - routes commands to handlers over a [`Catalog`](reelstore_engine::Catalog)
//! - [`Output`] - what a successful command produced
//! - [`Session`] - the line-by-line dispatch loop
//!
//! ## Quick Start
//!
//! ```text
//! use reelstore_executor::Session;
//!
//! let mut session = Session::new(catalog);
//! let summary = session.run(commands, &mut stdout, &mut stderr)?;
//! ```

#![warn(missing_docs)]

mod command;
mod executor;
mod output;
mod registry;
mod session;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use command::{Command, MovieRequest};
pub use executor::Executor;
pub use output::{Output, SEPARATOR};
pub use registry::{CommandParser, CommandRegistry};
pub use session::{RunSummary, Session};

pub use reelstore_core::{Error, Result};
