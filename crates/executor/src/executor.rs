//! The Executor - single entry point to the catalog.
//!
//! The Executor routes commands to their handlers and returns their
//! outputs. All state lives in the [`Catalog`] it owns.

use reelstore_engine::Catalog;

use crate::{Command, Output, Result};

/// The command executor.
///
/// # Example
///
/// ```
/// use reelstore_executor::{Command, Executor, Output};
/// use reelstore_engine::Catalog;
///
/// let mut executor = Executor::new(Catalog::new());
/// let output = executor.execute(Command::Inventory).unwrap();
/// assert!(matches!(output, Output::Inventory { .. }));
/// ```
#[derive(Debug)]
pub struct Executor {
    catalog: Catalog,
}

impl Executor {
    /// Create a new executor over a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. A failed command leaves the
    /// catalog unchanged.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Inventory => crate::handlers::inventory::inventory(&self.catalog),
            Command::History { customer } => {
                crate::handlers::history::history(&self.catalog, customer)
            }
            Command::Borrow(request) => {
                crate::handlers::rental::borrow(&mut self.catalog, &request)
            }
            Command::Return(request) => {
                crate::handlers::rental::return_movie(&mut self.catalog, &request)
            }
        }
    }

    /// Execute several commands, one result per command, in order.
    ///
    /// A failure does not stop the remaining commands.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Give the catalog back.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
