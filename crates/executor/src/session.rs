//! Command-phase session: the dispatch loop.
//!
//! A [`Session`] pairs an [`Executor`] with the [`CommandRegistry`] used to
//! turn lines into commands. Each line is independent: it is parsed,
//! executed, and its output or error reported before the next line is read.
//! No failure of a single line stops the loop.
//!
//! # Usage
//!
//! ```
//! use std::io::Cursor;
//! use reelstore_engine::Catalog;
//! use reelstore_executor::Session;
//!
//! let mut session = Session::new(Catalog::new());
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! let summary = session.run(Cursor::new("I\nH 1234\n"), &mut out, &mut err).unwrap();
//! assert_eq!(summary.succeeded, 1);
//! assert_eq!(summary.failed, 1);
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use reelstore_core::lossy_lines;
use reelstore_engine::Catalog;

use crate::{CommandRegistry, Executor, Output, Result};

/// Counts for one run of the dispatch loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines whose command completed
    pub succeeded: usize,
    /// Lines rejected at parse time or failed during execution
    pub failed: usize,
    /// Blank lines skipped
    pub skipped: usize,
}

impl RunSummary {
    /// Non-blank lines seen
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// A command-phase session over one catalog.
#[derive(Debug)]
pub struct Session {
    executor: Executor,
    commands: CommandRegistry,
}

impl Session {
    /// Create a session with the standard command set.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_commands(catalog, CommandRegistry::standard())
    }

    /// Create a session with an explicit command registry.
    pub fn with_commands(catalog: Catalog, commands: CommandRegistry) -> Self {
        Self {
            executor: Executor::new(catalog),
            commands,
        }
    }

    /// Parse and execute one command line.
    pub fn execute_line(&mut self, line: &str) -> Result<Output> {
        let cmd = self
            .commands
            .parse_line(line, self.executor.catalog().registry())?;
        debug!(target: "reelstore::dispatch", command = %cmd.describe(), "Executing");
        self.executor.execute(cmd)
    }

    /// Run every line of `reader` through the session.
    ///
    /// Outputs go to `out`, one block per successful line. Each rejected
    /// line is reported to `err` as `(error) <message>, discarding line: <line>`.
    /// Bytes that are not valid UTF-8 are decoded lossily, line by line.
    ///
    /// # Errors
    ///
    /// Only I/O failures reading `reader` or writing either sink.
    pub fn run<R, W, E>(&mut self, reader: R, out: &mut W, err: &mut E) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();

        for (pos, line) in lossy_lines(reader).enumerate() {
            let line = line?;
            let line = line.as_str();
            if line.trim().is_empty() {
                summary.skipped += 1;
                continue;
            }

            match self.execute_line(line) {
                Ok(output) => {
                    summary.succeeded += 1;
                    writeln!(out, "{}", output)?;
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(
                        target: "reelstore::dispatch",
                        line_no = pos + 1,
                        category = e.category().as_str(),
                        error = %e,
                        "Command failed"
                    );
                    writeln!(err, "(error) {}, discarding line: {}", e, line.trim())?;
                }
            }
        }

        info!(
            target: "reelstore::dispatch",
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Commands processed"
        );
        Ok(summary)
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The catalog
    pub fn catalog(&self) -> &Catalog {
        self.executor.catalog()
    }

    /// End the session, returning the catalog.
    pub fn into_catalog(self) -> Catalog {
        self.executor.into_catalog()
    }
}
