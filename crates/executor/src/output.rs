//! Output enum for command execution results.
//!
//! Each [`Command`](crate::Command) variant maps to exactly one `Output`
//! variant. `Display` renders the text written to the output sink, without a
//! trailing newline.

use std::fmt;

use reelstore_core::{CustomerId, TransactionKind};

/// Separator printed ahead of inventory and history listings.
pub const SEPARATOR: &str = "==========================";

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Inventory listing, one display line per movie
    Inventory {
        /// Movie display lines in inventory order
        lines: Vec<String>,
    },

    /// One customer's history
    History {
        /// Customer id
        customer: CustomerId,
        /// `"<last> <first>"`
        name: String,
        /// History block lines, header included
        lines: Vec<String>,
    },

    /// Confirmation of a completed borrow or return
    Rental {
        /// Borrow or Return
        kind: TransactionKind,
        /// Customer id
        customer: CustomerId,
        /// `"<last> <first>"`
        name: String,
        /// Movie display line, after the stock change
        movie: String,
    },
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Inventory { lines } => {
                f.write_str(SEPARATOR)?;
                for line in lines {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
            Output::History {
                customer,
                name,
                lines,
            } => {
                write!(f, "History for {} {}\n{}", customer, name, SEPARATOR)?;
                for line in lines {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
            Output::Rental {
                kind,
                customer,
                name,
                movie,
            } => write!(f, "{} {} {} {}", kind, customer, name, movie),
        }
    }
}
