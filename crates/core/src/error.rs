//! Error types for reelstore
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error outside [`ErrorCategory::System`] is local to a single input
//! line or record: the caller reports it and moves on to the next line.

use std::io;
use thiserror::Error;

/// Result type alias for reelstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], used for reporting and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed load-file line
    Parse,
    /// Unregistered genre or command code
    UnknownType,
    /// Rejected command parameter
    Validation,
    /// Well-formed request the current state cannot satisfy
    Domain,
    /// Key collision on insert
    Duplicate,
    /// Input source or configuration failure
    System,
}

impl ErrorCategory {
    /// Short lowercase name for log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Parse => "parse",
            ErrorCategory::UnknownType => "unknown_type",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Domain => "domain",
            ErrorCategory::Duplicate => "duplicate",
            ErrorCategory::System => "system",
        }
    }
}

/// Error types for reelstore
#[derive(Debug, Error)]
pub enum Error {
    // ==================== Parse ====================
    /// A load line could not be split into the expected fields
    #[error("malformed line: {reason}")]
    Parse {
        /// What was wrong with the line
        reason: String,
    },

    /// A required text field was empty after trimming
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// A numeric field did not parse
    #[error("invalid {field} '{value}'")]
    InvalidNumber {
        /// Field name
        field: &'static str,
        /// Raw text that failed to parse
        value: String,
    },

    // ==================== Unknown type codes ====================
    /// Genre code not present in the registry
    #[error("unknown movie type '{code}'")]
    UnknownGenre {
        /// Offending code
        code: char,
    },

    /// Command code not present in the registry
    #[error("unknown command type '{code}'")]
    UnknownCommand {
        /// Offending code
        code: char,
    },

    // ==================== Validation ====================
    /// Customer id is not exactly four ASCII digits
    #[error("invalid customer ID '{id}'")]
    InvalidCustomerId {
        /// Offending id text
        id: String,
    },

    /// Media type other than 'D'
    #[error("invalid media type '{media}'")]
    InvalidMediaType {
        /// Offending media code
        media: char,
    },

    /// Release month outside 1..=12
    #[error("release month {month} out of range 1..12")]
    MonthOutOfRange {
        /// Offending month
        month: i64,
    },

    /// Genre-specific command parameters did not form a search key
    #[error("invalid search parameters for movie type '{genre}': {reason}")]
    InvalidSearchKey {
        /// Genre whose grammar was applied
        genre: char,
        /// What was wrong
        reason: String,
    },

    // ==================== Domain ====================
    /// No customer with this id
    #[error("customer {id} not found")]
    CustomerNotFound {
        /// Requested id
        id: String,
    },

    /// No movie of this genre matches the search key
    #[error("movie not found: type '{genre}', key '{key}'")]
    MovieNotFound {
        /// Genre searched
        genre: char,
        /// Canonical search key
        key: String,
    },

    /// Borrow attempted with zero copies on hand
    #[error("{customer} could NOT borrow {title}, out of stock")]
    OutOfStock {
        /// Customer display name
        customer: String,
        /// Movie title
        title: String,
    },

    /// Return attempted for a movie the customer does not hold
    #[error("{customer} does not have {title} checked out")]
    NotBorrowed {
        /// Customer display name
        customer: String,
        /// Movie title
        title: String,
    },

    // ==================== Duplicate ====================
    /// Customer id already present; the first entry wins
    #[error("customer with ID {id} already exists")]
    DuplicateCustomer {
        /// Colliding id
        id: String,
    },

    /// Type code registered twice in the same registry
    #[error("type code '{code}' already registered")]
    DuplicateTypeCode {
        /// Colliding code
        code: char,
    },

    // ==================== System ====================
    /// I/O error (input sources)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An input source could not be opened or read
    #[error("could not open {path}: {source}")]
    SourceUnavailable {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The movie source produced no usable records
    #[error("no movies loaded from {path}")]
    EmptyCatalog {
        /// Movie source path
        path: String,
    },

    /// Configuration file could not be read or is invalid
    #[error("configuration error: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Build a [`Error::Parse`] from anything displayable.
    pub fn parse(reason: impl Into<String>) -> Self {
        Error::Parse {
            reason: reason.into(),
        }
    }

    /// Build a [`Error::Config`] from anything displayable.
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Parse { .. } | Error::MissingField { .. } | Error::InvalidNumber { .. } => {
                ErrorCategory::Parse
            }
            Error::UnknownGenre { .. } | Error::UnknownCommand { .. } => ErrorCategory::UnknownType,
            Error::InvalidCustomerId { .. }
            | Error::InvalidMediaType { .. }
            | Error::MonthOutOfRange { .. }
            | Error::InvalidSearchKey { .. } => ErrorCategory::Validation,
            Error::CustomerNotFound { .. }
            | Error::MovieNotFound { .. }
            | Error::OutOfStock { .. }
            | Error::NotBorrowed { .. } => ErrorCategory::Domain,
            Error::DuplicateCustomer { .. } | Error::DuplicateTypeCode { .. } => {
                ErrorCategory::Duplicate
            }
            Error::Io(_)
            | Error::SourceUnavailable { .. }
            | Error::EmptyCatalog { .. }
            | Error::Config { .. } => ErrorCategory::System,
        }
    }

    /// True when the run cannot continue past this error.
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::System
    }
}
