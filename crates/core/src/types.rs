//! Core identifier types
//!
//! - [`MovieHandle`] / [`CustomerHandle`]: stable positions in the catalog's
//!   owning arenas. Indices and transactions hold these instead of references.
//! - [`CustomerId`]: validated four-digit customer identifier.

use std::fmt;

use crate::error::{Error, Result};

/// The only media type the store carries (DVD).
pub const MEDIA_DVD: char = 'D';

/// Stable handle to a movie owned by the catalog.
///
/// Handles are issued in insertion order and never reused; movies are never
/// removed during a run, so a handle stays valid for the catalog's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieHandle(pub(crate) usize);

impl MovieHandle {
    /// Create a handle from an arena position
    pub fn new(index: usize) -> Self {
        MovieHandle(index)
    }

    /// Arena position
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Stable handle to a customer owned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerHandle(pub(crate) usize);

impl CustomerHandle {
    /// Create a handle from an arena position
    pub fn new(index: usize) -> Self {
        CustomerHandle(index)
    }

    /// Arena position
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A customer identifier: exactly four ASCII digits.
///
/// Construction always validates, so any `CustomerId` in hand is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(String);

impl CustomerId {
    /// Number of digits in every id
    pub const LEN: usize = 4;

    /// Validate and wrap an id.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCustomerId`] unless `raw` is exactly four ASCII digits.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(CustomerId(raw.to_string()))
        } else {
            Err(Error::InvalidCustomerId { id: raw.to_string() })
        }
    }

    /// The id text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CustomerId::parse(s)
    }
}

/// Trim spaces and tabs from both ends of a field.
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c| c == ' ' || c == '\t')
}

/// Split off the first whitespace-delimited token, returning it and the rest.
///
/// Leading whitespace is skipped. The remainder keeps its own leading
/// whitespace so that later grammars can decide how to treat it.
pub fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some((&input[..end], &input[end..]))
}

/// Split off the first non-whitespace character, returning it and the rest.
pub fn next_code(input: &str) -> Option<(char, &str)> {
    let input = input.trim_start();
    let code = input.chars().next()?;
    Some((code, &input[code.len_utf8()..]))
}
