//! Movie records
//!
//! Every genre implements the [`Movie`] capability trait. The set of genres is
//! closed in practice (Comedy, Drama, Classic) but new ones only need a
//! [`Movie`] impl and an entry in the [`MovieRegistry`]:
//!
//! | Code | Genre | Sort order | Search grammar |
//! |------|-------|------------|----------------|
//! | `F` | [`Comedy`] | title, then year | `<title>, <year>` |
//! | `D` | [`Drama`] | director, then title | `<director>, <title>` |
//! | `C` | [`Classic`] | release year+month, then actor | `<month> <year> <first> <last>` |
//!
//! Stock is shared behaviour on [`MovieData`]: borrowing never drives it below
//! zero, returning always adds one copy.

mod classic;
mod comedy;
mod drama;
mod registry;

pub use classic::Classic;
pub use comedy::Comedy;
pub use drama::Drama;
pub use registry::{MovieConstructor, MovieRegistry};

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::types::trim_field;

/// Fields common to every genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieData {
    /// Copies on hand
    pub stock: u32,
    /// Director name
    pub director: String,
    /// Movie title
    pub title: String,
    /// Release year
    pub year: i32,
}

impl MovieData {
    /// Parse the `<stock>, <director>, <title>,` prefix shared by every load line.
    ///
    /// Returns the populated fields and the untouched remainder after the
    /// third comma.
    pub fn parse_prefix(raw: &str) -> Result<(MovieData, &str)> {
        let mut fields = raw.splitn(4, ',');
        let stock_text = fields.next().unwrap_or_default();
        let director = fields.next().map(trim_field).unwrap_or_default();
        let title = fields.next().map(trim_field).unwrap_or_default();
        let rest = fields
            .next()
            .ok_or_else(|| Error::parse("expected stock, director, title and a trailing field"))?;

        let stock = parse_number::<u32>("stock", stock_text)?;
        if director.is_empty() {
            return Err(Error::MissingField { field: "director" });
        }
        if title.is_empty() {
            return Err(Error::MissingField { field: "title" });
        }

        Ok((
            MovieData {
                stock,
                director: director.to_string(),
                title: title.to_string(),
                year: 0,
            },
            rest,
        ))
    }

    /// Take one copy out of stock. Returns false (and changes nothing) at zero.
    pub fn take_copy(&mut self) -> bool {
        if self.stock > 0 {
            self.stock -= 1;
            true
        } else {
            false
        }
    }

    /// Put one copy back.
    pub fn put_copy(&mut self) {
        self.stock += 1;
    }
}

/// Parse a trimmed numeric field, naming the field on failure.
pub(crate) fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T> {
    let text = trim_field(raw);
    text.parse::<T>().map_err(|_| Error::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Shared capability surface of every genre.
///
/// Instances are created blank by the [`MovieRegistry`] and filled by
/// [`parse_data`](Movie::parse_data). A blank instance is also what parses
/// command-line search parameters via [`create_search_key`](Movie::create_search_key).
pub trait Movie: fmt::Debug {
    /// One-character genre code ('F', 'D', 'C')
    fn movie_type(&self) -> char;

    /// Genre name as printed at the end of a display line
    fn genre_name(&self) -> &'static str;

    /// Shared fields
    fn data(&self) -> &MovieData;

    /// Shared fields, mutable
    fn data_mut(&mut self) -> &mut MovieData;

    /// Fill this record from the load-line text following `<code>,`.
    fn parse_data(&mut self, raw: &str) -> Result<()>;

    /// Key whose ascending lexical order is the genre's display order.
    fn sorting_key(&self) -> String;

    /// Parse command-line search parameters into a canonical search key.
    fn create_search_key(&self, params: &str) -> Result<String>;

    /// This record's own search key, in the format `create_search_key` yields.
    fn search_key(&self) -> String;

    /// Render the inventory line for this record.
    fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Order within a genre by sort key; across genres by genre code.
    fn compare(&self, other: &dyn Movie) -> Ordering {
        if self.movie_type() != other.movie_type() {
            return self.movie_type().cmp(&other.movie_type());
        }
        self.sorting_key().cmp(&other.sorting_key())
    }

    /// Take a copy out. False when out of stock.
    fn borrow_copy(&mut self) -> bool {
        self.data_mut().take_copy()
    }

    /// Put a copy back.
    fn return_copy(&mut self) {
        self.data_mut().put_copy()
    }

    /// Copies on hand
    fn stock(&self) -> u32 {
        self.data().stock
    }

    /// Movie title
    fn title(&self) -> &str {
        &self.data().title
    }

    /// Director name
    fn director(&self) -> &str {
        &self.data().director
    }

    /// Release year
    fn year(&self) -> i32 {
        self.data().year
    }

    /// Short `<code>:<search key>` label for log fields.
    fn describe(&self) -> String {
        format!("{}:{}", self.movie_type(), self.search_key())
    }
}

impl fmt::Display for dyn Movie + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display(f)
    }
}
