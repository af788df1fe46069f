//! Classic ('C'): sorted by release date, then major actor.
//!
//! The load line ends in a whitespace-separated segment rather than a comma
//! field: `C, <stock>, <director>, <title>, <first> <last> <month> <year>`.

use std::fmt;

use super::{parse_number, Movie, MovieData};
use crate::error::{Error, Result};
use crate::types::next_token;

/// A classic, sorted by release year and month, then major actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classic {
    data: MovieData,
    actor_first_name: String,
    actor_last_name: String,
    release_month: u32,
}

impl Classic {
    /// Genre code
    pub const CODE: char = 'C';

    /// Blank classic, to be filled by [`Movie::parse_data`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Major actor, first name
    pub fn actor_first_name(&self) -> &str {
        &self.actor_first_name
    }

    /// Major actor, last name
    pub fn actor_last_name(&self) -> &str {
        &self.actor_last_name
    }

    /// Release month, 1..=12
    pub fn release_month(&self) -> u32 {
        self.release_month
    }

    /// Release year (same as [`Movie::year`])
    pub fn release_year(&self) -> i32 {
        self.data.year
    }

    fn search_error(reason: &str) -> Error {
        Error::InvalidSearchKey {
            genre: Self::CODE,
            reason: reason.to_string(),
        }
    }
}

fn check_month(month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(Error::MonthOutOfRange {
            month: i64::from(month),
        })
    }
}

/// Pull `N` whitespace tokens off the front of `input`.
fn tokens<const N: usize>(input: &str) -> Option<[&str; N]> {
    let mut out = [""; N];
    let mut rest = input;
    for slot in out.iter_mut() {
        let (token, tail) = next_token(rest)?;
        *slot = token;
        rest = tail;
    }
    Some(out)
}

impl Movie for Classic {
    fn movie_type(&self) -> char {
        Self::CODE
    }

    fn genre_name(&self) -> &'static str {
        "Classics"
    }

    fn data(&self) -> &MovieData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut MovieData {
        &mut self.data
    }

    fn parse_data(&mut self, raw: &str) -> Result<()> {
        let (mut data, rest) = MovieData::parse_prefix(raw)?;
        let [first, last, month, year] = tokens::<4>(rest)
            .ok_or_else(|| Error::parse("expected '<first> <last> <month> <year>' after title"))?;

        let month = check_month(parse_number("month", month)?)?;
        data.year = parse_number("year", year)?;

        self.data = data;
        self.actor_first_name = first.to_string();
        self.actor_last_name = last.to_string();
        self.release_month = month;
        Ok(())
    }

    fn sorting_key(&self) -> String {
        format!(
            "{:04}{:02} {} {}",
            self.data.year, self.release_month, self.actor_first_name, self.actor_last_name
        )
    }

    // <month> <year> <first> <last>
    fn create_search_key(&self, params: &str) -> Result<String> {
        let [month, year, first, last] = tokens::<4>(params)
            .ok_or_else(|| Self::search_error("expected '<month> <year> <first> <last>'"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| Self::search_error(&format!("invalid month '{}'", month)))?;
        let month = check_month(month)?;
        let year: i32 = year
            .parse()
            .map_err(|_| Self::search_error(&format!("invalid year '{}'", year)))?;
        Ok(format!("{} {} {} {}", month, year, first, last))
    }

    fn search_key(&self) -> String {
        format!(
            "{} {} {} {}",
            self.release_month, self.data.year, self.actor_first_name, self.actor_last_name
        )
    }

    fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "{} {}, {} {}, {}, {} ({}) - {}",
            self.data.year,
            self.release_month,
            self.actor_first_name,
            self.actor_last_name,
            self.data.director,
            self.data.title,
            self.data.stock,
            self.genre_name()
        )
    }
}
