//! Comedy ('F'): sorted by title, then year.

use std::fmt;

use super::{parse_number, Movie, MovieData};
use crate::error::{Error, Result};
use crate::types::{next_token, trim_field};

/// A comedy, sorted by title then year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comedy {
    data: MovieData,
}

impl Comedy {
    /// Genre code
    pub const CODE: char = 'F';

    /// Blank comedy, to be filled by [`Movie::parse_data`].
    pub fn new() -> Self {
        Self::default()
    }

    fn search_error(reason: &str) -> Error {
        Error::InvalidSearchKey {
            genre: Self::CODE,
            reason: reason.to_string(),
        }
    }
}

impl Movie for Comedy {
    fn movie_type(&self) -> char {
        Self::CODE
    }

    fn genre_name(&self) -> &'static str {
        "Comedy"
    }

    fn data(&self) -> &MovieData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut MovieData {
        &mut self.data
    }

    // F, <stock>, <director>, <title>, <year>
    fn parse_data(&mut self, raw: &str) -> Result<()> {
        let (mut data, rest) = MovieData::parse_prefix(raw)?;
        data.year = parse_number("year", rest)?;
        self.data = data;
        Ok(())
    }

    fn sorting_key(&self) -> String {
        format!("{} {:04}", self.data.title, self.data.year)
    }

    // <title>, <year>
    fn create_search_key(&self, params: &str) -> Result<String> {
        let (title, rest) = params
            .split_once(',')
            .ok_or_else(|| Self::search_error("expected '<title>, <year>'"))?;
        let title = trim_field(title);
        if title.is_empty() {
            return Err(Self::search_error("empty title"));
        }
        let (year_text, _) = next_token(rest).ok_or_else(|| Self::search_error("missing year"))?;
        let year: i32 = year_text
            .parse()
            .map_err(|_| Self::search_error(&format!("invalid year '{}'", year_text)))?;
        Ok(format!("{},{}", title, year))
    }

    fn search_key(&self) -> String {
        format!("{},{}", self.data.title, self.data.year)
    }

    fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "{}, {}, {} ({}) - {}",
            self.data.title,
            self.data.year,
            self.data.director,
            self.data.stock,
            self.genre_name()
        )
    }
}
