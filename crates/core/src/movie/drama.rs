//! Drama ('D'): sorted by director, then title.

use std::fmt;

use super::{parse_number, Movie, MovieData};
use crate::error::{Error, Result};
use crate::types::trim_field;

/// A drama, sorted by director then title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drama {
    data: MovieData,
}

impl Drama {
    /// Genre code
    pub const CODE: char = 'D';

    /// Blank drama, to be filled by [`Movie::parse_data`].
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

impl Movie for Drama {
    fn movie_type(&self) -> char {
        Self::CODE
    }

    fn genre_name(&self) -> &'static str {
        "Drama"
    }

    fn data(&self) -> &MovieData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut MovieData {
        &mut self.data
    }

    // D, <stock>, <director>, <title>, <year>
    fn parse_data(&mut self, raw: &str) -> Result<()> {
        let (mut data, rest) = MovieData::parse_prefix(raw)?;
        data.year = parse_number("year", rest)?;
        self.data = data;
        Ok(())
    }

    fn sorting_key(&self) -> String {
        format!("{} {}", self.data.director, self.data.title)
    }

    // <director>, <title>   (the command file usually ends the title with a comma)
    fn create_search_key(&self, params: &str) -> Result<String> {
        let (director, title) = params
            .split_once(',')
            .ok_or_else(|| Self::search_error("expected '<director>, <title>'"))?;
        let director = trim_field(director);
        let title = trim_field(title);
        let title = trim_field(title.strip_suffix(',').unwrap_or(title));
        if director.is_empty() {
            return Err(Self::search_error("empty director"));
        }
        if title.is_empty() {
            return Err(Self::search_error("empty title"));
        }
        Ok(format!("{},{}", director, title))
    }

    fn search_key(&self) -> String {
        format!("{},{}", self.data.director, self.data.title)
    }

    fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "{}, {}, {} ({}) - {}",
            self.data.director,
            self.data.title,
            self.data.year,
            self.data.stock,
            self.genre_name()
        )
    }
}
