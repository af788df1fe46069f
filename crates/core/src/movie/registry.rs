//! Genre registry: one-character code -> blank-record constructor
//!
//! The registry is built once at startup and passed to whatever needs to
//! construct records (catalog loading, command parameter parsing). After
//! construction it is only read.
//!
//! ## Usage
//!
//! ```rust
//! use reelstore_core::movie::{Movie, MovieRegistry};
//!
//! let registry = MovieRegistry::standard();
//! let mut movie = registry.create('F').unwrap();
//! movie.parse_data(" 3, Joel Coen, Fargo, 1996").unwrap();
//! assert_eq!(movie.title(), "Fargo");
//! ```

use std::collections::HashMap;

use super::{Classic, Comedy, Drama, Movie};
use crate::error::{Error, Result};

/// Zero-argument constructor for a blank record of one genre.
pub type MovieConstructor = fn() -> Box<dyn Movie>;

/// Registry of genres
///
/// Keeps registration order, which is also the order the catalog lists
/// genres in its inventory.
pub struct MovieRegistry {
    /// Constructors in registration order
    entries: Vec<(char, MovieConstructor)>,
    /// Code -> position in `entries`
    by_code: HashMap<char, usize>,
}

impl MovieRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        MovieRegistry {
            entries: Vec::new(),
            by_code: HashMap::new(),
        }
    }

    /// Registry with the store's three genres: Comedy, Drama, Classic.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let builtins: [(char, MovieConstructor); 3] = [
            (Comedy::CODE, || Box::new(Comedy::new())),
            (Drama::CODE, || Box::new(Drama::new())),
            (Classic::CODE, || Box::new(Classic::new())),
        ];
        for (code, constructor) in builtins {
            // Codes above are distinct; a failure here would be a programming error.
            let registered = registry.register(code, constructor);
            debug_assert!(registered.is_ok());
        }
        registry
    }

    /// Register a genre.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateTypeCode`] if `code` is already registered; the
    /// existing constructor is kept.
    pub fn register(&mut self, code: char, constructor: MovieConstructor) -> Result<()> {
        if self.by_code.contains_key(&code) {
            return Err(Error::DuplicateTypeCode { code });
        }
        self.by_code.insert(code, self.entries.len());
        self.entries.push((code, constructor));
        Ok(())
    }

    /// Create a blank record for `code`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownGenre`] if nothing is registered under `code`.
    pub fn create(&self, code: char) -> Result<Box<dyn Movie>> {
        self.by_code
            .get(&code)
            .map(|&pos| (self.entries[pos].1)())
            .ok_or(Error::UnknownGenre { code })
    }

    /// Check if a genre code is registered
    pub fn contains(&self, code: char) -> bool {
        self.by_code.contains_key(&code)
    }

    /// Registered codes in registration order
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Get the number of registered genres
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MovieRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for MovieRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieRegistry")
            .field("codes", &self.codes().collect::<Vec<_>>())
            .finish()
    }
}
