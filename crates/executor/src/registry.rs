//! Command registry: one-character code -> parameter parser
//!
//! Built once before the first command line is read and passed to the
//! [`Session`](crate::Session). Lookups afterwards are pure reads.

use std::collections::HashMap;

use reelstore_core::types::next_code;
use reelstore_core::{Error, MovieRegistry, Result};

use crate::command::{self, Command};

/// Parses the text after a command code into a [`Command`].
///
/// The movie registry is available for commands whose parameters include a
/// genre-specific search grammar.
pub type CommandParser = fn(&str, &MovieRegistry) -> Result<Command>;

/// Registry of command codes.
pub struct CommandRegistry {
    parsers: HashMap<char, CommandParser>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        CommandRegistry {
            parsers: HashMap::new(),
        }
    }

    /// Registry with Inventory, History, Borrow and Return.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let builtins: [(char, CommandParser); 4] = [
            ('I', command::parse_inventory),
            ('H', command::parse_history),
            ('B', command::parse_borrow),
            ('R', command::parse_return),
        ];
        for (code, parser) in builtins {
            let registered = registry.register(code, parser);
            debug_assert!(registered.is_ok());
        }
        registry
    }

    /// Register a command code.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateTypeCode`] if `code` is taken; the first parser stays.
    pub fn register(&mut self, code: char, parser: CommandParser) -> Result<()> {
        if self.parsers.contains_key(&code) {
            return Err(Error::DuplicateTypeCode { code });
        }
        self.parsers.insert(code, parser);
        Ok(())
    }

    /// Build a command from a whole input line.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownCommand`] for an unregistered code, or whatever the
    /// command's parameter grammar rejects.
    pub fn parse_line(&self, line: &str, movies: &MovieRegistry) -> Result<Command> {
        let (code, params) = next_code(line).ok_or_else(|| Error::parse("empty command line"))?;
        let parser = self
            .parsers
            .get(&code)
            .ok_or(Error::UnknownCommand { code })?;
        parser(params, movies)
    }

    /// Check if a command code is registered
    pub fn contains(&self, code: char) -> bool {
        self.parsers.contains_key(&code)
    }

    /// Get the number of registered commands
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut codes: Vec<char> = self.parsers.keys().copied().collect();
        codes.sort_unstable();
        f.debug_struct("CommandRegistry")
            .field("codes", &codes)
            .finish()
    }
}
