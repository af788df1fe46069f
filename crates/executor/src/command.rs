//! Command enum defining every store operation.
//!
//! Commands are pure data: one is built per input line by the
//! [`CommandRegistry`](crate::CommandRegistry), handed to the
//! [`Executor`](crate::Executor), and dropped afterwards.
//!
//! | Code | Command | Parameters |
//! |------|---------|------------|
//! | `I` | Inventory | none (trailing text ignored) |
//! | `H` | History | `<customer id>` (trailing text ignored) |
//! | `B` | Borrow | `<customer id> <media> <genre> <search parameters>` |
//! | `R` | Return | same as Borrow |

use reelstore_core::types::{next_code, next_token};
use reelstore_core::{CustomerId, Error, MovieRegistry, Result, MEDIA_DVD};

/// Target of a Borrow or Return: who, and which movie. Only DVDs
/// ([`MEDIA_DVD`]) are carried, so the media code is checked and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRequest {
    /// Customer making the request
    pub customer: CustomerId,
    /// Genre code of the movie
    pub genre: char,
    /// Canonical search key built by the genre from the command text
    pub search_key: String,
}

impl MovieRequest {
    /// Parse `<customer id> <media> <genre> <search parameters>`.
    ///
    /// The search parameters are handed to a blank record of `<genre>`,
    /// which turns them into the genre's canonical search key.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCustomerId`] for a malformed id
    /// - [`Error::InvalidMediaType`] for media other than `D`
    /// - [`Error::UnknownGenre`] for an unregistered genre code
    /// - whatever the genre's search-key grammar rejects
    pub fn parse(params: &str, movies: &MovieRegistry) -> Result<Self> {
        let (id, rest) = next_token(params).ok_or(Error::MissingField {
            field: "customer id",
        })?;
        let customer = CustomerId::parse(id)?;

        let (media, rest) = next_code(rest).ok_or(Error::MissingField { field: "media type" })?;
        if media != MEDIA_DVD {
            return Err(Error::InvalidMediaType { media });
        }

        let (genre, rest) = next_code(rest).ok_or(Error::MissingField { field: "movie type" })?;
        let search_key = movies.create(genre)?.create_search_key(rest)?;

        Ok(MovieRequest {
            customer,
            genre,
            search_key,
        })
    }
}

/// A store command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every movie, grouped by genre in sort order
    Inventory,
    /// Show one customer's transactions
    History {
        /// Customer to report on
        customer: CustomerId,
    },
    /// Lend one copy of a movie
    Borrow(MovieRequest),
    /// Take one copy back
    Return(MovieRequest),
}

impl Command {
    /// One-character command code
    pub fn code(&self) -> char {
        match self {
            Command::Inventory => 'I',
            Command::History { .. } => 'H',
            Command::Borrow(_) => 'B',
            Command::Return(_) => 'R',
        }
    }

    /// Short label for logs: `Inventory`, `History <id>`,
    /// `Borrow <id> <key>`, `Return <id> <key>`.
    pub fn describe(&self) -> String {
        match self {
            Command::Inventory => "Inventory".to_string(),
            Command::History { customer } => format!("History {}", customer),
            Command::Borrow(request) => format!("Borrow {} {}", request.customer, request.search_key),
            Command::Return(request) => format!("Return {} {}", request.customer, request.search_key),
        }
    }
}

/// `I`: no parameters.
pub(crate) fn parse_inventory(_params: &str, _movies: &MovieRegistry) -> Result<Command> {
    Ok(Command::Inventory)
}

/// `H <customer id>`
pub(crate) fn parse_history(params: &str, _movies: &MovieRegistry) -> Result<Command> {
    let (id, _) = next_token(params).ok_or(Error::MissingField {
        field: "customer id",
    })?;
    Ok(Command::History {
        customer: CustomerId::parse(id)?,
    })
}

/// `B <customer id> <media> <genre> <search parameters>`
pub(crate) fn parse_borrow(params: &str, movies: &MovieRegistry) -> Result<Command> {
    MovieRequest::parse(params, movies).map(Command::Borrow)
}

/// `R <customer id> <media> <genre> <search parameters>`
pub(crate) fn parse_return(params: &str, movies: &MovieRegistry) -> Result<Command> {
    MovieRequest::parse(params, movies).map(Command::Return)
}
