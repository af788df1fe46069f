//! Customers and their transaction history

use crate::error::{Error, Result};
use crate::types::{next_token, CustomerId, MovieHandle};

/// Kind of rental transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// A copy left the store
    Borrow,
    /// A copy came back
    Return,
}

impl TransactionKind {
    /// Label used in history lines
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Borrow => "Borrow",
            TransactionKind::Return => "Return",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed borrow or return. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    movie: MovieHandle,
}

impl Transaction {
    /// Create a transaction record
    pub fn new(kind: TransactionKind, movie: MovieHandle) -> Self {
        Self { kind, movie }
    }

    /// Borrow or return
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The movie involved
    pub fn movie(&self) -> MovieHandle {
        self.movie
    }
}

/// A store customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    last_name: String,
    first_name: String,
    /// Chronological, append-only
    transactions: Vec<Transaction>,
}

impl Customer {
    /// Create a customer with an empty history
    pub fn new(id: CustomerId, last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            transactions: Vec::new(),
        }
    }

    /// Parse a customer load line: `<id> <last> <first>`.
    ///
    /// Tokens after the first name are ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let (id, rest) = next_token(line).ok_or_else(|| Error::parse("empty customer line"))?;
        let (last, rest) = next_token(rest).ok_or(Error::MissingField { field: "last name" })?;
        let (first, _) = next_token(rest).ok_or(Error::MissingField { field: "first name" })?;
        Ok(Customer::new(CustomerId::parse(id)?, last, first))
    }

    /// Customer id
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// `"<last> <first>"`, the form used in every report line
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// `"<first> <last>"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Append a transaction to the history
    pub fn record(&mut self, kind: TransactionKind, movie: MovieHandle) {
        self.transactions.push(Transaction::new(kind, movie));
    }

    /// History, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Borrows minus returns for one movie.
    pub fn net_outstanding(&self, movie: MovieHandle) -> i64 {
        self.transactions
            .iter()
            .filter(|t| t.movie == movie)
            .map(|t| match t.kind {
                TransactionKind::Borrow => 1,
                TransactionKind::Return => -1,
            })
            .sum()
    }

    /// True when the customer currently holds at least one copy of `movie`.
    pub fn has_borrowed(&self, movie: MovieHandle) -> bool {
        self.net_outstanding(movie) > 0
    }
}
