//! Command handlers organized by concern.
//!
//! | Module | Commands | Touches |
//! |--------|----------|---------|
//! | `inventory` | Inventory | every genre index (read) |
//! | `history` | History | customer index, transactions (read) |
//! | `rental` | Borrow, Return | customer index, genre index, stock, transactions (write) |
//!
//! Handlers either complete their effect and return an [`Output`](crate::Output)
//! or fail before mutating anything.

pub mod history;
pub mod inventory;
pub mod rental;
