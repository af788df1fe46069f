//! End-to-end tests: loading, command dispatch, and the store's
//! observable guarantees.

#[path = "../common/mod.rs"]
mod common;

mod files;
mod inventory;
mod key_symmetry;
mod scenarios;
