//! Integration tests for the two index structures, driven through the
//! public API with the key and handle types the catalog uses.

#[path = "../common/mod.rs"]
mod common;

mod keyed_index;
mod ordered_index;
