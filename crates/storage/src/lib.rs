//! Index structures for reelstore
//!
//! Two containers, both generic and both holding handles rather than the
//! records themselves:
//! - OrderedIndex: unbalanced binary search tree, caller-supplied comparator
//! - KeyedIndex: separate-chaining hash table with insert-if-absent

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keyed;
pub mod ordered;

pub use keyed::{FxBuildHasher, KeyedIndex, DEFAULT_BUCKETS, MAX_LOAD_FACTOR};
pub use ordered::OrderedIndex;
