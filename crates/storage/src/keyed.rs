//! Keyed index: a separate-chaining hash table
//!
//! `KeyedIndex<K, V>` maps unique keys to values with insert-if-absent
//! semantics: a second insert of the same key is rejected and the first value
//! is kept.
//!
//! # Design
//!
//! - Buckets are short inline chains (`SmallVec`), scanned linearly
//! - FxHash by default; any `BuildHasher` can be plugged in
//! - Load factor (entries / buckets) is kept at or below [`MAX_LOAD_FACTOR`]:
//!   the insert that breaches it doubles the bucket count and rehashes every
//!   entry before returning

use rustc_hash::FxHasher;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

/// Highest load factor tolerated after an insert completes.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Bucket count used by [`KeyedIndex::new`].
pub const DEFAULT_BUCKETS: usize = 101;

/// Default hasher: FxHash, fast and deterministic across runs.
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

type Bucket<K, V> = SmallVec<[(K, V); 2]>;

/// Hash table with separate chaining.
#[derive(Debug)]
pub struct KeyedIndex<K, V, S = FxBuildHasher> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    hasher: S,
}

fn empty_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    (0..count).map(|_| Bucket::new()).collect()
}

fn bucket_index<Q, S>(hasher: &S, key: &Q, bucket_count: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    let mut state = hasher.build_hasher();
    key.hash(&mut state);
    (state.finish() % bucket_count as u64) as usize
}

impl<K: Hash + Eq, V> KeyedIndex<K, V> {
    /// Create an empty index with [`DEFAULT_BUCKETS`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create an empty index with `bucket_count` buckets (at least one)
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, FxBuildHasher::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyedIndex<K, V, S> {
    /// Create an empty index with an explicit hasher
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(bucket_count.max(1)),
            len: 0,
            hasher,
        }
    }

    /// Insert `key -> value` if `key` is absent.
    ///
    /// Returns false, leaving the stored value untouched, when the key is
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let idx = bucket_index(&self.hasher, &key, self.buckets.len());
        if self.buckets[idx].iter().any(|(k, _)| *k == key) {
            return false;
        }
        self.buckets[idx].push((key, value));
        self.len += 1;

        while self.load_factor() > MAX_LOAD_FACTOR {
            self.grow();
        }
        true
    }

    /// Look up a value
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = bucket_index(&self.hasher, key, self.buckets.len());
        self.buckets[idx]
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// Look up a value for modification
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = bucket_index(&self.hasher, key, self.buckets.len());
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// Check if a key is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// All entries, in bucket order (not insertion order)
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Double the bucket count and rehash every entry.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut fresh = empty_buckets(new_count);
        for (key, value) in self.buckets.drain(..).flatten() {
            let idx = bucket_index(&self.hasher, &key, new_count);
            fresh[idx].push((key, value));
        }
        self.buckets = fresh;
    }
}

impl<K, V, S> KeyedIndex<K, V, S> {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }
}

impl<K: Hash + Eq, V> Default for KeyedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
