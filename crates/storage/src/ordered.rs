//! Ordered index: an unbalanced binary search tree
//!
//! `OrderedIndex<T>` keeps items in the order defined by a comparator supplied
//! at each insertion. It never rebalances: inserting already-sorted input
//! yields a list-shaped tree with O(n) depth. Datasets here are small and the
//! dominant lookup path is a full predicate scan anyway.
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `insert` | O(depth) | `Less` goes left; `Equal`/`Greater` go right, no dedup |
//! | `find_by_key` | O(depth) | only meaningful if the key agrees with insertion order |
//! | `find_by_predicate` | O(n) | in-order scan, first match wins |
//! | `iter` / `for_each_in_order` | O(n) | ascending comparator order |
//!
//! There is no removal. Insertion, traversal and teardown are iterative so a
//! degenerate tree cannot exhaust the stack.

use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree ordered by a caller-supplied comparator.
///
/// Not `Clone`: the tree exclusively owns its node structure.
#[derive(Debug)]
pub struct OrderedIndex<T> {
    root: Link<T>,
    len: usize,
}

impl<T> OrderedIndex<T> {
    /// Create an empty index
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `item`, placing it with `compare(item, existing)`.
    ///
    /// Items comparing equal to an existing one are placed to its right, so
    /// equal items traverse in insertion order.
    pub fn insert<F>(&mut self, item: T, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if compare(&item, &node.item) == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(item));
        self.len += 1;
    }

    /// Descend by key: the first node whose extracted key equals `key`.
    ///
    /// Only correct when `extract` orders items the same way the insertion
    /// comparator did.
    pub fn find_by_key<K, F>(&self, key: &K, mut extract: F) -> Option<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&extract(&node.item)) {
                Ordering::Equal => return Some(&node.item),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Full in-order scan for the first item satisfying `predicate`.
    ///
    /// Visits every node in the worst case regardless of tree shape.
    pub fn find_by_predicate<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(*item))
    }

    /// Visit every item in ascending comparator order.
    pub fn for_each_in_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit)
    }

    /// In-order iterator (left, node, right).
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Depth of the deepest leaf (0 for an empty tree).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<T> Default for OrderedIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedIndex<T> {
    fn drop(&mut self) {
        // Detach children before each node drops so teardown never recurses.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedIndex<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedIndex`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut cursor: Option<&'a Node<T>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
