//! Key Index Module
//!
//! Tracks the set of live keys independently of the eviction policy's store,
//! giving O(1) membership checks and a read-only key view.

use std::collections::HashSet;
use std::hash::Hash;

// == Key Index ==
/// Set of keys currently held by the cache.
///
/// Enumeration is snapshot-at-start: [`KeyIndex::snapshot`] freezes the key
/// set before iteration begins, so mutations during consumption of the
/// produced sequence never invalidate it.
#[derive(Debug, Default)]
pub(crate) struct KeyIndex<K> {
    /// Live keys
    keys: HashSet<K>,
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty key index.
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    // == Insert ==
    /// Adds a key to the index. Inserting a present key is a no-op.
    pub fn insert(&mut self, key: K) {
        self.keys.insert(key);
    }

    // == Contains ==
    /// Checks whether a key is tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    // == Remove ==
    /// Removes a key from the index. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) {
        self.keys.remove(key);
    }

    // == Clear ==
    /// Removes every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    // == Snapshot ==
    /// Returns a frozen copy of the current key set for one enumeration pass.
    pub fn snapshot(&self) -> Vec<K> {
        self.keys.iter().cloned().collect()
    }

    // == View ==
    /// Borrows the backing set as a read-only view.
    pub fn as_set(&self) -> &HashSet<K> {
        &self.keys
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
