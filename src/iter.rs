//! Iteration Module
//!
//! A pull-based lazy iterator over (key, value) pairs. The key set is frozen
//! into a snapshot when the iterator is created; each pull resolves the next
//! candidate key against the live store and silently skips keys whose value
//! is gone. An evicted key is never surfaced and never a fault.

use std::hash::Hash;

use crate::store::Cache;

// == Entry Iterator ==
/// Self-healing iterator over the cache's live `(key, value)` pairs.
///
/// Yielded key references borrow from the cache's own store, not from the
/// snapshot, so they live as long as the borrow of the cache itself.
pub struct EntryIter<'a, K, V>
where
    K: 'static,
    V: 'static,
{
    cache: &'a Cache<K, V>,
    /// Keys frozen at creation time
    snapshot: Vec<K>,
    /// Next candidate position within the snapshot
    position: usize,
}

impl<'a, K, V> EntryIter<'a, K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    pub(crate) fn new(cache: &'a Cache<K, V>, snapshot: Vec<K>) -> Self {
        Self {
            cache,
            snapshot,
            position: 0,
        }
    }
}

impl<'a, K, V> Iterator for EntryIter<'a, K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.snapshot.len() {
            let candidate = &self.snapshot[self.position];
            self.position += 1;

            // Self-healing: a snapshot key with no live value was evicted
            // after the snapshot was taken; drop it and advance.
            if let Some(pair) = self.cache.peek_entry(candidate) {
                return Some(pair);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Any remaining candidate may have been evicted
        (0, Some(self.snapshot.len() - self.position))
    }
}

impl<'a, K, V> IntoIterator for &'a Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    type Item = (&'a K, &'a V);
    type IntoIter = EntryIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
