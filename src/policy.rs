//! Eviction Policy Module
//!
//! Owns the key-to-entry store, the recency ordering, and the aggregate
//! cost/count accounting. Victim selection is approximate LRU: every insert
//! or access pushes a freshly stamped pair onto a queue, and selection pops
//! from the front, discarding pairs whose stamp no longer matches the live
//! entry. Stale pairs are pruned during victim selection and compacted away
//! whenever the queue outgrows the live set, so touch stays amortized O(1)
//! and the queue stays at O(live entries).

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::entry::CacheEntry;

// == Eviction Policy ==
/// Entry store with approximate-LRU victim selection and cost accounting.
#[derive(Debug)]
pub(crate) struct EvictionPolicy<K, V> {
    /// Key-to-entry storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency queue of (stamp, key) pairs; front = least recently used.
    /// Pairs whose stamp disagrees with the live entry are stale.
    queue: VecDeque<(u64, K)>,
    /// Monotonic recency clock
    clock: u64,
    /// Running sum of live entry costs
    total_cost: u64,
}

impl<K, V> EvictionPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty policy store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            queue: VecDeque::new(),
            clock: 0,
            total_cost: 0,
        }
    }

    // == Tick ==
    /// Advances the recency clock and returns a fresh stamp.
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    // == Put ==
    /// Inserts or replaces an entry, returning the previous value if the key
    /// was already present. Replacement adjusts the cost sum in place.
    pub fn put(&mut self, key: K, value: V, cost: u64) -> Option<V> {
        let stamp = self.tick();
        self.queue.push_back((stamp, key.clone()));
        self.total_cost = self.total_cost.saturating_add(cost);

        let previous = self
            .entries
            .insert(key, CacheEntry::new(value, cost, stamp));
        let replaced = previous.map(|old| {
            self.total_cost = self.total_cost.saturating_sub(old.cost);
            old.value
        });
        self.compact();
        replaced
    }

    // == Get ==
    /// Returns the live value for a key and refreshes its recency.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.entries.contains_key(key) {
            return None;
        }
        let stamp = self.tick();
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stamp = stamp;
        }
        self.queue.push_back((stamp, key.clone()));
        self.compact();

        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Returns the live value for a key without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Peek Entry ==
    /// Returns the stored key and value without touching recency. The key
    /// reference borrows from the store, which lets iterators hand out keys
    /// that outlive their own snapshot buffer.
    pub fn peek_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.entries
            .get_key_value(key)
            .map(|(k, entry)| (k, &entry.value))
    }

    // == Delete ==
    /// Removes an entry, returning its value and cost. Absent keys return
    /// None. The entry's queue pair becomes stale and is pruned lazily.
    pub fn delete(&mut self, key: &K) -> Option<(V, u64)> {
        let entry = self.entries.remove(key)?;
        self.total_cost = self.total_cost.saturating_sub(entry.cost);
        Some((entry.value, entry.cost))
    }

    // == Select Victim ==
    /// Returns the least recently used live key, or None when the store is
    /// empty. The returned key is always present; callers evict it with
    /// [`EvictionPolicy::delete`], which strictly shrinks the live set.
    pub fn select_victim(&mut self) -> Option<K> {
        while let Some((stamp, key)) = self.queue.pop_front() {
            let live = self
                .entries
                .get(&key)
                .is_some_and(|entry| entry.stamp == stamp);
            if live {
                return Some(key);
            }
            // Stale pair: the key was touched again or deleted since.
        }
        None
    }

    // == Compact ==
    /// Drains stale pairs once the queue outgrows twice the live set.
    ///
    /// Each live entry has exactly one matching pair, so compaction leaves
    /// `queue.len() == entries.len()` and can only fire again after at least
    /// `entries.len()` further pushes, keeping touch amortized O(1). Without
    /// this, a cache that never exceeds its budgets would grow the queue by
    /// one pair per operation forever.
    fn compact(&mut self) {
        if self.queue.len() <= self.entries.len().saturating_mul(2) {
            return;
        }
        let entries = &self.entries;
        self.queue
            .retain(|(stamp, key)| entries.get(key).is_some_and(|entry| entry.stamp == *stamp));
    }

    // == Clear ==
    /// Removes every entry and resets the cost accounting.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.queue.clear();
        self.total_cost = 0;
    }

    // == Total Cost ==
    /// Returns the sum of costs over all live entries.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    // == Count ==
    /// Returns the number of live entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Current recency queue length, exposed to assert the compaction bound.
    #[cfg(test)]
    fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
