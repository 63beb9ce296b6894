//! Cache Entry Module
//!
//! Defines the stored unit for a single key: its value, its caller-assigned
//! cost, and the recency stamp used for victim selection.

// == Cache Entry ==
/// A single stored value with its eviction bookkeeping.
///
/// Entries are owned exclusively by the cache engine and never leave the
/// crate; callers only ever see the contained value.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Caller-assigned non-negative weight, summed against the cost budget
    pub cost: u64,
    /// Recency marker; refreshed on every insert and access
    pub stamp: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry with the given cost and recency stamp.
    pub fn new(value: V, cost: u64, stamp: u64) -> Self {
        Self { value, cost, stamp }
    }
}
