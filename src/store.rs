//! Cache Store Module
//!
//! Main cache engine combining the key index with the eviction policy,
//! enforcing the cost and count budgets after every mutation, and notifying
//! the registered delegate once per evicted entry.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Weak};

use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::delegate::EvictionDelegate;
use crate::index::KeyIndex;
use crate::iter::EntryIter;
use crate::policy::EvictionPolicy;
use crate::stats::CacheStats;
use crate::DEFAULT_COST;

// == Cache ==
/// Bounded key-value cache with cost-aware eviction.
///
/// Keys need `Eq + Hash + Clone`; a key must not change its hash while
/// stored. Values are owned by the cache and handed back by reference.
///
/// All operations are synchronous and infallible: a miss is `None`, never an
/// error, and a miss does not reveal whether the key was evicted or never
/// inserted. The cache performs no internal locking; wrap it in a `Mutex` or
/// `RwLock` for concurrent use.
pub struct Cache<K, V>
where
    K: 'static,
    V: 'static,
{
    /// Live-key membership view
    index: KeyIndex<K>,
    /// Entry storage, recency ordering, and cost accounting
    policy: EvictionPolicy<K, V>,
    /// Budgets and identity
    config: CacheConfig,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Non-owning observer slot; a dead reference silences notifications
    delegate: Option<Weak<dyn EvictionDelegate<K, V>>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    // == Constructors ==
    /// Creates an empty cache with unlimited budgets.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with the given configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            index: KeyIndex::new(),
            policy: EvictionPolicy::new(),
            config,
            stats: CacheStats::new(),
            delegate: None,
        }
    }

    // == Set ==
    /// Inserts or replaces an entry with the default cost of zero.
    ///
    /// See [`Cache::set_with_cost`].
    pub fn set(&mut self, key: K, value: V) {
        self.set_with_cost(key, value, DEFAULT_COST);
    }

    /// Inserts or replaces an entry with an explicit cost.
    ///
    /// Replacing an existing key drops the old value silently; an overwrite
    /// is not an eviction and the delegate is not notified. After the entry
    /// is stored, budgets are re-checked and least-recently-used entries are
    /// evicted (with one delegate notification each) until both budgets hold.
    ///
    /// An entry whose own cost exceeds a nonzero `total_cost_limit` is still
    /// accepted, then immediately becomes its own victim: it is evicted right
    /// after insertion with a delegate notification, leaving the rest of the
    /// cache intact. There is no reject path for oversized entries.
    pub fn set_with_cost(&mut self, key: K, value: V, cost: u64) {
        self.index.insert(key.clone());
        if self.policy.put(key.clone(), value, cost).is_some() {
            trace!(cache = %self.config.name, "overwrote existing entry");
        }

        let cost_limit = self.config.total_cost_limit;
        if cost_limit > 0 && cost > cost_limit {
            // The entry alone breaks the budget: it is its own victim.
            self.evict(&key);
        }
        self.enforce_budgets();
    }

    // == Get ==
    /// Returns the live value for a key, or `None` if it is missing or was
    /// evicted. Refreshes the entry's recency and records a hit or miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.policy.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Returns the live value for a key without refreshing recency or
    /// touching the hit/miss counters.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.policy.peek(key)
    }

    /// Returns the stored key and value without side effects. Used by the
    /// iteration protocol.
    pub(crate) fn peek_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.policy.peek_entry(key)
    }

    // == Remove ==
    /// Removes an entry, returning its value. Removing an absent key is a
    /// no-op returning `None`. Explicit removal is not an eviction; the
    /// delegate is not notified.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.index.remove(key);
        self.policy.delete(key).map(|(value, _cost)| value)
    }

    // == Remove All ==
    /// Removes every entry. No delegate notifications fire.
    pub fn remove_all(&mut self) {
        let removed = self.policy.count();
        self.index.clear();
        self.policy.clear();
        trace!(cache = %self.config.name, removed, "cleared all entries");
    }

    // == Keys ==
    /// Read-only view of the live key set. O(1) to obtain; order is
    /// unspecified.
    pub fn keys(&self) -> &HashSet<K> {
        self.index.as_set()
    }

    /// Whether a key currently holds a live value.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    // == Iteration ==
    /// Lazy iterator over `(key, value)` pairs.
    ///
    /// The key set is frozen when the iterator is created; keys evicted
    /// between snapshot and consumption are silently skipped, never
    /// surfaced and never a fault.
    pub fn iter(&self) -> EntryIter<'_, K, V> {
        EntryIter::new(self, self.index.snapshot())
    }

    // == Positional Access ==
    /// Returns the value at a position within the current key view.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range or stale. Positions are only
    /// meaningful against an unmutated cache: do not retain them across
    /// mutations. Use [`Cache::iter`] for a tolerant traversal.
    pub fn value_at(&self, position: usize) -> &V {
        let key = self
            .index
            .as_set()
            .iter()
            .nth(position)
            .unwrap_or_else(|| panic!("cache position {position} is out of range"));
        self.policy.peek(key).unwrap_or_else(|| {
            panic!("cache position {position} is stale; do not retain positions across mutations")
        })
    }

    // == Trim ==
    /// Re-runs budget enforcement, evicting (with delegate notifications)
    /// until both budgets hold. Entry point for external memory-pressure
    /// collaborators; a no-op when the cache is already within budget.
    ///
    /// Returns the number of entries evicted.
    pub fn trim(&mut self) -> usize {
        let evicted = self.enforce_budgets();
        debug!(cache = %self.config.name, evicted, "trim completed");
        evicted
    }

    // == Delegate Registration ==
    /// Registers the eviction observer. The cache stores a weak reference
    /// and never extends the delegate's lifetime; once the last strong
    /// reference drops, evictions proceed silently.
    pub fn set_delegate(&mut self, delegate: &Arc<dyn EvictionDelegate<K, V>>) {
        self.delegate = Some(Arc::downgrade(delegate));
    }

    /// Unregisters the eviction observer.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // == Configuration Accessors ==
    /// Cosmetic identifier carried in log events.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Renames the cache; affects log events only.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
    }

    /// Total cost budget (0 = unlimited).
    pub fn total_cost_limit(&self) -> u64 {
        self.config.total_cost_limit
    }

    /// Updates the cost budget. Lowering it below the current total cost
    /// evicts entries (delegate-visible) before this call returns.
    pub fn set_total_cost_limit(&mut self, limit: u64) {
        self.config.total_cost_limit = limit;
        debug!(cache = %self.config.name, limit, "total cost limit changed");
        self.enforce_budgets();
    }

    /// Entry count budget (0 = unlimited).
    pub fn count_limit(&self) -> usize {
        self.config.count_limit
    }

    /// Updates the count budget. Lowering it below the current count evicts
    /// entries (delegate-visible) before this call returns.
    pub fn set_count_limit(&mut self, limit: usize) {
        self.config.count_limit = limit;
        debug!(cache = %self.config.name, limit, "count limit changed");
        self.enforce_budgets();
    }

    /// Advisory flag with no behavioral effect here; stored and returned.
    pub fn evicts_discarded_content(&self) -> bool {
        self.config.evicts_discarded_content
    }

    /// Updates the advisory flag; stored verbatim, triggers nothing.
    pub fn set_evicts_discarded_content(&mut self, evicts: bool) {
        self.config.evicts_discarded_content = evicts;
    }

    // == Occupancy ==
    /// Current number of live entries.
    pub fn len(&self) -> usize {
        self.policy.count()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.policy.count() == 0
    }

    /// Current sum of live entry costs.
    pub fn total_cost(&self) -> u64 {
        self.policy.total_cost()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.policy.count(), self.policy.total_cost());
        stats
    }

    // == Budget Enforcement ==
    /// Evicts least-recently-used entries until both nonzero budgets hold.
    /// Returns the number of entries evicted.
    fn enforce_budgets(&mut self) -> usize {
        let mut evicted = 0;
        loop {
            let over_count =
                self.config.count_limit > 0 && self.policy.count() > self.config.count_limit;
            let over_cost = self.config.total_cost_limit > 0
                && self.policy.total_cost() > self.config.total_cost_limit;
            if !over_count && !over_cost {
                break;
            }
            // select_victim only returns live keys; None means the store is
            // empty and the loop must stop.
            let Some(victim) = self.policy.select_victim() else {
                break;
            };
            self.evict(&victim);
            evicted += 1;
        }
        evicted
    }

    /// Removes one entry from both structures and notifies the delegate
    /// before the value is dropped.
    fn evict(&mut self, key: &K) {
        self.index.remove(key);
        if let Some((value, cost)) = self.policy.delete(key) {
            self.stats.record_eviction();
            debug!(cache = %self.config.name, cost, "evicted entry");
            if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
                delegate.on_evict(key, &value);
            }
        }
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("name", &self.config.name)
            .field("len", &self.policy.count())
            .field("total_cost", &self.policy.total_cost())
            .field("count_limit", &self.config.count_limit)
            .field("total_cost_limit", &self.config.total_cost_limit)
            .finish_non_exhaustive()
    }
}

// == Construction From Sequences ==
// Later duplicates overwrite earlier ones, matching `set` semantics.

impl<K, V> Extend<(K, V)> for Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cache = Cache::new();
        cache.extend(iter);
        cache
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Cache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every eviction it observes.
    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<(String, i32)>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<(String, i32)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EvictionDelegate<String, i32> for Recorder {
        fn on_evict(&self, key: &String, value: &i32) {
            self.events.lock().unwrap().push((key.clone(), *value));
        }
    }

    fn counted_cache(count_limit: usize) -> Cache<String, i32> {
        Cache::with_config(CacheConfig {
            name: "test".to_string(),
            count_limit,
            ..CacheConfig::default()
        })
    }

    fn costed_cache(total_cost_limit: u64) -> Cache<String, i32> {
        Cache::with_config(CacheConfig {
            name: "test".to_string(),
            total_cost_limit,
            ..CacheConfig::default()
        })
    }

    #[test]
    fn test_cache_new() {
        let cache: Cache<String, i32> = Cache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.total_cost(), 0);
    }

    #[test]
    fn test_cache_set_and_get() {
        let mut cache = Cache::new();

        cache.set("key1".to_string(), 1);

        assert_eq!(cache.get(&"key1".to_string()), Some(&1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let mut cache: Cache<String, i32> = Cache::new();
        assert_eq!(cache.get(&"nonexistent".to_string()), None);
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = Cache::new();

        cache.set("key1".to_string(), 1);
        cache.set("key1".to_string(), 2);

        assert_eq!(cache.get(&"key1".to_string()), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_overwrite_does_not_notify() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = counted_cache(10);
        cache.set_delegate(&delegate);

        cache.set("key1".to_string(), 1);
        cache.set("key1".to_string(), 2);

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_cache_remove() {
        let mut cache = Cache::new();

        cache.set("key1".to_string(), 1);

        assert_eq!(cache.remove(&"key1".to_string()), Some(1));
        assert!(cache.is_empty());
        assert!(!cache.contains(&"key1".to_string()));
    }

    #[test]
    fn test_cache_remove_idempotent() {
        let mut cache: Cache<String, i32> = Cache::new();

        assert_eq!(cache.remove(&"absent".to_string()), None);
        assert_eq!(cache.remove(&"absent".to_string()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_remove_does_not_notify() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = counted_cache(10);
        cache.set_delegate(&delegate);

        cache.set("key1".to_string(), 1);
        cache.remove(&"key1".to_string());

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_cache_remove_all() {
        let mut cache = Cache::new();

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.remove_all();

        assert!(cache.is_empty());
        assert!(cache.keys().is_empty());
        assert_eq!(cache.total_cost(), 0);
        assert_eq!(cache.get(&"key1".to_string()), None);
    }

    #[test]
    fn test_cache_remove_all_does_not_notify() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = counted_cache(10);
        cache.set_delegate(&delegate);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.remove_all();

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_cache_count_limit_eviction() {
        let mut cache = counted_cache(3);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);
        // At capacity: key4 evicts key1 (oldest)
        cache.set("key4".to_string(), 4);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&"key1".to_string()), None);
        assert_eq!(cache.get(&"key2".to_string()), Some(&2));
        assert_eq!(cache.get(&"key3".to_string()), Some(&3));
        assert_eq!(cache.get(&"key4".to_string()), Some(&4));
    }

    #[test]
    fn test_cache_get_refreshes_recency() {
        let mut cache = counted_cache(3);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);

        // Touch key1 so key2 becomes the eviction candidate
        cache.get(&"key1".to_string());
        cache.set("key4".to_string(), 4);

        assert_eq!(cache.get(&"key1".to_string()), Some(&1));
        assert_eq!(cache.get(&"key2".to_string()), None);
    }

    #[test]
    fn test_cache_peek_does_not_refresh_recency() {
        let mut cache = counted_cache(2);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);

        cache.peek(&"key1".to_string());
        cache.set("key3".to_string(), 3);

        // key1 stayed oldest despite the peek
        assert_eq!(cache.peek(&"key1".to_string()), None);
        assert_eq!(cache.peek(&"key2".to_string()), Some(&2));
    }

    #[test]
    fn test_cache_cost_limit_eviction() {
        let mut cache = costed_cache(10);

        cache.set_with_cost("key1".to_string(), 1, 4);
        cache.set_with_cost("key2".to_string(), 2, 4);
        // 4 + 4 + 4 > 10: key1 is evicted
        cache.set_with_cost("key3".to_string(), 3, 4);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.total_cost(), 8);
        assert_eq!(cache.peek(&"key1".to_string()), None);
    }

    #[test]
    fn test_cache_cost_cascade_evicts_multiple() {
        let mut cache = costed_cache(10);

        cache.set_with_cost("key1".to_string(), 1, 3);
        cache.set_with_cost("key2".to_string(), 2, 3);
        cache.set_with_cost("key3".to_string(), 3, 3);
        // Needs 8 units freed: key1 and key2 both go
        cache.set_with_cost("key4".to_string(), 4, 7);

        assert_eq!(cache.total_cost(), 10);
        assert_eq!(cache.peek(&"key1".to_string()), None);
        assert_eq!(cache.peek(&"key2".to_string()), None);
        assert_eq!(cache.peek(&"key3".to_string()), Some(&3));
        assert_eq!(cache.peek(&"key4".to_string()), Some(&4));
    }

    #[test]
    fn test_cache_oversized_entry_is_own_victim() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = costed_cache(10);
        cache.set_delegate(&delegate);

        cache.set_with_cost("small".to_string(), 1, 2);
        // Cost 11 > limit 10: accepted, then immediately evicted
        cache.set_with_cost("huge".to_string(), 2, 11);

        assert_eq!(cache.peek(&"huge".to_string()), None);
        // The rest of the cache is left intact
        assert_eq!(cache.peek(&"small".to_string()), Some(&1));
        assert_eq!(recorder.events(), vec![("huge".to_string(), 2)]);
    }

    #[test]
    fn test_cache_eviction_notifies_delegate_in_order() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = counted_cache(2);
        cache.set_delegate(&delegate);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);
        cache.set("key4".to_string(), 4);

        assert_eq!(
            recorder.events(),
            vec![("key1".to_string(), 1), ("key2".to_string(), 2)]
        );
    }

    #[test]
    fn test_cache_dropped_delegate_silences_notifications() {
        let mut cache = counted_cache(1);
        {
            let recorder = Arc::new(Recorder::default());
            let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder;
            cache.set_delegate(&delegate);
        }
        // The delegate is gone; evictions must proceed silently
        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek(&"key2".to_string()), Some(&2));
    }

    #[test]
    fn test_cache_clear_delegate() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = counted_cache(1);
        cache.set_delegate(&delegate);
        cache.clear_delegate();

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_cache_lower_count_limit_cascades() {
        let recorder = Arc::new(Recorder::default());
        let delegate: Arc<dyn EvictionDelegate<String, i32>> = recorder.clone();

        let mut cache = counted_cache(0);
        cache.set_delegate(&delegate);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);

        cache.set_count_limit(1);

        assert_eq!(cache.len(), 1);
        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn test_cache_lower_cost_limit_cascades() {
        let mut cache = costed_cache(0);

        cache.set_with_cost("key1".to_string(), 1, 5);
        cache.set_with_cost("key2".to_string(), 2, 5);
        cache.set_with_cost("key3".to_string(), 3, 5);

        cache.set_total_cost_limit(6);

        assert_eq!(cache.total_cost(), 5);
        assert_eq!(cache.peek(&"key3".to_string()), Some(&3));
    }

    #[test]
    fn test_cache_zero_limits_are_unlimited() {
        let mut cache: Cache<String, i32> = Cache::new();

        for i in 0..1000 {
            cache.set_with_cost(format!("key{}", i), i, 1000);
        }

        assert_eq!(cache.len(), 1000);
    }

    #[test]
    fn test_cache_keys_view_tracks_live_set() {
        let mut cache = counted_cache(2);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);

        let keys = cache.keys();
        assert_eq!(keys.len(), 2);
        assert!(!keys.contains("key1"));
        assert!(keys.contains("key2"));
        assert!(keys.contains("key3"));
    }

    #[test]
    fn test_cache_trim_within_budget_is_noop() {
        let mut cache = counted_cache(5);

        cache.set("key1".to_string(), 1);

        assert_eq!(cache.trim(), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_value_at_in_range() {
        let mut cache = Cache::new();
        cache.set("only".to_string(), 42);

        assert_eq!(*cache.value_at(0), 42);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cache_value_at_out_of_range_panics() {
        let cache: Cache<String, i32> = Cache::new();
        cache.value_at(0);
    }

    #[test]
    fn test_cache_stats_tracking() {
        let mut cache = counted_cache(1);

        cache.set("key1".to_string(), 1);
        cache.get(&"key1".to_string()); // hit
        cache.get(&"missing".to_string()); // miss
        cache.set("key2".to_string(), 2); // evicts key1

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.live_entries, 1);
    }

    #[test]
    fn test_cache_from_pairs_later_duplicates_win() {
        let cache = Cache::from([
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("a".to_string(), 3),
        ]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(&"a".to_string()), Some(&3));
        assert_eq!(cache.peek(&"b".to_string()), Some(&2));
    }

    #[test]
    fn test_cache_config_accessors() {
        let mut cache: Cache<String, i32> = Cache::new();

        cache.set_name("blob-cache");
        cache.set_count_limit(8);
        cache.set_total_cost_limit(256);
        cache.set_evicts_discarded_content(true);

        assert_eq!(cache.name(), "blob-cache");
        assert_eq!(cache.count_limit(), 8);
        assert_eq!(cache.total_cost_limit(), 256);
        assert!(cache.evicts_discarded_content());
    }
}
