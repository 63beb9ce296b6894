//! Delegate Channel Module
//!
//! The eviction-notification contract. A cache holds at most one delegate,
//! registered as a weak reference: the cache never extends the delegate's
//! lifetime, and a dropped delegate simply silences notifications.

// == Eviction Delegate ==
/// Observer notified synchronously whenever the cache evicts an entry under
/// budget pressure or during [`trim`](crate::Cache::trim).
///
/// The callback runs on the caller's thread, strictly before the mutating
/// call that triggered the eviction returns, once per victim in victim
/// selection order. Explicit [`remove`](crate::Cache::remove) and
/// [`remove_all`](crate::Cache::remove_all) do not notify; neither does a
/// plain overwrite of an existing key.
///
/// The cache holds `&mut self` while the callback runs, so the delegate
/// cannot call back into the same cache; record what you need and act on it
/// after the mutating call returns.
pub trait EvictionDelegate<K, V>: Send + Sync {
    /// Called with the evicted key and value, immediately before both are
    /// dropped.
    fn on_evict(&self, key: &K, value: &V);
}
