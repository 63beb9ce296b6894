//! Costcache - A bounded in-memory key-value cache
//!
//! Provides a typed mapping from hashable keys to values with cost-aware
//! eviction, entry-count and total-cost budgets, and synchronous eviction
//! notifications through a registered delegate.
//!
//! # Example
//!
//! ```
//! use costcache::{Cache, CacheConfig};
//!
//! let config = CacheConfig {
//!     name: "thumbnails".to_string(),
//!     count_limit: 2,
//!     ..CacheConfig::default()
//! };
//! let mut cache = Cache::with_config(config);
//!
//! cache.set("a", 1);
//! cache.set("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1));
//!
//! // A third entry pushes the cache over its count budget and the least
//! // recently used entry is evicted.
//! cache.set("c", 3);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! # Thread Safety
//!
//! The cache performs no internal synchronization. Concurrent use requires an
//! external lock (`Mutex` or `RwLock`) or a single-owner discipline.

mod config;
mod delegate;
mod entry;
mod index;
mod iter;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use config::CacheConfig;
pub use delegate::EvictionDelegate;
pub use iter::EntryIter;
pub use stats::CacheStats;
pub use store::Cache;

// == Public Constants ==
/// Cost assigned by [`Cache::set`] when the caller does not provide one.
pub const DEFAULT_COST: u64 = 0;
