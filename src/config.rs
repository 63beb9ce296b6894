//! Configuration Module
//!
//! Holds the cache's budgets and identity. A zero limit means unlimited, so
//! every field value is valid; there is no fallible construction path.

use serde::{Deserialize, Serialize};

/// Cache configuration parameters.
///
/// All fields are public; construct with struct-update syntax over
/// [`CacheConfig::default`]. Limits of `0` disable the corresponding budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cosmetic identifier carried in log events; no behavioral effect
    pub name: String,
    /// Total cost budget across all entries (0 = unlimited)
    pub total_cost_limit: u64,
    /// Entry count budget (0 = unlimited)
    pub count_limit: usize,
    /// Advisory flag with no effect in this implementation; stored and
    /// returned for API compatibility with platform caches that honor it
    pub evicts_discarded_content: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            total_cost_limit: 0,
            count_limit: 0,
            evicts_discarded_content: false,
        }
    }
}
