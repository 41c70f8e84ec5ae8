//! In-memory expiring cache for remote responses.
//!
//! The cache de-duplicates remote fetches within a bounded time window.
//! The freshness window (TTL) is a read-time parameter, never stored with
//! the entry, so the same cached value can serve callers with different
//! freshness tolerances. Expired entries are evicted lazily on the read
//! that observes them.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// A cached value together with its insertion time.
#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub value: V,

    /// Wall-clock time the value was inserted.
    pub inserted_at: DateTime<Utc>,
}

/// A process-wide key/value cache with per-read TTL expiration.
///
/// Cloning produces another handle to the same underlying store. All
/// operations are synchronous and infallible; mutations are atomic per key.
#[derive(Clone, Debug)]
pub struct ExpiringCache<V> {
    entries: Arc<DashMap<String, CacheEntry<V>>>,
}

impl<V> Default for ExpiringCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ExpiringCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Number of entries currently held, including not-yet-evicted stale ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes one entry unconditionally; no effect if absent.
    pub fn clear(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Removes all entries.
    pub fn clear_all(&self) {
        self.entries.clear();
    }
}

impl<V: Clone> ExpiringCache<V> {
    /// Stores a value under `key`, stamped with the current time.
    ///
    /// Unconditionally overwrites any existing entry for the key.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.put_at(key, value, Utc::now());
    }

    /// Stores a value under `key` with an explicit insertion time.
    pub fn put_at(&self, key: impl Into<String>, value: V, inserted_at: DateTime<Utc>) {
        self.entries
            .insert(key.into(), CacheEntry { value, inserted_at });
    }

    /// Returns the value under `key` if it is younger than `ttl`.
    ///
    /// A stale entry is removed and reported as absent. A fresh read does
    /// not touch the insertion time (no sliding expiration).
    pub fn get(&self, key: &str, ttl: Duration) -> Option<V> {
        {
            let entry = self.entries.get(key)?;
            if Utc::now() - entry.inserted_at < ttl {
                return Some(entry.value.clone());
            }
        }
        // The read guard is released before evicting; re-checking staleness
        // here keeps a concurrent fresh put from being clobbered.
        self.entries
            .remove_if(key, |_, entry| Utc::now() - entry.inserted_at >= ttl);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(n: i64) -> Duration {
        Duration::minutes(n)
    }

    #[test]
    fn test_get_returns_fresh_value() {
        let cache = ExpiringCache::new();
        cache.put("top_movers", 42);
        assert_eq!(cache.get("top_movers", minutes(10)), Some(42));
    }

    #[test]
    fn test_get_on_missing_key_is_absent() {
        let cache: ExpiringCache<i32> = ExpiringCache::new();
        assert_eq!(cache.get("nothing", minutes(10)), None);
    }

    #[test]
    fn test_expired_entry_is_evicted_not_hidden() {
        let cache = ExpiringCache::new();
        cache.put_at("overview_AAPL", "profile", Utc::now() - minutes(20));

        assert_eq!(cache.get("overview_AAPL", minutes(10)), None);
        // A later read with a huge TTL must still miss: the entry is gone
        assert_eq!(cache.get("overview_AAPL", Duration::days(365)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_serves() {
        let cache = ExpiringCache::new();
        cache.put("key", 1);
        assert_eq!(cache.get("key", minutes(0)), None);
    }

    #[test]
    fn test_no_sliding_expiration() {
        let cache = ExpiringCache::new();
        cache.put_at("key", 1, Utc::now() - minutes(5));

        // A fresh read must not refresh the insertion time
        assert_eq!(cache.get("key", minutes(10)), Some(1));
        assert_eq!(cache.get("key", minutes(4)), None);
    }

    #[test]
    fn test_put_overwrites_value_and_timestamp() {
        let cache = ExpiringCache::new();
        cache.put_at("key", 1, Utc::now() - minutes(20));
        cache.put("key", 2);

        assert_eq!(cache.get("key", minutes(10)), Some(2));
    }

    #[test]
    fn test_clear_single_key() {
        let cache = ExpiringCache::new();
        cache.put("a", 1);
        cache.put("b", 2);
        cache.clear("a");
        cache.clear("never_existed");

        assert_eq!(cache.get("a", minutes(10)), None);
        assert_eq!(cache.get("b", minutes(10)), Some(2));
    }

    #[test]
    fn test_clear_all() {
        let cache = ExpiringCache::new();
        cache.put("a", 1);
        cache.put("b", 2);
        cache.clear_all();

        assert_eq!(cache.get("a", minutes(10)), None);
        assert_eq!(cache.get("b", minutes(10)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_the_store() {
        let cache = ExpiringCache::new();
        let handle = cache.clone();
        handle.put("shared", 7);

        assert_eq!(cache.get("shared", minutes(10)), Some(7));
    }
}
