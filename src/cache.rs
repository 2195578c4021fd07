//! In-memory response cache
//!
//! Memoizes parsed catalog responses keyed by the full request URL for the
//! lifetime of the owning client. The upstream catalog is append-only per
//! historical query, so entries are never invalidated, refreshed, or expired.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::log_debug;

const MODULE: &str = "cache";

/// URL-keyed cache of parsed response bodies.
///
/// Keys are exact-match strings: two URLs that differ only in parameter
/// order are two distinct entries. Callers that want hits must build their
/// query strings deterministically.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl ResponseCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a cached response body.
    ///
    /// Returns a clone of the stored value; cached bodies are immutable
    /// once inserted. A poisoned lock degrades to a miss, since memoization
    /// is best-effort and must never fail a fetch.
    pub fn get(&self, url: &str) -> Option<Value> {
        let entries = self.entries.read().ok()?;
        let hit = entries.get(url).cloned();
        if hit.is_some() {
            log_debug!(MODULE, "Cache hit: {}", url);
        }
        hit
    }

    /// Store a response body under its exact request URL.
    ///
    /// Concurrent inserts for the same key are last-write-wins; both writers
    /// carry the same immutable upstream value, so the race is harmless.
    pub fn insert(&self, url: &str, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(url.to_string(), value);
            log_debug!(MODULE, "Cached response for {} ({} entries)", url, entries.len());
        }
    }

    /// Drop every entry (useful for a user-triggered refresh)
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
            log_debug!(MODULE, "Cleared response cache");
        }
    }

    /// Number of cached responses
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_miss_then_hit() {
        let cache = ResponseCache::new();
        assert!(cache.get("https://api.example/firmware?limit=50").is_none());

        cache.insert("https://api.example/firmware?limit=50", json!({"a": 1}));
        assert_eq!(
            cache.get("https://api.example/firmware?limit=50"),
            Some(json!({"a": 1}))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let cache = ResponseCache::new();
        cache.insert("https://api.example/firmware?a=1&b=2", json!(1));

        // Same parameters, different order: a distinct key
        assert!(cache.get("https://api.example/firmware?b=2&a=1").is_none());
        cache.insert("https://api.example/firmware?b=2&a=1", json!(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_insert_overwrites_existing_key() {
        let cache = ResponseCache::new();
        cache.insert("k", json!({"v": 1}));
        cache.insert("k", json!({"v": 2}));
        assert_eq!(cache.get("k"), Some(json!({"v": 2})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = ResponseCache::new();
        cache.insert("k", json!(null));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("k").is_none());
    }
}
