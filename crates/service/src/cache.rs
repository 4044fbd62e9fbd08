use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lru::LruCache;
use tracing::debug;

use gdd_core::GddError;

use crate::providers::ResultCache;

struct Entry {
    value: serde_json::Value,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL cache over an LRU map. Expired entries are dropped on
/// read; capacity keeps memory bounded under many users.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Entry>>,
}

impl MemoryCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(10_000)
    }
}

#[async_trait]
impl ResultCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, GddError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| GddError::Cache(e.to_string()))?;

        match entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => {
                debug!(key, "cache hit");
                Ok(Some(entry.value.clone()))
            }
            Some(_) => {
                debug!(key, "cache entry expired");
                entries.pop(key);
                Ok(None)
            }
            None => {
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    async fn set(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), GddError> {
        let expires_at = Utc::now()
            + chrono::Duration::from_std(ttl).map_err(|e| GddError::Cache(e.to_string()))?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| GddError::Cache(e.to_string()))?;
        entries.put(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), GddError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| GddError::Cache(e.to_string()))?;
        entries.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get() {
        let cache = MemoryCache::default();
        cache
            .set("k", json!({"total": 42.0}), Duration::from_secs(60))
            .await
            .unwrap();
        let value = cache.get("k").await.unwrap();
        assert_eq!(value, Some(json!({"total": 42.0})));
    }

    #[tokio::test]
    async fn expired_entry_reads_as_absent() {
        let cache = MemoryCache::default();
        cache
            .set("k", json!(1), Duration::from_secs(0))
            .await
            .unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let cache = MemoryCache::default();
        cache.set("k", json!(1), Duration::from_secs(60)).await.unwrap();
        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn lru_eviction_at_capacity() {
        let cache = MemoryCache::new(2);
        cache.set("a", json!(1), Duration::from_secs(60)).await.unwrap();
        cache.set("b", json!(2), Duration::from_secs(60)).await.unwrap();
        cache.set("c", json!(3), Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get("a").await.unwrap(), None);
        assert_eq!(cache.get("c").await.unwrap(), Some(json!(3)));
    }
}
