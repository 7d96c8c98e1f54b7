//! Typed JSON access to the fingerprint cache.
//!
//! The cache is an optimization: every backend or decode failure is logged
//! and reported to the caller as a miss, and failed writes are dropped.

use std::sync::Arc;
use std::time::Duration;

use assay_cache::FingerprintCache;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ResultCache {
    backend: Arc<dyn FingerprintCache>,
}

impl ResultCache {
    pub fn new(backend: Arc<dyn FingerprintCache>) -> Self {
        Self { backend }
    }

    /// Decoded value at `key`, or `None` on miss, backend failure, or stale shape.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "cache: miss");
                return None;
            }
            Err(error) => {
                tracing::warn!(key, %error, "cache: read failed; computing directly");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(key, "cache: hit");
                Some(value)
            }
            Err(error) => {
                tracing::warn!(key, %error, "cache: undecodable entry; treating as miss");
                None
            }
        }
    }

    /// Encode and store `value` for `ttl`. Never fails the caller.
    pub async fn store<T: Serialize + Sync>(&self, key: &str, value: &T, ttl: Duration) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(key, %error, "cache: failed to encode entry");
                return;
            }
        };
        if let Err(error) = self.backend.set(key, raw, ttl).await {
            tracing::warn!(key, %error, "cache: write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_cache::{CacheError, MemoryCache};
    use async_trait::async_trait;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        score: f64,
    }

    struct DownCache;

    #[async_trait]
    impl FingerprintCache for DownCache {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }
        async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }
        async fn increment(&self, _key: &str) -> Result<i64, CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }
        async fn expire(&self, _key: &str, _ttl: Duration) -> Result<bool, CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn store_then_load() {
        let cache = ResultCache::new(Arc::new(MemoryCache::new(16)));
        cache
            .store("k", &Entry { score: 0.1 + 0.2 }, Duration::from_secs(60))
            .await;
        let loaded: Option<Entry> = cache.load("k").await;
        assert_eq!(loaded, Some(Entry { score: 0.1 + 0.2 }));
    }

    #[tokio::test]
    async fn undecodable_entry_is_a_miss() {
        let backend = Arc::new(MemoryCache::new(16));
        backend
            .set("k", "not json".into(), Duration::from_secs(60))
            .await
            .unwrap();
        let cache = ResultCache::new(backend);
        assert_eq!(cache.load::<Entry>("k").await, None);
    }

    #[tokio::test]
    async fn backend_failure_is_a_miss_and_writes_are_dropped() {
        let cache = ResultCache::new(Arc::new(DownCache));
        cache
            .store("k", &Entry { score: 1.0 }, Duration::from_secs(60))
            .await;
        assert_eq!(cache.load::<Entry>("k").await, None);
    }
}
