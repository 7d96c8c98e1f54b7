//! # assay-cache
//!
//! Content-addressed key/value cache with per-key TTL.
//!
//! The [`FingerprintCache`] trait is the capability orchestrators are given:
//! `get`, `set`, `increment`, `expire`. The cache is an optimization, not a
//! dependency, so callers are expected to treat [`CacheError`] as a miss.
//!
//! - [`MemoryCache`]: moka-backed in-process implementation
//! - [`RateLimiter`]: fixed-window limiter built on `increment` + `expire`

mod error;
mod memory;
mod rate_limit;

pub use error::CacheError;
pub use memory::MemoryCache;
pub use rate_limit::{RateDecision, RateLimiter};

use std::time::Duration;

use async_trait::async_trait;

/// Key/value store shared by concurrent orchestrator calls.
///
/// Implementations must be safe for unsynchronized concurrent access across
/// unrelated keys. Writes to the same key are last-write-wins.
#[async_trait]
pub trait FingerprintCache: Send + Sync {
    /// Fetch a live value. Expired entries are misses.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key` for `ttl`, replacing any previous value and TTL.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Add one to the integer at `key` and return the new value.
    ///
    /// A missing key starts at 0 and gets no TTL; an existing key keeps its TTL.
    async fn increment(&self, key: &str) -> Result<i64, CacheError>;

    /// Reset the TTL of an existing key. Returns `false` if the key was absent.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, CacheError>;
}
