//! In-memory cache using moka.
//!
//! Per-entry TTL via a custom [`Expiry`], TinyLFU eviction once
//! `max_entries` is reached.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::ops::compute::Op;
use moka::sync::Cache;

use crate::{CacheError, FingerprintCache};

/// How a write affects the entry's remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifetime {
    /// Expire `Duration` after this write.
    For(Duration),
    /// Keep whatever lifetime the entry already had (none for new entries).
    Keep,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    lifetime: Lifetime,
}

struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        match entry.lifetime {
            Lifetime::For(ttl) => Some(ttl),
            Lifetime::Keep => None,
        }
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _updated_at: Instant,
        duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        match entry.lifetime {
            Lifetime::For(ttl) => Some(ttl),
            Lifetime::Keep => duration_until_expiry,
        }
    }
}

/// In-process [`FingerprintCache`].
///
/// Never returns [`CacheError::Unavailable`]; the only failure is
/// incrementing a non-integer value.
pub struct MemoryCache {
    entries: Cache<String, CacheEntry>,
}

impl MemoryCache {
    /// Create a cache holding at most `max_entries` live keys.
    #[must_use]
    pub fn new(max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(EntryExpiry)
            .build();
        Self { entries }
    }

    /// Approximate number of live entries.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FingerprintCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                lifetime: Lifetime::For(ttl),
            },
        );
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64, CacheError> {
        let mut outcome = Ok(0);
        self.entries
            .entry(key.to_string())
            .and_upsert_with(|existing| match existing {
                Some(current) => {
                    let current = current.into_value();
                    match current.value.parse::<i64>() {
                        Ok(count) => {
                            outcome = Ok(count + 1);
                            CacheEntry {
                                value: (count + 1).to_string(),
                                lifetime: Lifetime::Keep,
                            }
                        }
                        Err(_) => {
                            outcome = Err(CacheError::NotAnInteger {
                                key: key.to_string(),
                            });
                            CacheEntry {
                                lifetime: Lifetime::Keep,
                                ..current
                            }
                        }
                    }
                }
                None => {
                    outcome = Ok(1);
                    CacheEntry {
                        value: String::from("1"),
                        lifetime: Lifetime::Keep,
                    }
                }
            });
        outcome
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, CacheError> {
        let mut found = false;
        self.entries
            .entry(key.to_string())
            .and_compute_with(|existing| match existing {
                Some(current) => {
                    found = true;
                    Op::Put(CacheEntry {
                        lifetime: Lifetime::For(ttl),
                        ..current.into_value()
                    })
                }
                None => Op::Nop,
            });
        Ok(found)
    }
}
