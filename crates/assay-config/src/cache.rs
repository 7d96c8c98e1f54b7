//! Fingerprint cache configuration.

use serde::{Deserialize, Serialize};

const fn default_max_entries() -> u64 {
    10_000
}

/// Screening results are content-addressed, so they can live for a week.
const fn default_screening_ttl_secs() -> u64 {
    7 * 24 * 60 * 60
}

const fn default_document_ttl_secs() -> u64 {
    24 * 60 * 60
}

const fn default_translation_ttl_secs() -> u64 {
    7 * 24 * 60 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of live entries in the in-memory cache.
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// TTL for project and NGO screening results.
    #[serde(default = "default_screening_ttl_secs")]
    pub screening_ttl_secs: u64,

    /// TTL for document analysis results.
    #[serde(default = "default_document_ttl_secs")]
    pub document_ttl_secs: u64,

    /// TTL for translations.
    #[serde(default = "default_translation_ttl_secs")]
    pub translation_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            screening_ttl_secs: default_screening_ttl_secs(),
            document_ttl_secs: default_document_ttl_secs(),
            translation_ttl_secs: default_translation_ttl_secs(),
        }
    }
}
