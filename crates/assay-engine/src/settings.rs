//! Resolved engine tuning, in the units the orchestrators use.

use std::time::Duration;

use assay_config::AssayConfig;

/// Per-adapter-kind call budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budgets {
    pub analyzer: Duration,
    pub evidence: Duration,
    pub verification: Duration,
    pub support: Duration,
    pub translation: Duration,
    pub document: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Bound on a whole orchestrator call.
    pub request_timeout: Duration,
    pub budgets: Budgets,
    pub screening_ttl: Duration,
    pub document_ttl: Duration,
    pub translation_ttl: Duration,
    pub evidence_concurrency: usize,
    pub qa_reuse_threshold: f64,
    pub qa_persist_threshold: f64,
    pub list_limit: usize,
    /// Support messages per user per window; 0 disables limiting.
    pub support_rate_limit: u64,
    pub support_rate_window: Duration,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &AssayConfig) -> Self {
        let t = &config.adapters.timeouts;
        Self {
            request_timeout: Duration::from_secs(config.engine.request_timeout_secs),
            budgets: Budgets {
                analyzer: Duration::from_secs(t.analyzer_secs),
                evidence: Duration::from_secs(t.evidence_secs),
                verification: Duration::from_secs(t.verification_secs),
                support: Duration::from_secs(t.support_secs),
                translation: Duration::from_secs(t.translation_secs),
                document: Duration::from_secs(t.document_secs),
            },
            screening_ttl: Duration::from_secs(config.cache.screening_ttl_secs),
            document_ttl: Duration::from_secs(config.cache.document_ttl_secs),
            translation_ttl: Duration::from_secs(config.cache.translation_ttl_secs),
            evidence_concurrency: config.engine.evidence_concurrency,
            qa_reuse_threshold: config.engine.qa_reuse_threshold,
            qa_persist_threshold: config.engine.qa_persist_threshold,
            list_limit: config.engine.list_limit,
            support_rate_limit: config.engine.support_rate_limit,
            support_rate_window: Duration::from_secs(config.engine.support_rate_window_secs),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&AssayConfig::default())
    }
}
