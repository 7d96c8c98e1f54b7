//! Remote adapter endpoints and per-call timeouts.

use serde::{Deserialize, Serialize};

fn default_analyzer_path() -> String {
    String::from("/analyze")
}

fn default_evidence_path() -> String {
    String::from("/evidence/analyze")
}

fn default_verification_path() -> String {
    String::from("/milestones/verify")
}

fn default_support_path() -> String {
    String::from("/support/answer")
}

fn default_translation_path() -> String {
    String::from("/translate")
}

fn default_document_path() -> String {
    String::from("/documents/analyze")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdaptersConfig {
    /// Base URL of the analysis service (e.g. `https://ai.internal:8443`).
    #[serde(default)]
    pub base_url: String,

    /// Bearer token sent with every adapter call. Empty means no auth header.
    #[serde(default)]
    pub api_key: String,

    /// Analyzer path prefix; the dimension name is appended (`/analyze/risk`).
    #[serde(default = "default_analyzer_path")]
    pub analyzer_path: String,

    #[serde(default = "default_evidence_path")]
    pub evidence_path: String,

    #[serde(default = "default_verification_path")]
    pub verification_path: String,

    #[serde(default = "default_support_path")]
    pub support_path: String,

    /// Remote Q&A similarity index. Empty keeps the index in process.
    #[serde(default)]
    pub qa_index_path: String,

    #[serde(default = "default_translation_path")]
    pub translation_path: String,

    #[serde(default = "default_document_path")]
    pub document_path: String,

    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

impl Default for AdaptersConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            analyzer_path: default_analyzer_path(),
            evidence_path: default_evidence_path(),
            verification_path: default_verification_path(),
            support_path: default_support_path(),
            qa_index_path: String::new(),
            translation_path: default_translation_path(),
            document_path: default_document_path(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl AdaptersConfig {
    /// Check if the adapters have somewhere to send requests.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Join the base URL and a path without doubling slashes.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

const fn default_analyzer_secs() -> u64 {
    30
}

const fn default_evidence_secs() -> u64 {
    20
}

const fn default_verification_secs() -> u64 {
    30
}

const fn default_support_secs() -> u64 {
    15
}

const fn default_translation_secs() -> u64 {
    10
}

const fn default_document_secs() -> u64 {
    30
}

/// Per-call timeouts in seconds, one per adapter kind.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeoutConfig {
    #[serde(default = "default_analyzer_secs")]
    pub analyzer_secs: u64,
    #[serde(default = "default_evidence_secs")]
    pub evidence_secs: u64,
    #[serde(default = "default_verification_secs")]
    pub verification_secs: u64,
    #[serde(default = "default_support_secs")]
    pub support_secs: u64,
    #[serde(default = "default_translation_secs")]
    pub translation_secs: u64,
    #[serde(default = "default_document_secs")]
    pub document_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            analyzer_secs: default_analyzer_secs(),
            evidence_secs: default_evidence_secs(),
            verification_secs: default_verification_secs(),
            support_secs: default_support_secs(),
            translation_secs: default_translation_secs(),
            document_secs: default_document_secs(),
        }
    }
}

impl TimeoutConfig {
    /// Every timeout paired with its config field name.
    #[must_use]
    pub fn named(&self) -> [(&'static str, u64); 6] {
        [
            ("adapters.timeouts.analyzer_secs", self.analyzer_secs),
            ("adapters.timeouts.evidence_secs", self.evidence_secs),
            ("adapters.timeouts.verification_secs", self.verification_secs),
            ("adapters.timeouts.support_secs", self.support_secs),
            ("adapters.timeouts.translation_secs", self.translation_secs),
            ("adapters.timeouts.document_secs", self.document_secs),
        ]
    }
}
