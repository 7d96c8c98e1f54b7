//! Orchestration tuning.

use serde::{Deserialize, Serialize};

const fn default_request_timeout_secs() -> u64 {
    60
}

const fn default_evidence_concurrency() -> usize {
    8
}

const fn default_qa_reuse_threshold() -> f64 {
    0.85
}

const fn default_qa_persist_threshold() -> f64 {
    0.7
}

/// Hard ceiling on recommendations and concerns in a screening result.
pub const MAX_LIST_LIMIT: usize = 10;

const fn default_list_limit() -> usize {
    MAX_LIST_LIMIT
}

const fn default_support_rate_limit() -> u64 {
    20
}

const fn default_support_rate_window_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Upper bound on a whole orchestrator call. Must exceed every adapter timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum evidence adapter calls in flight for one milestone.
    #[serde(default = "default_evidence_concurrency")]
    pub evidence_concurrency: usize,

    /// A stored Q&A pair above this similarity is returned without generating.
    #[serde(default = "default_qa_reuse_threshold")]
    pub qa_reuse_threshold: f64,

    /// A generated answer above this confidence is stored for reuse.
    #[serde(default = "default_qa_persist_threshold")]
    pub qa_persist_threshold: f64,

    /// Cap on recommendations and concerns in a screening result, in `1..=10`.
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Support messages allowed per user per window. 0 disables the limit.
    #[serde(default = "default_support_rate_limit")]
    pub support_rate_limit: u64,

    #[serde(default = "default_support_rate_window_secs")]
    pub support_rate_window_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            evidence_concurrency: default_evidence_concurrency(),
            qa_reuse_threshold: default_qa_reuse_threshold(),
            qa_persist_threshold: default_qa_persist_threshold(),
            list_limit: default_list_limit(),
            support_rate_limit: default_support_rate_limit(),
            support_rate_window_secs: default_support_rate_window_secs(),
        }
    }
}
