//! # assay-engine
//!
//! Orchestration for Assay: the [`Engine`] facade exposes every operation
//! external callers use.
//!
//! | Operation | Cached | Failure mode |
//! |---|---|---|
//! | [`Engine::screen_project`] | by fingerprint | any analyzer failure is fatal |
//! | [`Engine::screen_ngo`] | by fingerprint | any analyzer failure is fatal |
//! | [`Engine::verify_milestone`] | no | per-evidence failures tolerated |
//! | [`Engine::process_support_message`] | Q&A index | never fails |
//! | [`Engine::translate_text`] | by language pair + text | service unavailable |
//! | [`Engine::analyze_document`] | by type + url | service unavailable |
//!
//! Adapters and the cache are injected as trait objects; [`Engine::from_config`]
//! wires the HTTP adapters from configuration.

pub mod fanout;
pub mod scoring;
pub mod settings;

mod cache_io;
mod error;
mod screening;
mod services;
mod support;
mod verification;

pub use error::EngineError;
pub use screening::{NgoAnalyzers, ProjectAnalyzers};
pub use settings::{Budgets, Settings};

use std::future::Future;
use std::sync::Arc;

use assay_adapters::{
    AdapterClient, Analyzer, AnswerGenerator, DocumentAnalyzer, EvidenceAnalyzer, HttpAnalyzer,
    HttpAnswerGenerator, HttpDocumentAnalyzer, HttpEvidenceAnalyzer, HttpMilestoneVerifier,
    HttpQaIndex, HttpTranslator, MemoryQaIndex, MilestoneVerifier, QaIndex, Translator,
};
use assay_cache::{FingerprintCache, RateLimiter};
use assay_config::{AdaptersConfig, AssayConfig, ConfigError};

use crate::cache_io::ResultCache;

// ── Adapters ───────────────────────────────────────────────────────

/// Every external capability the engine calls.
#[derive(Clone)]
pub struct Adapters {
    pub project: ProjectAnalyzers,
    pub ngo: NgoAnalyzers,
    pub evidence: Arc<dyn EvidenceAnalyzer>,
    pub verifier: Arc<dyn MilestoneVerifier>,
    pub answers: Arc<dyn AnswerGenerator>,
    pub qa_index: Arc<dyn QaIndex>,
    pub translator: Arc<dyn Translator>,
    pub documents: Arc<dyn DocumentAnalyzer>,
}

impl Adapters {
    /// HTTP adapters for every capability, sharing one client.
    ///
    /// An empty `qa_index_path` keeps the Q&A index in process.
    #[must_use]
    pub fn http(config: &AdaptersConfig) -> Self {
        let client = AdapterClient::new(&config.api_key);
        let analyzer_endpoint = config.endpoint(&config.analyzer_path);
        let analyzer = |dimension| -> Arc<dyn Analyzer> {
            Arc::new(HttpAnalyzer::new(
                client.clone(),
                dimension,
                &analyzer_endpoint,
            ))
        };

        let qa_index: Arc<dyn QaIndex> = if config.qa_index_path.is_empty() {
            Arc::new(MemoryQaIndex::new())
        } else {
            Arc::new(HttpQaIndex::new(
                client.clone(),
                config.endpoint(&config.qa_index_path),
            ))
        };

        Self {
            project: ProjectAnalyzers::from_fn(analyzer),
            ngo: NgoAnalyzers::from_fn(analyzer),
            evidence: Arc::new(HttpEvidenceAnalyzer::new(
                client.clone(),
                config.endpoint(&config.evidence_path),
            )),
            verifier: Arc::new(HttpMilestoneVerifier::new(
                client.clone(),
                config.endpoint(&config.verification_path),
            )),
            answers: Arc::new(HttpAnswerGenerator::new(
                client.clone(),
                config.endpoint(&config.support_path),
            )),
            qa_index,
            translator: Arc::new(HttpTranslator::new(
                client.clone(),
                config.endpoint(&config.translation_path),
            )),
            documents: Arc::new(HttpDocumentAnalyzer::new(
                client,
                config.endpoint(&config.document_path),
            )),
        }
    }
}

// ── Engine ─────────────────────────────────────────────────────────

/// The screening and verification engine.
///
/// Cheap to share behind an `Arc`; every method takes `&self` and calls for
/// different fingerprints never contend.
pub struct Engine {
    adapters: Adapters,
    cache: ResultCache,
    settings: Settings,
    support_limiter: Option<RateLimiter>,
}

impl Engine {
    #[must_use]
    pub fn new(adapters: Adapters, cache: Arc<dyn FingerprintCache>, settings: Settings) -> Self {
        let support_limiter = (settings.support_rate_limit > 0).then(|| {
            RateLimiter::new(
                cache.clone(),
                "support",
                settings.support_rate_limit,
                settings.support_rate_window,
            )
        });
        Self {
            adapters,
            cache: ResultCache::new(cache),
            settings,
            support_limiter,
        }
    }

    /// Validate `config` and wire HTTP adapters from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if validation fails, or
    /// [`ConfigError::NotConfigured`] if no adapter base URL is set.
    pub fn from_config(
        config: &AssayConfig,
        cache: Arc<dyn FingerprintCache>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !config.adapters.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "adapters".into(),
            });
        }
        Ok(Self::new(
            Adapters::http(&config.adapters),
            cache,
            Settings::from_config(config),
        ))
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run `operation` under the request timeout. Dropping the inner future
    /// on expiry cancels every adapter call it started.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, EngineError>>,
    ) -> Result<T, EngineError> {
        let limit = self.settings.request_timeout;
        tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
            tracing::warn!(operation, after_secs = limit.as_secs(), "engine: request timed out");
            Err(EngineError::RequestTimedOut {
                operation,
                after_secs: limit.as_secs(),
            })
        })
    }
}
