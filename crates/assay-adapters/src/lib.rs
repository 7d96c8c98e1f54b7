//! # assay-adapters
//!
//! Uniform adapter interfaces for Assay and their HTTP implementations.
//!
//! Every external capability the engine calls sits behind a one-method trait
//! so that remote, model-backed, rule-based, and fixture implementations are
//! interchangeable:
//! - [`Analyzer`]: score one dimension (feasibility, impact, risk, ...)
//! - [`EvidenceAnalyzer`]: analyze one milestone evidence item
//! - [`MilestoneVerifier`]: judge an evidence bundle against the criteria
//! - [`AnswerGenerator`] + [`QaIndex`]: support bot generation and reuse
//! - [`Translator`], [`DocumentAnalyzer`]: single-purpose services
//!
//! The HTTP implementations `POST` JSON to `<base_url><path>` and map the
//! response through the leniency policy in [`wire`].

pub mod analyzer;
pub mod document;
pub mod evidence;
pub mod qa_index;
pub mod support;
pub mod translation;
pub mod verification;
pub mod wire;

mod error;
mod http;

pub use analyzer::HttpAnalyzer;
pub use document::HttpDocumentAnalyzer;
pub use error::AdapterError;
pub use evidence::HttpEvidenceAnalyzer;
pub use qa_index::{DEFAULT_QA_CAPACITY, HttpQaIndex, MemoryQaIndex};
pub use support::HttpAnswerGenerator;
pub use translation::HttpTranslator;
pub use verification::HttpMilestoneVerifier;

use assay_core::analysis::AnalysisResult;
use assay_core::document::{DocumentAnalysisResult, DocumentRequest};
use assay_core::entities::{EvidenceAnalysis, EvidenceItem, NgoSubmission, ProjectSubmission};
use assay_core::support::{GeneratedAnswer, QaMatch, QaPair, SupportQuery};
use assay_core::translation::{TranslationRequest, TranslationResult};
use assay_core::verification::{MilestoneVerificationResult, VerificationRequest};
use async_trait::async_trait;
use serde::Serialize;

// ── Subjects ───────────────────────────────────────────────────────

/// The entity an analyzer is asked to score.
///
/// Serialized as `{"entityType": "project", "entity": {...}}`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "entityType", content = "entity", rename_all = "snake_case")]
pub enum Subject<'a> {
    Project(&'a ProjectSubmission),
    Ngo(&'a NgoSubmission),
}

// ── Traits ─────────────────────────────────────────────────────────

/// Scores one dimension of a submission.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, subject: Subject<'_>) -> Result<AnalysisResult, AdapterError>;
}

/// Analyzes one piece of milestone evidence.
#[async_trait]
pub trait EvidenceAnalyzer: Send + Sync {
    async fn analyze_evidence(&self, item: &EvidenceItem) -> Result<EvidenceAnalysis, AdapterError>;
}

/// Produces the verdict for a milestone's evidence bundle.
#[async_trait]
pub trait MilestoneVerifier: Send + Sync {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<MilestoneVerificationResult, AdapterError>;
}

/// Generates a fresh support answer.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(&self, query: &SupportQuery) -> Result<GeneratedAnswer, AdapterError>;
}

/// Similarity index over previously answered questions.
#[async_trait]
pub trait QaIndex: Send + Sync {
    /// Best stored match for `question` in `language`, if any.
    async fn nearest(&self, question: &str, language: &str)
    -> Result<Option<QaMatch>, AdapterError>;

    /// Store a pair for future reuse.
    async fn remember(&self, pair: QaPair) -> Result<(), AdapterError>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest)
    -> Result<TranslationResult, AdapterError>;
}

#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<DocumentAnalysisResult, AdapterError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// Shared HTTP client for all adapter endpoints.
///
/// Cheap to clone; clones share the connection pool. Per-call time budgets
/// are enforced by the caller (the engine's fan-out), so the client only
/// bounds connection setup.
#[derive(Clone)]
pub struct AdapterClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl AdapterClient {
    /// Create a client that sends `api_key` as a bearer token when non-empty.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("assay/0.1")
                .connect_timeout(std::time::Duration::from_secs(5))
                .build()
                .expect("reqwest client should build"),
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
        }
    }
}
