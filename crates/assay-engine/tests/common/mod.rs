//! Fake adapters and cache backends shared by the engine integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assay_adapters::{
    AdapterError, Analyzer, AnswerGenerator, DocumentAnalyzer, EvidenceAnalyzer, MemoryQaIndex,
    MilestoneVerifier, Subject, Translator,
};
use assay_cache::{CacheError, FingerprintCache, MemoryCache};
use assay_core::analysis::AnalysisResult;
use assay_core::document::{DocumentAnalysisResult, DocumentRequest};
use assay_core::entities::{EvidenceAnalysis, EvidenceItem, NgoSubmission, ProjectSubmission};
use assay_core::enums::{FindingStatus, VerificationCriterion};
use assay_core::support::{GeneratedAnswer, SupportQuery};
use assay_core::translation::{TranslationRequest, TranslationResult};
use assay_core::verification::{
    MilestoneVerificationResult, VerificationFinding, VerificationRequest,
};
use assay_engine::{Adapters, Engine, NgoAnalyzers, ProjectAnalyzers, Settings};
use async_trait::async_trait;

fn unavailable() -> AdapterError {
    AdapterError::Api {
        status: 503,
        message: "service unavailable".into(),
    }
}

// ── Analyzers ──────────────────────────────────────────────────────

/// Returns a fixed result and counts calls.
pub struct FixedAnalyzer {
    result: AnalysisResult,
    calls: AtomicUsize,
}

impl FixedAnalyzer {
    pub fn new(result: AnalysisResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for FixedAnalyzer {
    async fn analyze(&self, _subject: Subject<'_>) -> Result<AnalysisResult, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

pub struct FailingAnalyzer;

#[async_trait]
impl Analyzer for FailingAnalyzer {
    async fn analyze(&self, _subject: Subject<'_>) -> Result<AnalysisResult, AdapterError> {
        Err(unavailable())
    }
}

/// Never answers within any reasonable budget.
pub struct StalledAnalyzer;

#[async_trait]
impl Analyzer for StalledAnalyzer {
    async fn analyze(&self, _subject: Subject<'_>) -> Result<AnalysisResult, AdapterError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(AnalysisResult::new(50.0, 0.5))
    }
}

/// Answers after a fixed delay.
pub struct SlowAnalyzer {
    delay: Duration,
}

impl SlowAnalyzer {
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self { delay })
    }
}

#[async_trait]
impl Analyzer for SlowAnalyzer {
    async fn analyze(&self, _subject: Subject<'_>) -> Result<AnalysisResult, AdapterError> {
        tokio::time::sleep(self.delay).await;
        Ok(AnalysisResult::new(50.0, 0.5))
    }
}

// ── Evidence and verification ──────────────────────────────────────

/// Analyzes every item except those whose URL is listed in `failing`.
pub struct StubEvidence {
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl StubEvidence {
    pub fn failing_on(urls: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            failing: urls.iter().map(ToString::to_string).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EvidenceAnalyzer for StubEvidence {
    async fn analyze_evidence(&self, item: &EvidenceItem) -> Result<EvidenceAnalysis, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&item.url) {
            return Err(unavailable());
        }
        Ok(EvidenceAnalysis {
            summary: format!("{} looks genuine", item.evidence_type),
            authenticity_score: Some(0.9),
            relevance_score: Some(0.8),
            quality_score: None,
            red_flags: Vec::new(),
            details: Default::default(),
        })
    }
}

/// Records the last request and returns a fixed verdict.
pub struct RecordingVerifier {
    result: MilestoneVerificationResult,
    last: Mutex<Option<VerificationRequest>>,
}

impl RecordingVerifier {
    pub fn verified() -> Arc<Self> {
        Arc::new(Self {
            result: MilestoneVerificationResult {
                is_verified: true,
                confidence: 0.82,
                findings: vec![VerificationFinding {
                    criterion: VerificationCriterion::Completeness.to_string(),
                    status: FindingStatus::Passed,
                    confidence: 0.82,
                    explanation: "All deliverables documented".into(),
                }],
                overall_assessment: "Milestone complete".into(),
                review_required: false,
            },
            last: Mutex::new(None),
        })
    }

    pub fn result(&self) -> MilestoneVerificationResult {
        self.result.clone()
    }

    pub fn last_request(&self) -> Option<VerificationRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl MilestoneVerifier for RecordingVerifier {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<MilestoneVerificationResult, AdapterError> {
        *self.last.lock().unwrap() = Some(request.clone());
        Ok(self.result.clone())
    }
}

pub struct FailingVerifier;

#[async_trait]
impl MilestoneVerifier for FailingVerifier {
    async fn verify(
        &self,
        _request: &VerificationRequest,
    ) -> Result<MilestoneVerificationResult, AdapterError> {
        Err(unavailable())
    }
}

// ── Support ────────────────────────────────────────────────────────

pub struct FixedGenerator {
    answer: GeneratedAnswer,
    calls: AtomicUsize,
}

impl FixedGenerator {
    pub fn new(answer: &str, confidence: f64) -> Arc<Self> {
        Arc::new(Self {
            answer: GeneratedAnswer {
                answer: answer.into(),
                confidence,
                suggested_actions: vec!["view_docs".into()],
            },
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnswerGenerator for FixedGenerator {
    async fn generate(&self, _query: &SupportQuery) -> Result<GeneratedAnswer, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

pub struct FailingGenerator;

#[async_trait]
impl AnswerGenerator for FailingGenerator {
    async fn generate(&self, _query: &SupportQuery) -> Result<GeneratedAnswer, AdapterError> {
        Err(unavailable())
    }
}

// ── Translation and documents ──────────────────────────────────────

/// Prefixes the text with the target language and counts calls.
#[derive(Default)]
pub struct TaggingTranslator {
    calls: AtomicUsize,
}

impl TaggingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TranslationResult {
            translated_text: format!("[{}] {}", request.target_language, request.text),
            source_language: request
                .source_language
                .clone()
                .unwrap_or_else(|| "en".into()),
            target_language: request.target_language.clone(),
            confidence: 0.93,
        })
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(
        &self,
        _request: &TranslationRequest,
    ) -> Result<TranslationResult, AdapterError> {
        Err(unavailable())
    }
}

#[derive(Default)]
pub struct StubDocuments {
    calls: AtomicUsize,
}

impl StubDocuments {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentAnalyzer for StubDocuments {
    async fn analyze_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<DocumentAnalysisResult, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DocumentAnalysisResult {
            document_type: request.document_type.clone(),
            is_authentic: true,
            confidence: 0.88,
            extracted_fields: Default::default(),
            red_flags: Vec::new(),
            requires_manual_review: false,
            summary: "Registration certificate".into(),
        })
    }
}

pub struct FailingDocuments;

#[async_trait]
impl DocumentAnalyzer for FailingDocuments {
    async fn analyze_document(
        &self,
        _request: &DocumentRequest,
    ) -> Result<DocumentAnalysisResult, AdapterError> {
        Err(unavailable())
    }
}

// ── Cache ──────────────────────────────────────────────────────────

/// A cache backend that is always down.
pub struct DownCache;

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

// ── Builders ───────────────────────────────────────────────────────

/// Adapters that all succeed; every analyzer scores 50 with confidence 0.5.
pub fn adapters() -> Adapters {
    let analyzer = |_| -> Arc<dyn Analyzer> { FixedAnalyzer::new(AnalysisResult::new(50.0, 0.5)) };
    Adapters {
        project: ProjectAnalyzers::from_fn(analyzer),
        ngo: NgoAnalyzers::from_fn(analyzer),
        evidence: StubEvidence::failing_on(&[]),
        verifier: RecordingVerifier::verified(),
        answers: FixedGenerator::new("Generated answer", 0.9),
        qa_index: Arc::new(MemoryQaIndex::new()),
        translator: Arc::new(TaggingTranslator::default()),
        documents: Arc::new(StubDocuments::default()),
    }
}

pub fn engine(adapters: Adapters) -> Engine {
    Engine::new(adapters, Arc::new(MemoryCache::new(1_000)), Settings::default())
}

pub fn project() -> ProjectSubmission {
    serde_json::from_value(serde_json::json!({
        "title": "Solar wells for Kisumu",
        "description": "Solar powered water pumps for three villages",
        "category": "water",
        "type": "infrastructure",
        "fundingGoal": 25000.0,
        "location": "Kisumu, Kenya",
        "milestones": [{ "title": "Drill first well", "targetAmount": 8000.0 }],
        "impactGoals": ["Clean water for 1,200 people"],
        "documents": [{ "type": "budget", "name": "budget.pdf" }]
    }))
    .unwrap()
}

pub fn ngo() -> NgoSubmission {
    serde_json::from_value(serde_json::json!({
        "name": "Water for All",
        "description": "Community water infrastructure",
        "mission": "Safe water within 500m of every home",
        "categories": ["water"],
        "registrationNumber": "NGO-2019-0042",
        "registrationCountry": "KE"
    }))
    .unwrap()
}

pub fn evidence(n: usize) -> Vec<EvidenceItem> {
    (1..=n)
        .map(|i| EvidenceItem {
            evidence_type: "photo".into(),
            url: format!("https://cdn.example.org/evidence/{i}.jpg"),
            description: Some(format!("Photo {i}")),
        })
        .collect()
}
