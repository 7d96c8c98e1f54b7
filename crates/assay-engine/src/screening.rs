//! Project and NGO screening.
//!
//! Both flows: validate, fingerprint, return a cached result if present,
//! otherwise call every dimension's analyzer concurrently, aggregate, cache.
//! Any analyzer failure fails the screening; the remaining calls are dropped.

use std::sync::Arc;
use std::time::Duration;

use assay_adapters::{Analyzer, Subject};
use assay_core::analysis::{AnalysisResult, ScreeningResult};
use assay_core::entities::{NgoSubmission, ProjectSubmission};
use assay_core::enums::{Dimension, EntityKind};
use assay_core::fingerprint::Fingerprint;

use crate::error::EngineError;
use crate::scoring::{self, NgoAnalyses, ProjectAnalyses};
use crate::{Engine, fanout};

/// One analyzer per project dimension.
#[derive(Clone)]
pub struct ProjectAnalyzers {
    pub feasibility: Arc<dyn Analyzer>,
    pub impact: Arc<dyn Analyzer>,
    pub risk: Arc<dyn Analyzer>,
    pub innovation: Arc<dyn Analyzer>,
    pub sustainability: Arc<dyn Analyzer>,
}

impl ProjectAnalyzers {
    /// Build the set from a per-dimension factory.
    pub fn from_fn(mut make: impl FnMut(Dimension) -> Arc<dyn Analyzer>) -> Self {
        Self {
            feasibility: make(Dimension::Feasibility),
            impact: make(Dimension::Impact),
            risk: make(Dimension::Risk),
            innovation: make(Dimension::Innovation),
            sustainability: make(Dimension::Sustainability),
        }
    }
}

/// One analyzer per NGO dimension.
#[derive(Clone)]
pub struct NgoAnalyzers {
    pub credibility: Arc<dyn Analyzer>,
    pub impact: Arc<dyn Analyzer>,
    pub compliance: Arc<dyn Analyzer>,
}

impl NgoAnalyzers {
    pub fn from_fn(mut make: impl FnMut(Dimension) -> Arc<dyn Analyzer>) -> Self {
        Self {
            credibility: make(Dimension::Credibility),
            impact: make(Dimension::Impact),
            compliance: make(Dimension::Compliance),
        }
    }
}

/// Call one analyzer under its budget and clamp the result.
async fn score(
    analyzer: &dyn Analyzer,
    dimension: Dimension,
    subject: Subject<'_>,
    budget: Duration,
) -> Result<AnalysisResult, EngineError> {
    let label = format!("analyzer:{dimension}");
    match fanout::within(&label, budget, analyzer.analyze(subject)).await {
        Ok(result) => Ok(result.normalized()),
        Err(source) => {
            tracing::warn!(%dimension, error = %source, "screening: analyzer failed");
            Err(EngineError::ScreeningServiceUnavailable { dimension, source })
        }
    }
}

impl Engine {
    /// Screen a project submission.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the submission fails
    /// validation, [`EngineError::ScreeningServiceUnavailable`] if any
    /// analyzer fails or exceeds its budget, and
    /// [`EngineError::RequestTimedOut`] if the whole call exceeds the
    /// request timeout.
    pub async fn screen_project(
        &self,
        project: &ProjectSubmission,
    ) -> Result<ScreeningResult, EngineError> {
        project.validate()?;
        self.bounded("screen_project", self.run_project_screening(project))
            .await
    }

    async fn run_project_screening(
        &self,
        project: &ProjectSubmission,
    ) -> Result<ScreeningResult, EngineError> {
        let fingerprint = Fingerprint::of_project(project);
        let key = fingerprint.screening_key(EntityKind::Project);
        if let Some(cached) = self.cache.load::<ScreeningResult>(&key).await {
            tracing::debug!(%fingerprint, "screening: returning cached project result");
            return Ok(cached);
        }

        let subject = Subject::Project(project);
        let budget = self.settings.budgets.analyzer;
        let analyzers = &self.adapters.project;
        let (feasibility, impact, risk, innovation, sustainability) = tokio::try_join!(
            score(analyzers.feasibility.as_ref(), Dimension::Feasibility, subject, budget),
            score(analyzers.impact.as_ref(), Dimension::Impact, subject, budget),
            score(analyzers.risk.as_ref(), Dimension::Risk, subject, budget),
            score(analyzers.innovation.as_ref(), Dimension::Innovation, subject, budget),
            score(analyzers.sustainability.as_ref(), Dimension::Sustainability, subject, budget),
        )?;

        let result = scoring::aggregate_project(
            &ProjectAnalyses {
                feasibility,
                impact,
                risk,
                innovation,
                sustainability,
            },
            self.settings.list_limit,
        );

        self.cache
            .store(&key, &result, self.settings.screening_ttl)
            .await;
        tracing::info!(
            %fingerprint,
            overall = result.overall_score,
            confidence = result.confidence,
            "screening: project screened"
        );
        Ok(result)
    }

    /// Screen an NGO submission.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::screen_project`].
    pub async fn screen_ngo(&self, ngo: &NgoSubmission) -> Result<ScreeningResult, EngineError> {
        ngo.validate()?;
        self.bounded("screen_ngo", self.run_ngo_screening(ngo)).await
    }

    async fn run_ngo_screening(&self, ngo: &NgoSubmission) -> Result<ScreeningResult, EngineError> {
        let fingerprint = Fingerprint::of_ngo(ngo);
        let key = fingerprint.screening_key(EntityKind::Ngo);
        if let Some(cached) = self.cache.load::<ScreeningResult>(&key).await {
            tracing::debug!(%fingerprint, "screening: returning cached NGO result");
            return Ok(cached);
        }

        let subject = Subject::Ngo(ngo);
        let budget = self.settings.budgets.analyzer;
        let analyzers = &self.adapters.ngo;
        let (credibility, impact, compliance) = tokio::try_join!(
            score(analyzers.credibility.as_ref(), Dimension::Credibility, subject, budget),
            score(analyzers.impact.as_ref(), Dimension::Impact, subject, budget),
            score(analyzers.compliance.as_ref(), Dimension::Compliance, subject, budget),
        )?;

        let result = scoring::aggregate_ngo(
            &NgoAnalyses {
                credibility,
                impact,
                compliance,
            },
            self.settings.list_limit,
        );

        self.cache
            .store(&key, &result, self.settings.screening_ttl)
            .await;
        tracing::info!(
            %fingerprint,
            overall = result.overall_score,
            confidence = result.confidence,
            "screening: NGO screened"
        );
        Ok(result)
    }
}
