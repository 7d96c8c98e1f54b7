//! Milestone verification.
//!
//! Every evidence item is analyzed concurrently (bounded by
//! `evidence_concurrency`). An item whose analysis fails keeps its place in
//! the bundle with a `null` analysis. The bundle then goes to the verifier
//! once, and its verdict is returned as-is. Results are not cached.

use assay_core::entities::{AnalyzedEvidence, EvidenceItem};
use assay_core::enums::VerificationCriterion;
use assay_core::verification::{MilestoneVerificationResult, VerificationRequest};

use crate::error::EngineError;
use crate::{Engine, fanout};

impl Engine {
    /// Verify a milestone against its evidence.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for a blank milestone id or an
    /// empty evidence list, [`EngineError::VerificationServiceUnavailable`] if
    /// the verifier fails, and [`EngineError::RequestTimedOut`] if the whole
    /// call exceeds the request timeout. Evidence analysis failures are not
    /// errors.
    pub async fn verify_milestone(
        &self,
        milestone_id: &str,
        evidence: Vec<EvidenceItem>,
    ) -> Result<MilestoneVerificationResult, EngineError> {
        if milestone_id.trim().is_empty() {
            return Err(EngineError::invalid("milestone id is empty"));
        }
        if evidence.is_empty() {
            return Err(EngineError::invalid(
                "at least one evidence item is required",
            ));
        }

        self.bounded("verify_milestone", self.run_verification(milestone_id, evidence))
            .await
    }

    /// Analyze each item, keeping failures as `None` in input order.
    async fn analyze_evidence_bundle(
        &self,
        evidence: Vec<EvidenceItem>,
    ) -> Vec<AnalyzedEvidence> {
        let analyzer = self.adapters.evidence.clone();
        let analyses = fanout::tolerant_map(
            "evidence",
            evidence.clone(),
            self.settings.evidence_concurrency,
            self.settings.budgets.evidence,
            |item| {
                let analyzer = analyzer.clone();
                async move { analyzer.analyze_evidence(&item).await }
            },
        )
        .await;

        evidence
            .into_iter()
            .zip(analyses)
            .map(|(item, analysis)| AnalyzedEvidence { item, analysis })
            .collect()
    }

    async fn run_verification(
        &self,
        milestone_id: &str,
        evidence: Vec<EvidenceItem>,
    ) -> Result<MilestoneVerificationResult, EngineError> {
        let bundle = self.analyze_evidence_bundle(evidence).await;
        let failed = bundle.iter().filter(|e| e.analysis.is_none()).count();
        if failed > 0 {
            tracing::warn!(
                milestone_id,
                failed,
                total = bundle.len(),
                "verification: some evidence could not be analyzed"
            );
        }

        let request = VerificationRequest {
            milestone_id: milestone_id.to_string(),
            evidence: bundle,
            criteria: VerificationCriterion::ALL.to_vec(),
        };

        let result = fanout::within(
            "verification",
            self.settings.budgets.verification,
            self.adapters.verifier.verify(&request),
        )
        .await
        .map_err(|error| {
            tracing::warn!(milestone_id, %error, "verification: verifier failed");
            EngineError::VerificationServiceUnavailable(error)
        })?;

        tracing::info!(
            milestone_id,
            verified = result.is_verified,
            review_required = result.review_required,
            "verification: milestone verified"
        );
        Ok(result)
    }
}
