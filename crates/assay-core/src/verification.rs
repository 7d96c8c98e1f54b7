//! Milestone verification request and result types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AnalyzedEvidence;
use crate::enums::{FindingStatus, VerificationCriterion};

/// The bundle sent to the verification adapter: every submitted item,
/// its analysis (or `null`), and the criteria to judge against.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub milestone_id: String,
    pub evidence: Vec<AnalyzedEvidence>,
    pub criteria: Vec<VerificationCriterion>,
}

/// Outcome for one criterion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationFinding {
    pub criterion: String,
    pub status: FindingStatus,
    pub confidence: f64,
    pub explanation: String,
}

/// Verdict for a milestone, as produced by the verification adapter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneVerificationResult {
    pub is_verified: bool,
    pub confidence: f64,
    pub findings: Vec<VerificationFinding>,
    pub overall_assessment: String,
    pub review_required: bool,
}
