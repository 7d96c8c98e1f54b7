//! Dimensions, entity kinds, verification criteria, and status enums for Assay.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One independent scoring axis, computed by one analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Feasibility,
    Impact,
    Risk,
    Innovation,
    Sustainability,
    Credibility,
    Compliance,
}

impl Dimension {
    /// Dimensions screened for a project, in aggregation order.
    pub const PROJECT: [Self; 5] = [
        Self::Feasibility,
        Self::Impact,
        Self::Risk,
        Self::Innovation,
        Self::Sustainability,
    ];

    /// Dimensions screened for an NGO, in aggregation order.
    pub const NGO: [Self; 3] = [Self::Credibility, Self::Impact, Self::Compliance];

    /// Every dimension an analyzer can be registered for.
    pub const ALL: [Self; 7] = [
        Self::Feasibility,
        Self::Impact,
        Self::Risk,
        Self::Innovation,
        Self::Sustainability,
        Self::Credibility,
        Self::Compliance,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feasibility => "feasibility",
            Self::Impact => "impact",
            Self::Risk => "risk",
            Self::Innovation => "innovation",
            Self::Sustainability => "sustainability",
            Self::Credibility => "credibility",
            Self::Compliance => "compliance",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Kind of submission being screened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Ngo,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Ngo => "ngo",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerificationCriterion
// ---------------------------------------------------------------------------

/// Criterion a milestone's evidence bundle is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationCriterion {
    Completeness,
    Authenticity,
    Relevance,
    Quality,
}

impl VerificationCriterion {
    /// The fixed criterion set sent with every verification request.
    pub const ALL: [Self; 4] = [
        Self::Completeness,
        Self::Authenticity,
        Self::Relevance,
        Self::Quality,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completeness => "completeness",
            Self::Authenticity => "authenticity",
            Self::Relevance => "relevance",
            Self::Quality => "quality",
        }
    }
}

impl fmt::Display for VerificationCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FindingStatus
// ---------------------------------------------------------------------------

/// Outcome of one verification criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Passed,
    Failed,
    Warning,
}

impl FindingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnswerSource
// ---------------------------------------------------------------------------

/// Where a support bot answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Reused from the similarity index.
    Cache,
    /// Freshly produced by the generative adapter.
    Generated,
    /// Fixed low-confidence response after a generation failure.
    Fallback,
}

impl AnswerSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Generated => "generated",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
