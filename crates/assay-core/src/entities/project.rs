use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A project submitted for automatic screening.
///
/// Carries document type/name references only, never document bytes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub funding_goal: f64,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub milestones: Vec<MilestonePlan>,
    #[serde(default)]
    pub impact_goals: Vec<String>,
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
}

/// A planned milestone declared at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestonePlan {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_amount: Option<f64>,
}

/// Reference to a supporting document (type + file name).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    #[serde(rename = "type")]
    pub document_type: String,
    pub name: String,
}

impl ProjectSubmission {
    /// Check the fields the screening fingerprint depends on.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the title is blank, or
    /// [`CoreError::OutOfRange`] if the funding goal is negative or not finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("project title is empty".into()));
        }
        if !self.funding_goal.is_finite() || self.funding_goal < 0.0 {
            return Err(CoreError::OutOfRange {
                field: "fundingGoal".into(),
                reason: format!("{} is not a non-negative amount", self.funding_goal),
            });
        }
        Ok(())
    }
}
