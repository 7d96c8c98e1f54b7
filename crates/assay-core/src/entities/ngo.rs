use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// An NGO submitted for onboarding screening.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NgoSubmission {
    pub name: String,
    pub description: String,
    pub mission: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Empty when the NGO has not supplied one; still part of the fingerprint.
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub registration_country: Option<String>,
    #[serde(default)]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub impact_metrics: Vec<ImpactMetric>,
    /// Types of verification documents on file (e.g. `registration_certificate`).
    #[serde(default)]
    pub verification_documents: Vec<String>,
}

/// A self-reported impact figure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImpactMetric {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl NgoSubmission {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("NGO name is empty".into()));
        }
        Ok(())
    }
}
