//! Document analysis request and result types.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub document_url: String,
    pub document_type: String,
}

/// Outcome of analyzing one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysisResult {
    pub document_type: String,
    pub is_authentic: bool,
    pub confidence: f64,
    pub extracted_fields: BTreeMap<String, serde_json::Value>,
    pub red_flags: Vec<String>,
    pub requires_manual_review: bool,
    pub summary: String,
}
