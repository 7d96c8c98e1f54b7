use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One piece of milestone evidence supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    /// Evidence kind (e.g. `photo`, `receipt`, `report`).
    #[serde(rename = "type")]
    pub evidence_type: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured output of the evidence adapter for one item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceAnalysis {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub authenticity_score: Option<f64>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    /// Adapter-specific extras (EXIF data, OCR text, amounts).
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// An evidence item paired with its analysis.
///
/// `analysis` is `None` (serialized as `null`) when the evidence adapter failed
/// for this item; the item itself is still forwarded to verification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyzedEvidence {
    pub item: EvidenceItem,
    pub analysis: Option<EvidenceAnalysis>,
}
