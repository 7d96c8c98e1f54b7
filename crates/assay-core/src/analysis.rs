//! Analyzer output and the aggregated screening result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of one analyzer call for one dimension.
///
/// `score` is in `[0, 100]`, `confidence` in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    /// Optional sustainability sub-score (reported by the NGO impact analyzer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<f64>,
}

impl AnalysisResult {
    #[must_use]
    pub const fn new(score: f64, confidence: f64) -> Self {
        Self {
            score,
            confidence,
            recommendations: Vec::new(),
            concerns: Vec::new(),
            sustainability: None,
        }
    }

    #[must_use]
    pub fn with_recommendations<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_concerns<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concerns = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_sustainability(mut self, score: f64) -> Self {
        self.sustainability = Some(score);
        self
    }

    /// Clamp score, confidence, and the sustainability sub-score into range.
    ///
    /// Non-finite values collapse to 0.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.score = clamp_finite(self.score, 100.0);
        self.confidence = clamp_finite(self.confidence, 1.0);
        self.sustainability = self.sustainability.map(|s| clamp_finite(s, 100.0));
        self
    }
}

fn clamp_finite(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Aggregated screening verdict for a project or NGO.
///
/// Written once per screening and cached by fingerprint. A re-screen produces
/// a new value that replaces the cache entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub feasibility_score: f64,
    pub impact_score: f64,
    pub risk_score: f64,
    pub innovation_score: f64,
    pub sustainability_score: f64,
    pub overall_score: u8,
    pub recommendations: Vec<String>,
    pub concerns: Vec<String>,
    pub confidence: f64,
}
