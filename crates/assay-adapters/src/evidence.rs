//! HTTP evidence analyzer.

use std::collections::BTreeMap;

use assay_core::entities::{EvidenceAnalysis, EvidenceItem};
use async_trait::async_trait;

use crate::{AdapterClient, EvidenceAnalyzer, error::AdapterError, wire};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvidenceResponse {
    #[serde(default, deserialize_with = "wire::or_default")]
    summary: String,
    #[serde(default)]
    authenticity_score: Option<f64>,
    #[serde(default)]
    relevance_score: Option<f64>,
    #[serde(default)]
    quality_score: Option<f64>,
    #[serde(default, deserialize_with = "wire::or_default")]
    red_flags: Vec<String>,
    #[serde(default, deserialize_with = "wire::or_default")]
    details: BTreeMap<String, serde_json::Value>,
}

impl From<EvidenceResponse> for EvidenceAnalysis {
    fn from(resp: EvidenceResponse) -> Self {
        Self {
            summary: resp.summary,
            authenticity_score: resp.authenticity_score,
            relevance_score: resp.relevance_score,
            quality_score: resp.quality_score,
            red_flags: resp.red_flags,
            details: resp.details,
        }
    }
}

/// Remote evidence analyzer; the request body is the [`EvidenceItem`] itself.
pub struct HttpEvidenceAnalyzer {
    client: AdapterClient,
    url: String,
}

impl HttpEvidenceAnalyzer {
    #[must_use]
    pub fn new(client: AdapterClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl EvidenceAnalyzer for HttpEvidenceAnalyzer {
    async fn analyze_evidence(&self, item: &EvidenceItem) -> Result<EvidenceAnalysis, AdapterError> {
        let resp: EvidenceResponse = self.client.post_json(&self.url, item).await?;
        Ok(resp.into())
    }
}
