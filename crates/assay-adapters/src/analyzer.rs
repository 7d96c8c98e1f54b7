//! HTTP analyzer for one scoring dimension.

use assay_core::analysis::AnalysisResult;
use assay_core::enums::Dimension;
use async_trait::async_trait;

use crate::{AdapterClient, Analyzer, Subject, error::AdapterError, wire};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzerResponse {
    score: f64,
    confidence: f64,
    #[serde(default, deserialize_with = "wire::or_default")]
    recommendations: Vec<String>,
    #[serde(default, deserialize_with = "wire::or_default")]
    concerns: Vec<String>,
    #[serde(default, alias = "sustainability")]
    sustainability_score: Option<f64>,
}

impl From<AnalyzerResponse> for AnalysisResult {
    fn from(resp: AnalyzerResponse) -> Self {
        Self {
            score: resp.score,
            confidence: resp.confidence,
            recommendations: resp.recommendations,
            concerns: resp.concerns,
            sustainability: resp.sustainability_score,
        }
        .normalized()
    }
}

/// Remote analyzer at `<base_url><analyzer_path>/<dimension>`.
pub struct HttpAnalyzer {
    client: AdapterClient,
    dimension: Dimension,
    url: String,
}

impl HttpAnalyzer {
    /// `endpoint` is the analyzer path prefix; the dimension name is appended.
    #[must_use]
    pub fn new(client: AdapterClient, dimension: Dimension, endpoint: &str) -> Self {
        Self {
            client,
            dimension,
            url: format!("{}/{dimension}", endpoint.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    async fn analyze(&self, subject: Subject<'_>) -> Result<AnalysisResult, AdapterError> {
        tracing::debug!(dimension = %self.dimension, url = %self.url, "calling analyzer");
        let resp: AnalyzerResponse = self.client.post_json(&self.url, &subject).await?;
        Ok(resp.into())
    }
}
