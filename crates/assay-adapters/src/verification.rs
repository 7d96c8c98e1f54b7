//! HTTP milestone verifier.

use assay_core::enums::FindingStatus;
use assay_core::verification::{
    MilestoneVerificationResult, VerificationFinding, VerificationRequest,
};
use async_trait::async_trait;

use crate::{AdapterClient, MilestoneVerifier, error::AdapterError, wire};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerificationResponse {
    is_verified: bool,
    confidence: f64,
    #[serde(default, deserialize_with = "wire::or_default")]
    findings: Vec<FindingResponse>,
    #[serde(default, deserialize_with = "wire::or_default")]
    overall_assessment: String,
    #[serde(default, deserialize_with = "wire::or_default")]
    review_required: bool,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindingResponse {
    criterion: String,
    status: FindingStatus,
    #[serde(default)]
    confidence: f64,
    #[serde(default, deserialize_with = "wire::or_default")]
    explanation: String,
}

impl From<VerificationResponse> for MilestoneVerificationResult {
    fn from(resp: VerificationResponse) -> Self {
        Self {
            is_verified: resp.is_verified,
            confidence: resp.confidence,
            findings: resp
                .findings
                .into_iter()
                .map(|f| VerificationFinding {
                    criterion: f.criterion,
                    status: f.status,
                    confidence: f.confidence,
                    explanation: f.explanation,
                })
                .collect(),
            overall_assessment: resp.overall_assessment,
            review_required: resp.review_required,
        }
    }
}

/// Remote verifier; the request body is the full [`VerificationRequest`].
pub struct HttpMilestoneVerifier {
    client: AdapterClient,
    url: String,
}

impl HttpMilestoneVerifier {
    #[must_use]
    pub fn new(client: AdapterClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl MilestoneVerifier for HttpMilestoneVerifier {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<MilestoneVerificationResult, AdapterError> {
        let resp: VerificationResponse = self.client.post_json(&self.url, request).await?;
        Ok(resp.into())
    }
}
