//! HTTP document analyzer.

use std::collections::BTreeMap;

use assay_core::document::{DocumentAnalysisResult, DocumentRequest};
use async_trait::async_trait;

use crate::{AdapterClient, DocumentAnalyzer, error::AdapterError, wire};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentResponse {
    #[serde(default, deserialize_with = "wire::or_default")]
    is_authentic: bool,
    confidence: f64,
    #[serde(default, deserialize_with = "wire::or_default")]
    extracted_fields: BTreeMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "wire::or_default")]
    red_flags: Vec<String>,
    #[serde(default, deserialize_with = "wire::or_default")]
    requires_manual_review: bool,
    #[serde(default, deserialize_with = "wire::or_default")]
    summary: String,
}

impl DocumentResponse {
    fn into_result(self, document_type: &str) -> DocumentAnalysisResult {
        DocumentAnalysisResult {
            document_type: document_type.to_string(),
            is_authentic: self.is_authentic,
            confidence: self.confidence.clamp(0.0, 1.0),
            extracted_fields: self.extracted_fields,
            red_flags: self.red_flags,
            requires_manual_review: self.requires_manual_review,
            summary: self.summary,
        }
    }
}

pub struct HttpDocumentAnalyzer {
    client: AdapterClient,
    url: String,
}

impl HttpDocumentAnalyzer {
    #[must_use]
    pub fn new(client: AdapterClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for HttpDocumentAnalyzer {
    async fn analyze_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<DocumentAnalysisResult, AdapterError> {
        let resp: DocumentResponse = self.client.post_json(&self.url, request).await?;
        Ok(resp.into_result(&request.document_type))
    }
}
