//! HTTP support answer generator.

use assay_core::support::{GeneratedAnswer, SupportQuery};
use async_trait::async_trait;

use crate::{AdapterClient, AnswerGenerator, error::AdapterError, wire};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerResponse {
    answer: String,
    confidence: f64,
    #[serde(default, deserialize_with = "wire::or_default")]
    suggested_actions: Vec<String>,
}

/// Request body: the question without the user id, which stays local.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerRequest<'a> {
    message: &'a str,
    language: &'a str,
}

pub struct HttpAnswerGenerator {
    client: AdapterClient,
    url: String,
}

impl HttpAnswerGenerator {
    #[must_use]
    pub fn new(client: AdapterClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl AnswerGenerator for HttpAnswerGenerator {
    async fn generate(&self, query: &SupportQuery) -> Result<GeneratedAnswer, AdapterError> {
        let body = AnswerRequest {
            message: &query.message,
            language: &query.language,
        };
        let resp: AnswerResponse = self.client.post_json(&self.url, &body).await?;
        if resp.answer.trim().is_empty() {
            return Err(AdapterError::Parse("generator returned an empty answer".into()));
        }
        Ok(GeneratedAnswer {
            answer: resp.answer,
            confidence: resp.confidence.clamp(0.0, 1.0),
            suggested_actions: resp.suggested_actions,
        })
    }
}
