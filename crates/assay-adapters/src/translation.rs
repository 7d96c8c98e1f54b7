//! HTTP translator.

use assay_core::translation::{TranslationRequest, TranslationResult};
use async_trait::async_trait;

use crate::{AdapterClient, Translator, error::AdapterError};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationResponse {
    translated_text: String,
    #[serde(default)]
    detected_language: Option<String>,
    confidence: f64,
}

impl TranslationResponse {
    fn into_result(self, request: &TranslationRequest) -> TranslationResult {
        let source_language = self
            .detected_language
            .or_else(|| request.source_language.clone())
            .unwrap_or_else(|| String::from("auto"));
        TranslationResult {
            translated_text: self.translated_text,
            source_language,
            target_language: request.target_language.clone(),
            confidence: self.confidence.clamp(0.0, 1.0),
        }
    }
}

pub struct HttpTranslator {
    client: AdapterClient,
    url: String,
}

impl HttpTranslator {
    #[must_use]
    pub fn new(client: AdapterClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, AdapterError> {
        let resp: TranslationResponse = self.client.post_json(&self.url, request).await?;
        Ok(resp.into_result(request))
    }
}
