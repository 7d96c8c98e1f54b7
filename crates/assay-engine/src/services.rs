//! Cached single-call services: translation and document analysis.

use assay_core::document::{DocumentAnalysisResult, DocumentRequest};
use assay_core::fingerprint::{document_key, translation_key};
use assay_core::translation::{TranslationRequest, TranslationResult};

use crate::error::EngineError;
use crate::{Engine, fanout};

impl Engine {
    /// Translate `text` into `target_language`.
    ///
    /// `source_language` of `None` lets the translator detect it. When the
    /// source and target match, the text is returned unchanged without a call.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for blank text or target
    /// language, [`EngineError::TranslationServiceUnavailable`] if the
    /// translator fails, and [`EngineError::RequestTimedOut`] if the whole
    /// call exceeds the request timeout.
    pub async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<TranslationResult, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::invalid("text to translate is empty"));
        }
        if target_language.trim().is_empty() {
            return Err(EngineError::invalid("target language is empty"));
        }

        if source_language.is_some_and(|source| source.eq_ignore_ascii_case(target_language)) {
            return Ok(TranslationResult {
                translated_text: text.to_string(),
                source_language: target_language.to_string(),
                target_language: target_language.to_string(),
                confidence: 1.0,
            });
        }

        let request = TranslationRequest {
            text: text.to_string(),
            target_language: target_language.to_string(),
            source_language: source_language.map(str::to_string),
        };
        self.bounded("translate_text", self.run_translation(request))
            .await
    }

    async fn run_translation(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, EngineError> {
        let key = translation_key(
            request.source_language.as_deref(),
            &request.target_language,
            &request.text,
        );
        if let Some(cached) = self.cache.load::<TranslationResult>(&key).await {
            return Ok(cached);
        }

        let result = fanout::within(
            "translation",
            self.settings.budgets.translation,
            self.adapters.translator.translate(&request),
        )
        .await
        .map_err(|error| {
            tracing::warn!(target_language = %request.target_language, %error, "translation: translator failed");
            EngineError::TranslationServiceUnavailable(error)
        })?;

        self.cache
            .store(&key, &result, self.settings.translation_ttl)
            .await;
        Ok(result)
    }

    /// Analyze the document at `document_url`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for a blank URL or type,
    /// [`EngineError::DocumentAnalysisServiceUnavailable`] if the analyzer
    /// fails, and [`EngineError::RequestTimedOut`] if the whole call exceeds
    /// the request timeout.
    pub async fn analyze_document(
        &self,
        document_url: &str,
        document_type: &str,
    ) -> Result<DocumentAnalysisResult, EngineError> {
        if document_url.trim().is_empty() {
            return Err(EngineError::invalid("document url is empty"));
        }
        if document_type.trim().is_empty() {
            return Err(EngineError::invalid("document type is empty"));
        }

        let request = DocumentRequest {
            document_url: document_url.to_string(),
            document_type: document_type.to_string(),
        };
        self.bounded("analyze_document", self.run_document_analysis(request))
            .await
    }

    async fn run_document_analysis(
        &self,
        request: DocumentRequest,
    ) -> Result<DocumentAnalysisResult, EngineError> {
        let key = document_key(&request.document_type, &request.document_url);
        if let Some(cached) = self.cache.load::<DocumentAnalysisResult>(&key).await {
            return Ok(cached);
        }

        let result = fanout::within(
            "document",
            self.settings.budgets.document,
            self.adapters.documents.analyze_document(&request),
        )
        .await
        .map_err(|error| {
            tracing::warn!(document_type = %request.document_type, %error, "document: analysis failed");
            EngineError::DocumentAnalysisServiceUnavailable(error)
        })?;

        tracing::info!(
            document_type = %result.document_type,
            authentic = result.is_authentic,
            manual_review = result.requires_manual_review,
            "document: analyzed"
        );
        self.cache
            .store(&key, &result, self.settings.document_ttl)
            .await;
        Ok(result)
    }
}
