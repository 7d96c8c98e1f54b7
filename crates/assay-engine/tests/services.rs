//! Translation and document analysis.

mod common;

use std::sync::Arc;

use assay_engine::{Engine, EngineError, Settings};
use common::{DownCache, FailingDocuments, FailingTranslator, StubDocuments, TaggingTranslator};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn translation_is_cached_per_language_pair() {
    let translator = Arc::new(TaggingTranslator::default());
    let engine = common::engine(assay_engine::Adapters {
        translator: translator.clone(),
        ..common::adapters()
    });

    let first = engine.translate_text("Clean water", "fr", Some("en")).await.unwrap();
    let again = engine.translate_text("Clean water", "fr", Some("en")).await.unwrap();
    assert_eq!(first, again);
    assert_eq!(first.translated_text, "[fr] Clean water");
    assert_eq!(translator.calls(), 1);

    // Auto-detected source is a different key
    engine.translate_text("Clean water", "fr", None).await.unwrap();
    engine.translate_text("Clean water", "sw", Some("en")).await.unwrap();
    assert_eq!(translator.calls(), 3);
}

#[tokio::test]
async fn same_language_skips_the_translator() {
    let translator = Arc::new(TaggingTranslator::default());
    let engine = common::engine(assay_engine::Adapters {
        translator: translator.clone(),
        ..common::adapters()
    });

    let result = engine.translate_text("Hola", "es", Some("ES")).await.unwrap();
    assert_eq!(result.translated_text, "Hola");
    assert_eq!(result.confidence, 1.0);
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn empty_text_is_invalid() {
    let engine = common::engine(common::adapters());
    let err = engine.translate_text("  ", "fr", None).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[tokio::test]
async fn translator_failure_is_service_unavailable() {
    let engine = common::engine(assay_engine::Adapters {
        translator: Arc::new(FailingTranslator),
        ..common::adapters()
    });
    let err = engine.translate_text("Clean water", "fr", None).await.unwrap_err();
    assert!(matches!(err, EngineError::TranslationServiceUnavailable(_)));
    assert_eq!(err.to_string(), "translation service unavailable");
}

#[tokio::test]
async fn document_analysis_is_cached_by_type_and_url() {
    let documents = Arc::new(StubDocuments::default());
    let engine = common::engine(assay_engine::Adapters {
        documents: documents.clone(),
        ..common::adapters()
    });

    let url = "https://cdn.example.org/docs/registration.pdf";
    let first = engine
        .analyze_document(url, "registration_certificate")
        .await
        .unwrap();
    engine
        .analyze_document(url, "registration_certificate")
        .await
        .unwrap();
    assert_eq!(first.document_type, "registration_certificate");
    assert_eq!(documents.calls(), 1);

    engine.analyze_document(url, "tax_exemption").await.unwrap();
    assert_eq!(documents.calls(), 2);
}

#[tokio::test]
async fn document_failure_is_service_unavailable() {
    let engine = common::engine(assay_engine::Adapters {
        documents: Arc::new(FailingDocuments),
        ..common::adapters()
    });
    let err = engine
        .analyze_document("https://cdn.example.org/x.pdf", "invoice")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::DocumentAnalysisServiceUnavailable(_)));
}

#[tokio::test]
async fn services_work_without_a_cache_backend() {
    let documents = Arc::new(StubDocuments::default());
    let engine = Engine::new(
        assay_engine::Adapters {
            documents: documents.clone(),
            ..common::adapters()
        },
        Arc::new(DownCache),
        Settings::default(),
    );

    engine
        .analyze_document("https://cdn.example.org/x.pdf", "invoice")
        .await
        .unwrap();
    engine
        .analyze_document("https://cdn.example.org/x.pdf", "invoice")
        .await
        .unwrap();
    assert_eq!(documents.calls(), 2);
}
