//! Support bot: Q&A reuse, generation, persistence, and fallback.

mod common;

use std::sync::Arc;

use assay_adapters::{MemoryQaIndex, QaIndex};
use assay_cache::MemoryCache;
use assay_core::enums::AnswerSource;
use assay_core::support::{ACTION_CONTACT_SUPPORT, ACTION_TRY_AGAIN_LATER, QaPair};
use assay_engine::{Engine, Settings};
use common::{FailingGenerator, FixedGenerator};
use pretty_assertions::assert_eq;

fn stored(question: &str, answer: &str) -> QaPair {
    QaPair {
        question: question.into(),
        answer: answer.into(),
        language: "en".into(),
        confidence: 0.9,
        suggested_actions: vec!["open_dashboard".into()],
    }
}

#[tokio::test]
async fn failing_generator_returns_fallback() {
    let engine = common::engine(assay_engine::Adapters {
        answers: Arc::new(FailingGenerator),
        ..common::adapters()
    });

    let response = engine
        .process_support_message("How do I withdraw funds?", "en", Some("user-1"))
        .await;
    assert!(response.confidence <= 0.1);
    assert_eq!(response.source, AnswerSource::Fallback);
    assert_eq!(
        response.suggested_actions,
        vec![ACTION_CONTACT_SUPPORT, ACTION_TRY_AGAIN_LATER]
    );
    assert_eq!(response.language, "en");
}

#[tokio::test]
async fn close_stored_question_is_reused_without_generation() {
    let generator = FixedGenerator::new("Generated answer", 0.9);
    let index = Arc::new(MemoryQaIndex::with_pairs(vec![stored(
        "How do I verify a milestone?",
        "Upload evidence from the milestone page.",
    )]));
    let engine = common::engine(assay_engine::Adapters {
        answers: generator.clone(),
        qa_index: index,
        ..common::adapters()
    });

    let response = engine
        .process_support_message("how do I verify a milestone", "en", None)
        .await;
    assert_eq!(response.source, AnswerSource::Cache);
    assert_eq!(response.answer, "Upload evidence from the milestone page.");
    assert_eq!(response.suggested_actions, vec!["open_dashboard"]);
    assert!(response.confidence > 0.85);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn distant_question_is_generated() {
    let generator = FixedGenerator::new("Generated answer", 0.5);
    let index = Arc::new(MemoryQaIndex::with_pairs(vec![stored(
        "How do I verify a milestone?",
        "Upload evidence from the milestone page.",
    )]));
    let engine = common::engine(assay_engine::Adapters {
        answers: generator.clone(),
        qa_index: index.clone(),
        ..common::adapters()
    });

    let response = engine
        .process_support_message("What fees does the platform charge?", "en", None)
        .await;
    assert_eq!(response.source, AnswerSource::Generated);
    assert_eq!(response.answer, "Generated answer");
    assert_eq!(generator.calls(), 1);
    // Below the persist threshold: not stored
    assert_eq!(index.len().await, 1);
}

#[tokio::test]
async fn confident_answer_is_stored_and_reused() {
    let generator = FixedGenerator::new("A 2% platform fee applies.", 0.9);
    let index = Arc::new(MemoryQaIndex::new());
    let engine = common::engine(assay_engine::Adapters {
        answers: generator.clone(),
        qa_index: index.clone(),
        ..common::adapters()
    });

    let first = engine
        .process_support_message("What fees does the platform charge?", "en", Some("user-1"))
        .await;
    assert_eq!(first.source, AnswerSource::Generated);
    assert_eq!(index.len().await, 1);

    let found = index
        .nearest("What fees does the platform charge?", "en")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.pair.answer, "A 2% platform fee applies.");

    let second = engine
        .process_support_message("What fees does the platform charge?", "en", Some("user-2"))
        .await;
    assert_eq!(second.source, AnswerSource::Cache);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn rate_limited_user_gets_fallback_without_generation() {
    let generator = FixedGenerator::new("Generated answer", 0.5);
    let mut settings = Settings::default();
    settings.support_rate_limit = 1;
    let engine = Engine::new(
        assay_engine::Adapters {
            answers: generator.clone(),
            ..common::adapters()
        },
        Arc::new(MemoryCache::new(100)),
        settings,
    );

    let first = engine
        .process_support_message("Where is my receipt?", "en", Some("user-1"))
        .await;
    assert_eq!(first.source, AnswerSource::Generated);

    let second = engine
        .process_support_message("Where is my receipt?", "en", Some("user-1"))
        .await;
    assert_eq!(second.source, AnswerSource::Fallback);
    assert_eq!(generator.calls(), 1);

    // Anonymous messages are not limited
    let anonymous = engine
        .process_support_message("Where is my receipt?", "en", None)
        .await;
    assert_eq!(anonymous.source, AnswerSource::Generated);
}
