//! Support bot query, answer, and Q&A index types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnswerSource;

/// Suggested action attached to the fallback response.
pub const ACTION_CONTACT_SUPPORT: &str = "contact_support";
/// Suggested action attached to the fallback response.
pub const ACTION_TRY_AGAIN_LATER: &str = "try_again_later";

/// A free-text support question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportQuery {
    pub message: String,
    pub language: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A stored question/answer pair in the similarity index.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    pub language: String,
    pub confidence: f64,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
}

/// Nearest stored pair for a question, with its similarity in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QaMatch {
    pub pair: QaPair,
    pub similarity: f64,
}

/// Fresh answer from the generative adapter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAnswer {
    pub answer: String,
    pub confidence: f64,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
}

/// Response returned to support bot callers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportBotResponse {
    pub answer: String,
    pub confidence: f64,
    pub suggested_actions: Vec<String>,
    pub source: AnswerSource,
    pub language: String,
}

impl SupportBotResponse {
    /// The fixed low-confidence response used when generation fails.
    #[must_use]
    pub fn fallback(language: &str) -> Self {
        Self {
            answer: "I'm sorry, I couldn't process your question right now. \
                     Please try again later or contact our support team."
                .to_string(),
            confidence: 0.1,
            suggested_actions: vec![
                ACTION_CONTACT_SUPPORT.to_string(),
                ACTION_TRY_AGAIN_LATER.to_string(),
            ],
            source: AnswerSource::Fallback,
            language: language.to_string(),
        }
    }
}
