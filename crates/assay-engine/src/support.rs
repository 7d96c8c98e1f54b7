//! Support bot: reuse a stored answer when a close enough question exists,
//! otherwise generate one. This path never fails; every error degrades to
//! [`SupportBotResponse::fallback`].

use assay_adapters::AdapterError;
use assay_core::enums::AnswerSource;
use assay_core::support::{QaPair, SupportBotResponse, SupportQuery};

use crate::{Engine, fanout};

impl Engine {
    /// Answer a support message.
    ///
    /// `user_id` keys the per-user rate limit and appears in logs. It is
    /// never stored in the Q&A index.
    pub async fn process_support_message(
        &self,
        message: &str,
        language: &str,
        user_id: Option<&str>,
    ) -> SupportBotResponse {
        if let (Some(limiter), Some(user)) = (&self.support_limiter, user_id)
            && !limiter.check(user).await.is_allowed()
        {
            tracing::warn!(user_id = user, "support: rate limited");
            return SupportBotResponse::fallback(language);
        }

        let query = SupportQuery {
            message: message.to_string(),
            language: language.to_string(),
            user_id: user_id.map(str::to_string),
        };

        match tokio::time::timeout(self.settings.request_timeout, self.answer(&query)).await {
            Ok(Ok(response)) => {
                tracing::info!(
                    user_id,
                    source = %response.source,
                    confidence = response.confidence,
                    "support: answered"
                );
                response
            }
            Ok(Err(error)) => {
                tracing::warn!(user_id, %error, "support: generation failed; using fallback");
                SupportBotResponse::fallback(language)
            }
            Err(_) => {
                tracing::warn!(user_id, "support: request timed out; using fallback");
                SupportBotResponse::fallback(language)
            }
        }
    }

    async fn answer(&self, query: &SupportQuery) -> Result<SupportBotResponse, AdapterError> {
        let budget = self.settings.budgets.support;
        let index = &self.adapters.qa_index;

        match fanout::within(
            "qa_index",
            budget,
            index.nearest(&query.message, &query.language),
        )
        .await
        {
            Ok(Some(found)) if found.similarity > self.settings.qa_reuse_threshold => {
                tracing::debug!(similarity = found.similarity, "support: reusing stored answer");
                return Ok(SupportBotResponse {
                    answer: found.pair.answer,
                    confidence: found.similarity,
                    suggested_actions: found.pair.suggested_actions,
                    source: AnswerSource::Cache,
                    language: query.language.clone(),
                });
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(%error, "support: Q&A index lookup failed; generating");
            }
        }

        let generated = fanout::within("support", budget, self.adapters.answers.generate(query)).await?;

        if generated.confidence > self.settings.qa_persist_threshold {
            let pair = QaPair {
                question: query.message.clone(),
                answer: generated.answer.clone(),
                language: query.language.clone(),
                confidence: generated.confidence,
                suggested_actions: generated.suggested_actions.clone(),
            };
            if let Err(error) = fanout::within("qa_index", budget, index.remember(pair)).await {
                tracing::warn!(%error, "support: failed to store generated answer");
            }
        }

        Ok(SupportBotResponse {
            answer: generated.answer,
            confidence: generated.confidence,
            suggested_actions: generated.suggested_actions,
            source: AnswerSource::Generated,
            language: query.language.clone(),
        })
    }
}
