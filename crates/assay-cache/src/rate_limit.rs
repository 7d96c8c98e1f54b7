//! Fixed-window rate limiting on top of [`FingerprintCache::increment`].
//!
//! The first hit in a window creates the counter and sets the window TTL;
//! later hits only increment. When the backend is unavailable the limiter
//! fails open.

use std::sync::Arc;
use std::time::Duration;

use crate::FingerprintCache;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u64 },
    Limited { limit: u64 },
}

impl RateDecision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Allows at most `limit` hits per subject per `window`.
pub struct RateLimiter {
    cache: Arc<dyn FingerprintCache>,
    scope: String,
    limit: u64,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(
        cache: Arc<dyn FingerprintCache>,
        scope: impl Into<String>,
        limit: u64,
        window: Duration,
    ) -> Self {
        Self {
            cache,
            scope: scope.into(),
            limit,
            window,
        }
    }

    /// Record one hit for `subject` and report whether it is within the limit.
    pub async fn check(&self, subject: &str) -> RateDecision {
        let key = format!("ratelimit:{}:{subject}", self.scope);
        let count = match self.cache.increment(&key).await {
            Ok(count) => count,
            Err(error) => {
                tracing::warn!(scope = %self.scope, %error, "rate_limit: counter unavailable; allowing");
                return RateDecision::Allowed {
                    remaining: self.limit,
                };
            }
        };

        if count == 1 {
            if let Err(error) = self.cache.expire(&key, self.window).await {
                tracing::warn!(scope = %self.scope, %error, "rate_limit: failed to set window");
            }
        }

        let count = u64::try_from(count).unwrap_or(0);
        if count > self.limit {
            tracing::debug!(scope = %self.scope, subject, count, "rate_limit: limited");
            RateDecision::Limited { limit: self.limit }
        } else {
            RateDecision::Allowed {
                remaining: self.limit - count,
            }
        }
    }
}
