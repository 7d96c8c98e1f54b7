//! Adapter error types.

use thiserror::Error;

/// Errors that can occur when calling an adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Adapter endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the adapter.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse an adapter response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The adapter returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The call did not complete within its per-call budget.
    #[error("{adapter} timed out after {after_secs}s")]
    Timeout {
        /// Adapter label (e.g. `analyzer:risk`, `evidence`).
        adapter: String,
        /// Budget that was exceeded.
        after_secs: u64,
    },

    /// The adapter failed for a reason outside the HTTP layer.
    #[error("adapter unavailable: {0}")]
    Unavailable(String),
}
