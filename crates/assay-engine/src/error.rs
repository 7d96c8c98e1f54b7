//! Engine error types.
//!
//! Service-unavailable variants show callers an opaque message and keep the
//! adapter failure as the error source for logs.

use assay_adapters::AdapterError;
use assay_core::enums::Dimension;
use assay_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A screening analyzer failed or timed out. Fatal for the whole screening.
    #[error("screening service unavailable")]
    ScreeningServiceUnavailable {
        dimension: Dimension,
        #[source]
        source: AdapterError,
    },

    #[error("milestone verification service unavailable")]
    VerificationServiceUnavailable(#[source] AdapterError),

    #[error("translation service unavailable")]
    TranslationServiceUnavailable(#[source] AdapterError),

    #[error("document analysis service unavailable")]
    DocumentAnalysisServiceUnavailable(#[source] AdapterError),

    /// The caller's input was rejected before any adapter was called.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),

    /// The whole operation exceeded the request timeout.
    #[error("{operation} timed out after {after_secs}s")]
    RequestTimedOut {
        operation: &'static str,
        after_secs: u64,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] validation failure.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(CoreError::Validation(message.into()))
    }
}
