//! Cross-cutting error types for Assay.
//!
//! Domain-specific errors (e.g., `AdapterError`, `CacheError`) are defined in
//! their respective crates. Service-level errors converge in `assay-engine`.

use thiserror::Error;

/// Errors that can be raised by any Assay crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Submission data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A field value was outside its allowed range.
    #[error("Field '{field}' out of range: {reason}")]
    OutOfRange { field: String, reason: String },
}
