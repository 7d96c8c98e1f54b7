//! Cache error types.

use thiserror::Error;

/// Errors that can occur when talking to a cache backend.
///
/// Callers in `assay-engine` treat every variant as a miss; none of these
/// reach an end user.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backend could not be reached or refused the operation.
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),

    /// `increment` was called on a key holding a non-integer value.
    #[error("value at '{key}' is not an integer")]
    NotAnInteger {
        /// Key that held the non-integer value.
        key: String,
    },
}
