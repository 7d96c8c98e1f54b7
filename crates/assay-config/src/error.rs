//! Errors raised while loading or validating Assay configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read, parsed, or extracted into [`crate::AssayConfig`].
    #[error("failed to load assay config: {0}")]
    Figment(#[from] figment::Error),

    /// A section the engine needs has no usable values.
    #[error(
        "assay config section '{section}' is not set up (for adapters, set ASSAY_ADAPTERS__BASE_URL or adapters.base_url in .assay/config.toml)"
    )]
    NotConfigured { section: String },

    /// A value passed deserialization but breaks a cross-field rule.
    #[error("assay config value '{field}' rejected: {reason}")]
    InvalidValue { field: String, reason: String },
}
