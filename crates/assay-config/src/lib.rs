//! # assay-config
//!
//! Layered configuration loading for Assay using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ASSAY_*` prefix, `__` as separator)
//! 2. Project-level `.assay/config.toml`
//! 3. User-level `~/.config/assay/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ASSAY_ADAPTERS__BASE_URL` -> `adapters.base_url`,
//! `ASSAY_ADAPTERS__TIMEOUTS__EVIDENCE_SECS` -> `adapters.timeouts.evidence_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use assay_config::AssayConfig;
//!
//! let config = AssayConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if config.adapters.is_configured() {
//!     println!("Adapters at: {}", config.adapters.base_url);
//! }
//! ```

mod adapters;
mod cache;
mod engine;
mod error;

pub use adapters::{AdaptersConfig, TimeoutConfig};
pub use cache::CacheConfig;
pub use engine::{EngineConfig, MAX_LIST_LIMIT};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssayConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub adapters: AdaptersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AssayConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".assay/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("ASSAY_").split("__"));

        figment
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an adapter timeout is not
    /// shorter than the request timeout, evidence concurrency is zero, the
    /// list limit lies outside `1..=10`, a support rate limit has no window,
    /// or a Q&A threshold lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let request_secs = self.engine.request_timeout_secs;
        for (field, secs) in self.adapters.timeouts.named() {
            if secs == 0 || secs >= request_secs {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!(
                        "{secs}s must be non-zero and shorter than engine.request_timeout_secs ({request_secs}s)"
                    ),
                });
            }
        }

        if self.engine.evidence_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.evidence_concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }

        if !(1..=MAX_LIST_LIMIT).contains(&self.engine.list_limit) {
            return Err(ConfigError::InvalidValue {
                field: "engine.list_limit".into(),
                reason: format!(
                    "{} must be between 1 and {MAX_LIST_LIMIT}",
                    self.engine.list_limit
                ),
            });
        }

        if self.engine.support_rate_limit > 0 && self.engine.support_rate_window_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.support_rate_window_secs".into(),
                reason: "must be non-zero when a support rate limit is set".into(),
            });
        }

        for (field, value) in [
            ("engine.qa_reuse_threshold", self.engine.qa_reuse_threshold),
            ("engine.qa_persist_threshold", self.engine.qa_persist_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("{value} is outside [0, 1]"),
                });
            }
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("assay").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
