use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use assay_cache::MemoryCache;
use assay_config::AssayConfig;
use assay_engine::Engine;
use serde::de::DeserializeOwned;

/// Load configuration (with `.env` support) and wire an engine from it.
pub fn build_engine() -> anyhow::Result<Engine> {
    let config = AssayConfig::load_with_dotenv().context("failed to load assay configuration")?;
    if !config.adapters.is_configured() {
        anyhow::bail!(
            "adapters are not configured: set adapters.base_url in .assay/config.toml or ASSAY_ADAPTERS__BASE_URL"
        );
    }

    let cache = Arc::new(MemoryCache::new(config.cache.max_entries));
    Engine::from_config(&config, cache).context("failed to initialize assay engine")
}

/// Parse JSON from a file path, or from stdin when `source` is `-`.
pub fn read_json<T: DeserializeOwned>(source: &str) -> anyhow::Result<T> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read {source}"))?
    };

    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {source}"))
}
