//! Q&A similarity indexes.
//!
//! [`MemoryQaIndex`] keeps pairs in process and scores questions by token
//! Jaccard similarity. [`HttpQaIndex`] delegates to a remote vector index.

use std::collections::{BTreeSet, VecDeque};

use assay_core::support::{QaMatch, QaPair};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{AdapterClient, QaIndex, error::AdapterError};

// ── In-memory ──────────────────────────────────────────────────────

/// Pairs kept by [`MemoryQaIndex::new`] before the oldest is evicted.
pub const DEFAULT_QA_CAPACITY: usize = 1_000;

/// In-process index. Only pairs in the same language are compared.
///
/// Holds at most `capacity` pairs; storing a new question beyond that drops
/// the oldest one.
pub struct MemoryQaIndex {
    pairs: RwLock<VecDeque<QaPair>>,
    capacity: usize,
}

impl Default for MemoryQaIndex {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QA_CAPACITY)
    }
}

impl MemoryQaIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Seed the index with known pairs (e.g. an FAQ). Capacity grows to fit them.
    #[must_use]
    pub fn with_pairs(pairs: Vec<QaPair>) -> Self {
        Self {
            capacity: pairs.len().max(DEFAULT_QA_CAPACITY),
            pairs: RwLock::new(pairs.into()),
        }
    }

    pub async fn len(&self) -> usize {
        self.pairs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Lowercased alphanumeric tokens.
fn tokens(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Jaccard similarity of two token sets, 0 when both are empty.
#[allow(clippy::cast_precision_loss)]
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

#[async_trait]
impl QaIndex for MemoryQaIndex {
    async fn nearest(
        &self,
        question: &str,
        language: &str,
    ) -> Result<Option<QaMatch>, AdapterError> {
        let query = tokens(question);
        let pairs = self.pairs.read().await;
        let best = pairs
            .iter()
            .filter(|pair| pair.language == language)
            .map(|pair| (pair, jaccard(&query, &tokens(&pair.question))))
            .filter(|(_, similarity)| *similarity > 0.0)
            .max_by(|a, b| a.1.total_cmp(&b.1));

        Ok(best.map(|(pair, similarity)| QaMatch {
            pair: pair.clone(),
            similarity,
        }))
    }

    async fn remember(&self, pair: QaPair) -> Result<(), AdapterError> {
        let key = tokens(&pair.question);
        let mut pairs = self.pairs.write().await;
        if let Some(existing) = pairs
            .iter_mut()
            .find(|p| p.language == pair.language && tokens(&p.question) == key)
        {
            *existing = pair;
        } else {
            while pairs.len() >= self.capacity {
                pairs.pop_front();
            }
            pairs.push_back(pair);
        }
        Ok(())
    }
}

// ── Remote ─────────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct NearestResponse {
    #[serde(rename = "match", default)]
    best: Option<QaMatch>,
}

/// Remote index: `GET <url>?question=..&language=..` for lookups,
/// `POST <url>` with a [`QaPair`] to store.
pub struct HttpQaIndex {
    client: AdapterClient,
    url: String,
}

impl HttpQaIndex {
    #[must_use]
    pub fn new(client: AdapterClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    fn lookup_url(&self, question: &str, language: &str) -> String {
        format!(
            "{}?question={}&language={}",
            self.url,
            urlencoding::encode(question),
            urlencoding::encode(language)
        )
    }
}

#[async_trait]
impl QaIndex for HttpQaIndex {
    async fn nearest(
        &self,
        question: &str,
        language: &str,
    ) -> Result<Option<QaMatch>, AdapterError> {
        let resp: NearestResponse = self
            .client
            .get_json(&self.lookup_url(question, language))
            .await?;
        Ok(resp.best)
    }

    async fn remember(&self, pair: QaPair) -> Result<(), AdapterError> {
        self.client.post_discard(&self.url, &pair).await
    }
}
