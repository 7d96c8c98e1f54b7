//! Content fingerprints and cache key formatting.
//!
//! A fingerprint is a blake3 hash over a canonical projection of an entity's
//! fields. Identical logical input always yields the same fingerprint, and two
//! submissions sharing a fingerprint are treated as the same submission.
//!
//! Key layout:
//!
//! ```text
//! screening:project:<fingerprint>
//! screening:ngo:<fingerprint>
//! document:<type>:<hash(url)>
//! translation:<source|auto>:<target>:<hash(text)>
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::{NgoSubmission, ProjectSubmission};
use crate::enums::EntityKind;

/// Separates projected fields so `("ab", "c")` and `("a", "bc")` hash differently.
const FIELD_SEPARATOR: u8 = 0x1f;

/// Hex-encoded blake3 hash of a canonical field projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash the given fields in order.
    #[must_use]
    pub fn of_fields(fields: &[&str]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for field in fields {
            hasher.update(field.as_bytes());
            hasher.update(&[FIELD_SEPARATOR]);
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    /// Fingerprint of a project: title, description, funding amount, type.
    #[must_use]
    pub fn of_project(project: &ProjectSubmission) -> Self {
        let amount = project.funding_goal.to_string();
        Self::of_fields(&[
            &project.title,
            &project.description,
            &amount,
            &project.project_type,
        ])
    }

    /// Fingerprint of an NGO: name, registration number, mission.
    #[must_use]
    pub fn of_ngo(ngo: &NgoSubmission) -> Self {
        Self::of_fields(&[&ngo.name, &ngo.registration_number, &ngo.mission])
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache key for a screening result of the given entity kind.
    #[must_use]
    pub fn screening_key(&self, kind: EntityKind) -> String {
        format!("screening:{kind}:{}", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hex-encoded blake3 hash of a single string.
#[must_use]
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Cache key for a document analysis: `document:<type>:<hash(url)>`.
#[must_use]
pub fn document_key(document_type: &str, document_url: &str) -> String {
    format!("document:{document_type}:{}", content_hash(document_url))
}

/// Cache key for a translation: `translation:<source|auto>:<target>:<hash(text)>`.
#[must_use]
pub fn translation_key(source_language: Option<&str>, target_language: &str, text: &str) -> String {
    format!(
        "translation:{}:{target_language}:{}",
        source_language.unwrap_or("auto"),
        content_hash(text)
    )
}
