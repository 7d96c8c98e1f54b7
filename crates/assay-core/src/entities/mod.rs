//! Submission entities supplied by callers.
//!
//! Each entity is plain data. Fingerprinting lives in [`crate::fingerprint`].

mod evidence;
mod ngo;
mod project;

pub use evidence::{AnalyzedEvidence, EvidenceAnalysis, EvidenceItem};
pub use ngo::{ImpactMetric, NgoSubmission};
pub use project::{DocumentRef, MilestonePlan, ProjectSubmission};
