use anyhow::bail;
use assay_core::analysis::ScreeningResult;
use assay_core::document::DocumentAnalysisResult;
use assay_core::entities::{EvidenceItem, NgoSubmission, ProjectSubmission};
use assay_core::support::SupportBotResponse;
use assay_core::translation::TranslationResult;
use assay_core::verification::{MilestoneVerificationResult, VerificationRequest};
use schemars::{Schema, schema_for};

use crate::cli::OutputFormat;
use crate::cli::commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `assay schema`.
pub const TYPE_NAMES: [&str; 9] = [
    "project",
    "ngo",
    "evidence",
    "screening-result",
    "verification-request",
    "verification-result",
    "support-response",
    "translation-result",
    "document-result",
];

/// JSON Schema for a named type, or `None` if the name is unknown.
pub fn schema_of(type_name: &str) -> Option<Schema> {
    let schema = match type_name {
        "project" => schema_for!(ProjectSubmission),
        "ngo" => schema_for!(NgoSubmission),
        "evidence" => schema_for!(Vec<EvidenceItem>),
        "screening-result" => schema_for!(ScreeningResult),
        "verification-request" => schema_for!(VerificationRequest),
        "verification-result" => schema_for!(MilestoneVerificationResult),
        "support-response" => schema_for!(SupportBotResponse),
        "translation-result" => schema_for!(TranslationResult),
        "document-result" => schema_for!(DocumentAnalysisResult),
        _ => return None,
    };
    Some(schema)
}

/// Handle `assay schema`.
pub fn handle(args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let Some(schema) = schema_of(&args.type_name) else {
        bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    output(&schema, format)
}
