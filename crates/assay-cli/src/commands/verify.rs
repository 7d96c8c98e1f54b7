use anyhow::Context;
use assay_core::entities::EvidenceItem;
use assay_engine::Engine;

use crate::bootstrap::read_json;
use crate::cli::OutputFormat;
use crate::cli::commands::VerifyMilestoneArgs;
use crate::output::output;

/// Handle `assay verify-milestone`.
pub async fn handle(
    args: &VerifyMilestoneArgs,
    engine: &Engine,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let evidence: Vec<EvidenceItem> = read_json(&args.evidence)?;
    let result = engine
        .verify_milestone(&args.milestone_id, evidence)
        .await
        .with_context(|| format!("verification of milestone {} failed", args.milestone_id))?;
    output(&result, format)
}
