use anyhow::Context;
use assay_core::entities::{NgoSubmission, ProjectSubmission};
use assay_engine::Engine;

use crate::bootstrap::read_json;
use crate::cli::OutputFormat;
use crate::cli::commands::ScreenArgs;
use crate::output::output;

/// Handle `assay screen-project`.
pub async fn handle_project(
    args: &ScreenArgs,
    engine: &Engine,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let project: ProjectSubmission = read_json(&args.input)?;
    let result = engine
        .screen_project(&project)
        .await
        .context("project screening failed")?;
    output(&result, format)
}

/// Handle `assay screen-ngo`.
pub async fn handle_ngo(
    args: &ScreenArgs,
    engine: &Engine,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let ngo: NgoSubmission = read_json(&args.input)?;
    let result = engine
        .screen_ngo(&ngo)
        .await
        .context("NGO screening failed")?;
    output(&result, format)
}
