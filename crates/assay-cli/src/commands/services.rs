use anyhow::Context;
use assay_engine::Engine;

use crate::cli::OutputFormat;
use crate::cli::commands::{AnalyzeDocumentArgs, TranslateArgs};
use crate::output::output;

/// Handle `assay translate`.
pub async fn handle_translate(
    args: &TranslateArgs,
    engine: &Engine,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = engine
        .translate_text(&args.text, &args.to, args.from.as_deref())
        .await
        .context("translation failed")?;
    output(&result, format)
}

/// Handle `assay analyze-document`.
pub async fn handle_document(
    args: &AnalyzeDocumentArgs,
    engine: &Engine,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = engine
        .analyze_document(&args.url, &args.document_type)
        .await
        .context("document analysis failed")?;
    output(&result, format)
}
