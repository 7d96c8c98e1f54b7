use assay_engine::Engine;

use crate::cli::OutputFormat;
use crate::cli::commands::SupportArgs;
use crate::output::output;

/// Handle `assay support`. Always prints a response; failures become the fallback answer.
pub async fn handle(args: &SupportArgs, engine: &Engine, format: OutputFormat) -> anyhow::Result<()> {
    let response = engine
        .process_support_message(&args.message, &args.language, args.user_id.as_deref())
        .await;
    output(&response, format)
}
