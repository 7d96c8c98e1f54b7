pub mod schema;
pub mod screen;
pub mod services;
pub mod support;
pub mod verify;

use crate::bootstrap::build_engine;
use crate::cli::{Commands, OutputFormat};

/// Dispatch a parsed command to its handler.
///
/// The engine is only built for commands that call it, so `schema` works
/// without adapter configuration.
pub async fn dispatch(command: Commands, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Schema(args) => schema::handle(&args, format),
        Commands::ScreenProject(args) => {
            screen::handle_project(&args, &build_engine()?, format).await
        }
        Commands::ScreenNgo(args) => screen::handle_ngo(&args, &build_engine()?, format).await,
        Commands::VerifyMilestone(args) => verify::handle(&args, &build_engine()?, format).await,
        Commands::Support(args) => support::handle(&args, &build_engine()?, format).await,
        Commands::Translate(args) => {
            services::handle_translate(&args, &build_engine()?, format).await
        }
        Commands::AnalyzeDocument(args) => {
            services::handle_document(&args, &build_engine()?, format).await
        }
    }
}
