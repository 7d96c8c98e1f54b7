use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Screen a project submission.
    ScreenProject(ScreenArgs),
    /// Screen an NGO submission.
    ScreenNgo(ScreenArgs),
    /// Verify a milestone against its evidence.
    VerifyMilestone(VerifyMilestoneArgs),
    /// Ask the support bot a question.
    Support(SupportArgs),
    /// Translate text.
    Translate(TranslateArgs),
    /// Analyze a document by URL.
    AnalyzeDocument(AnalyzeDocumentArgs),
    /// Print the JSON Schema of an input or result type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScreenArgs {
    /// Submission JSON file, or `-` for stdin.
    #[arg(long)]
    pub input: String,
}

#[derive(Clone, Debug, Args)]
pub struct VerifyMilestoneArgs {
    #[arg(long)]
    pub milestone_id: String,

    /// JSON array of evidence items, or `-` for stdin.
    #[arg(long)]
    pub evidence: String,
}

#[derive(Clone, Debug, Args)]
pub struct SupportArgs {
    #[arg(long)]
    pub message: String,

    #[arg(long, default_value = "en")]
    pub language: String,

    #[arg(long)]
    pub user_id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TranslateArgs {
    #[arg(long)]
    pub text: String,

    /// Target language code.
    #[arg(long)]
    pub to: String,

    /// Source language code (detected when omitted).
    #[arg(long)]
    pub from: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeDocumentArgs {
    #[arg(long)]
    pub url: String,

    #[arg(long = "type")]
    pub document_type: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `project`, `screening-result`.
    pub type_name: String,
}
