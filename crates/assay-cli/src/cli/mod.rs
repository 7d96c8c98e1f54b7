use clap::{Parser, ValueEnum};

pub mod commands;

pub use commands::Commands;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Top-level CLI parser for the `assay` binary.
#[derive(Debug, Parser)]
#[command(
    name = "assay",
    version,
    about = "Assay - submission screening and milestone verification"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "assay",
            "--format",
            "raw",
            "--verbose",
            "screen-project",
            "--input",
            "project.json",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::ScreenProject(ref args) if args.input == "project.json"));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["assay", "screen-ngo", "--input", "-", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::ScreenNgo(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["assay", "--format", "xml", "schema", "project"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn verify_milestone_requires_id_and_evidence() {
        assert!(Cli::try_parse_from(["assay", "verify-milestone", "--milestone-id", "ms-1"]).is_err());

        let cli = Cli::try_parse_from([
            "assay",
            "verify-milestone",
            "--milestone-id",
            "ms-1",
            "--evidence",
            "evidence.json",
        ])
        .expect("cli should parse");
        let Commands::VerifyMilestone(args) = cli.command else {
            panic!("expected verify-milestone");
        };
        assert_eq!(args.milestone_id, "ms-1");
        assert_eq!(args.evidence, "evidence.json");
    }

    #[test]
    fn support_defaults_language_and_user() {
        let cli = Cli::try_parse_from(["assay", "support", "--message", "How do fees work?"])
            .expect("cli should parse");
        let Commands::Support(args) = cli.command else {
            panic!("expected support");
        };
        assert_eq!(args.language, "en");
        assert!(args.user_id.is_none());
    }

    #[test]
    fn translate_source_is_optional() {
        let cli = Cli::try_parse_from(["assay", "translate", "--text", "Hola", "--to", "en"])
            .expect("cli should parse");
        let Commands::Translate(args) = cli.command else {
            panic!("expected translate");
        };
        assert_eq!(args.to, "en");
        assert!(args.from.is_none());
    }

    #[test]
    fn analyze_document_takes_type_flag() {
        let cli = Cli::try_parse_from([
            "assay",
            "analyze-document",
            "--url",
            "https://cdn.example.org/cert.pdf",
            "--type",
            "registration_certificate",
        ])
        .expect("cli should parse");
        let Commands::AnalyzeDocument(args) = cli.command else {
            panic!("expected analyze-document");
        };
        assert_eq!(args.document_type, "registration_certificate");
    }
}
