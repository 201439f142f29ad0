//! CLI argument parsing for documentation generation.
//!
//! The CLI only binds flags; the resolved settings live in
//! [`crate::config::DocConfig`] and are passed explicitly from there.
use crate::config::DEFAULT_OUTPUT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "policydoc",
    version,
    about = "Generate grouped markdown documentation from parsed policy records",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Doc(DocArgs),
}

/// Doc command inputs.
#[derive(Parser, Debug)]
#[command(
    about = "Generate documentation from policy records",
    after_help = "Examples:\n  Generate the documentation\n    policydoc doc\n\n  Save the documentation to a specific path\n    policydoc doc --output docs/policies.md\n\n  Set the URL where the policies are hosted at\n    policydoc doc --url https://github.com/example/policies"
)]
pub struct DocArgs {
    /// Directory containing `*.policy.json` records
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output location (including filename) for the policy documentation
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// The URL where the policy files are hosted at (e.g. https://github.com/policies)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Do not include the policy source in the documentation
    #[arg(long)]
    pub no_rego: bool,

    /// Include comments from the policy source in the documentation
    #[arg(long)]
    pub include_comments: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_defaults_match_documented_flags() {
        let args = RootArgs::try_parse_from(["policydoc", "doc"]).expect("parse");
        let Command::Doc(doc) = args.command;
        assert_eq!(doc.dir, PathBuf::from("."));
        assert_eq!(doc.output, PathBuf::from("policies.md"));
        assert_eq!(doc.url, None);
        assert!(!doc.no_rego);
        assert!(!doc.include_comments);
    }

    #[test]
    fn doc_accepts_directory_and_flags() {
        let args = RootArgs::try_parse_from([
            "policydoc",
            "doc",
            "policies",
            "-o",
            "docs/out.md",
            "--url",
            "https://example.com",
            "--no-rego",
            "--include-comments",
        ])
        .expect("parse");
        let Command::Doc(doc) = args.command;
        assert_eq!(doc.dir, PathBuf::from("policies"));
        assert_eq!(doc.output, PathBuf::from("docs/out.md"));
        assert_eq!(doc.url.as_deref(), Some("https://example.com"));
        assert!(doc.no_rego);
        assert!(doc.include_comments);
    }
}
