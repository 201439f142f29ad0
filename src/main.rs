use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod document;
mod output;
mod policy;
mod render;
mod source;

use cli::{Command, DocArgs, RootArgs};
use config::{DocConfig, SourceMode};
use document::{assemble_documents, DocumentSet};
use source::{ManifestSource, PolicySource};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Doc(args) => cmd_doc(args),
    }
}

fn cmd_doc(args: DocArgs) -> Result<()> {
    let config = DocConfig::from_args(&args);
    let output_dir = config.output_dir();
    output::ensure_output_dir(&output_dir)?;

    let source = ManifestSource::new(args.dir.clone());
    let policies = source
        .policies()
        .with_context(|| format!("load policies from {}", args.dir.display()))?;

    if config.source_mode == SourceMode::Omit {
        tracing::info!("no-rego flag is set. Policy source will not be included in the documentation.");
    }

    let set = assemble_documents(&policies, &config).context("get documentation")?;
    log_diagnostics(&set);
    if set.is_empty() {
        tracing::warn!(dir = %args.dir.display(), "no titled policies found");
    }

    let markdown = render::render_markdown(&set);
    output::write_output(&config.output, &output_dir, &markdown)?;

    tracing::info!(
        num_policies = set.len(),
        output = %config.output.display(),
        "completed successfully"
    );
    Ok(())
}

fn log_diagnostics(set: &DocumentSet) {
    for diagnostic in &set.diagnostics {
        tracing::warn!(
            name = %diagnostic.policy,
            src = %diagnostic.source,
            "{}",
            diagnostic.kind.message()
        );
    }
}
