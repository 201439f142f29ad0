//! Run configuration for documentation generation.
//!
//! Settings are resolved once from the CLI and passed by reference into the
//! resolver and assembler; nothing downstream reads process-wide state.
use crate::cli::DocArgs;
use std::path::{Path, PathBuf};

/// Default output location for generated documentation.
pub const DEFAULT_OUTPUT: &str = "policies.md";

/// Which form of policy source text ends up in each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Leave source text out entirely.
    Omit,
    WithComments,
    #[default]
    WithoutComments,
}

impl SourceMode {
    /// Combine the `no-rego` and `include-comments` flags; `no-rego` wins.
    pub fn from_flags(no_rego: bool, include_comments: bool) -> Self {
        if no_rego {
            SourceMode::Omit
        } else if include_comments {
            SourceMode::WithComments
        } else {
            SourceMode::WithoutComments
        }
    }
}

/// Resolved settings for a single `doc` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocConfig {
    pub output: PathBuf,
    /// Hosting URL for policy links; `None` links relative to the output.
    pub base_url: Option<String>,
    pub source_mode: SourceMode,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            base_url: None,
            source_mode: SourceMode::default(),
        }
    }
}

impl DocConfig {
    pub fn from_args(args: &DocArgs) -> Self {
        let base_url = args
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        Self {
            output: args.output.clone(),
            base_url,
            source_mode: SourceMode::from_flags(args.no_rego, args.include_comments),
        }
    }

    /// Directory that will contain the output file.
    pub fn output_dir(&self) -> PathBuf {
        match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        }
    }
}
