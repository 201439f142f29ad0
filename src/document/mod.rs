//! Documentation model and the pipeline that builds it.
//!
//! Policies flow through metadata resolution and URL resolution into
//! assembled documents, which are bucketed by enforcement/severity and sorted
//! by title. The pipeline is pure apart from reading the working directory
//! for relative links: it never logs, returning [`Diagnostic`]s instead.
use crate::policy::Parameter;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

mod assemble;
mod format;
mod resolve;
mod sort;
mod url;

pub use assemble::assemble_documents;

/// Resolved per-document metadata.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Header {
    /// Composed title: `"<id>: <title>"` when the policy has an identifier.
    pub title: String,
    pub description: String,
    pub resources: String,
    pub match_labels: String,
    pub anchor: String,
    pub parameters: Vec<Parameter>,
}

/// A single policy document ready for rendering.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub url: String,
    /// Policy source text; empty when source inclusion is disabled.
    pub rego: String,
}

/// Group a document is rendered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bucket {
    Severity(String),
    NotEnforced,
    Other,
}

impl Bucket {
    /// Bucket for a severity value. A severity spelled like a sentinel label
    /// shares that sentinel's bucket.
    pub fn for_severity(severity: &str) -> Self {
        match severity {
            "" | "Other" => Bucket::Other,
            "Not Enforced" => Bucket::NotEnforced,
            _ => Bucket::Severity(severity.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Bucket::Severity(severity) => severity,
            Bucket::NotEnforced => "Not Enforced",
            Bucket::Other => "Other",
        }
    }

    // Keeps Ord consistent with Eq for hand-built sentinel-named severities.
    fn rank(&self) -> u8 {
        match self {
            Bucket::Severity(_) => 0,
            Bucket::NotEnforced => 1,
            Bucket::Other => 2,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Buckets order by label so rendering matches a sorted-key walk.
impl Ord for Bucket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for Bucket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Condition noticed while resolving a policy; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Policy name (kind).
    pub policy: String,
    /// Policy source path.
    pub source: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No title; the policy was skipped.
    MissingTitle,
    /// No kind matchers in either annotation style.
    MissingKindMatchers,
}

impl DiagnosticKind {
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingTitle => "No title set, skipping documentation generation.",
            DiagnosticKind::MissingKindMatchers => {
                "No kind matchers set, this can lead to poor policy performance."
            }
        }
    }
}

/// Bucketed, sorted documents plus the diagnostics gathered on the way.
#[derive(Debug, Default)]
pub struct DocumentSet {
    pub buckets: BTreeMap<Bucket, Vec<Document>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentSet {
    /// Total number of documented policies across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn bucket(&self, bucket: &Bucket) -> &[Document] {
        self.buckets.get(bucket).map(Vec::as_slice).unwrap_or_default()
    }
}
