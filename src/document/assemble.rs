//! Document assembly and bucketing.
use super::format::anchor;
use super::resolve::resolve_metadata;
use super::sort::sort_by_title;
use super::url::{resolve_url, PathResolutionError};
use super::{Bucket, Diagnostic, DiagnosticKind, Document, DocumentSet, Header};
use crate::config::{DocConfig, SourceMode};
use crate::policy::Policy;

/// Build the bucketed, title-sorted document set for `policies`.
///
/// Untitled policies are skipped with a diagnostic. A link that cannot be
/// resolved aborts the whole run.
pub fn assemble_documents(
    policies: &[Policy],
    config: &DocConfig,
) -> Result<DocumentSet, PathResolutionError> {
    let output_dir = config.output_dir();
    let mut set = DocumentSet::default();

    for policy in policies {
        if policy.title.is_empty() {
            set.diagnostics.push(Diagnostic {
                policy: policy.kind.clone(),
                source: policy.path.clone(),
                kind: DiagnosticKind::MissingTitle,
            });
            continue;
        }

        let url = resolve_url(&policy.path, &output_dir, config.base_url.as_deref())?;
        let metadata = resolve_metadata(policy, &mut set.diagnostics);
        let document = Document {
            header: Header {
                anchor: anchor(&metadata.composed_title),
                title: metadata.composed_title,
                description: metadata.description,
                resources: metadata.resources,
                match_labels: metadata.match_labels,
                parameters: metadata.parameters,
            },
            url,
            rego: source_text(policy, config.source_mode),
        };

        set.buckets
            .entry(bucket_for(policy))
            .or_default()
            .push(document);
    }

    sort_by_title(&mut set.buckets);
    Ok(set)
}

/// Unclassified policies go to `Other`; dry-run overrides severity.
pub(super) fn bucket_for(policy: &Policy) -> Bucket {
    if policy.severity.is_empty() {
        Bucket::Other
    } else if policy.is_dry_run() {
        Bucket::NotEnforced
    } else {
        Bucket::for_severity(&policy.severity)
    }
}

fn source_text(policy: &Policy, mode: SourceMode) -> String {
    match mode {
        SourceMode::Omit => String::new(),
        SourceMode::WithComments => policy.full_source.clone(),
        SourceMode::WithoutComments => policy.source.clone(),
    }
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
