use crate::document::{Bucket, Document};
use crate::policy::Parameter;

pub(super) fn append_header(out: &mut String) {
    out.push_str("# Policies\n");
}

pub(super) fn append_index(out: &mut String, bucket: &Bucket, documents: &[Document]) {
    out.push_str(&format!("\n## {bucket}\n\n"));
    for document in documents {
        out.push_str(&format!(
            "* [{}](#{})\n",
            document.header.title, document.header.anchor
        ));
    }
}

pub(super) fn append_bucket_section(out: &mut String, bucket: &Bucket, documents: &[Document]) {
    out.push_str(&format!("\n## {bucket}\n"));
    for document in documents {
        append_document(out, bucket, document);
    }
}

fn append_document(out: &mut String, bucket: &Bucket, document: &Document) {
    let header = &document.header;
    out.push_str(&format!("\n### {}\n\n", header.title));
    out.push_str(&format!("**Severity:** {bucket}\n\n"));
    out.push_str(&format!("**Resources:** {}\n\n", header.resources));
    if !header.match_labels.is_empty() {
        out.push_str(&format!("**MatchLabels:** {}\n\n", header.match_labels));
    }
    append_parameters(out, &header.parameters);
    if !header.description.is_empty() {
        out.push_str(&header.description);
        out.push_str("\n\n");
    }
    append_source(out, &document.rego);
    out.push_str(&format!("_source: [{0}]({0})_\n", document.url));
}

fn append_parameters(out: &mut String, parameters: &[Parameter]) {
    if parameters.is_empty() {
        return;
    }
    out.push_str("**Parameters:**\n\n");
    for param in parameters {
        let array = if param.is_array { "array of " } else { "" };
        out.push_str(&format!("* {}: {array}{}\n", param.name, param.ty));
        if !param.description.is_empty() {
            out.push_str(&format!("  {}\n", param.description));
        }
    }
    out.push('\n');
}

fn append_source(out: &mut String, rego: &str) {
    if rego.trim().is_empty() {
        return;
    }
    out.push_str("```rego\n");
    out.push_str(rego);
    if !rego.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n");
}
