//! Deterministic markdown renderer for assembled policy documents.
//!
//! Buckets render in label order and documents in the order the assembler
//! left them, so the same document set always yields the same bytes.
use crate::document::DocumentSet;

mod format;

use format::{append_bucket_section, append_header, append_index};

/// Render the full policy documentation page.
pub fn render_markdown(set: &DocumentSet) -> String {
    let mut out = String::new();
    append_header(&mut out);
    for (bucket, documents) in &set.buckets {
        append_index(&mut out, bucket, documents);
    }
    for (bucket, documents) in &set.buckets {
        append_bucket_section(&mut out, bucket, documents);
    }
    out
}
