use crate::policy::{KindMatcher, LabelSelector};

/// Prefix the title with the policy identifier when there is one.
pub(super) fn compose_title(policy_id: Option<&str>, title: &str) -> String {
    match policy_id {
        Some(id) => format!("{id}: {title}"),
        None => title.to_string(),
    }
}

/// In-document link slug: lowercase, spaces to hyphens, colons dropped.
pub(super) fn anchor(title: &str) -> String {
    title.replace(' ', "-").replace(':', "").to_lowercase()
}

pub(super) fn kind_matchers_string(matchers: &[KindMatcher]) -> String {
    matchers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Render a selector as `key=value` pairs followed by `key OP [values]`
/// expressions, comma-separated. Exact-match labels come out sorted by key.
pub(super) fn label_selector_string(selector: &LabelSelector) -> String {
    let labels = selector
        .match_labels
        .iter()
        .map(|(key, value)| format!("{key}={value}"));
    let expressions = selector.match_expressions.iter().map(|expr| {
        format!(
            "{} {} [{}]",
            expr.key,
            expr.operator,
            expr.values.join(" ")
        )
    });
    labels.chain(expressions).collect::<Vec<_>>().join(", ")
}
