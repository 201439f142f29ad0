//! Parsed policy records consumed by the documentation pipeline.
//!
//! Records arrive already parsed. Each one carries two parallel metadata
//! conventions: legacy free-text annotations (pre-formatted strings) and the
//! newer structured annotations. Picking between them is the resolver's job;
//! this module only holds the data.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod matchers;

pub use matchers::{KindMatcher, LabelSelector, LabelSelectorRequirement, SelectorOperator};

/// Enforcement value that marks a policy as report-only.
pub const DRY_RUN_ENFORCEMENT: &str = "dryrun";

/// One parsed policy, immutable for the duration of a run.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Policy {
    /// Identifying name (constraint kind) used in logs.
    pub kind: String,
    /// Path of the policy source file as discovered.
    pub path: String,
    pub title: String,
    pub description: String,
    /// Optional stable identifier prefixed to the title.
    pub policy_id: String,
    /// Free-form severity; empty means unclassified.
    pub severity: String,
    pub enforcement: String,
    pub legacy: LegacyMetadata,
    pub annotations: StructuredMetadata,
    /// Source text with leading comments stripped.
    pub source: String,
    /// Source text including comments.
    pub full_source: String,
}

impl Policy {
    /// Return the policy identifier when one is declared.
    pub fn policy_id(&self) -> Option<&str> {
        let id = self.policy_id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.enforcement == DRY_RUN_ENFORCEMENT
    }
}

/// Metadata from the legacy comment-header convention, already formatted.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LegacyMetadata {
    pub kind_matchers: String,
    pub match_labels: String,
    pub parameters: Vec<Parameter>,
}

/// Metadata from structured annotations.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StructuredMetadata {
    pub kind_matchers: Vec<KindMatcher>,
    pub label_selector: Option<LabelSelector>,
    pub parameters: BTreeMap<String, ParameterSchema>,
}

/// A documented policy parameter in its resolved (display) form.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub is_array: bool,
}

/// Schema attached to a structured parameter annotation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    /// Item schema; only meaningful when `ty` is `"array"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ParameterSchema>>,
}

impl ParameterSchema {
    pub fn is_array(&self) -> bool {
        self.ty == "array"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record_with_defaults() {
        let policy: Policy = serde_json::from_str(
            r#"{
                "kind": "RequiredLabels",
                "path": "policies/required-labels/src.rego",
                "title": "Require Labels",
                "annotations": {
                    "parameters": {
                        "tags": { "type": "array", "items": { "type": "string" } }
                    }
                }
            }"#,
        )
        .expect("parse policy");

        assert_eq!(policy.title, "Require Labels");
        assert!(policy.legacy.kind_matchers.is_empty());
        assert!(policy.annotations.label_selector.is_none());
        let tags = &policy.annotations.parameters["tags"];
        assert!(tags.is_array());
        assert_eq!(tags.items.as_ref().map(|item| item.ty.as_str()), Some("string"));
    }

    #[test]
    fn blank_policy_id_is_absent() {
        let policy = Policy {
            policy_id: "  ".to_string(),
            ..Policy::default()
        };
        assert_eq!(policy.policy_id(), None);
    }

    #[test]
    fn dry_run_matches_exact_marker() {
        let mut policy = Policy {
            enforcement: "dryrun".to_string(),
            ..Policy::default()
        };
        assert!(policy.is_dry_run());
        policy.enforcement = "deny".to_string();
        assert!(!policy.is_dry_run());
    }
}
