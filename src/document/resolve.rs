//! Metadata resolution across the two annotation conventions.
//!
//! Every field prefers the structured annotation, falls back to the legacy
//! pre-formatted value, and otherwise counts as absent. Each field is picked
//! through [`FieldSource`] so the precedence is spelled out once per field.
use super::format::{compose_title, kind_matchers_string, label_selector_string};
use super::{Diagnostic, DiagnosticKind};
use crate::policy::{Parameter, ParameterSchema, Policy};
use std::collections::BTreeMap;

/// Placeholder resource string for policies without kind matchers.
pub const ANY_RESOURCE: &str = "Any Resource";

/// Where a resolved metadata value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSource<T> {
    Structured(T),
    Legacy(T),
    Absent,
}

impl<T> FieldSource<T> {
    /// Pick the structured value when present, else the legacy one.
    pub fn select(structured: Option<T>, legacy: Option<T>) -> Self {
        match (structured, legacy) {
            (Some(value), _) => FieldSource::Structured(value),
            (None, Some(value)) => FieldSource::Legacy(value),
            (None, None) => FieldSource::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FieldSource::Structured(value) | FieldSource::Legacy(value) => Some(value),
            FieldSource::Absent => None,
        }
    }
}

/// Effective metadata for one policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMetadata {
    /// Title with the policy identifier prefix, used for anchors and sorting.
    pub composed_title: String,
    pub description: String,
    pub resources: String,
    pub match_labels: String,
    pub parameters: Vec<Parameter>,
}

/// Resolve a policy's documentation metadata. Non-fatal findings are pushed
/// onto `diagnostics`.
pub fn resolve_metadata(policy: &Policy, diagnostics: &mut Vec<Diagnostic>) -> ResolvedMetadata {
    let resources = match kind_matchers(policy).into_option() {
        Some(resources) if !resources.is_empty() => resources,
        _ => {
            diagnostics.push(Diagnostic {
                policy: policy.kind.clone(),
                source: policy.path.clone(),
                kind: DiagnosticKind::MissingKindMatchers,
            });
            ANY_RESOURCE.to_string()
        }
    };

    ResolvedMetadata {
        composed_title: compose_title(policy.policy_id(), &policy.title),
        description: policy.description.clone(),
        resources,
        match_labels: match_labels(policy).into_option().unwrap_or_default(),
        parameters: parameters(policy).into_option().unwrap_or_default(),
    }
}

pub(super) fn kind_matchers(policy: &Policy) -> FieldSource<String> {
    let structured = &policy.annotations.kind_matchers;
    let legacy = &policy.legacy.kind_matchers;
    FieldSource::select(
        (!structured.is_empty()).then(|| kind_matchers_string(structured)),
        (!legacy.is_empty()).then(|| legacy.clone()),
    )
}

pub(super) fn match_labels(policy: &Policy) -> FieldSource<String> {
    let legacy = &policy.legacy.match_labels;
    FieldSource::select(
        policy
            .annotations
            .label_selector
            .as_ref()
            .map(label_selector_string),
        (!legacy.is_empty()).then(|| legacy.clone()),
    )
}

pub(super) fn parameters(policy: &Policy) -> FieldSource<Vec<Parameter>> {
    let structured = &policy.annotations.parameters;
    let legacy = &policy.legacy.parameters;
    FieldSource::select(
        (!structured.is_empty()).then(|| structured_parameters(structured)),
        (!legacy.is_empty()).then(|| legacy.clone()),
    )
}

/// Convert structured parameter schemas to display parameters, ordered by name.
fn structured_parameters(schemas: &BTreeMap<String, ParameterSchema>) -> Vec<Parameter> {
    schemas
        .iter()
        .map(|(name, schema)| {
            if schema.is_array() {
                Parameter {
                    name: name.clone(),
                    description: schema.description.clone(),
                    ty: schema
                        .items
                        .as_ref()
                        .map(|items| items.ty.clone())
                        .unwrap_or_default(),
                    is_array: true,
                }
            } else {
                Parameter {
                    name: name.clone(),
                    description: schema.description.clone(),
                    ty: schema.ty.clone(),
                    is_array: false,
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
