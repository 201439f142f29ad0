//! Structured matcher annotations.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resource kinds a policy applies to, grouped by API group.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct KindMatcher {
    pub api_groups: Vec<String>,
    pub kinds: Vec<String>,
}

impl fmt::Display for KindMatcher {
    /// Renders every `group/kind` pair separated by a space. The empty API
    /// group is the core group.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for group in &self.api_groups {
            let group = if group.is_empty() { "core" } else { group.as_str() };
            for kind in &self.kinds {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{group}/{kind}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Label constraints restricting which resources a policy applies to.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelSelector {
    pub match_labels: BTreeMap<String, String>,
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: SelectorOperator,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Set-based label selector operators.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum SelectorOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

impl SelectorOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorOperator::In => "In",
            SelectorOperator::NotIn => "NotIn",
            SelectorOperator::Exists => "Exists",
            SelectorOperator::DoesNotExist => "DoesNotExist",
        }
    }
}

impl fmt::Display for SelectorOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matcher_expands_group_kind_pairs() {
        let matcher = KindMatcher {
            api_groups: vec!["".to_string(), "apps".to_string()],
            kinds: vec!["Pod".to_string(), "Deployment".to_string()],
        };
        assert_eq!(
            matcher.to_string(),
            "core/Pod core/Deployment apps/Pod apps/Deployment"
        );
    }

    #[test]
    fn kind_matcher_without_groups_is_empty() {
        let matcher = KindMatcher {
            api_groups: Vec::new(),
            kinds: vec!["Pod".to_string()],
        };
        assert_eq!(matcher.to_string(), "");
    }

    #[test]
    fn operators_use_pascal_case_on_the_wire() {
        let requirement: LabelSelectorRequirement =
            serde_json::from_str(r#"{"key":"tier","operator":"NotIn","values":["a"]}"#)
                .expect("parse requirement");
        assert_eq!(requirement.operator, SelectorOperator::NotIn);
    }
}
