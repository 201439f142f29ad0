//! Policy record discovery.
//!
//! Parsing policy source text happens upstream; this module only loads the
//! already-parsed records in a stable order.
use crate::policy::Policy;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File suffix identifying parsed policy records.
pub const RECORD_SUFFIX: &str = ".policy.json";

/// Supplies the ordered sequence of policies to document.
pub trait PolicySource {
    fn policies(&self) -> Result<Vec<Policy>>;
}

/// Reads `*.policy.json` records found under a directory tree.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    root: PathBuf,
}

impl ManifestSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Many(Vec<Policy>),
    One(Box<Policy>),
}

impl PolicySource for ManifestSource {
    fn policies(&self) -> Result<Vec<Policy>> {
        if !self.root.is_dir() {
            return Err(anyhow!("policy directory {} not found", self.root.display()));
        }
        let mut policies = Vec::new();
        for path in collect_record_files(&self.root)? {
            let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            let records: RecordFile = serde_json::from_slice(&bytes)
                .with_context(|| format!("parse policy record {}", path.display()))?;
            match records {
                RecordFile::Many(many) => policies.extend(many),
                RecordFile::One(one) => policies.push(*one),
            }
        }
        Ok(policies)
    }
}

fn collect_record_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root).with_context(|| format!("read {}", root.display()))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            files.extend(collect_record_files(&path)?);
        } else if path.is_file() && is_record_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(RECORD_SUFFIX))
}
