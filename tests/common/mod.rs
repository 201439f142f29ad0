//! Shared test infrastructure for integration tests.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch workspace holding policy records and generated output.
pub struct PolicyFixture {
    pub temp_dir: TempDir,
}

impl PolicyFixture {
    pub fn create() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a record file under `policies/<rel>`.
    pub fn write_record(&self, rel: &str, record: &Value) -> PathBuf {
        let path = self.root().join("policies").join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directory");
        }
        let json = serde_json::to_string_pretty(record).expect("serialize record");
        std::fs::write(&path, json).expect("write record");
        path
    }

    /// Run `policydoc doc policies <args>` from the fixture root.
    pub fn run_doc(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_policydoc"))
            .current_dir(self.root())
            .arg("doc")
            .arg("policies")
            .args(args)
            .env("RUST_LOG", "info")
            .output()
            .expect("run policydoc")
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root().join(rel)).expect("read output")
    }
}
