//! Output publishing for generated documentation.
//!
//! The page is written to a temp file beside the destination and renamed into
//! place, so a failed run never leaves a truncated document behind.
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Create the directory that will hold the output file.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))
}

/// Atomically replace `dest` with `contents`.
pub fn write_output(dest: &Path, dir: &Path, contents: &str) -> Result<()> {
    let mut staged = tempfile::Builder::new()
        .prefix(".policydoc-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("stage output in {}", dir.display()))?;
    staged
        .write_all(contents.as_bytes())
        .with_context(|| format!("write staged {}", staged.path().display()))?;
    staged
        .as_file()
        .sync_all()
        .with_context(|| format!("sync staged {}", staged.path().display()))?;
    staged
        .persist(dest)
        .with_context(|| format!("publish {}", dest.display()))?;
    Ok(())
}
