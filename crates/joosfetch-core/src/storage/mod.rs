//! Output directory and text file writes.
//!
//! Every write truncates: a rerun replaces the previous dump instead of
//! appending to it.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Creates `dir` and any missing parents. No-op when it already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

/// Writes `text` as UTF-8 to `dir/filename`, creating `dir` if needed and
/// overwriting an existing file. Returns the written path.
pub fn write_text(dir: &Path, filename: &str, text: &str) -> Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(filename);
    fs::write(&path, text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
