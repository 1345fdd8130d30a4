//! Atomic file writes.
//!
//! Supplement files are written via a temporary file in the target directory
//! (write, fsync, rename), so an interrupted run never leaves a partially
//! written output file behind. On POSIX the rename is atomic; on Windows an
//! existing target is replaced by removing it first.

use crate::error::{DraftError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DraftError::OutputError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temp file path in the same directory as the target, so the final rename
/// stays on one filesystem.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DraftError::OutputError("invalid output path".to_string()))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DraftError::OutputError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let result = file
        .write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| DraftError::OutputError(format!("failed to write output: {}", e)));

    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() is atomic and replaces an existing destination.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        DraftError::OutputError(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(not(unix))]
fn replace(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            DraftError::OutputError(format!("failed to replace '{}': {}", target.display(), e))
        })?;
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        DraftError::OutputError(format!("failed to replace '{}': {}", target.display(), e))
    })
}
