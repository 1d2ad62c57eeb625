//! Atomic manifest writer
//!
//! Uses tempfile + rename so readers never observe a half-written manifest.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::entities::Manifest;
use crate::error::{BucketError, BucketResult};

/// Write content to a file atomically, creating parent directories.
pub fn write_atomic(path: &Path, content: &[u8]) -> BucketResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| BucketError::Io(e.error))?;
    Ok(())
}

/// Serialize a manifest as pretty JSON and write it atomically.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> BucketResult<()> {
    let mut json = manifest
        .to_json()
        .map_err(|e| BucketError::Io(std::io::Error::other(e)))?;
    json.push('\n');
    write_atomic(path, json.as_bytes())?;
    tracing::info!(path = %path.display(), assets = manifest.len(), "wrote manifest");
    Ok(())
}
