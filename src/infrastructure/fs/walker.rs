//! Directory walker
//!
//! Implements the FileLister port with the `ignore` crate's walker, with
//! all gitignore-style filtering turned off: dotfiles are listed, directories
//! are not, and the tool's own state directory at the root is pruned.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::normalize_key;
use crate::domain::ports::{FileLister, ListedFile};
use crate::error::{BucketError, BucketResult};

/// Name of the state directory that is never part of a manifest
pub const STATE_DIR: &str = ".bucketsync";

/// Lists files with a recursive directory walk.
#[derive(Debug, Clone)]
pub struct WalkLister {
    state_dir: String,
    excluded: Vec<PathBuf>,
}

impl WalkLister {
    pub fn new() -> Self {
        Self::with_state_dir(STATE_DIR)
    }

    /// Prune a different top-level directory instead of [`STATE_DIR`]
    pub fn with_state_dir(state_dir: impl Into<String>) -> Self {
        Self {
            state_dir: state_dir.into(),
            excluded: Vec::new(),
        }
    }

    /// Also leave out `relative` (a file or directory below the base).
    pub fn excluding(mut self, relative: impl Into<PathBuf>) -> Self {
        self.excluded.push(relative.into());
        self
    }
}

impl Default for WalkLister {
    fn default() -> Self {
        Self::new()
    }
}

impl FileLister for WalkLister {
    fn list(&self, base: &Path) -> BucketResult<Vec<ListedFile>> {
        let state_dir = self.state_dir.clone();
        let excluded: Vec<PathBuf> = self.excluded.iter().map(|rel| base.join(rel)).collect();
        let walker = WalkBuilder::new(base)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let state = entry.depth() == 1 && entry.file_name() == state_dir.as_str();
                !state && !excluded.iter().any(|path| path == entry.path())
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = result.map_err(|e| BucketError::Walk {
                path: base.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }
            // Symlinks to directories are skipped; dangling links are kept so
            // that reading them fails the build instead of silently dropping them.
            if file_type.is_symlink()
                && std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
            {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(base)
                .map_err(|e| BucketError::Walk {
                    path: entry.path().to_path_buf(),
                    message: e.to_string(),
                })?;
            let key = normalize_key(relative).ok_or_else(|| BucketError::Walk {
                path: entry.path().to_path_buf(),
                message: "file name is not valid UTF-8".to_string(),
            })?;
            files.push(ListedFile::new(key, relative));
        }

        files.sort_by(|a, b| a.key().cmp(b.key()));
        tracing::debug!(base = %base.display(), files = files.len(), "listed source tree");
        Ok(files)
    }
}
