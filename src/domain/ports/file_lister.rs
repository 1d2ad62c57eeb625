//! FileLister port - abstraction for enumerating files under a base directory
//!
//! The resolver matches rules against this listing, so tests can inject
//! listings that disagree with the disk (e.g. a file deleted mid-scan).

use std::path::{Path, PathBuf};

use crate::error::BucketResult;

/// One listed file: its object key and where it actually lives.
///
/// The key is derived from the path but is not a path: on Unix a `\` in a
/// file name stays a `\` in the key, so the file is always read through
/// `path` and never by re-joining the key onto the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    key: String,
    path: PathBuf,
}

impl ListedFile {
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// `/`-separated object key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path relative to the listed base directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<str> for ListedFile {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

/// Enumerates candidate files below a base directory.
///
/// Implementations may block on file system I/O; the resolver calls them
/// off the async runtime.
pub trait FileLister: Send + Sync {
    /// Every non-directory entry under `base`, sorted by key.
    ///
    /// Entries are never merged: two files mapping to the same key are both
    /// returned so the clash surfaces as a duplicate-key error downstream.
    fn list(&self, base: &Path) -> BucketResult<Vec<ListedFile>>;
}
