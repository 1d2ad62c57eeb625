//! ResolvedAsset entity - one file of the manifest, ready to upload

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ContentHash;

/// Join the components of a relative path with `/` into a remote object key.
///
/// `None` for a name that is not valid UTF-8 or a path that is not a plain
/// relative path (root, prefix or `..` components).
pub(crate) fn normalize_key(path: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => segments.push(name.to_str()?),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!segments.is_empty()).then(|| segments.join("/"))
}

/// A file matched by a rule, with everything the sync component needs to upload it.
///
/// Created once per remote key during resolution and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAsset {
    /// Absolute path of the file on disk
    source: PathBuf,
    /// Path relative to the base directory, used as the object key
    key: String,
    /// Digest of the file bytes
    hash: ContentHash,
    /// `Cache-Control` inherited from the matching rule
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_control: Option<String>,
    /// `Content-Type`, with charset for text files
    content_type: String,
}

impl ResolvedAsset {
    pub fn new(
        source: impl Into<PathBuf>,
        key: impl Into<String>,
        hash: ContentHash,
        cache_control: Option<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            key: key.into(),
            hash,
            cache_control,
            content_type: content_type.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}
