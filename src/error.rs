//! Error types for bucketsync
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bucketsync operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Broad classification of a [`BucketError`], used by callers to decide on retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input (base directory, glob syntax). Not retryable.
    Input,
    /// A file or directory could not be read. The whole build may be retried.
    Io,
    /// The resolver produced an inconsistent result. Fatal.
    Invariant,
    /// Configuration could not be loaded.
    Config,
}

/// Main error type for bucketsync operations
#[derive(Error, Debug)]
pub enum BucketError {
    /// Base directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Base directory exists but is a file
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A rule contains a glob that does not compile
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A matched file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to scan {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Two manifest entries share a remote key
    #[error("duplicate manifest key '{key}' (resolver produced overlapping assets)")]
    DuplicateKey { key: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BucketError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BucketError::DirectoryNotFound { .. }
            | BucketError::NotADirectory { .. }
            | BucketError::InvalidPattern { .. } => ErrorKind::Input,
            BucketError::Read { .. } | BucketError::Walk { .. } | BucketError::Io(_) => {
                ErrorKind::Io
            }
            BucketError::DuplicateKey { .. } => ErrorKind::Invariant,
            BucketError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Whether rebuilding the whole manifest could succeed.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Io
    }
}
