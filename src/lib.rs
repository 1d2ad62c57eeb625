//! bucketsync - asset manifests for object store synchronization
//!
//! bucketsync resolves an ordered list of glob rules against a directory into
//! a deduplicated manifest: one entry per remote key, each carrying a SHA-256
//! content hash, a `Content-Type` and the `Cache-Control` of the first rule
//! that matched it. Uploading and purging are left to the sync component that
//! consumes the manifest.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ManifestBuilder, PatternResolver, ResolverOptions};
pub use config::Config;
pub use domain::entities::{FileRule, Manifest, ResolvedAsset};
pub use domain::value_objects::{classify, content_type_for, ContentHash, ContentType};
pub use error::{BucketError, BucketResult, ErrorKind};
pub use infrastructure::fs::{write_manifest, WalkLister};
