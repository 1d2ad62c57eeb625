//! Manifest Builder
//!
//! Runs the resolver over all rules, attaches the purge flag and re-checks
//! key uniqueness. A duplicate key here is a resolver defect and is returned
//! as a fatal error, never deduplicated.

use std::path::Path;

use crate::domain::entities::{FileRule, Manifest};
use crate::domain::ports::FileLister;
use crate::error::BucketResult;
use crate::infrastructure::fs::WalkLister;

use super::resolver::{PatternResolver, ResolverOptions};

/// Builds manifests from a source tree and a rule set.
pub struct ManifestBuilder<L = WalkLister>
where
    L: FileLister,
{
    resolver: PatternResolver<L>,
}

impl ManifestBuilder<WalkLister> {
    /// Builder over the local file system with default options
    pub fn new() -> Self {
        Self::with_resolver(PatternResolver::new())
    }

    /// Builder over the local file system
    pub fn with_options(options: ResolverOptions) -> Self {
        Self::with_resolver(PatternResolver::new().with_options(options))
    }
}

impl Default for ManifestBuilder<WalkLister> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> ManifestBuilder<L>
where
    L: FileLister + 'static,
{
    pub fn with_resolver(resolver: PatternResolver<L>) -> Self {
        Self { resolver }
    }

    /// Build the manifest for `base_dir`.
    pub async fn build(
        &self,
        base_dir: &Path,
        rules: &[FileRule],
        purge: bool,
    ) -> BucketResult<Manifest> {
        let assets = self.resolver.resolve(base_dir, rules).await?;
        let manifest = Manifest::new(assets, purge).inspect_err(|e| {
            tracing::error!(error = %e, "manifest failed validation");
        })?;

        tracing::info!(
            base = %base_dir.display(),
            rules = rules.len(),
            assets = manifest.len(),
            purge,
            "built manifest"
        );
        Ok(manifest)
    }
}
