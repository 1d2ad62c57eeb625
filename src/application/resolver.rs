//! Pattern Resolver
//!
//! Expands ordered file rules against a base directory:
//! 1. List the source tree once through the `FileLister` port, on the
//!    blocking thread pool
//! 2. Visit rules in declared order, matching each rule's globs
//! 3. Drop keys already claimed by an earlier rule
//! 4. Read, hash and classify the surviving files concurrently
//!
//! The first unreadable file aborts the whole call; no partial list escapes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::domain::entities::{FileRule, ResolvedAsset};
use crate::domain::ports::{FileLister, ListedFile};
use crate::domain::services::{Claim, ClaimTracker};
use crate::domain::value_objects::{
    content_type_for, ContentHash, PatternSet, DEFAULT_TEXT_ENCODING,
};
use crate::error::{BucketError, BucketResult};
use crate::infrastructure::fs::WalkLister;

/// Default number of files read concurrently within one rule
pub const DEFAULT_CONCURRENCY: usize = 32;

/// Options for the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Maximum in-flight file reads per rule
    pub concurrency: usize,
    /// Charset appended to text content types, or `"none"`
    pub text_encoding: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            text_encoding: DEFAULT_TEXT_ENCODING.to_string(),
        }
    }
}

/// Resolves file rules into assets.
pub struct PatternResolver<L = WalkLister>
where
    L: FileLister,
{
    lister: Arc<L>,
    options: ResolverOptions,
}

impl PatternResolver<WalkLister> {
    /// Resolver over the local file system
    pub fn new() -> Self {
        Self::with_lister(WalkLister::new())
    }
}

impl Default for PatternResolver<WalkLister> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> PatternResolver<L>
where
    L: FileLister + 'static,
{
    pub fn with_lister(lister: L) -> Self {
        Self {
            lister: Arc::new(lister),
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve `rules` against `base_dir`.
    ///
    /// Output is grouped by rule in declared order, keys sorted within a rule.
    ///
    /// # Errors
    /// - `DirectoryNotFound` / `NotADirectory` for a bad `base_dir`
    /// - `InvalidPattern` for a glob that does not compile (before any read)
    /// - `Walk` / `Read` when the tree or a matched file cannot be read
    pub async fn resolve(
        &self,
        base_dir: &Path,
        rules: &[FileRule],
    ) -> BucketResult<Vec<ResolvedAsset>> {
        let base = validate_base_dir(base_dir).await?;
        let compiled = rules
            .iter()
            .map(FileRule::compile)
            .collect::<BucketResult<Vec<PatternSet>>>()?;

        let listing = self.list(&base).await?;
        let mut claims = ClaimTracker::new();
        let mut assets = Vec::new();

        for (index, (rule, patterns)) in rules.iter().zip(&compiled).enumerate() {
            let candidates = listing.iter().filter(|file| patterns.matches(file.key()));
            let Claim { owned, shadowed } = claims.claim(candidates);

            tracing::debug!(
                rule = index,
                owned = owned.len(),
                shadowed = shadowed.len(),
                cache_control = rule.cache_control().unwrap_or("-"),
                "matched rule"
            );

            let resolved = self.load_rule(&base, rule, owned).await?;
            assets.extend(resolved);
        }

        Ok(assets)
    }

    /// Walk the tree without holding up a runtime worker.
    async fn list(&self, base: &Path) -> BucketResult<Vec<ListedFile>> {
        let lister = Arc::clone(&self.lister);
        let walk_base = base.to_path_buf();
        tokio::task::spawn_blocking(move || lister.list(&walk_base))
            .await
            .map_err(|e| BucketError::Walk {
                path: base.to_path_buf(),
                message: e.to_string(),
            })?
    }

    /// Read, hash and classify `files` with bounded concurrency, keeping key order.
    async fn load_rule(
        &self,
        base: &Path,
        rule: &FileRule,
        files: Vec<&ListedFile>,
    ) -> BucketResult<Vec<ResolvedAsset>> {
        let concurrency = self.options.concurrency.max(1);
        let encoding = self.options.text_encoding.as_str();
        let cache_control = rule.cache_control();

        stream::iter(files)
            .map(|file| load_asset(base, file, cache_control, encoding))
            .buffered(concurrency)
            .try_collect()
            .await
    }
}

async fn load_asset(
    base: &Path,
    file: &ListedFile,
    cache_control: Option<&str>,
    encoding: &str,
) -> BucketResult<ResolvedAsset> {
    let source = base.join(file.path());
    let bytes = match tokio::fs::read(&source).await {
        Ok(bytes) => bytes,
        Err(e) => return Err(BucketError::Read { path: source, source: e }),
    };

    let hash = ContentHash::from_bytes(&bytes);
    let content_type = content_type_for(file.key(), encoding);
    Ok(ResolvedAsset::new(
        source,
        file.key(),
        hash,
        cache_control.map(str::to_string),
        content_type,
    ))
}

/// Check that `base_dir` is an existing directory and make it absolute.
async fn validate_base_dir(base_dir: &Path) -> BucketResult<PathBuf> {
    let metadata = match tokio::fs::metadata(base_dir).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BucketError::DirectoryNotFound {
                path: base_dir.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(BucketError::Read {
                path: base_dir.to_path_buf(),
                source: e,
            })
        }
    };
    if !metadata.is_dir() {
        return Err(BucketError::NotADirectory {
            path: base_dir.to_path_buf(),
        });
    }
    Ok(std::path::absolute(base_dir)?)
}
