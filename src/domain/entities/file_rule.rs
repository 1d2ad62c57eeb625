//! FileRule entity - one priority tier of files sharing a cache policy

use crate::domain::value_objects::PatternSet;
use crate::error::BucketResult;

/// A set of glob patterns and the cache policy their files are uploaded with.
///
/// Rules are evaluated in declared order; when two rules match the same
/// file the one declared first wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileRule {
    /// Globs selecting files, relative to the base directory
    patterns: Vec<String>,
    /// Globs removing files from this rule's selection
    ignore: Vec<String>,
    /// `Cache-Control` header for files claimed by this rule
    cache_control: Option<String>,
}

impl FileRule {
    /// Create a rule selecting `patterns`
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ignore: Vec::new(),
            cache_control: None,
        }
    }

    /// Builder: set the ignore patterns
    pub fn with_ignore<I, S>(mut self, ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = ignore.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the cache control header
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    /// Compile this rule's globs.
    pub fn compile(&self) -> BucketResult<PatternSet> {
        PatternSet::new(&self.patterns, &self.ignore)
    }
}
