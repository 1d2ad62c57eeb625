//! Compiled glob patterns for one file rule.
//!
//! Patterns are matched against `/`-separated keys relative to the base
//! directory. `*` and `?` stay within one path segment, `**` spans segments,
//! `{a,b}` alternation and `[...]` classes are supported. Leading dots are
//! not special, so `**/*` also matches dotfiles.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{BucketError, BucketResult};

/// Include and ignore globs of a rule, compiled once.
#[derive(Debug, Clone)]
pub struct PatternSet {
    include: GlobSet,
    ignore: GlobSet,
}

impl PatternSet {
    /// Compile include and ignore patterns.
    ///
    /// An empty include list matches nothing.
    ///
    /// # Errors
    /// Returns [`BucketError::InvalidPattern`] for the first glob that fails to compile.
    pub fn new<I, E>(include: I, ignore: E) -> BucketResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self {
            include: compile(include)?,
            ignore: compile(ignore)?,
        })
    }

    /// Whether `key` matches an include pattern and no ignore pattern.
    pub fn matches(&self, key: &str) -> bool {
        self.include.is_match(key) && !self.ignore.is_match(key)
    }

    /// Whether `key` is excluded by an ignore pattern.
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignore.is_match(key)
    }

    /// Whether the set can match anything at all.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }
}

fn compile<P>(patterns: P) -> BucketResult<GlobSet>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(glob(pattern.as_ref())?);
    }
    builder.build().map_err(|e| BucketError::InvalidPattern {
        pattern: e.glob().unwrap_or_default().to_string(),
        reason: e.kind().to_string(),
    })
}

fn glob(pattern: &str) -> BucketResult<Glob> {
    // Leading "./" is accepted and means the base directory itself.
    let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
    GlobBuilder::new(normalized)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|e| BucketError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })
}
