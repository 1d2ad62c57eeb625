//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{ResolverOptions, DEFAULT_CONCURRENCY};
use crate::domain::entities::FileRule;
use crate::domain::value_objects::DEFAULT_TEXT_ENCODING;
use crate::error::BucketResult;

use super::loader;

/// Pattern used when no `[[files]]` rule is configured
pub const CATCH_ALL_PATTERN: &str = "**";

/// Glob list that accepts either a single string or an array.
///
///   patterns = "**/*.html"
///   patterns = ["**/*.html", "**/*.htm"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct PatternList(pub Vec<String>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PatternListDe {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for PatternList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match PatternListDe::deserialize(deserializer)? {
            PatternListDe::One(pattern) => Ok(Self(vec![pattern])),
            PatternListDe::Many(patterns) => Ok(Self(patterns)),
        }
    }
}

/// One `[[files]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRuleConfig {
    #[serde(alias = "files")]
    pub patterns: PatternList,

    #[serde(default)]
    pub ignore: PatternList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<String>,
}

impl FileRuleConfig {
    pub fn to_rule(&self) -> FileRule {
        let rule = FileRule::new(self.patterns.0.iter().cloned())
            .with_ignore(self.ignore.0.iter().cloned());
        match &self.cache_control {
            Some(cache_control) => rule.with_cache_control(cache_control.clone()),
            None => rule,
        }
    }
}

/// Top-level `bucketsync.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory to build the manifest from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Delete remote objects that are absent from the manifest
    #[serde(default)]
    pub purge: bool,

    /// Charset for text content types, `"none"` to omit it
    #[serde(default = "default_text_encoding")]
    pub text_encoding: String,

    /// Concurrent file reads per rule
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Rules in priority order
    #[serde(default)]
    pub files: Vec<FileRuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            purge: false,
            text_encoding: default_text_encoding(),
            concurrency: default_concurrency(),
            files: Vec::new(),
        }
    }
}

fn default_text_encoding() -> String {
    DEFAULT_TEXT_ENCODING.to_string()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Config {
    /// Load a config file, logging non-fatal warnings (e.g. unknown keys).
    pub fn load(path: &Path) -> BucketResult<Self> {
        let (config, warnings) = loader::load_with_warnings(path)?;
        for warning in &warnings {
            tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                suggestion = ?warning.suggestion,
                "unknown config key"
            );
        }
        Ok(config)
    }

    /// Rules in priority order; a single catch-all rule when none are configured.
    pub fn rules(&self) -> Vec<FileRule> {
        if self.files.is_empty() {
            return vec![FileRule::new([CATCH_ALL_PATTERN])];
        }
        self.files.iter().map(FileRuleConfig::to_rule).collect()
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            concurrency: self.concurrency,
            text_encoding: self.text_encoding.clone(),
        }
    }
}
