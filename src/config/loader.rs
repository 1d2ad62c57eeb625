//! Configuration loading and discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BucketError, BucketResult};

use super::types::Config;

/// Config file name looked up in the source directory and working directory
pub const CONFIG_FILE_NAME: &str = "bucketsync.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BucketResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BucketError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_with_warnings(path, &content)
}

/// Parse configuration text; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> BucketResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BucketError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file: explicit path, then `<source>/bucketsync.toml`,
/// then `./bucketsync.toml`.
pub fn find_config(explicit: Option<&Path>, source: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    source
        .map(|s| s.join(CONFIG_FILE_NAME))
        .into_iter()
        .chain(std::iter::once(PathBuf::from(CONFIG_FILE_NAME)))
        .find(|candidate| candidate.is_file())
}

/// Load the discovered config (or defaults) and apply environment overrides.
///
/// Also returns the file that was loaded, if any.
pub fn load_discovered(
    explicit: Option<&Path>,
    source: Option<&Path>,
) -> BucketResult<(Config, Option<PathBuf>)> {
    let found = find_config(explicit, source);
    let config = match &found {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };
    Ok((with_env_overrides(config), found))
}

/// Path of `config_file` relative to `source` when it lies inside it.
///
/// The config file sits next to the content it describes but is never
/// uploaded, so the walker is told to skip it.
pub fn config_exclusion(config_file: &Path, source: &Path) -> Option<PathBuf> {
    let file = std::path::absolute(config_file).ok()?;
    let base = std::path::absolute(source).ok()?;
    file.strip_prefix(&base)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Apply environment variable overrides (BUCKETSYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // BUCKETSYNC_PURGE
    if let Some(val) = lookup("BUCKETSYNC_PURGE") {
        config.purge = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    // BUCKETSYNC_TEXT_ENCODING
    if let Some(val) = lookup("BUCKETSYNC_TEXT_ENCODING") {
        if !val.trim().is_empty() {
            config.text_encoding = val.trim().to_string();
        }
    }

    // BUCKETSYNC_CONCURRENCY
    if let Some(val) = lookup("BUCKETSYNC_CONCURRENCY") {
        match val.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.concurrency = n,
            _ => tracing::warn!(value = %val, "ignoring invalid BUCKETSYNC_CONCURRENCY"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "purge",
        "text_encoding",
        "concurrency",
        "files",
        "patterns",
        "ignore",
        "cache_control",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
