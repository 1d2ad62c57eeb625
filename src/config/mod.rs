//! Configuration module for bucketsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUCKETSYNC_*)
//! 3. `--config` file, else `<source>/bucketsync.toml`, else `./bucketsync.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    config_exclusion, find_config, load_discovered, load_with_warnings,
    parse_with_warnings, with_env_overrides, with_overrides_from, ConfigWarning, CONFIG_FILE_NAME,
};
pub use types::{Config, FileRuleConfig, PatternList, CATCH_ALL_PATTERN};
