//! Domain Entities
//!
//! - `FileRule` - one priority tier of globs with a cache policy
//! - `ResolvedAsset` - a matched, hashed, classified file
//! - `Manifest` - all assets for one build, plus the purge flag

mod file_rule;
mod manifest;
mod resolved_asset;

pub use file_rule::FileRule;
pub use manifest::Manifest;
pub(crate) use resolved_asset::normalize_key;
pub use resolved_asset::ResolvedAsset;
