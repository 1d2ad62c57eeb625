//! Manifest entity - the complete upload plan handed to the sync component
//!
//! A pure data structure. Building it from disk is done by
//! `application::ManifestBuilder`; writing it out by `infrastructure::fs`.

use std::collections::HashSet;

use serde::Serialize;

use super::ResolvedAsset;
use crate::error::{BucketError, BucketResult};

/// Ordered assets, one per remote key, plus the purge flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Delete remote objects whose keys are absent from `files`
    purge: bool,
    #[serde(rename = "files")]
    assets: Vec<ResolvedAsset>,
}

impl Manifest {
    /// Wrap resolved assets, rejecting duplicate keys.
    ///
    /// # Errors
    /// Returns [`BucketError::DuplicateKey`] for the first key seen twice.
    pub fn new(assets: Vec<ResolvedAsset>, purge: bool) -> BucketResult<Self> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            if !seen.insert(asset.key()) {
                return Err(BucketError::DuplicateKey {
                    key: asset.key().to_string(),
                });
            }
        }
        Ok(Self { purge, assets })
    }

    pub fn purge(&self) -> bool {
        self.purge
    }

    pub fn assets(&self) -> &[ResolvedAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Look up an asset by its remote key
    pub fn get(&self, key: &str) -> Option<&ResolvedAsset> {
        self.assets.iter().find(|a| a.key() == key)
    }

    /// Remote keys in manifest order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(ResolvedAsset::key)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
