//! Configuration file schema.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cache::{default_store_dir, EnsureStorePath, OverwritePolicy};

/// Contents of a `.stampcache.yml` file, or one override layer.
///
/// Every field is optional so layers can be merged: a field set in a later
/// layer replaces the one from an earlier layer.
///
/// ```yaml
/// store_path: build/.cache
/// ensure_store_path: assume_exists
/// overwrite_policy: overwrite
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StampCacheConfig {
    /// Directory holding cache entries.
    pub store_path: Option<PathBuf>,

    /// Whether to create the store directory when it is missing.
    pub ensure_store_path: Option<EnsureStorePath>,

    /// Default policy for `add` when the entry already exists.
    pub overwrite_policy: Option<OverwritePolicy>,
}

impl StampCacheConfig {
    /// Overlay `other` on top of this layer.
    pub fn merge(&mut self, other: StampCacheConfig) {
        if other.store_path.is_some() {
            self.store_path = other.store_path;
        }
        if other.ensure_store_path.is_some() {
            self.ensure_store_path = other.ensure_store_path;
        }
        if other.overwrite_policy.is_some() {
            self.overwrite_policy = other.overwrite_policy;
        }
    }

    /// Make a relative `store_path` relative to `base` instead.
    pub fn anchor_store_path(&mut self, base: &Path) {
        if let Some(path) = &self.store_path {
            if path.is_relative() {
                self.store_path = Some(base.join(path));
            }
        }
    }

    /// Fill unset fields with defaults.
    pub fn resolve(self) -> CacheSettings {
        CacheSettings {
            store_path: self.store_path.unwrap_or_else(default_store_dir),
            ensure_store_path: self.ensure_store_path.unwrap_or_default(),
            overwrite_policy: self.overwrite_policy.unwrap_or_default(),
        }
    }
}

/// Fully resolved settings used to open a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    pub store_path: PathBuf,
    pub ensure_store_path: EnsureStorePath,
    pub overwrite_policy: OverwritePolicy,
}
