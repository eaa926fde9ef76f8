//! The outcome of opening a store.
//!
//! [`CacheStore::open`] validates the root directory once and hands back a
//! [`StoreInit`]. Operations on a ready store go straight to the
//! [`CacheStore`]; a disabled store answers every lookup with "not cached"
//! and every write with [`StampCacheError::StoreDisabled`].

use std::path::{Path, PathBuf};

use super::entry::CacheEntry;
use super::policy::OverwritePolicy;
use super::store::CacheStore;
use super::validation::DisabledReason;
use crate::error::{Result, StampCacheError};
use crate::fingerprint::FileFingerprint;

/// Result of opening a store.
#[derive(Debug, Clone)]
pub enum StoreInit {
    /// Root validated; the store is usable.
    Ready(CacheStore),
    /// Root failed validation; caching is off for this instance.
    Disabled(DisabledStore),
}

/// A store whose root failed validation.
#[derive(Debug, Clone)]
pub struct DisabledStore {
    root: PathBuf,
    reason: DisabledReason,
}

impl DisabledStore {
    pub(crate) fn new(root: PathBuf, reason: DisabledReason) -> Self {
        Self { root, reason }
    }

    /// The root that failed validation.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Why validation failed.
    pub fn reason(&self) -> DisabledReason {
        self.reason
    }

    fn error(&self) -> StampCacheError {
        StampCacheError::StoreDisabled {
            path: self.root.clone(),
            reason: self.reason,
        }
    }
}

impl StoreInit {
    /// Whether the store passed validation.
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The store root, whether or not it is usable.
    pub fn root(&self) -> &Path {
        match self {
            Self::Ready(store) => store.root(),
            Self::Disabled(disabled) => disabled.root(),
        }
    }

    /// Take the ready store, if any.
    pub fn ready(self) -> Option<CacheStore> {
        match self {
            Self::Ready(store) => Some(store),
            Self::Disabled(_) => None,
        }
    }

    /// Take the ready store or the error describing why it is disabled.
    pub fn into_result(self) -> Result<CacheStore> {
        match self {
            Self::Ready(store) => Ok(store),
            Self::Disabled(disabled) => Err(disabled.error()),
        }
    }

    /// See [`CacheStore::add`]. Fails with `StoreDisabled` when disabled.
    pub fn add(
        &self,
        path: impl AsRef<Path>,
        content: &str,
        policy: OverwritePolicy,
    ) -> Result<FileFingerprint> {
        match self {
            Self::Ready(store) => store.add(path, content, policy),
            Self::Disabled(disabled) => Err(disabled.error()),
        }
    }

    /// See [`CacheStore::add_bytes`]. Fails with `StoreDisabled` when disabled.
    pub fn add_bytes(
        &self,
        path: impl AsRef<Path>,
        content: &[u8],
        policy: OverwritePolicy,
    ) -> Result<FileFingerprint> {
        match self {
            Self::Ready(store) => store.add_bytes(path, content, policy),
            Self::Disabled(disabled) => Err(disabled.error()),
        }
    }

    /// See [`CacheStore::exists`]. Always `false` when disabled.
    pub fn exists(&self, key: FileFingerprint) -> bool {
        match self {
            Self::Ready(store) => store.exists(key),
            Self::Disabled(_) => false,
        }
    }

    /// See [`CacheStore::exists_for`]. Always `false` when disabled.
    pub fn exists_for(&self, path: impl AsRef<Path>) -> bool {
        match self {
            Self::Ready(store) => store.exists_for(path),
            Self::Disabled(_) => false,
        }
    }

    /// See [`CacheStore::content`]. Always `None` when disabled.
    pub fn content(&self, key: FileFingerprint) -> Option<String> {
        match self {
            Self::Ready(store) => store.content(key),
            Self::Disabled(_) => None,
        }
    }

    /// See [`CacheStore::content_or_empty`]. Always `""` when disabled.
    pub fn content_or_empty(&self, key: FileFingerprint) -> String {
        self.content(key).unwrap_or_default()
    }

    /// See [`CacheStore::list`]. Always empty when disabled.
    pub fn list(&self) -> Result<Vec<CacheEntry>> {
        match self {
            Self::Ready(store) => store.list(),
            Self::Disabled(_) => Ok(Vec::new()),
        }
    }
}
