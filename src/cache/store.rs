//! Cache storage implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::entry::CacheEntry;
use super::init::{DisabledStore, StoreInit};
use super::policy::{EnsureStorePath, OverwritePolicy};
use super::validation::{ensure_dir, validate_store_dir};
use crate::error::{Result, StampCacheError};
use crate::fingerprint::{compute_fingerprint, FileFingerprint};

/// Storage for payloads keyed by file fingerprint.
///
/// A `CacheStore` only exists for a root that passed validation, so every
/// method can assume the directory was present and writable when the store
/// was opened. There is no locking: concurrent writers to the same key race
/// and the last one wins.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache entries.
    root: PathBuf,
}

impl CacheStore {
    /// Open a store rooted at `root`.
    ///
    /// With [`EnsureStorePath::Create`] the directory is created first if it
    /// is missing; a creation failure is only logged. The root is then
    /// validated and the result is either a ready store or a disabled one.
    /// A disabled store stays disabled for its whole lifetime.
    pub fn open(root: impl Into<PathBuf>, ensure: EnsureStorePath) -> StoreInit {
        let root = root.into();

        if ensure == EnsureStorePath::Create {
            ensure_dir(&root);
        }

        match validate_store_dir(&root) {
            Ok(()) => {
                tracing::debug!("Opened cache store at {:?}", root);
                StoreInit::Ready(Self { root })
            }
            Err(reason) => {
                tracing::warn!(
                    "Cache store path {:?} is not usable ({}), caching is disabled",
                    root,
                    reason
                );
                StoreInit::Disabled(DisabledStore::new(root, reason))
            }
        }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path of the entry file for `key`.
    pub fn entry_path(&self, key: FileFingerprint) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Fingerprint `path` and store `content` under the resulting key.
    ///
    /// # Errors
    ///
    /// - [`StampCacheError::InvalidFile`] if `path` is not a readable regular file
    /// - [`StampCacheError::AlreadyCached`] if an entry exists and `policy`
    ///   is [`OverwritePolicy::DoNotOverwrite`]
    /// - [`StampCacheError::Write`] if the entry file cannot be written
    pub fn add(
        &self,
        path: impl AsRef<Path>,
        content: &str,
        policy: OverwritePolicy,
    ) -> Result<FileFingerprint> {
        self.add_bytes(path, content.as_bytes(), policy)
    }

    /// Like [`add`](Self::add), for payloads that are not text.
    pub fn add_bytes(
        &self,
        path: impl AsRef<Path>,
        content: &[u8],
        policy: OverwritePolicy,
    ) -> Result<FileFingerprint> {
        let key = compute_fingerprint(path)?;

        if policy == OverwritePolicy::DoNotOverwrite && self.exists(key) {
            return Err(StampCacheError::AlreadyCached { key });
        }

        let entry_path = self.entry_path(key);
        fs::write(&entry_path, content).map_err(|source| StampCacheError::Write {
            path: entry_path.clone(),
            source,
        })?;

        tracing::debug!("Stored {} bytes under {}", content.len(), key);
        Ok(key)
    }

    /// Check whether an entry exists for `key`.
    ///
    /// Never fails; any I/O problem reads as "not cached".
    pub fn exists(&self, key: FileFingerprint) -> bool {
        fs::metadata(self.entry_path(key))
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Check whether the current state of `path` is cached.
    ///
    /// The fingerprint is recomputed, so a file that was modified since it
    /// was stored reads as not cached even though its old entry remains.
    /// An invalid path reads as not cached.
    pub fn exists_for(&self, path: impl AsRef<Path>) -> bool {
        match compute_fingerprint(path) {
            Ok(key) => self.exists(key),
            Err(e) => {
                tracing::debug!("Not cached: {}", e);
                false
            }
        }
    }

    /// Read the payload stored under `key`.
    ///
    /// Returns `None` when the entry is missing or cannot be read as UTF-8
    /// text. Pair with [`exists`](Self::exists) to tell an unreadable entry
    /// apart from a missing one.
    pub fn content(&self, key: FileFingerprint) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    /// Read the payload stored under `key`, treating absence as empty.
    ///
    /// A missing or unreadable entry yields `""`, which is indistinguishable
    /// from an entry whose payload is empty.
    pub fn content_or_empty(&self, key: FileFingerprint) -> String {
        self.content(key).unwrap_or_default()
    }

    /// List all entries, most recently written first.
    pub fn list(&self) -> Result<Vec<CacheEntry>> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            if let Some(entry) = CacheEntry::from_path(&dir_entry.path()) {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(entries)
    }

    /// Get total payload size in bytes.
    pub fn total_size(&self) -> Result<u64> {
        let entries = self.list()?;
        Ok(entries.iter().map(|e| e.size_bytes).sum())
    }
}
