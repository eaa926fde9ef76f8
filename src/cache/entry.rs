//! Cache entry listing types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fingerprint::FileFingerprint;

/// An entry found in a store directory.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    /// Fingerprint the entry is stored under.
    pub key: FileFingerprint,
    /// Path to the payload file.
    pub path: PathBuf,
    /// Payload size in bytes.
    pub size_bytes: u64,
    /// When the payload was last written.
    pub modified_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Describe the file at `path` if it is a cache entry.
    ///
    /// Only regular files whose name is the decimal form of a fingerprint
    /// qualify; anything else in the store directory is ignored.
    pub fn from_path(path: &Path) -> Option<Self> {
        let key = path.file_name()?.to_str()?.parse::<FileFingerprint>().ok()?;
        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() {
            return None;
        }

        let modified_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Some(Self {
            key,
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
            modified_at,
        })
    }

    /// Time since the payload was last written.
    pub fn age(&self) -> chrono::Duration {
        Utc::now().signed_duration_since(self.modified_at)
    }
}
