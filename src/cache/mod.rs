//! Fingerprint-keyed payload cache.
//!
//! This module provides a disk-backed store that maps
//! [`FileFingerprint`](crate::fingerprint::FileFingerprint)s to caller
//! payloads. Each entry is a plain file named by the decimal key, holding
//! the payload with no header or metadata.
//!
//! Opening a store validates its root and yields a [`StoreInit`]; only the
//! `Ready` variant carries a [`CacheStore`]. Entries are never removed by
//! this module.

pub mod entry;
pub mod init;
pub mod policy;
pub mod store;
pub mod validation;

pub use entry::CacheEntry;
pub use init::{DisabledStore, StoreInit};
pub use policy::{EnsureStorePath, OverwritePolicy};
pub use store::CacheStore;
pub use validation::{validate_store_dir, DisabledReason};

/// Store directory used when nothing else is configured.
pub const DEFAULT_STORE_DIR: &str = ".stampcache";

/// Get the default store directory, relative to the working directory.
pub fn default_store_dir() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join(DEFAULT_STORE_DIR)
}
