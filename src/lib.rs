//! stampcache - a filesystem-backed content cache keyed by file fingerprints.
//!
//! A fingerprint is derived from a file's path, size, modification time and
//! first 8 bytes. It is used as the name of a payload file in a cache
//! directory, so tools can skip recomputing derived artifacts (thumbnails,
//! build outputs, parsed metadata) while the source file is unchanged.
//!
//! # Modules
//!
//! - [`cache`] - Store directory validation, writes and lookups
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`error`] - Error types and result aliases
//! - [`fingerprint`] - Fingerprint computation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use stampcache::cache::{CacheStore, EnsureStorePath, OverwritePolicy, StoreInit};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let source = temp.path().join("photo.raw");
//! fs::write(&source, b"RAWDATA").unwrap();
//!
//! let store = match CacheStore::open(temp.path().join("cache"), EnsureStorePath::Create) {
//!     StoreInit::Ready(store) => store,
//!     StoreInit::Disabled(disabled) => panic!("caching disabled: {}", disabled.reason()),
//! };
//!
//! let key = store.add(&source, "thumbnail-bytes", OverwritePolicy::DoNotOverwrite).unwrap();
//! assert!(store.exists_for(&source));
//! assert_eq!(store.content(key).as_deref(), Some("thumbnail-bytes"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod ui;

pub use error::{Result, StampCacheError};
