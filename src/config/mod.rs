//! Configuration loading for stampcache.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and layering in [`loader`]
//!
//! # Example
//!
//! ```
//! use stampcache::config::{load_settings, StampCacheConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".stampcache.yml"), "store_path: cache").unwrap();
//!
//! let settings = load_settings(temp.path(), None, StampCacheConfig::default()).unwrap();
//! assert_eq!(settings.store_path, temp.path().join("cache"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config_file, load_settings, parse_config, CONFIG_FILE_NAME};
pub use schema::{CacheSettings, StampCacheConfig};
