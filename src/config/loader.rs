//! Configuration file discovery and loading.

use crate::config::schema::{CacheSettings, StampCacheConfig};
use crate::error::{Result, StampCacheError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".stampcache.yml";

/// Find `.stampcache.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// A relative `store_path` in the file is taken relative to the directory
/// containing the file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StampCacheConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StampCacheError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StampCacheError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    if let Some(dir) = path.parent() {
        config.anchor_store_path(dir);
    }

    Ok(config)
}

/// Parse YAML content into a config layer.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<StampCacheConfig> {
    // An empty file deserializes as YAML null
    if content.trim().is_empty() {
        return Ok(StampCacheConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| StampCacheError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve settings for a working directory.
///
/// Layers, later wins:
/// 1. Built-in defaults
/// 2. `config_override` if given, else `.stampcache.yml` in `working_dir`
/// 3. `overrides` (environment and command-line values)
///
/// Relative paths in `config_override` and in `overrides.store_path` are
/// taken relative to `working_dir`.
pub fn load_settings(
    working_dir: &Path,
    config_override: Option<&Path>,
    mut overrides: StampCacheConfig,
) -> Result<CacheSettings> {
    let mut config = match config_override {
        Some(path) => load_config_file(&working_dir.join(path))?,
        None => match find_config(working_dir) {
            Some(path) => load_config_file(&path)?,
            None => StampCacheConfig::default(),
        },
    };

    overrides.anchor_store_path(working_dir);
    config.merge(overrides);

    if config.store_path.is_none() {
        config.store_path = Some(working_dir.join(crate::cache::DEFAULT_STORE_DIR));
    }

    let settings = config.resolve();
    tracing::debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}
