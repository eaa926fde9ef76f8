//! Error types for stampcache operations.
//!
//! This module defines [`StampCacheError`], the error type returned by the
//! fingerprint engine, the cache store and the configuration loader, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Raw filesystem errors are translated into typed variants at the store
//!   boundary; callers branch on the variant, not on `io::ErrorKind`
//! - A policy conflict ([`StampCacheError::AlreadyCached`]) is kept distinct
//!   from bad input ([`StampCacheError::InvalidFile`])
//! - Use `anyhow::Error` (via `StampCacheError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::cache::DisabledReason;
use crate::fingerprint::FileFingerprint;

/// Core error type for stampcache operations.
#[derive(Debug, Error)]
pub enum StampCacheError {
    /// Target path is not an existing, readable regular file.
    #[error("{path} is not a valid file")]
    InvalidFile { path: PathBuf },

    /// An entry already exists and the overwrite policy forbids replacing it.
    #[error("Cache entry {key} already exists, not overwriting it")]
    AlreadyCached { key: FileFingerprint },

    /// Writing the entry file failed.
    #[error("Unable to write cache entry {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store failed validation when it was opened.
    #[error("Cache store {path} is disabled: {reason}")]
    StoreDisabled {
        path: PathBuf,
        reason: DisabledReason,
    },

    /// Text that is not the decimal form of a fingerprint.
    #[error("Invalid cache key: {value}")]
    InvalidKey { value: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stampcache operations.
pub type Result<T> = std::result::Result<T, StampCacheError>;
