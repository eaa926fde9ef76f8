//! Store directory validation.
//!
//! A store is usable only when its root exists, is a directory and is
//! writable by the current process. [`validate_store_dir`] reports the first
//! check that fails as a [`DisabledReason`].

use std::fmt;
use std::fs;
use std::path::Path;

/// Why a store root failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// Nothing exists at the root path.
    Missing,
    /// The root path exists but is not a directory.
    NotADirectory,
    /// The root directory is not writable by this process.
    NotWritable,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Missing => "path does not exist",
            Self::NotADirectory => "path is not a directory",
            Self::NotWritable => "directory is not writable",
        };
        f.write_str(msg)
    }
}

/// Check that `root` can hold cache entries.
pub fn validate_store_dir(root: &Path) -> Result<(), DisabledReason> {
    let metadata = fs::metadata(root).map_err(|_| DisabledReason::Missing)?;

    if !metadata.is_dir() {
        return Err(DisabledReason::NotADirectory);
    }

    if !is_writable(root) {
        return Err(DisabledReason::NotWritable);
    }

    Ok(())
}

/// Try to create `root` and its parents.
///
/// Failure is logged and otherwise ignored; validation decides whether the
/// store is usable.
pub fn ensure_dir(root: &Path) {
    if root.exists() {
        return;
    }

    match fs::create_dir_all(root) {
        Ok(()) => tracing::debug!("Created cache store directory {:?}", root),
        Err(e) => tracing::debug!("Failed to create cache store directory {:?}: {}", root, e),
    }
}

#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: access() only reads the NUL-terminated path we own for the call
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
