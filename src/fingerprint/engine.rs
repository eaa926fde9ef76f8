//! Fingerprint computation from stat-level file metadata.

use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::FileFingerprint;
use crate::error::{Result, StampCacheError};

/// Number of leading content bytes sampled into the fingerprint.
pub const HEADER_LEN: usize = 8;

/// Compute the fingerprint of a regular file.
///
/// The key is derived from the path exactly as given, the size in bytes,
/// the modification time and the first [`HEADER_LEN`] bytes of content.
/// Files shorter than that contribute a short sample; nothing is padded.
///
/// This is a cheap approximation of content identity: two files agreeing on
/// all four inputs share a key, and any change to size or mtime produces a
/// new one even when the visible content is unchanged.
///
/// # Errors
///
/// Returns [`StampCacheError::InvalidFile`] if `path` does not resolve to a
/// regular file that can be opened for reading.
pub fn compute_fingerprint(path: impl AsRef<Path>) -> Result<FileFingerprint> {
    let path = path.as_ref();
    let invalid = || StampCacheError::InvalidFile {
        path: path.to_path_buf(),
    };

    let metadata = fs::metadata(path).map_err(|_| invalid())?;
    if !metadata.is_file() {
        return Err(invalid());
    }

    let modified = metadata.modified().map_err(|_| invalid())?;
    let header = read_header(path).map_err(|_| invalid())?;

    let key = hash_parts(path, metadata.len(), modified, &header);
    tracing::debug!("Fingerprint for {:?} is {}", path, key);

    Ok(key)
}

/// Read up to [`HEADER_LEN`] bytes from the start of the file.
fn read_header(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// Split a timestamp into signed seconds and nanoseconds relative to the epoch.
fn mtime_parts(modified: SystemTime) -> (i64, u32) {
    match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_secs() as i64, d.subsec_nanos()),
        Err(e) => {
            let d = e.duration();
            (-(d.as_secs() as i64), d.subsec_nanos())
        }
    }
}

fn hash_parts(path: &Path, size: u64, modified: SystemTime, header: &[u8]) -> FileFingerprint {
    let (secs, nanos) = mtime_parts(modified);

    let mut hasher = Sha256::new();
    hasher.update(path.as_os_str().as_encoded_bytes());
    hasher.update([0u8]);
    hasher.update(size.to_string().as_bytes());
    hasher.update([0u8]);
    hasher.update(format!("{}.{:09}", secs, nanos).as_bytes());
    hasher.update([0u8]);
    hasher.update(header);

    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    FileFingerprint::new(u64::from_be_bytes(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn set_mtime(path: &Path, secs: u64) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn same_file_same_key() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "a.txt", b"data");

        let first = compute_fingerprint(&path).unwrap();
        let second = compute_fingerprint(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn mtime_change_changes_key() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "a.txt", b"data");
        set_mtime(&path, 1_000_000);
        let before = compute_fingerprint(&path).unwrap();

        set_mtime(&path, 2_000_000);
        let after = compute_fingerprint(&path).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn size_change_changes_key_with_same_header() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "a.bin", b"01234567-tail");
        set_mtime(&path, 1_000_000);
        let before = compute_fingerprint(&path).unwrap();

        fs::write(&path, b"01234567-longer-tail").unwrap();
        set_mtime(&path, 1_000_000);
        let after = compute_fingerprint(&path).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn bytes_past_header_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "a.bin", b"01234567AAAA");
        set_mtime(&path, 1_000_000);
        let before = compute_fingerprint(&path).unwrap();

        fs::write(&path, b"01234567BBBB").unwrap();
        set_mtime(&path, 1_000_000);
        let after = compute_fingerprint(&path).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn header_change_changes_key() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "a.bin", b"AAAA");
        set_mtime(&path, 1_000_000);
        let before = compute_fingerprint(&path).unwrap();

        fs::write(&path, b"BBBB").unwrap();
        set_mtime(&path, 1_000_000);
        let after = compute_fingerprint(&path).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn path_is_part_of_key() {
        let temp = TempDir::new().unwrap();
        let a = write_file(&temp, "a.txt", b"same");
        let b = write_file(&temp, "b.txt", b"same");
        set_mtime(&a, 1_000_000);
        set_mtime(&b, 1_000_000);

        assert_ne!(
            compute_fingerprint(&a).unwrap(),
            compute_fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn short_and_empty_files_are_valid() {
        let temp = TempDir::new().unwrap();
        let short = write_file(&temp, "short", b"ab");
        let empty = write_file(&temp, "empty", b"");

        assert!(compute_fingerprint(&short).is_ok());
        assert!(compute_fingerprint(&empty).is_ok());
    }

    #[test]
    fn missing_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.txt");

        let err = compute_fingerprint(&missing).unwrap_err();
        assert!(matches!(err, StampCacheError::InvalidFile { path } if path == missing));
    }

    #[test]
    fn directory_is_invalid() {
        let temp = TempDir::new().unwrap();

        let err = compute_fingerprint(temp.path()).unwrap_err();
        assert!(matches!(err, StampCacheError::InvalidFile { .. }));
    }

    #[test]
    fn hash_parts_is_pure() {
        let at = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let a = hash_parts(Path::new("/tmp/a.txt"), 4, at, b"data");
        let b = hash_parts(Path::new("/tmp/a.txt"), 4, at, b"data");
        assert_eq!(a, b);
    }

    #[test]
    fn field_boundaries_do_not_collide() {
        let at = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let a = hash_parts(Path::new("/tmp/a1"), 23, at, b"x");
        let b = hash_parts(Path::new("/tmp/a12"), 3, at, b"x");
        assert_ne!(a, b);
    }

    #[test]
    fn pre_epoch_mtime_is_signed() {
        let before = UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(mtime_parts(before), (-5, 0));
    }
}
