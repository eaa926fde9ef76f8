//! The fingerprint key type.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::StampCacheError;

/// A cache key derived from a file's path, size, mtime and header bytes.
///
/// The only textual form is the plain decimal representation of the inner
/// `u64`. It is used verbatim as the entry file name, so parsing is strict:
/// no sign, no whitespace and no leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileFingerprint(u64);

impl FileFingerprint {
    /// Wrap a raw key value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw key value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The entry file name for this key.
    pub fn file_name(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for FileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for FileFingerprint {
    type Err = StampCacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StampCacheError::InvalidKey {
            value: s.to_string(),
        };

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(invalid());
        }

        s.parse::<u64>().map(Self).map_err(|_| invalid())
    }
}

impl From<u64> for FileFingerprint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// Serialized as a decimal string so JSON consumers never round the key.
impl Serialize for FileFingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
