//! File fingerprinting.
//!
//! A fingerprint is a `u64` derived from a file's path, size, modification
//! time and first few bytes. It is deliberately not a content hash: it is
//! cheap to compute and changes whenever the file is touched or resized,
//! which makes it a staleness detector as well as a cache key.

pub mod engine;
pub mod key;

pub use engine::{compute_fingerprint, HEADER_LEN};
pub use key::FileFingerprint;
