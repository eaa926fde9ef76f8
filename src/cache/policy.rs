//! Store construction and write policies.

use serde::{Deserialize, Serialize};

/// Whether opening a store may create its root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsureStorePath {
    /// Create the root (and parents) if it is missing.
    #[default]
    Create,
    /// Use the root as-is; a missing root disables the store.
    AssumeExists,
}

impl From<bool> for EnsureStorePath {
    fn from(create: bool) -> Self {
        if create {
            Self::Create
        } else {
            Self::AssumeExists
        }
    }
}

/// Whether storing over an existing entry replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Replace the existing entry.
    Overwrite,
    /// Leave the existing entry and report a conflict.
    #[default]
    DoNotOverwrite,
}

impl From<bool> for OverwritePolicy {
    fn from(overwrite: bool) -> Self {
        if overwrite {
            Self::Overwrite
        } else {
            Self::DoNotOverwrite
        }
    }
}
