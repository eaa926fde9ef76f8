//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::StampCacheConfig;
use crate::fingerprint::FileFingerprint;

/// stampcache - cache payloads keyed by cheap file fingerprints.
#[derive(Debug, Parser)]
#[command(name = "stampcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Cache store directory (overrides the config file)
    #[arg(short, long, global = true, env = "STAMPCACHE_DIR")]
    pub store: Option<PathBuf>,

    /// Do not create the store directory if it is missing
    #[arg(
        long,
        global = true,
        env = "STAMPCACHE_NO_CREATE",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_create: bool,

    /// Path to config file (overrides .stampcache.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print command output and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> StampCacheConfig {
        StampCacheConfig {
            store_path: self.store.clone(),
            ensure_store_path: self
                .no_create
                .then_some(crate::cache::EnsureStorePath::AssumeExists),
            overwrite_policy: None,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the fingerprint of a file
    Key(KeyArgs),

    /// Store a payload for the current state of a file
    Add(AddArgs),

    /// Exit 0 if a file (or key) is cached, 1 otherwise
    Check(CheckArgs),

    /// Print the payload stored under a key
    Get(GetArgs),

    /// List cache entries
    List(ListArgs),

    /// Show store location and statistics
    Status,
}

/// Arguments for the `key` command.
#[derive(Debug, Clone, clap::Args)]
pub struct KeyArgs {
    /// Source file to fingerprint
    pub file: PathBuf,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Source file whose fingerprint becomes the key
    pub file: PathBuf,

    /// Payload text
    #[arg(long, conflicts_with = "from")]
    pub content: Option<String>,

    /// Read the payload from this file
    #[arg(long, value_name = "PAYLOAD_FILE")]
    pub from: Option<PathBuf>,

    /// Replace an existing entry
    #[arg(long)]
    pub overwrite: bool,

    /// Keep an existing entry even if the config says to overwrite
    #[arg(long, conflicts_with = "overwrite")]
    pub no_overwrite: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Source file to check
    #[arg(required_unless_present = "key")]
    pub file: Option<PathBuf>,

    /// Check a previously returned key instead of a file
    #[arg(long, conflicts_with = "file")]
    pub key: Option<FileFingerprint>,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Key returned by `add` or `key`
    pub key: FileFingerprint,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show entry paths
    #[arg(short, long)]
    pub verbose: bool,
}
