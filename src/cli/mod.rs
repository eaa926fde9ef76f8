//! Command-line interface for stampcache.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations. It is a thin layer over [`crate::cache`]:
//! every command maps onto one or two store operations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AddArgs, CheckArgs, Cli, Commands, GetArgs, KeyArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
