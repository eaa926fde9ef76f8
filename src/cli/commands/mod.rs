//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves the
//! cache settings once and routes CLI subcommands to their implementations.

pub mod add;
pub mod check;
pub mod dispatcher;
pub mod get;
pub mod key;
pub mod list;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
