//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cache::{CacheStore, StoreInit};
use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings, CacheSettings};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a policy conflict (entry already cached).
pub const EXIT_ALREADY_CACHED: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Open the store described by `settings`.
pub fn open_store(settings: &CacheSettings) -> StoreInit {
    CacheStore::open(&settings.store_path, settings.ensure_store_path)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve settings and execute the requested command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.working_dir, cli.config.as_deref(), cli.overrides())?;

        match &cli.command {
            Commands::Key(args) => super::key::KeyCommand::new(args.clone()).execute(ui),
            Commands::Add(args) => {
                super::add::AddCommand::new(args.clone(), settings).execute(ui)
            }
            Commands::Check(args) => {
                super::check::CheckCommand::new(args.clone(), settings).execute(ui)
            }
            Commands::Get(args) => {
                super::get::GetCommand::new(args.clone(), settings).execute(ui)
            }
            Commands::List(args) => {
                super::list::ListCommand::new(args.clone(), settings).execute(ui)
            }
            Commands::Status => super::status::StatusCommand::new(settings).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.working_dir(), Path::new("/test"));
    }

    #[test]
    fn dispatch_uses_store_flag() {
        let temp = TempDir::new().unwrap();
        let store_dir = temp.path().join("store");
        let cli = Cli::parse_from([
            "stampcache",
            "status",
            "--store",
            store_dir.to_str().unwrap(),
        ]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(store_dir.is_dir());
    }

    #[test]
    fn dispatch_reports_missing_config() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["stampcache", "status", "--config", "nope.yml"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf()).dispatch(&cli, &mut ui);

        assert!(result.is_err());
    }
}
