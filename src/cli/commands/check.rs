//! `stampcache check` - report whether a file or key is cached.

use crate::cli::args::CheckArgs;
use crate::config::CacheSettings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    settings: CacheSettings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, settings: CacheSettings) -> Self {
        Self { args, settings }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.settings);

        let (subject, cached) = if let Some(key) = self.args.key {
            (format!("Key {}", key), store.exists(key))
        } else if let Some(file) = &self.args.file {
            (file.display().to_string(), store.exists_for(file))
        } else {
            ui.error("Nothing to check: give a file or --key");
            return Ok(CommandResult::failure(1));
        };

        if cached {
            ui.success(&format!("{} is cached", subject));
            Ok(CommandResult::success())
        } else {
            ui.message(&format!("{} is not cached (or was modified)", subject));
            Ok(CommandResult::failure(1))
        }
    }
}
