//! `stampcache get` - print a stored payload.

use crate::cli::args::GetArgs;
use crate::config::CacheSettings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The get command implementation.
pub struct GetCommand {
    args: GetArgs,
    settings: CacheSettings,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(args: GetArgs, settings: CacheSettings) -> Self {
        Self { args, settings }
    }
}

impl Command for GetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.settings);

        match store.content(self.args.key) {
            Some(content) => {
                ui.data(&content);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!("No readable entry for key {}", self.args.key));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
