//! `stampcache key` - print a file's fingerprint.

use crate::cli::args::KeyArgs;
use crate::error::{Result, StampCacheError};
use crate::fingerprint::compute_fingerprint;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The key command implementation.
pub struct KeyCommand {
    args: KeyArgs,
}

impl KeyCommand {
    /// Create a new key command.
    pub fn new(args: KeyArgs) -> Self {
        Self { args }
    }
}

impl Command for KeyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match compute_fingerprint(&self.args.file) {
            Ok(key) => {
                ui.data(&format!("{}\n", key));
                Ok(CommandResult::success())
            }
            Err(e @ StampCacheError::InvalidFile { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
