//! `stampcache add` - store a payload for a file.

use anyhow::Context;
use std::fs;

use crate::cache::OverwritePolicy;
use crate::cli::args::AddArgs;
use crate::config::CacheSettings;
use crate::error::{Result, StampCacheError};
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult, EXIT_ALREADY_CACHED};

/// The add command implementation.
pub struct AddCommand {
    args: AddArgs,
    settings: CacheSettings,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(args: AddArgs, settings: CacheSettings) -> Self {
        Self { args, settings }
    }

    fn policy(&self) -> OverwritePolicy {
        if self.args.overwrite {
            OverwritePolicy::Overwrite
        } else if self.args.no_overwrite {
            OverwritePolicy::DoNotOverwrite
        } else {
            self.settings.overwrite_policy
        }
    }

    fn payload(&self) -> anyhow::Result<Vec<u8>> {
        match (&self.args.content, &self.args.from) {
            (Some(content), _) => Ok(content.clone().into_bytes()),
            (None, Some(path)) => {
                fs::read(path).with_context(|| format!("Failed to read payload from {:?}", path))
            }
            (None, None) => Ok(Vec::new()),
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let payload = self.payload()?;
        let store = open_store(&self.settings);
        let file = &self.args.file;

        match store.add_bytes(file, &payload, self.policy()) {
            Ok(key) => {
                ui.success(&format!("{} cached as {}", file.display(), key));
                ui.data(&format!("{}\n", key));
                Ok(CommandResult::success())
            }
            Err(StampCacheError::AlreadyCached { key }) => {
                ui.warning(&format!(
                    "{} is already cached as {}, not overwriting it",
                    file.display(),
                    key
                ));
                Ok(CommandResult::failure(EXIT_ALREADY_CACHED))
            }
            Err(
                e @ (StampCacheError::InvalidFile { .. }
                | StampCacheError::Write { .. }
                | StampCacheError::StoreDisabled { .. }),
            ) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
