//! `stampcache status` - show store location and statistics.

use crate::config::CacheSettings;
use crate::error::{Result, StampCacheError};
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    settings: CacheSettings,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(settings: CacheSettings) -> Self {
        Self { settings }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.settings);

        ui.message("Cache Status:\n");
        ui.message(&format!("  Location: {}", store.root().display()));

        match store.into_result() {
            Ok(ready) => {
                let entries = ready.list()?;
                ui.message("  Initialized: yes");
                ui.message(&format!("  Entries: {}", entries.len()));
                ui.message(&format!("  Total size: {} bytes", ready.total_size()?));
                Ok(CommandResult::success())
            }
            Err(e @ StampCacheError::StoreDisabled { .. }) => {
                ui.message("  Initialized: no");
                ui.warning(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
