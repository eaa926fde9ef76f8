//! `stampcache list` - list cache entries.

use chrono::Duration;

use crate::cli::args::ListArgs;
use crate::config::CacheSettings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
    settings: CacheSettings,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs, settings: CacheSettings) -> Self {
        Self { args, settings }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.settings);
        let entries = store.list()?;

        if self.args.json {
            let output = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.data(&format!("{}\n", output));
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("Cache is empty");
            return Ok(CommandResult::success());
        }

        ui.message(&format!("{} cached entries:\n", entries.len()));

        for entry in &entries {
            ui.message(&format!(
                "  {:<20} {:>10} bytes  {} ago",
                entry.key,
                entry.size_bytes,
                format_duration(entry.age())
            ));
            if self.args.verbose {
                ui.message(&format!("    Path: {}", entry.path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}
