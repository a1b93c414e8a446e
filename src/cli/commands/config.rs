//! Config command implementation.
//!
//! The `phpdev config` command shows the resolved stack layout and the
//! deployment settings read from `~/.config/phpdev/config`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ConfigArgs;
use crate::config::{DeploymentSettings, StackLayout};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// Everything phpdev resolved before looking at the machine.
#[derive(Debug, Serialize)]
struct ResolvedConfig<'a> {
    layout: &'a StackLayout,
    settings: &'a DeploymentSettings,
}

/// The config command implementation.
pub struct ConfigCommand<'a> {
    layout: &'a StackLayout,
    settings_path: Option<PathBuf>,
    settings: DeploymentSettings,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(
        layout: &'a StackLayout,
        settings_path: Option<PathBuf>,
        settings: DeploymentSettings,
        args: ConfigArgs,
    ) -> Self {
        Self {
            layout,
            settings_path,
            settings,
            args,
        }
    }

    /// Get the settings file path, if any.
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = ResolvedConfig {
            layout: self.layout,
            settings: &self.settings,
        };

        if self.args.json {
            ui.print_data(&display::to_json(&resolved)?);
            return Ok(CommandResult::success());
        }

        // Show settings file path
        if let Some(path) = &self.settings_path {
            let state = if path.is_file() { "" } else { " (not found)" };
            ui.message(&format!("# {}{}", path.display(), state));
            ui.message("");
        }

        ui.print_data(&display::to_yaml(&resolved)?);

        Ok(CommandResult::success())
    }
}
