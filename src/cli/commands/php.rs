//! PHP command implementation.
//!
//! The `phpdev php` command lists installed PHP versions with the state of
//! each version's FPM pool.

use crate::cli::args::PhpArgs;
use crate::config::StackLayout;
use crate::dashboard::InventoryBuilder;
use crate::error::Result;
use crate::probe::ProcessProbe;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The php command implementation.
pub struct PhpCommand<'a> {
    layout: &'a StackLayout,
    probe: &'a dyn ProcessProbe,
    args: PhpArgs,
}

impl<'a> PhpCommand<'a> {
    /// Create a new php command.
    pub fn new(layout: &'a StackLayout, probe: &'a dyn ProcessProbe, args: PhpArgs) -> Self {
        Self {
            layout,
            probe,
            args,
        }
    }
}

impl Command for PhpCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let builder = InventoryBuilder::new(self.layout, self.probe);
        let versions = builder.php_versions();
        let statuses = builder.php_fpm_statuses(&versions);

        if self.args.json {
            ui.print_data(&display::to_json(&statuses)?);
        } else {
            if ui.output_mode().shows_details() {
                ui.message(&format!("PHP root: {}", self.layout.php_root.display()));
            }
            display::show_php_fpm_statuses(ui, &statuses);
        }

        Ok(CommandResult::success())
    }
}
