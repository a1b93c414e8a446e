//! Status command implementation.
//!
//! The `phpdev status` command shows the full dashboard: services, PHP-FPM
//! pools, and the websites configured for each server.

use crate::cli::args::StatusArgs;
use crate::config::StackLayout;
use crate::dashboard::{build_dashboard_view, DashboardView, SiteDetails};
use crate::error::Result;
use crate::inventory::ServerKind;
use crate::probe::ProcessProbe;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The status command implementation.
pub struct StatusCommand<'a> {
    layout: &'a StackLayout,
    probe: &'a dyn ProcessProbe,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(layout: &'a StackLayout, probe: &'a dyn ProcessProbe, args: StatusArgs) -> Self {
        Self {
            layout,
            probe,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }

    fn show_view(&self, ui: &mut dyn UserInterface, view: &DashboardView) {
        ui.show_header("phpdev - Local stack");

        display::show_service_statuses(ui, &view.service_statuses);
        display::show_php_fpm_statuses(ui, &view.php_fpm_statuses);

        for kind in [ServerKind::Apache, ServerKind::Nginx] {
            let sites: Vec<_> = view
                .sites(kind)
                .iter()
                .cloned()
                .map(SiteDetails::plain)
                .collect();
            display::show_sites(ui, kind, &sites);
        }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let view = build_dashboard_view(self.layout, self.probe);

        if self.args.json {
            ui.print_data(&display::to_json(&view)?);
        } else if self.args.yaml {
            ui.print_data(&display::to_yaml(&view)?);
        } else {
            self.show_view(ui, &view);
        }

        Ok(CommandResult::success())
    }
}
