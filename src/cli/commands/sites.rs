//! Sites command implementation.
//!
//! The `phpdev sites` command lists the websites configured for Apache and
//! NginX with the PHP version each one is served by. With `--joomla` each
//! site is also passed to the `joomlainfo` script.

use std::time::Duration;

use crate::cli::args::SitesArgs;
use crate::config::StackLayout;
use crate::dashboard::{InventoryBuilder, SiteDetails};
use crate::error::Result;
use crate::inventory::{JoomlaInspector, ServerKind};
use crate::probe::ProcessProbe;
use crate::shell::DEFAULT_TIMEOUT;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The sites command implementation.
pub struct SitesCommand<'a> {
    layout: &'a StackLayout,
    probe: &'a dyn ProcessProbe,
    args: SitesArgs,
    timeout: Duration,
}

impl<'a> SitesCommand<'a> {
    /// Create a new sites command.
    pub fn new(layout: &'a StackLayout, probe: &'a dyn ProcessProbe, args: SitesArgs) -> Self {
        Self {
            layout,
            probe,
            args,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the time budget for each `joomlainfo` call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SitesArgs {
        &self.args
    }

    fn kinds(&self) -> Vec<ServerKind> {
        match self.args.server {
            Some(kind) => vec![kind],
            None => vec![ServerKind::Apache, ServerKind::Nginx],
        }
    }

    fn collect(&self) -> Vec<(ServerKind, Vec<SiteDetails>)> {
        let builder = InventoryBuilder::new(self.layout, self.probe);
        let inspector = self
            .args
            .joomla
            .then(|| JoomlaInspector::new(&self.args.joomlainfo).with_timeout(self.timeout));

        self.kinds()
            .into_iter()
            .map(|kind| {
                let sites = builder
                    .sites(kind, self.args.all)
                    .into_iter()
                    .map(|entry| match &inspector {
                        Some(inspector) => SiteDetails::inspect(entry, inspector),
                        None => SiteDetails::plain(entry),
                    })
                    .collect();
                (kind, sites)
            })
            .collect()
    }
}

impl Command for SitesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let groups = self.collect();

        if self.args.json {
            let sites: Vec<&SiteDetails> = groups.iter().flat_map(|(_, sites)| sites).collect();
            ui.print_data(&display::to_json(&sites)?);
        } else {
            for (kind, sites) in &groups {
                display::show_sites(ui, *kind, sites);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FixtureProbe;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_etc() -> TempDir {
        let temp = TempDir::new().unwrap();
        let etc = temp.path();
        let servers = etc.join("nginx").join("servers");
        fs::create_dir_all(&servers).unwrap();
        fs::write(
            servers.join("joomla5.conf"),
            "fastcgi_pass 127.0.0.1:9083;\n",
        )
        .unwrap();
        fs::write(servers.join("legacy.conf"), "fastcgi_pass 127.0.0.1:9056;\n").unwrap();
        fs::write(servers.join("static.conf"), "root /srv/static;\n").unwrap();
        fs::write(servers.join("localhost.conf"), "fastcgi_pass 127.0.0.1:9084;\n").unwrap();

        let vhosts = etc.join("httpd").join("vhosts");
        fs::create_dir_all(&vhosts).unwrap();
        fs::write(vhosts.join("shop.conf"), "proxy:fcgi://127.0.0.1:9074\n").unwrap();
        temp
    }

    fn args() -> SitesArgs {
        SitesArgs::default()
    }

    #[test]
    fn lists_both_servers() {
        let etc = setup_etc();
        let layout = StackLayout::from_etc_dir(etc.path());
        let mut ui = MockUI::new();

        let result = SitesCommand::new(&layout, &FixtureProbe::new(), args())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Apache sites"));
        assert!(ui.has_message("shop"));
        assert!(ui.has_message("NginX sites"));
        assert!(ui.has_message("joomla5"));
        assert!(ui.has_message("Unknown PHP version for port 9056"));
        assert!(ui.has_message("No PHP version found in"));
        assert!(!ui.has_message("localhost"));
    }

    #[test]
    fn server_filter_limits_sections() {
        let etc = setup_etc();
        let layout = StackLayout::from_etc_dir(etc.path());
        let args = SitesArgs {
            server: Some(ServerKind::Apache),
            ..args()
        };
        let mut ui = MockUI::new();

        SitesCommand::new(&layout, &FixtureProbe::new(), args)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Apache sites"));
        assert!(!ui.has_message("NginX sites"));
    }

    #[test]
    fn all_flag_keeps_localhost() {
        let etc = setup_etc();
        let layout = StackLayout::from_etc_dir(etc.path());
        let args = SitesArgs {
            server: Some(ServerKind::Nginx),
            all: true,
            json: true,
            ..args()
        };
        let mut ui = MockUI::new();

        SitesCommand::new(&layout, &FixtureProbe::new(), args)
            .execute(&mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        let names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|site| site["site_name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["joomla5", "legacy", "localhost", "static"]);
        assert_eq!(json[2]["php_version"], "8.4");
    }

    #[test]
    fn joomla_flag_with_missing_script_still_lists_sites() {
        let etc = setup_etc();
        let layout = StackLayout::from_etc_dir(etc.path());
        let args = SitesArgs {
            server: Some(ServerKind::Apache),
            joomla: true,
            joomlainfo: etc.path().join("missing-joomlainfo"),
            json: true,
            ..args()
        };
        let mut ui = MockUI::new();

        SitesCommand::new(&layout, &FixtureProbe::new(), args)
            .with_timeout(Duration::from_millis(500))
            .execute(&mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(json[0]["site_name"], "shop");
        assert_eq!(json[0]["php_version"], "7.4");
        assert_eq!(json[0]["joomla"]["htaccess"], "No");
        assert!(json[0]["joomla"]["version"].is_null());
    }
}
