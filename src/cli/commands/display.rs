//! Shared display helpers for dashboard sections.
//!
//! These helpers are used by `status`, `sites`, and `php` so every command
//! renders services, PHP-FPM pools, and site tables the same way.

use serde::Serialize;

use crate::dashboard::{NamedStatus, PhpFpmStatus, SiteDetails};
use crate::error::{PhpdevError, Result};
use crate::inventory::ServerKind;
use crate::ui::{DevTheme, Table, UserInterface};

/// Serialize a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PhpdevError::Other(e.into()))
}

/// Serialize a value as YAML.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| PhpdevError::Other(e.into()))
}

/// Cell text for a resolved PHP version.
///
/// An unreadable config resolves to an empty string and is shown as a dim
/// dash; diagnostics are shown verbatim.
pub fn php_version_cell(theme: &DevTheme, php_version: &str) -> String {
    if php_version.is_empty() {
        theme.format_missing("-")
    } else {
        php_version.to_string()
    }
}

/// Show the service status table.
pub fn show_service_statuses(ui: &mut dyn UserInterface, statuses: &[NamedStatus]) {
    let mut table = Table::new(&["Service", "Status"]);
    for service in statuses {
        table.add_row([
            service.label.clone(),
            ui.theme().format_status(service.status),
        ]);
    }

    ui.show_section("Services");
    ui.show_table(&table);
}

/// Show the PHP-FPM status table.
pub fn show_php_fpm_statuses(ui: &mut dyn UserInterface, statuses: &[PhpFpmStatus]) {
    ui.show_section("PHP-FPM");
    if statuses.is_empty() {
        let line = ui.theme().format_missing("No PHP versions installed");
        ui.message(&line);
        return;
    }

    let mut table = Table::new(&["Version", "Status"]);
    for pool in statuses {
        table.add_row([pool.version.clone(), ui.theme().format_status(pool.status)]);
    }
    ui.show_table(&table);
}

/// Show one server's site table.
///
/// Joomla columns appear when any row carries Joomla info; the config path
/// column appears in verbose mode.
pub fn show_sites(ui: &mut dyn UserInterface, kind: ServerKind, sites: &[SiteDetails]) {
    ui.show_section(&format!("{} sites", kind.label()));
    if sites.is_empty() {
        let line = ui.theme().format_missing("No sites configured");
        ui.message(&line);
        return;
    }

    let with_joomla = sites.iter().any(|site| site.joomla.is_some());
    let with_config = ui.output_mode().shows_details();

    let mut headers = vec!["Site", "PHP", "URL"];
    if with_joomla {
        headers.extend(["Joomla", "Database", ".htaccess"]);
    }
    if with_config {
        headers.push("Config");
    }

    let mut table = Table::new(&headers);
    for site in sites {
        let theme = ui.theme();
        let entry = &site.entry;
        let mut row = vec![
            entry.site_name.clone(),
            php_version_cell(theme, &entry.php_version),
            entry.url.clone(),
        ];
        if with_joomla {
            let joomla = site.joomla.clone().unwrap_or_default();
            if joomla.is_joomla() {
                let missing = || theme.format_missing("-");
                row.push(joomla.version.unwrap_or_else(missing));
                row.push(joomla.database.unwrap_or_else(missing));
            } else {
                row.push(theme.format_missing("not Joomla"));
                row.push(theme.format_missing("-"));
            }
            row.push(joomla.htaccess.to_string());
        }
        if with_config {
            row.push(entry.config_path.display().to_string());
        }
        table.add_row(row);
    }
    ui.show_table(&table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SiteInventoryEntry;
    use crate::inventory::{site_url, HtaccessState, JoomlaInfo};
    use crate::probe::ServiceStatus;
    use crate::ui::{MockUI, OutputMode};
    use std::path::PathBuf;

    fn entry(name: &str, php_version: &str) -> SiteInventoryEntry {
        SiteInventoryEntry {
            site_name: name.to_string(),
            php_version: php_version.to_string(),
            server: ServerKind::Nginx,
            config_path: PathBuf::from(format!("/etc/nginx/servers/{}.conf", name)),
            url: site_url(name),
        }
    }

    #[test]
    fn php_version_cell_marks_unreadable() {
        let theme = DevTheme::plain();

        assert_eq!(php_version_cell(&theme, "8.3"), "8.3");
        assert_eq!(php_version_cell(&theme, ""), "-");
        assert_eq!(
            php_version_cell(&theme, "Unknown PHP version for port 9099"),
            "Unknown PHP version for port 9099"
        );
    }

    #[test]
    fn service_table_lists_labels_and_states() {
        let mut ui = MockUI::new();
        let statuses = vec![
            NamedStatus {
                key: "nginx".to_string(),
                label: "NginX".to_string(),
                status: ServiceStatus::Running,
            },
            NamedStatus {
                key: "mariadb".to_string(),
                label: "MariaDB".to_string(),
                status: ServiceStatus::NotRunning,
            },
        ];

        show_service_statuses(&mut ui, &statuses);

        assert!(ui.has_message("Services"));
        assert!(ui.has_message("● Running"));
        assert!(ui.has_message("○ Not running"));
    }

    #[test]
    fn empty_php_fpm_list_has_placeholder() {
        let mut ui = MockUI::new();

        show_php_fpm_statuses(&mut ui, &[]);

        assert!(ui.has_message("No PHP versions installed"));
    }

    #[test]
    fn site_table_without_joomla() {
        let mut ui = MockUI::new();
        let sites = vec![SiteDetails::plain(entry("blog", "8.2"))];

        show_sites(&mut ui, ServerKind::Nginx, &sites);

        assert!(ui.has_message("NginX sites"));
        assert!(ui.has_message("https://blog.dev.test"));
        assert!(!ui.has_message("Database"));
        assert!(!ui.has_message("blog.conf"));
    }

    #[test]
    fn verbose_site_table_shows_config_path() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let sites = vec![SiteDetails::plain(entry("blog", "8.2"))];

        show_sites(&mut ui, ServerKind::Nginx, &sites);

        assert!(ui.has_message("/etc/nginx/servers/blog.conf"));
    }

    #[test]
    fn site_table_with_joomla_columns() {
        let mut ui = MockUI::new();
        let joomla = JoomlaInfo {
            version: Some("5.2.1".to_string()),
            database: Some("j5_db".to_string()),
            htaccess: HtaccessState::Yes,
            ..JoomlaInfo::default()
        };
        let sites = vec![
            SiteDetails {
                entry: entry("joomla5", "8.3"),
                joomla: Some(joomla),
            },
            SiteDetails {
                entry: entry("plain", "8.1"),
                joomla: Some(JoomlaInfo::default()),
            },
        ];

        show_sites(&mut ui, ServerKind::Nginx, &sites);

        assert!(ui.has_message("5.2.1"));
        assert!(ui.has_message("j5_db"));
        assert!(ui.has_message(".htaccess"));
        assert!(ui.has_message("not Joomla"));
    }

    #[test]
    fn empty_site_list_has_placeholder() {
        let mut ui = MockUI::new();

        show_sites(&mut ui, ServerKind::Apache, &[]);

        assert!(ui.has_message("Apache sites"));
        assert!(ui.has_message("No sites configured"));
    }

    #[test]
    fn json_output_is_pretty() {
        let json = to_json(&entry("blog", "8.2")).unwrap();

        assert!(json.contains("\n"));
        assert!(json.contains("\"site_name\": \"blog\""));
    }
}
