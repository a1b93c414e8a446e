//! Library integration tests.

use std::fs;

use phpdev::config::{DeploymentSettings, StackLayout};
use phpdev::dashboard::{build_dashboard_view, InventoryBuilder};
use phpdev::inventory::{resolve_php_version, FpmPortMap, ServerKind};
use phpdev::probe::{FixtureProbe, ServiceStatus};
use phpdev::PhpdevError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = PhpdevError::ProcessQueryFailure {
        command: "pgrep nginx".into(),
    };
    assert!(err.to_string().contains("pgrep nginx"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> phpdev::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use phpdev::cli::{Cli, Commands};

    let cli = Cli::parse_from(["phpdev", "status", "--json"]);

    if let Some(Commands::Status(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn dashboard_from_custom_layout() {
    let temp = TempDir::new().unwrap();
    let php = temp.path().join("php-versions");
    fs::create_dir_all(php.join("8.2")).unwrap();
    let sites = temp.path().join("sites");
    fs::create_dir_all(&sites).unwrap();
    fs::write(sites.join("blog.conf"), "fastcgi_pass 127.0.0.1:9083;").unwrap();

    let layout = StackLayout::from_etc_dir(temp.path())
        .with_php_root(&php)
        .with_apache_dir(None)
        .with_nginx_dir(Some(sites))
        .with_port_map(FpmPortMap::from_pairs([("9082", "8.2")]));
    let probe = FixtureProbe::new().with_process("php-fpm: pool www (/etc/php/8.2/php-fpm.conf)");

    let view = build_dashboard_view(&layout, &probe);

    assert_eq!(view.installed_php_versions, ["8.2"]);
    assert_eq!(view.nginx_sites[0].php_version, "Unknown PHP version for port 9083");
    assert_eq!(view.php_fpm("8.2"), Some(ServiceStatus::Running));
}

#[test]
fn builder_exposes_raw_listing() {
    let temp = TempDir::new().unwrap();
    let vhosts = temp.path().join("httpd").join("vhosts");
    fs::create_dir_all(&vhosts).unwrap();
    fs::write(vhosts.join("localhost.conf"), "").unwrap();
    let layout = StackLayout::from_etc_dir(temp.path());
    let probe = FixtureProbe::new();

    let builder = InventoryBuilder::new(&layout, &probe);

    assert!(builder.sites(ServerKind::Apache, false).is_empty());
    assert_eq!(builder.sites(ServerKind::Apache, true).len(), 1);
}

#[test]
fn unreadable_config_resolves_to_empty() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone.conf");

    assert_eq!(resolve_php_version(&missing, &FpmPortMap::default()), "");
}

#[test]
fn settings_lookup() {
    let settings = DeploymentSettings::parse("ROOTFOLDER = /Users/dev/Sites\n# comment\nnoise\n");

    assert_eq!(settings.root_folder(), Some("/Users/dev/Sites"));
    assert_eq!(settings.mariadb_backup(), None);
}
