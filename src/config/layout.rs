//! Stack layout: where the local stack keeps its configuration.
//!
//! Every path is derived from the Homebrew `etc` directory unless the
//! caller overrides it. A [`StackLayout`] is passed explicitly into the
//! inventory builder; nothing here is process-global.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::inventory::FpmPortMap;

/// A named service whose process presence is reported on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDef {
    /// Stable key used in JSON output (e.g., "mariadb").
    pub key: String,
    /// Human label (e.g., "MariaDB").
    pub label: String,
    /// Process name searched in the process table (e.g., "mariadbd").
    pub process: String,
}

impl ServiceDef {
    /// Create a service definition.
    pub fn new(key: &str, label: &str, process: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            process: process.to_string(),
        }
    }
}

/// Default service roster, in display order: (key, label, process name).
const DEFAULT_SERVICES: &[(&str, &str, &str)] = &[
    ("httpd", "Apache", "httpd"),
    ("nginx", "NginX", "nginx"),
    ("mariadb", "MariaDB", "mariadbd"),
    ("dnsmasq", "Dnsmasq", "dnsmasq"),
    ("mailpit", "Mailpit", "mailpit"),
];

/// The default service roster.
pub fn default_services() -> Vec<ServiceDef> {
    DEFAULT_SERVICES
        .iter()
        .map(|(key, label, process)| ServiceDef::new(key, label, process))
        .collect()
}

/// Homebrew prefixes and the `etc` directory each one implies.
///
/// Later entries win when several are installed.
const HOMEBREW_PREFIXES: &[(&str, &str)] = &[
    ("/usr/local/Homebrew", "/usr/local/etc"),
    ("/opt/homebrew", "/opt/homebrew/etc"),
];

/// Fallback when no Homebrew install is found.
const FALLBACK_ETC_DIR: &str = "/usr/local/etc";

/// Detect the Homebrew `etc` directory using the real filesystem.
pub fn detect_etc_dir() -> PathBuf {
    detect_etc_dir_with(|path| path.is_dir())
}

/// Detect the Homebrew `etc` directory with a custom existence check.
///
/// This allows testing without touching `/usr/local` or `/opt`.
pub fn detect_etc_dir_with<F>(is_dir: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    HOMEBREW_PREFIXES
        .iter()
        .filter(|(marker, _)| is_dir(Path::new(marker)))
        .map(|(_, etc)| PathBuf::from(etc))
        .next_back()
        .unwrap_or_else(|| PathBuf::from(FALLBACK_ETC_DIR))
}

/// Filesystem roots and static tables for one deployment.
#[derive(Debug, Clone, Serialize)]
pub struct StackLayout {
    /// Homebrew `etc` directory the defaults were derived from.
    pub etc_dir: PathBuf,
    /// Directory holding one subdirectory per installed PHP version.
    pub php_root: PathBuf,
    /// Apache vhost directory, if the deployment has Apache.
    pub apache_dir: Option<PathBuf>,
    /// NginX server block directory, if the deployment has NginX.
    pub nginx_dir: Option<PathBuf>,
    /// FPM port to PHP version table.
    pub port_map: FpmPortMap,
    /// Services whose process presence is reported.
    pub services: Vec<ServiceDef>,
}

impl StackLayout {
    /// Derive the standard layout from a Homebrew `etc` directory.
    pub fn from_etc_dir(etc_dir: impl Into<PathBuf>) -> Self {
        let etc_dir = etc_dir.into();
        Self {
            php_root: etc_dir.join("php"),
            apache_dir: Some(etc_dir.join("httpd").join("vhosts")),
            nginx_dir: Some(etc_dir.join("nginx").join("servers")),
            port_map: FpmPortMap::default(),
            services: default_services(),
            etc_dir,
        }
    }

    /// Detect the layout from the local Homebrew install.
    pub fn detect() -> Self {
        Self::from_etc_dir(detect_etc_dir())
    }

    /// Override the PHP installation root.
    pub fn with_php_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.php_root = path.into();
        self
    }

    /// Override (or remove) the Apache vhost directory.
    pub fn with_apache_dir(mut self, path: Option<PathBuf>) -> Self {
        self.apache_dir = path;
        self
    }

    /// Override (or remove) the NginX server directory.
    pub fn with_nginx_dir(mut self, path: Option<PathBuf>) -> Self {
        self.nginx_dir = path;
        self
    }

    /// Replace the FPM port table.
    pub fn with_port_map(mut self, port_map: FpmPortMap) -> Self {
        self.port_map = port_map;
        self
    }
}
