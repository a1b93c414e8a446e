//! Dashboard inventory assembly.
//!
//! [`InventoryBuilder`] combines the filesystem inventory and the process
//! probe into one [`DashboardView`]. Each build starts from scratch: no
//! caching, no writes, no shared state between calls.
//!
//! # Example
//!
//! ```
//! use phpdev::config::StackLayout;
//! use phpdev::dashboard::build_dashboard_view;
//! use phpdev::probe::FixtureProbe;
//!
//! let layout = StackLayout::from_etc_dir("/nonexistent/etc");
//! let view = build_dashboard_view(&layout, &FixtureProbe::new());
//! assert!(view.installed_php_versions.is_empty());
//! assert!(view.nginx_sites.is_empty());
//! ```

use std::path::{Path, PathBuf};
use std::thread;

use serde::Serialize;

use crate::config::{ServiceDef, StackLayout};
use crate::inventory::{
    installed_php_versions, list_site_configs, resolve_php_version, site_url, JoomlaInfo,
    JoomlaInspector, ServerKind, SiteConfig,
};
use crate::probe::{is_process_running, php_fpm_statuses, ProcessProbe, ServiceStatus};

/// One website and the PHP version its config points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInventoryEntry {
    pub site_name: String,
    /// Version label, or a diagnostic string, or empty when unreadable.
    pub php_version: String,
    pub server: ServerKind,
    pub config_path: PathBuf,
    pub url: String,
}

/// A site entry enriched with its Joomla details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDetails {
    #[serde(flatten)]
    pub entry: SiteInventoryEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joomla: Option<JoomlaInfo>,
}

impl SiteDetails {
    /// Details without Joomla info.
    pub fn plain(entry: SiteInventoryEntry) -> Self {
        Self {
            entry,
            joomla: None,
        }
    }

    /// Query `joomlainfo` for the entry's site.
    pub fn inspect(entry: SiteInventoryEntry, inspector: &JoomlaInspector) -> Self {
        let joomla = inspector.inspect(&entry.site_name);
        Self {
            entry,
            joomla: Some(joomla),
        }
    }
}

/// Status of one roster service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedStatus {
    pub key: String,
    pub label: String,
    pub status: ServiceStatus,
}

/// Status of one installed PHP-FPM version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhpFpmStatus {
    pub version: String,
    pub status: ServiceStatus,
}

/// Snapshot of the local stack, input to every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub installed_php_versions: Vec<String>,
    pub apache_sites: Vec<SiteInventoryEntry>,
    pub nginx_sites: Vec<SiteInventoryEntry>,
    pub service_statuses: Vec<NamedStatus>,
    pub php_fpm_statuses: Vec<PhpFpmStatus>,
}

impl DashboardView {
    /// Status of a roster service by key (e.g., "nginx").
    pub fn service(&self, key: &str) -> Option<ServiceStatus> {
        self.service_statuses
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.status)
    }

    /// Status of a PHP-FPM version.
    pub fn php_fpm(&self, version: &str) -> Option<ServiceStatus> {
        self.php_fpm_statuses
            .iter()
            .find(|s| s.version == version)
            .map(|s| s.status)
    }

    /// Sites configured for one server kind.
    pub fn sites(&self, kind: ServerKind) -> &[SiteInventoryEntry] {
        match kind {
            ServerKind::Apache => &self.apache_sites,
            ServerKind::Nginx => &self.nginx_sites,
        }
    }
}

/// Builds [`DashboardView`]s from a layout and a process probe.
pub struct InventoryBuilder<'a> {
    layout: &'a StackLayout,
    probe: &'a dyn ProcessProbe,
}

impl<'a> InventoryBuilder<'a> {
    /// Create a builder.
    pub fn new(layout: &'a StackLayout, probe: &'a dyn ProcessProbe) -> Self {
        Self { layout, probe }
    }

    /// Config directory for a server kind, if the deployment has one.
    pub fn servers_dir(&self, kind: ServerKind) -> Option<&'a Path> {
        match kind {
            ServerKind::Apache => self.layout.apache_dir.as_deref(),
            ServerKind::Nginx => self.layout.nginx_dir.as_deref(),
        }
    }

    /// Site inventory for one server kind.
    ///
    /// `include_reserved` keeps the `localhost` site (raw listing);
    /// otherwise only user-created websites are returned.
    pub fn sites(&self, kind: ServerKind, include_reserved: bool) -> Vec<SiteInventoryEntry> {
        let Some(dir) = self.servers_dir(kind) else {
            return Vec::new();
        };

        list_site_configs(dir)
            .into_iter()
            .filter(|config| include_reserved || !config.is_reserved())
            .map(|config| self.resolve_site(kind, config))
            .collect()
    }

    fn resolve_site(&self, kind: ServerKind, config: SiteConfig) -> SiteInventoryEntry {
        let php_version = resolve_php_version(&config.path, &self.layout.port_map);
        tracing::debug!("{} site {}: php {:?}", kind, config.name, php_version);
        SiteInventoryEntry {
            url: site_url(&config.name),
            site_name: config.name,
            php_version,
            server: kind,
            config_path: config.path,
        }
    }

    /// Installed PHP version labels.
    pub fn php_versions(&self) -> Vec<String> {
        installed_php_versions(&self.layout.php_root)
    }

    /// Probe every roster service concurrently; results keep roster order.
    pub fn service_statuses(&self) -> Vec<NamedStatus> {
        let probe = self.probe;
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .layout
                .services
                .iter()
                .map(|service| {
                    let handle = scope.spawn(move || is_process_running(probe, &service.process));
                    (service, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(service, handle)| {
                    let status = handle.join().unwrap_or_else(|_| {
                        tracing::warn!("Probe for {} panicked", service.process);
                        ServiceStatus::NotRunning
                    });
                    named_status(service, status)
                })
                .collect()
        })
    }

    /// Probe the PHP-FPM pool of every version.
    pub fn php_fpm_statuses(&self, versions: &[String]) -> Vec<PhpFpmStatus> {
        php_fpm_statuses(self.probe, versions)
            .into_iter()
            .map(|(version, status)| PhpFpmStatus { version, status })
            .collect()
    }

    /// Build the full dashboard view.
    pub fn build(&self) -> DashboardView {
        let installed_php_versions = self.php_versions();
        let php_fpm_statuses = self.php_fpm_statuses(&installed_php_versions);

        DashboardView {
            apache_sites: self.sites(ServerKind::Apache, false),
            nginx_sites: self.sites(ServerKind::Nginx, false),
            service_statuses: self.service_statuses(),
            php_fpm_statuses,
            installed_php_versions,
        }
    }
}

fn named_status(service: &ServiceDef, status: ServiceStatus) -> NamedStatus {
    NamedStatus {
        key: service.key.clone(),
        label: service.label.clone(),
        status,
    }
}

/// Build a dashboard view in one call.
pub fn build_dashboard_view(layout: &StackLayout, probe: &dyn ProcessProbe) -> DashboardView {
    InventoryBuilder::new(layout, probe).build()
}
