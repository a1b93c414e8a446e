//! PHP version resolution from server config files.
//!
//! Every site proxies PHP requests to a PHP-FPM pool on the loopback
//! interface. Each PHP version listens on its own `90xx` port, so the first
//! `127.0.0.1:90xx` in a site's config identifies its PHP version.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::PhpdevError;

/// Loopback FPM address; the port may or may not be followed by `;`.
static FPM_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"127\.0\.0\.1:(90[0-9]{2})").expect("valid FPM regex"));

/// Default FPM port table of the reference deployment.
const DEFAULT_PORTS: &[(&str, &str)] = &[
    ("9074", "7.4"),
    ("9081", "8.1"),
    ("9082", "8.2"),
    ("9083", "8.3"),
    ("9084", "8.4"),
];

/// Static mapping from FPM port to PHP version label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FpmPortMap {
    ports: BTreeMap<String, String>,
}

impl Default for FpmPortMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_PORTS.iter().copied())
    }
}

impl FpmPortMap {
    /// An empty table.
    pub fn empty() -> Self {
        Self {
            ports: BTreeMap::new(),
        }
    }

    /// Build a table from `(port, version)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            ports: pairs
                .into_iter()
                .map(|(port, version)| (port.to_string(), version.to_string()))
                .collect(),
        }
    }

    /// Version label for a port.
    pub fn version_for(&self, port: &str) -> Option<&str> {
        self.ports.get(port).map(String::as_str)
    }

    /// Iterate `(port, version)` pairs in port order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ports.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

/// Outcome of looking for an FPM port in config text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FpmLookup {
    /// A known port was found.
    Mapped { port: String, version: String },
    /// A `90xx` port was found but the table has no entry for it.
    UnmappedPort { port: String },
    /// No loopback FPM address in the text.
    NoPort,
}

/// Extract the first loopback `90xx` port from config text.
pub fn extract_fpm_port(content: &str) -> Option<&str> {
    FPM_ADDRESS
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Look up the PHP version for config text.
pub fn lookup_fpm_port(content: &str, port_map: &FpmPortMap) -> FpmLookup {
    let Some(port) = extract_fpm_port(content) else {
        return FpmLookup::NoPort;
    };
    match port_map.version_for(port) {
        Some(version) => FpmLookup::Mapped {
            port: port.to_string(),
            version: version.to_string(),
        },
        None => FpmLookup::UnmappedPort {
            port: port.to_string(),
        },
    }
}

/// Resolve the PHP version label configured in `config_path`.
///
/// Returns:
/// - the mapped version label (e.g. `"8.3"`)
/// - `"Unknown PHP version for port <port>"` for an unmapped `90xx` port
/// - `"No PHP version found in <path>"` when no FPM address is present
/// - an empty string when the file cannot be read
pub fn resolve_php_version(config_path: &Path, port_map: &FpmPortMap) -> String {
    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(source) => {
            let err = PhpdevError::ConfigReadFailure {
                path: config_path.to_path_buf(),
                source,
            };
            tracing::warn!("{}", err);
            return String::new();
        }
    };

    match lookup_fpm_port(&content, port_map) {
        FpmLookup::Mapped { version, .. } => version,
        FpmLookup::UnmappedPort { port } => format!("Unknown PHP version for port {}", port),
        FpmLookup::NoPort => format!("No PHP version found in {}", config_path.display()),
    }
}
