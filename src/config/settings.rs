//! Deployment settings written by the installer.
//!
//! The file lives at `~/.config/phpdev/config` and holds the folders the
//! companion scripts use (site root, backup folders). phpdev only looks the
//! values up; it never interprets them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::env_file::KeyValueFile;

/// Key for the folder that holds every local website.
pub const ROOT_FOLDER_KEY: &str = "ROOTFOLDER";
/// Key for the folder receiving database dumps.
pub const MARIADB_BACKUP_KEY: &str = "MARIADBBACKUP";
/// Key for the folder receiving full site backups.
pub const SITES_BACKUP_KEY: &str = "SITESBACKUP";

/// Default location of the settings file: `~/.config/phpdev/config`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("phpdev").join("config"))
}

/// Parsed deployment settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeploymentSettings {
    values: BTreeMap<String, String>,
}

impl DeploymentSettings {
    /// Build settings from already-parsed values.
    pub fn from_values(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Parse settings from file content.
    pub fn parse(content: &str) -> Self {
        Self::from_values(KeyValueFile::parse(content))
    }

    /// Load settings from a path.
    ///
    /// A missing or unreadable file yields empty settings.
    pub fn load(path: &Path) -> Self {
        match KeyValueFile::load_optional(path) {
            Ok(values) => {
                tracing::debug!("Loaded {} settings from {}", values.len(), path.display());
                Self::from_values(values)
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Folder that holds every local website.
    pub fn root_folder(&self) -> Option<&str> {
        self.get(ROOT_FOLDER_KEY)
    }

    /// Folder receiving database dumps.
    pub fn mariadb_backup(&self) -> Option<&str> {
        self.get(MARIADB_BACKUP_KEY)
    }

    /// Folder receiving full site backups.
    pub fn sites_backup(&self) -> Option<&str> {
        self.get(SITES_BACKUP_KEY)
    }

    /// Iterate all key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no settings were found.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
