//! Joomla details for a local website.
//!
//! The companion `joomlainfo` script prints a site's Joomla configuration
//! as `KEY=value` lines when called with `-n <site> -c`. phpdev only reads
//! that output; it never touches the Joomla install itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use super::htaccess::HtaccessState;
use crate::config::KeyValueFile;
use crate::error::Result;
use crate::shell::{self, CommandOptions};

/// Default install location of the companion script.
pub const DEFAULT_JOOMLAINFO: &str = "/usr/local/bin/joomlainfo";

/// Joomla configuration of one site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoomlaInfo {
    pub version: Option<String>,
    pub database: Option<String>,
    pub db_user: Option<String>,
    pub password: Option<String>,
    pub prefix: Option<String>,
    pub path: Option<PathBuf>,
    pub htaccess: HtaccessState,
}

impl JoomlaInfo {
    /// Parse `joomlainfo -c` output. The `.htaccess` state is left at `No`.
    pub fn parse(output: &str) -> Self {
        let mut values = KeyValueFile::parse(output);
        let mut take = |key: &str| values.remove(key).filter(|v| !v.is_empty());
        Self {
            version: take("VERSION"),
            database: take("DATABASE"),
            db_user: take("DBUSER"),
            password: take("PASSWORD"),
            prefix: take("PREFIX"),
            path: take("PATH").map(PathBuf::from),
            htaccess: HtaccessState::No,
        }
    }

    /// Parse output and classify the site's `.htaccess`.
    pub fn from_output(output: &str) -> Self {
        let mut info = Self::parse(output);
        info.htaccess = info
            .path
            .as_deref()
            .map(HtaccessState::inspect)
            .unwrap_or(HtaccessState::No);
        info
    }

    /// Whether the script reported a Joomla install at all.
    pub fn is_joomla(&self) -> bool {
        self.version.is_some()
    }
}

/// Runs the `joomlainfo` script for a site.
#[derive(Debug, Clone)]
pub struct JoomlaInspector {
    program: PathBuf,
    options: CommandOptions,
}

impl Default for JoomlaInspector {
    fn default() -> Self {
        Self::new(DEFAULT_JOOMLAINFO)
    }
}

impl JoomlaInspector {
    /// Create an inspector for a specific script path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            options: CommandOptions::default(),
        }
    }

    /// Set the per-site time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = CommandOptions::with_timeout(timeout);
        self
    }

    /// Script path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn query(&self, site: &str) -> Result<String> {
        let program = self.program.to_string_lossy();
        let result = shell::run(&program, &["-n", site, "-c"], &self.options)?;
        Ok(result.stdout)
    }

    /// Inspect a site. Script failures yield empty info.
    pub fn inspect(&self, site: &str) -> JoomlaInfo {
        match self.query(site) {
            Ok(output) => JoomlaInfo::from_output(&output),
            Err(e) => {
                tracing::warn!("No Joomla info for {}: {}", site, e);
                JoomlaInfo::default()
            }
        }
    }
}
