//! `.htaccess` hardening check for a site's document root.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static HARDENING_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)RewriteEngine\s+On|Options\s+-Indexes|Deny\s+from\s+all|Require\s+all\s+denied")
        .expect("valid htaccess regex")
});

/// How well a site's `.htaccess` protects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HtaccessState {
    /// Contains at least one hardening directive.
    Yes,
    /// Present and non-empty, but no hardening directive.
    Minimal,
    /// Present but blank.
    Empty,
    /// No `.htaccess` file.
    #[default]
    No,
}

impl HtaccessState {
    /// Classify `.htaccess` content.
    pub fn from_content(content: &str) -> Self {
        let content = content.trim();
        if content.is_empty() {
            Self::Empty
        } else if HARDENING_DIRECTIVE.is_match(content) {
            Self::Yes
        } else {
            Self::Minimal
        }
    }

    /// Classify the `.htaccess` in `site_root`.
    pub fn inspect(site_root: &Path) -> Self {
        let path = site_root.join(".htaccess");
        if !path.exists() {
            return Self::No;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_content(&content),
            Err(e) => {
                tracing::warn!("Cannot read {}: {}", path.display(), e);
                Self::Empty
            }
        }
    }
}

impl fmt::Display for HtaccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Yes => "Yes",
            Self::Minimal => "Minimal",
            Self::Empty => "Empty",
            Self::No => "No",
        };
        f.write_str(label)
    }
}
