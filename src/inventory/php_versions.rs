//! Installed PHP version discovery.
//!
//! Homebrew keeps one configuration directory per PHP version under
//! `<etc>/php` (`7.4/`, `8.3/`, ...). Only directories named exactly
//! `MAJOR.MINOR` count; `conf.d`, `8.3-old` and friends are ignored.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PhpdevError, Result};

static VERSION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid version regex"));

/// Whether a directory name is a `MAJOR.MINOR` version label.
pub fn is_version_label(name: &str) -> bool {
    VERSION_LABEL.is_match(name)
}

/// List the PHP version labels installed under `php_root`.
///
/// Results are sorted by name so repeated scans agree.
///
/// # Errors
///
/// Returns [`PhpdevError::DirectoryUnavailable`] when `php_root` is missing
/// or unreadable.
pub fn list_php_versions(php_root: &Path) -> Result<Vec<String>> {
    let entries =
        std::fs::read_dir(php_root).map_err(|source| PhpdevError::DirectoryUnavailable {
            path: php_root.to_path_buf(),
            source,
        })?;

    let mut versions: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            (is_version_label(&name) && entry.path().is_dir()).then_some(name)
        })
        .collect();
    versions.sort_by_key(|label| version_key(label));

    tracing::debug!(
        "Found {} PHP versions in {}",
        versions.len(),
        php_root.display()
    );
    Ok(versions)
}

/// Numeric `(major, minor)` ordering key for a version label.
fn version_key(label: &str) -> (u32, u32) {
    let (major, minor) = label.split_once('.').unwrap_or((label, "0"));
    (major.parse().unwrap_or(0), minor.parse().unwrap_or(0))
}

/// Best-effort variant of [`list_php_versions`]: an unavailable root means
/// no PHP versions are installed.
pub fn installed_php_versions(php_root: &Path) -> Vec<String> {
    list_php_versions(php_root).unwrap_or_else(|e| {
        tracing::debug!("{}; reporting no PHP versions", e);
        Vec::new()
    })
}
