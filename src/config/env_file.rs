//! `KEY=value` file parsing.
//!
//! The installer scripts write the deployment settings as one assignment
//! per line. The same line format is printed by `joomlainfo -c`, so the
//! parser is shared by both.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

/// Parses `KEY=value` text into an ordered map.
///
/// # Rules
///
/// - Each line is trimmed before inspection
/// - Blank lines and lines starting with `#` are skipped
/// - Lines without `=` are skipped
/// - The line splits at the first `=`; key and value are trimmed
/// - Values are opaque: quotes are kept as written
/// - A repeated key keeps the last value
///
/// # Example
///
/// ```
/// use phpdev::config::KeyValueFile;
///
/// let content = "# written by the installer\nROOTFOLDER=/Users/dev/Sites\nEMPTY=\n";
/// let vars = KeyValueFile::parse(content);
/// assert_eq!(vars.get("ROOTFOLDER").map(String::as_str), Some("/Users/dev/Sites"));
/// assert_eq!(vars.get("EMPTY").map(String::as_str), Some(""));
/// ```
pub struct KeyValueFile;

impl KeyValueFile {
    /// Parse content into a map of keys to values.
    pub fn parse(content: &str) -> BTreeMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.trim().to_string()))
    }

    /// Load and parse a file from a path.
    pub fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Load and parse a file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<BTreeMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(BTreeMap::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_simple_assignments() {
        let vars = KeyValueFile::parse("ROOTFOLDER=/Users/dev/Sites\nSITESBACKUP=/Users/dev/Backup\n");

        assert_eq!(vars.get("ROOTFOLDER"), Some(&"/Users/dev/Sites".to_string()));
        assert_eq!(vars.get("SITESBACKUP"), Some(&"/Users/dev/Backup".to_string()));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = r#"
# Settings written by the installer

ROOTFOLDER=/Users/dev/Sites
   # indented comment
"#;

        let vars = KeyValueFile::parse(content);

        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let vars = KeyValueFile::parse("URL=https://example.test?a=b");

        assert_eq!(vars.get("URL"), Some(&"https://example.test?a=b".to_string()));
    }

    #[test]
    fn trims_key_and_value() {
        let vars = KeyValueFile::parse("  MARIADBBACKUP =  /backups/db  ");

        assert_eq!(vars.get("MARIADBBACKUP"), Some(&"/backups/db".to_string()));
    }

    #[test]
    fn keeps_quotes_verbatim() {
        let vars = KeyValueFile::parse("NAME=\"quoted\"");

        assert_eq!(vars.get("NAME"), Some(&"\"quoted\"".to_string()));
    }

    #[test]
    fn skips_lines_without_equals_or_key() {
        let vars = KeyValueFile::parse("just text\n=orphan\nKEY=value");

        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("KEY"), Some(&"value".to_string()));
    }

    #[test]
    fn later_duplicate_wins() {
        let vars = KeyValueFile::parse("KEY=first\nKEY=second");

        assert_eq!(vars.get("KEY"), Some(&"second".to_string()));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config");
        fs::write(&path, "ROOTFOLDER=/sites\n").unwrap();

        let vars = KeyValueFile::load(&path).unwrap();

        assert_eq!(vars.get("ROOTFOLDER"), Some(&"/sites".to_string()));
    }

    #[test]
    fn load_optional_returns_empty_for_missing_file() {
        let result = KeyValueFile::load_optional(Path::new("/nonexistent/phpdev/config"));

        assert!(result.unwrap().is_empty());
    }
}
