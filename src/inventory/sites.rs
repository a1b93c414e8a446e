//! Server config enumeration.
//!
//! Each local website has one `<site>.conf` file in the Apache vhost
//! directory or the NginX server directory. The site name is the file name
//! with the `.conf` suffix removed; other dots are kept (`my.site.conf` is
//! site `my.site`).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Reserved administrative site; never listed as a user website.
pub const RESERVED_SITE: &str = "localhost";

const CONF_SUFFIX: &str = ".conf";

/// Which web server a config directory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerKind {
    Apache,
    Nginx,
}

impl ServerKind {
    /// Human label used in tables and headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Apache => "Apache",
            Self::Nginx => "NginX",
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ServerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apache" | "httpd" => Ok(Self::Apache),
            "nginx" => Ok(Self::Nginx),
            _ => Err(format!("unknown server: {}", s)),
        }
    }
}

/// One server config file and the site it configures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site name (file name without `.conf`).
    pub name: String,
    /// Full path to the config file.
    pub path: PathBuf,
}

impl SiteConfig {
    /// Whether this is the reserved `localhost` site.
    pub fn is_reserved(&self) -> bool {
        self.name == RESERVED_SITE
    }
}

/// Derive a site name from a config file name.
///
/// Returns `None` for names that are not `<something>.conf` or that are
/// hidden (leading dot), matching a `*.conf` shell glob.
pub fn site_name_from_file(file_name: &str) -> Option<&str> {
    if file_name.starts_with('.') {
        return None;
    }
    file_name
        .strip_suffix(CONF_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// List every `*.conf` file in `servers_dir`, including `localhost`.
///
/// A missing or unreadable directory yields an empty list. Results are
/// sorted by site name.
pub fn list_site_configs(servers_dir: &Path) -> Vec<SiteConfig> {
    let entries = match std::fs::read_dir(servers_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(
                "Server config directory {} unavailable: {}",
                servers_dir.display(),
                e
            );
            return Vec::new();
        }
    };

    let mut configs: Vec<SiteConfig> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let file_name = entry.file_name().into_string().ok()?;
            let name = site_name_from_file(&file_name)?;
            let path = entry.path();
            path.is_file().then(|| SiteConfig {
                name: name.to_string(),
                path,
            })
        })
        .collect();
    configs.sort_by(|a, b| a.name.cmp(&b.name));
    configs
}

/// List user-created websites in `servers_dir` (everything but `localhost`).
pub fn list_user_sites(servers_dir: &Path) -> Vec<SiteConfig> {
    list_site_configs(servers_dir)
        .into_iter()
        .filter(|config| !config.is_reserved())
        .collect()
}

/// Public URL of a local website.
pub fn site_url(name: &str) -> String {
    format!("https://{}.dev.test", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn servers_dir(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for file in files {
            fs::write(temp.path().join(file), "server {}\n").unwrap();
        }
        temp
    }

    fn names(configs: &[SiteConfig]) -> Vec<&str> {
        configs.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn site_name_strips_conf_suffix_only() {
        assert_eq!(site_name_from_file("blog.conf"), Some("blog"));
        assert_eq!(site_name_from_file("my.site.conf"), Some("my.site"));
        assert_eq!(site_name_from_file("blog.conf.bak"), None);
        assert_eq!(site_name_from_file("README"), None);
        assert_eq!(site_name_from_file(".conf"), None);
        assert_eq!(site_name_from_file(".hidden.conf"), None);
    }

    #[test]
    fn raw_listing_keeps_localhost() {
        let dir = servers_dir(&["localhost.conf", "joomla5.conf", "blog.conf"]);

        let configs = list_site_configs(dir.path());

        assert_eq!(names(&configs), ["blog", "joomla5", "localhost"]);
    }

    #[test]
    fn user_listing_drops_localhost() {
        let dir = servers_dir(&["localhost.conf", "joomla5.conf", "blog.conf"]);

        let sites = list_user_sites(dir.path());

        assert_eq!(names(&sites), ["blog", "joomla5"]);
    }

    #[test]
    fn ignores_other_files_and_directories() {
        let dir = servers_dir(&["blog.conf", "notes.txt", "blog.conf.disabled"]);
        fs::create_dir(dir.path().join("archive.conf")).unwrap();

        let configs = list_site_configs(dir.path());

        assert_eq!(names(&configs), ["blog"]);
    }

    #[test]
    fn config_paths_point_into_directory() {
        let dir = servers_dir(&["blog.conf"]);

        let configs = list_site_configs(dir.path());

        assert_eq!(configs[0].path, dir.path().join("blog.conf"));
    }

    #[test]
    fn missing_directory_is_empty() {
        assert!(list_site_configs(Path::new("/nonexistent/nginx/servers")).is_empty());
    }

    #[test]
    fn server_kind_parses_aliases() {
        assert_eq!("nginx".parse::<ServerKind>(), Ok(ServerKind::Nginx));
        assert_eq!("Apache".parse::<ServerKind>(), Ok(ServerKind::Apache));
        assert_eq!("httpd".parse::<ServerKind>(), Ok(ServerKind::Apache));
        assert!("caddy".parse::<ServerKind>().is_err());
    }

    #[test]
    fn site_url_uses_dev_test_domain() {
        assert_eq!(site_url("joomla5"), "https://joomla5.dev.test");
    }
}
