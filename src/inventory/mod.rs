//! Filesystem inventory of the local stack.
//!
//! - [`php_versions`] - installed PHP versions under the PHP root
//! - [`sites`] - site config files per web server
//! - [`fpm`] - PHP version of a site from its FPM port
//! - [`htaccess`] - `.htaccess` hardening check
//! - [`joomla`] - Joomla details from the companion `joomlainfo` script
//!
//! Everything here is read-only and best-effort: a missing directory is an
//! empty listing and an unreadable config is an empty version string.
//!
//! # Example
//!
//! ```
//! use phpdev::inventory::{extract_fpm_port, lookup_fpm_port, FpmLookup, FpmPortMap};
//!
//! let conf = "location ~ \\.php$ { proxy_pass http://127.0.0.1:9083; }";
//! assert_eq!(extract_fpm_port(conf), Some("9083"));
//!
//! let lookup = lookup_fpm_port(conf, &FpmPortMap::default());
//! assert!(matches!(lookup, FpmLookup::Mapped { ref version, .. } if version == "8.3"));
//! ```

pub mod fpm;
pub mod htaccess;
pub mod joomla;
pub mod php_versions;
pub mod sites;

pub use fpm::{extract_fpm_port, lookup_fpm_port, resolve_php_version, FpmLookup, FpmPortMap};
pub use htaccess::HtaccessState;
pub use joomla::{JoomlaInfo, JoomlaInspector, DEFAULT_JOOMLAINFO};
pub use php_versions::{installed_php_versions, is_version_label, list_php_versions};
pub use sites::{
    list_site_configs, list_user_sites, site_name_from_file, site_url, ServerKind, SiteConfig,
    RESERVED_SITE,
};
