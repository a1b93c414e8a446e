//! Configuration for phpdev.
//!
//! - Stack layout (paths, FPM port table, service roster) in [`layout`]
//! - `KEY=value` parsing in [`env_file`]
//! - Deployment settings from `~/.config/phpdev/config` in [`settings`]
//!
//! # Example
//!
//! ```
//! use phpdev::config::StackLayout;
//!
//! let layout = StackLayout::from_etc_dir("/opt/homebrew/etc");
//! assert!(layout.php_root.ends_with("php"));
//! ```

pub mod env_file;
pub mod layout;
pub mod settings;

pub use env_file::KeyValueFile;
pub use layout::{
    default_services, detect_etc_dir, detect_etc_dir_with, ServiceDef, StackLayout,
};
pub use settings::{
    default_settings_path, DeploymentSettings, MARIADB_BACKUP_KEY, ROOT_FOLDER_KEY,
    SITES_BACKUP_KEY,
};
