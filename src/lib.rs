//! phpdev - Status dashboard for a local Homebrew PHP development stack.
//!
//! phpdev answers "what is installed and what is running" on a macOS
//! machine serving local websites through Apache or NginX and PHP-FPM:
//! which PHP versions are installed, which websites are configured for each
//! server and which PHP version serves each one, and whether the web
//! servers, database, DNS resolver, mail catcher, and FPM pools are up.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Stack layout and deployment settings
//! - [`dashboard`] - Aggregation into a [`dashboard::DashboardView`]
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - PHP version, site config, and FPM port scanning
//! - [`probe`] - Process presence checks
//! - [`shell`] - Subprocess execution with a time budget
//! - [`ui`] - Terminal output, tables, and themes
//!
//! # Example
//!
//! ```
//! use phpdev::inventory::{lookup_fpm_port, FpmLookup, FpmPortMap};
//!
//! let config = "location ~ \\.php$ { fastcgi_pass 127.0.0.1:9083; }";
//! let lookup = lookup_fpm_port(config, &FpmPortMap::default());
//! assert_eq!(
//!     lookup,
//!     FpmLookup::Mapped {
//!         port: "9083".to_string(),
//!         version: "8.3".to_string(),
//!     }
//! );
//! ```
//!
//! For filesystem-backed inventories, see the integration tests.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod probe;
pub mod shell;
pub mod ui;

pub use error::{PhpdevError, Result};
