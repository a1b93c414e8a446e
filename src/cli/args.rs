//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::inventory::{ServerKind, DEFAULT_JOOMLAINFO};

/// phpdev - Status dashboard for a local Homebrew PHP stack.
#[derive(Debug, Parser)]
#[command(name = "phpdev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to deployment settings (overrides ~/.config/phpdev/config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Homebrew etc directory (overrides detection)
    #[arg(long, global = true, env = "PHPDEV_ETC_DIR", value_name = "DIR")]
    pub etc_dir: Option<PathBuf>,

    /// PHP versions directory (defaults to <etc>/php)
    #[arg(long, global = true, value_name = "DIR")]
    pub php_dir: Option<PathBuf>,

    /// Apache vhost directory (defaults to <etc>/httpd/vhosts)
    #[arg(long, global = true, value_name = "DIR")]
    pub apache_dir: Option<PathBuf>,

    /// NginX server directory (defaults to <etc>/nginx/servers)
    #[arg(long, global = true, value_name = "DIR")]
    pub nginx_dir: Option<PathBuf>,

    /// Time budget for each process probe, in seconds
    #[arg(
        long,
        global = true,
        default_value_t = 3,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the full dashboard (default if no command specified)
    Status(StatusArgs),

    /// List configured websites and their PHP versions
    Sites(SitesArgs),

    /// List installed PHP versions and their FPM status
    Php(PhpArgs),

    /// Show resolved layout and deployment settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `sites` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SitesArgs {
    /// Only list sites of one server (apache or nginx)
    #[arg(long, value_name = "SERVER")]
    pub server: Option<ServerKind>,

    /// Include the reserved localhost site
    #[arg(long)]
    pub all: bool,

    /// Query Joomla details for each site
    #[arg(long)]
    pub joomla: bool,

    /// Path to the joomlainfo script
    #[arg(long, default_value = DEFAULT_JOOMLAINFO, value_name = "PATH")]
    pub joomlainfo: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for SitesArgs {
    fn default() -> Self {
        Self {
            server: None,
            all: false,
            joomla: false,
            joomlainfo: PathBuf::from(DEFAULT_JOOMLAINFO),
            json: false,
        }
    }
}

/// Arguments for the `php` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PhpArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
