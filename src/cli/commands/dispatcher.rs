//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::{Cli, Commands, StatusArgs};
use crate::config::{default_settings_path, DeploymentSettings, StackLayout};
use crate::error::Result;
use crate::probe::{ProcessProbe, SystemProbe};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    layout: StackLayout,
    settings_path: Option<PathBuf>,
    timeout: Duration,
    probe: Box<dyn ProcessProbe>,
}

impl CommandDispatcher {
    /// Create a dispatcher probing the live system.
    pub fn new(layout: StackLayout) -> Self {
        Self {
            layout,
            settings_path: default_settings_path(),
            timeout: crate::shell::DEFAULT_TIMEOUT,
            probe: Box::new(SystemProbe::default()),
        }
    }

    /// Resolve layout, settings path, and probe timeout from global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut layout = match &cli.etc_dir {
            Some(etc_dir) => StackLayout::from_etc_dir(etc_dir),
            None => StackLayout::detect(),
        };
        if let Some(php_dir) = &cli.php_dir {
            layout = layout.with_php_root(php_dir);
        }
        if let Some(apache_dir) = &cli.apache_dir {
            layout = layout.with_apache_dir(Some(apache_dir.clone()));
        }
        if let Some(nginx_dir) = &cli.nginx_dir {
            layout = layout.with_nginx_dir(Some(nginx_dir.clone()));
        }
        tracing::debug!("Using etc directory {}", layout.etc_dir.display());

        let timeout = Duration::from_secs(cli.timeout);
        let mut dispatcher = Self::new(layout)
            .with_probe(SystemProbe::new(timeout))
            .with_timeout(timeout);
        if let Some(path) = &cli.config {
            dispatcher = dispatcher.with_settings_path(Some(path.clone()));
        }
        dispatcher
    }

    /// Replace the process probe.
    pub fn with_probe(mut self, probe: impl ProcessProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Replace the deployment settings location.
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    /// Set the time budget for external scripts.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the resolved layout.
    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    /// Get the deployment settings location, if any.
    pub fn settings_path(&self) -> Option<&std::path::Path> {
        self.settings_path.as_deref()
    }

    /// Get the probe timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load deployment settings. A missing file yields empty settings.
    pub fn settings(&self) -> DeploymentSettings {
        self.settings_path
            .as_deref()
            .map(DeploymentSettings::load)
            .unwrap_or_default()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = self.probe.as_ref();
        match &cli.command {
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(&self.layout, probe, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Sites(args)) => {
                let cmd = super::sites::SitesCommand::new(&self.layout, probe, args.clone())
                    .with_timeout(self.timeout);
                cmd.execute(ui)
            }
            Some(Commands::Php(args)) => {
                let cmd = super::php::PhpCommand::new(&self.layout, probe, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.layout,
                    self.settings_path.clone(),
                    self.settings(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to the full dashboard
                let cmd =
                    super::status::StatusCommand::new(&self.layout, probe, StatusArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
