//! Fixture process table for testing.
//!
//! `FixtureProbe` implements [`ProcessProbe`] over a fixed list of command
//! lines, so inventory code can be tested without the real process table.
//!
//! # Example
//!
//! ```
//! use phpdev::probe::{is_php_fpm_running, is_process_running, FixtureProbe, ServiceStatus};
//!
//! let probe = FixtureProbe::new()
//!     .with_process("nginx: master process /opt/homebrew/opt/nginx/bin/nginx")
//!     .with_process("php-fpm: master process (/opt/homebrew/etc/php/8.3/php-fpm.conf)");
//!
//! assert_eq!(is_process_running(&probe, "nginx"), ServiceStatus::Running);
//! assert_eq!(is_process_running(&probe, "mariadbd"), ServiceStatus::NotRunning);
//! assert_eq!(is_php_fpm_running(&probe, "8.3"), ServiceStatus::Running);
//! ```

use super::ProcessProbe;
use crate::error::{PhpdevError, Result};

/// Process probe answering from fixture command lines.
#[derive(Debug, Clone, Default)]
pub struct FixtureProbe {
    processes: Vec<String>,
    failing: bool,
}

impl FixtureProbe {
    /// An empty process table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe whose every query fails.
    pub fn failing() -> Self {
        Self {
            processes: Vec::new(),
            failing: true,
        }
    }

    /// Add a running process by its full command line.
    pub fn with_process(mut self, command_line: &str) -> Self {
        self.processes.push(command_line.to_string());
        self
    }

    fn check(&self, command: &str) -> Result<()> {
        if self.failing {
            Err(PhpdevError::ProcessQueryFailure {
                command: command.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Process name of a command line: the file name of its first word.
pub fn process_name(command_line: &str) -> &str {
    let first = command_line.split_whitespace().next().unwrap_or("");
    first.rsplit('/').next().unwrap_or(first)
}

impl ProcessProbe for FixtureProbe {
    fn is_running(&self, name: &str) -> Result<bool> {
        self.check(&format!("pgrep {}", name))?;
        Ok(self
            .processes
            .iter()
            .any(|line| process_name(line).contains(name)))
    }

    fn command_lines(&self) -> Result<Vec<String>> {
        self.check("ps")?;
        Ok(self.processes.clone())
    }
}
