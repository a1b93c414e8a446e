//! Process probe backed by the real process table.
//!
//! Name checks use `pgrep <name>`; PHP-FPM checks scan the command lines
//! printed by `ps`. Both run with a timeout so a wedged query reports the
//! service as not running instead of hanging the dashboard.

use std::time::Duration;

use super::ProcessProbe;
use crate::error::{PhpdevError, Result};
use crate::shell::{self, CommandOptions, DEFAULT_TIMEOUT};

/// `pgrep` exit code meaning "no process matched".
const PGREP_NO_MATCH: i32 = 1;

/// Queries the operating system's process table.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    options: CommandOptions,
    pgrep: String,
    ps: String,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl SystemProbe {
    /// Create a probe whose queries each get `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            options: CommandOptions::with_timeout(timeout),
            pgrep: "pgrep".to_string(),
            ps: "ps".to_string(),
        }
    }

    /// Use other programs in place of `pgrep` and `ps`.
    pub fn with_programs(mut self, pgrep: &str, ps: &str) -> Self {
        self.pgrep = pgrep.to_string();
        self.ps = ps.to_string();
        self
    }
}

impl ProcessProbe for SystemProbe {
    fn is_running(&self, name: &str) -> Result<bool> {
        let args = [name];
        let result = shell::run(&self.pgrep, &args, &self.options)?;
        match result.exit_code {
            Some(0) => Ok(!result.stdout.trim().is_empty()),
            Some(PGREP_NO_MATCH) => Ok(false),
            _ => Err(PhpdevError::ProcessQueryFailure {
                command: shell::describe(&self.pgrep, &args),
            }),
        }
    }

    fn command_lines(&self) -> Result<Vec<String>> {
        let args = ["-axo", "pid=,command="];
        let result = shell::run(&self.ps, &args, &self.options)?;
        if !result.success {
            return Err(PhpdevError::ProcessQueryFailure {
                command: shell::describe(&self.ps, &args),
            });
        }
        Ok(parse_ps_output(&result.stdout, std::process::id()))
    }
}

/// Parse `ps -o pid=,command=` output into command lines, skipping `own_pid`.
///
/// Our own command line mentions `phpdev` (and possibly a PHP path), so it
/// must not count as a PHP process.
pub fn parse_ps_output(output: &str, own_pid: u32) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let (pid, command) = line.trim_start().split_once(char::is_whitespace)?;
            let pid: u32 = pid.parse().ok()?;
            (pid != own_pid).then(|| command.trim().to_string())
        })
        .filter(|command| !command.is_empty())
        .collect()
}
