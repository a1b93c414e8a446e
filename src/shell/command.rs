//! Subprocess execution with a time budget.
//!
//! Status probes and site inspection shell out to `pgrep`, `ps` and the
//! companion scripts. A stuck process query must not hang the whole
//! dashboard, so every call carries a timeout.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{PhpdevError, Result};

/// Default budget for a single subprocess.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of running a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with code 0.
    pub success: bool,
}

/// Options for program execution.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Kill the program and fail after this long (None = wait forever).
    pub timeout: Option<Duration>,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CommandOptions {
    /// Options with a specific timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Render a program and its arguments for logs and errors.
pub fn describe(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a program directly (no shell) and capture its output.
///
/// # Errors
///
/// - [`PhpdevError::SpawnFailed`] if the program cannot be started
/// - [`PhpdevError::CommandTimedOut`] if it outlives `options.timeout`
pub fn run(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command = describe(program, args);
    tracing::debug!("Running: {}", command);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| PhpdevError::SpawnFailed {
            command: command.clone(),
            source,
        })?;

    // Drain both pipes on their own threads so a chatty child can't block
    // on a full pipe while we poll for exit.
    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                stop(&mut child);
                return Err(e.into());
            }
        }
        if let Some(timeout) = options.timeout {
            if start.elapsed() >= timeout {
                stop(&mut child);
                tracing::debug!("Timed out after {:?}: {}", timeout, command);
                return Err(PhpdevError::CommandTimedOut { command, timeout });
            }
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration: start.elapsed(),
        success: status.success(),
    })
}

/// Kill and reap a child we are giving up on.
fn stop(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default()
}
