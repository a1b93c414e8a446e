//! Error types for phpdev operations.
//!
//! This module defines [`PhpdevError`], the error type used by the lower
//! layers (scanners, readers, subprocess execution), and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Scanners and readers return `PhpdevError` so the cause is visible in logs
//! - The inventory and probe layers absorb every error into a placeholder
//!   value (empty list, empty string, diagnostic string, `NotRunning`)
//! - Only CLI output failures reach `main`

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for phpdev operations.
#[derive(Debug, Error)]
pub enum PhpdevError {
    /// A scan root does not exist or cannot be read.
    #[error("Directory unavailable: {path}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single server config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A subprocess could not be started.
    #[error("Failed to start {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process-table query exited with an error status.
    #[error("Process query failed: {command}")]
    ProcessQueryFailure { command: String },

    /// A subprocess did not finish within its time budget.
    #[error("Command timed out after {timeout:?}: {command}")]
    CommandTimedOut { command: String, timeout: Duration },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for phpdev operations.
pub type Result<T> = std::result::Result<T, PhpdevError>;
