//! Subprocess execution.

pub mod command;

pub use command::{describe, run, CommandOptions, CommandResult, DEFAULT_TIMEOUT};
