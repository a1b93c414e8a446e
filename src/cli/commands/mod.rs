//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which owns the
//! resolved [`StackLayout`](crate::config::StackLayout) and the process
//! probe, and routes CLI subcommands to their implementations.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod php;
pub mod sites;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
