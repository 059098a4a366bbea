//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands them the configuration
//! locations to load from.

pub mod config;
pub mod dispatcher;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
