//! Command-line interface for linux-wave.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigAction, ConfigArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
