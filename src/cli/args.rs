//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};

/// Linux Wave - face authentication command-line tool.
#[derive(Debug, Parser)]
#[command(name = "linuxwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Load this file over the built-in defaults instead of the system and user files
    #[arg(short, long, global = true, env = "LINUXWAVE_CONFIG")]
    pub config: Option<String>,

    /// Replace the system config location (/etc/linux-wave/config.yaml)
    #[arg(long, global = true, hide = true, env = "LINUXWAVE_SYSTEM_CONFIG")]
    pub system_config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect and check configuration
    Config(ConfigArgs),

    /// Show version information
    Version,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Actions of the `config` command.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Show the loaded configuration
    Show(ShowArgs),

    /// Load the configuration and report every validation error
    Validate,

    /// Show where configuration files are looked up
    Paths,

    /// Print the built-in defaults as YAML
    Defaults,

    /// Print a JSON Schema for the configuration file
    Schema,
}

/// Arguments for `config show`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}
