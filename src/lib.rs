//! linux-wave - layered configuration for the Linux Wave face-authentication suite.
//!
//! The authentication service, PAM helper, CLI and enrollment tool all read
//! the same configuration: built-in defaults, overlaid by
//! `/etc/linux-wave/config.yaml`, overlaid by
//! `~/.config/linux-wave/config.yaml`, then validated.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing subscriber setup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use linux_wave::config::{default_config, validate};
//!
//! let config = default_config();
//! validate(&config).unwrap();
//! assert_eq!(config.security.match_threshold, 0.85);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use error::{Result, WaveError};

/// Application name, used in paths and messages.
pub const APP_NAME: &str = "linux-wave";

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
