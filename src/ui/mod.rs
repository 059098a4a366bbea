//! Terminal output for the `linuxwave` CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled output to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use linux_wave::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Configuration is valid");
//! assert!(ui.has_success("valid"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, WaveTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message (stderr for terminal output).
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` line.
    fn show_key_value(&mut self, key: &str, value: &str);
}
