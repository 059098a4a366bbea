//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, UserInterface, WaveTheme};

/// Terminal UI implementation. Errors go to stderr, everything else to stdout.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: WaveTheme,
}

impl TerminalUI {
    /// Create a new terminal UI with the given theme.
    pub fn new(theme: WaveTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.out, "{}", self.theme.format_header(title)).ok();
    }

    fn show_key_value(&mut self, key: &str, value: &str) {
        writeln!(self.out, "  {}", self.theme.format_key_value(key, value)).ok();
    }
}

/// Create the UI for this process.
///
/// Colors are used only when stdout is a terminal, `NO_COLOR` is unset and
/// `no_color` is false.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    let theme = if !no_color && should_use_colors() {
        WaveTheme::new()
    } else {
        WaveTheme::plain()
    };
    Box::new(TerminalUI::new(theme))
}
