//! Tracing subscriber setup for the `linuxwave` binary.
//!
//! The log filter is chosen in this order:
//! 1. `RUST_LOG` environment variable (if set)
//! 2. `--debug` flag sets level to DEBUG
//! 3. `logging.level` from the loaded configuration
//!
//! `logging.format: json` switches the output to one JSON object per line.
//! Output goes to stderr so command output on stdout stays machine-readable.

use crate::config::{LogFormat, LogLevel, LoggingSection};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CRATE_TARGET: &str = "linux_wave";

/// Resolved subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// `EnvFilter` directive string
    pub filter: String,

    /// Output format
    pub format: LogFormat,
}

impl TracingSettings {
    /// Resolve settings from `RUST_LOG`, the debug flag and the logging section.
    ///
    /// Unknown level or format strings fall back to INFO and text.
    pub fn resolve(rust_log: Option<&str>, debug: bool, logging: &LoggingSection) -> Self {
        let filter = match rust_log.filter(|s| !s.trim().is_empty()) {
            Some(directives) => directives.to_string(),
            None if debug => format!("{}={}", CRATE_TARGET, LogLevel::Debug.as_directive()),
            None => {
                let level = logging.level.parse().unwrap_or(LogLevel::Info);
                format!("{}={}", CRATE_TARGET, level.as_directive())
            }
        };

        let format = logging.format.parse().unwrap_or(LogFormat::Text);

        Self { filter, format }
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(settings: &TracingSettings) {
    let filter = EnvFilter::try_new(&settings.filter)
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", CRATE_TARGET)));

    match settings.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(level: &str, format: &str) -> LoggingSection {
        LoggingSection {
            level: level.to_string(),
            format: format.to_string(),
        }
    }

    #[test]
    fn rust_log_takes_precedence() {
        let settings = TracingSettings::resolve(Some("trace"), true, &section("ERROR", "text"));
        assert_eq!(settings.filter, "trace");
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let settings = TracingSettings::resolve(Some("  "), false, &section("WARN", "text"));
        assert_eq!(settings.filter, "linux_wave=warn");
    }

    #[test]
    fn debug_flag_overrides_config_level() {
        let settings = TracingSettings::resolve(None, true, &section("ERROR", "text"));
        assert_eq!(settings.filter, "linux_wave=debug");
    }

    #[test]
    fn config_level_is_case_insensitive() {
        let settings = TracingSettings::resolve(None, false, &section("error", "text"));
        assert_eq!(settings.filter, "linux_wave=error");
    }

    #[test]
    fn unknown_values_fall_back() {
        let settings = TracingSettings::resolve(None, false, &section("", "xml"));
        assert_eq!(settings.filter, "linux_wave=info");
        assert_eq!(settings.format, LogFormat::Text);
    }

    #[test]
    fn json_format_selected() {
        let settings = TracingSettings::resolve(None, false, &section("INFO", "JSON"));
        assert_eq!(settings.format, LogFormat::Json);
    }
}
