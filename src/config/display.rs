//! Human-readable rendering of a configuration.

use crate::config::schema::{AudioSection, Config, LoggingSection, SecuritySection, ServiceSection};
use std::fmt;

/// Shown in place of an empty custom sound path.
pub const NOT_SET: &str = "<not set>";

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        NOT_SET
    } else {
        path
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config{{")?;
        writeln!(f, "  Service: {}", self.service)?;
        writeln!(f, "  Logging: {}", self.logging)?;
        writeln!(f, "  Audio: {}", self.audio)?;
        writeln!(f, "  Security: {}", self.security)?;
        write!(f, "}}")
    }
}

impl fmt::Display for ServiceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Timeout: {}s, RetryAttempts: {}, SocketPath: {}}}",
            self.timeout, self.retry_attempts, self.socket_path
        )
    }
}

impl fmt::Display for LoggingSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Level: {}, Format: {}}}", self.level, self.format)
    }
}

impl fmt::Display for AudioSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Enabled: {}, Volume: {}, CustomSuccess: {}, CustomFailure: {}}}",
            self.enabled,
            self.volume,
            display_path(&self.custom_sound_success),
            display_path(&self.custom_sound_failure)
        )
    }
}

impl fmt::Display for SecuritySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            concat!(
                "{{LivenessRequired: {}, MatchThreshold: {}, ",
                "MaxAuthAttempts: {}, LockoutDuration: {}s}}"
            ),
            self.liveness_required,
            self.match_threshold,
            self.max_auth_attempts,
            self.lockout_duration
        )
    }
}
