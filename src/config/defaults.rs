//! Built-in baseline configuration.
//!
//! These values apply when no configuration file exists and form the base
//! that overlays are merged onto. They must always pass validation.

use crate::config::schema::{AudioSection, Config, LoggingSection, SecuritySection, ServiceSection};

pub const DEFAULT_TIMEOUT_SECS: i64 = 10;
pub const DEFAULT_RETRY_ATTEMPTS: i64 = 3;
pub const DEFAULT_SOCKET_PATH: &str = "/run/linux-wave/auth.sock";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_LOG_FORMAT: &str = "text";
pub const DEFAULT_VOLUME: i64 = 50;
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.85;
pub const DEFAULT_MAX_AUTH_ATTEMPTS: i64 = 3;
pub const DEFAULT_LOCKOUT_DURATION_SECS: i64 = 300;

/// Returns the built-in configuration.
pub fn default_config() -> Config {
    Config {
        service: ServiceSection {
            timeout: DEFAULT_TIMEOUT_SECS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            socket_path: DEFAULT_SOCKET_PATH.to_string(),
        },
        logging: LoggingSection {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: DEFAULT_LOG_FORMAT.to_string(),
        },
        audio: AudioSection {
            enabled: true,
            volume: DEFAULT_VOLUME,
            // Empty selects the embedded sounds
            custom_sound_success: String::new(),
            custom_sound_failure: String::new(),
        },
        security: SecuritySection {
            liveness_required: true,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            max_auth_attempts: DEFAULT_MAX_AUTH_ATTEMPTS,
            lockout_duration: DEFAULT_LOCKOUT_DURATION_SECS,
        },
    }
}
