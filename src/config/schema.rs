//! Configuration schema definitions for linux-wave.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.
//!
//! Every section derives `Default` as its *zero value* (empty strings, `0`,
//! `0.0`, `false`). Overlay files are decoded over that zero value, and the
//! merger treats a zero scalar as "not set". The built-in baseline lives in
//! [`crate::config::defaults`].
//!
//! # Example
//!
//! ```yaml
//! service:
//!   timeout: 10
//!   retry_attempts: 3
//!   socket_path: /run/linux-wave/auth.sock
//! logging:
//!   level: INFO
//!   format: text
//! audio:
//!   enabled: true
//!   volume: 50
//! security:
//!   liveness_required: true
//!   match_threshold: 0.85
//!   max_auth_attempts: 3
//!   lockout_duration: 300
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration structure for config.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Authentication service settings
    pub service: ServiceSection,

    /// Log verbosity and output format
    pub logging: LoggingSection,

    /// Audio feedback settings
    pub audio: AudioSection,

    /// Matching, liveness and lockout policy
    pub security: SecuritySection,
}

/// Service-level settings for authentication operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Seconds an authentication attempt may take (1-60)
    pub timeout: i64,

    /// Maximum number of retries for a failed attempt (1-10)
    pub retry_attempts: i64,

    /// Unix domain socket used for IPC (must be absolute)
    pub socket_path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// DEBUG, INFO, WARN or ERROR (case-insensitive)
    pub level: String,

    /// json or text (case-insensitive)
    pub format: String,
}

/// Audio feedback configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSection {
    /// Play sounds on authentication events
    pub enabled: bool,

    /// Volume percentage (0-100)
    pub volume: i64,

    /// Custom success sound; empty uses the built-in sound
    pub custom_sound_success: String,

    /// Custom failure sound; empty uses the built-in sound
    pub custom_sound_failure: String,
}

/// Security policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    /// Require a liveness check (blink/movement) before matching
    pub liveness_required: bool,

    /// Face match confidence cutoff (0.0-1.0, higher is stricter)
    pub match_threshold: f64,

    /// Attempts allowed before lockout (1-20)
    pub max_auth_attempts: i64,

    /// Lockout length in seconds once attempts are exhausted (0-3600)
    pub lockout_duration: i64,
}

/// Log verbosity accepted in `logging.level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Canonical spellings, in increasing severity.
    pub const NAMES: [&'static str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];

    /// Lowercase directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_directive().to_uppercase())
    }
}

/// Log output format accepted in `logging.format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured, one JSON object per line
    Json,
    /// Human-readable
    Text,
}

impl LogFormat {
    pub const NAMES: [&'static str; 2] = ["json", "text"];
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}
