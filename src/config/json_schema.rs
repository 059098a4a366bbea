//! JSON Schema generation for the linux-wave configuration file.
//!
//! Produces a Draft-07 schema so editors can autocomplete and check
//! `config.yaml`. Ranges and defaults mirror [`crate::config::validator`]
//! and [`crate::config::defaults`].

use crate::config::defaults::{
    DEFAULT_LOCKOUT_DURATION_SECS, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL,
    DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_AUTH_ATTEMPTS, DEFAULT_RETRY_ATTEMPTS,
    DEFAULT_SOCKET_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_VOLUME,
};
use crate::config::schema::{LogFormat, LogLevel};
use serde_json::{json, Value};

/// Generates JSON Schema for config.yaml.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Linux Wave Configuration",
            "description": concat!(
                "System (/etc/linux-wave/config.yaml) and ",
                "user (~/.config/linux-wave/config.yaml) configuration"
            ),
            "type": "object",
            "properties": {
                "service": self.service_schema(),
                "logging": self.logging_schema(),
                "audio": self.audio_schema(),
                "security": self.security_schema()
            }
        })
    }

    fn service_schema(&self) -> Value {
        json!({
            "type": "object",
            "description": "Authentication service settings",
            "properties": {
                "timeout": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 60,
                    "default": DEFAULT_TIMEOUT_SECS,
                    "description": "Seconds an authentication attempt may take"
                },
                "retry_attempts": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 10,
                    "default": DEFAULT_RETRY_ATTEMPTS,
                    "description": "Retries for a failed attempt"
                },
                "socket_path": {
                    "type": "string",
                    "pattern": "^/",
                    "default": DEFAULT_SOCKET_PATH,
                    "description": "Absolute path of the service's Unix socket"
                }
            }
        })
    }

    fn logging_schema(&self) -> Value {
        // Parsing is case-insensitive; the schema lists canonical spellings
        json!({
            "type": "object",
            "description": "Log verbosity and output format",
            "properties": {
                "level": {
                    "type": "string",
                    "enum": LogLevel::NAMES,
                    "default": DEFAULT_LOG_LEVEL
                },
                "format": {
                    "type": "string",
                    "enum": LogFormat::NAMES,
                    "default": DEFAULT_LOG_FORMAT
                }
            }
        })
    }

    fn audio_schema(&self) -> Value {
        json!({
            "type": "object",
            "description": "Audio feedback",
            "properties": {
                "enabled": {
                    "type": "boolean",
                    "default": true
                },
                "volume": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 100,
                    "default": DEFAULT_VOLUME
                },
                "custom_sound_success": {
                    "type": "string",
                    "description": "Sound file played on success; empty uses the built-in sound"
                },
                "custom_sound_failure": {
                    "type": "string",
                    "description": "Sound file played on failure; empty uses the built-in sound"
                }
            }
        })
    }

    fn security_schema(&self) -> Value {
        json!({
            "type": "object",
            "description": "Matching, liveness and lockout policy",
            "properties": {
                "liveness_required": {
                    "type": "boolean",
                    "default": true
                },
                "match_threshold": {
                    "type": "number",
                    "minimum": 0.0,
                    "maximum": 1.0,
                    "default": DEFAULT_MATCH_THRESHOLD,
                    "description": "Face match confidence cutoff; higher is stricter"
                },
                "max_auth_attempts": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 20,
                    "default": DEFAULT_MAX_AUTH_ATTEMPTS
                },
                "lockout_duration": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 3600,
                    "default": DEFAULT_LOCKOUT_DURATION_SECS,
                    "description": "Lockout length in seconds"
                }
            }
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
