//! Configuration validation rules.
//!
//! This module validates a fully merged configuration:
//! - Service: timeout and retry ranges, absolute socket path
//! - Logging: level and format drawn from their fixed sets
//! - Audio: volume range, custom sound files exist on disk
//! - Security: threshold, attempt and lockout ranges
//!
//! Every rule runs on every call so that an operator can fix all problems
//! in one pass. File existence goes through [`FileSystem`] so tests can
//! supply a fake.

use crate::config::schema::{Config, LogFormat, LogLevel};
use crate::error::{Result, WaveError};
use std::fmt;
use std::path::Path;

/// Existence checks needed by validation.
pub trait FileSystem {
    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Which constraint a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Numeric value outside its allowed range
    OutOfRange,
    /// Required value is empty
    Empty,
    /// Path must be absolute
    NotAbsolute,
    /// Value is not one of the accepted names
    UnknownValue,
    /// Referenced file does not exist
    FileNotFound,
}

impl ValidationRule {
    /// Stable identifier for display and machine output.
    pub fn id(self) -> &'static str {
        match self {
            Self::OutOfRange => "out-of-range",
            Self::Empty => "empty",
            Self::NotAbsolute => "not-absolute",
            Self::UnknownValue => "unknown-value",
            Self::FileNotFound => "file-not-found",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Validation error with context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Dotted key of the offending field, e.g. `service.timeout`
    pub field: String,
    /// Constraint that failed
    pub rule: ValidationRule,
    /// Observed value, rendered as text
    pub value: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, rule: ValidationRule, value: impl ToString, message: String) -> Self {
        Self {
            field: field.to_string(),
            rule,
            value: value.to_string(),
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration against the real filesystem and return all errors.
pub fn validate_config(config: &Config) -> Vec<ValidationError> {
    validate_config_with(config, &RealFileSystem)
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config_with(config: &Config, fs: &dyn FileSystem) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_service(config));
    errors.extend(validate_logging(config));
    errors.extend(validate_audio(config, fs));
    errors.extend(validate_security(config));

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidation` carrying every violation if any rule fails.
pub fn validate(config: &Config) -> Result<()> {
    validate_with(config, &RealFileSystem)
}

/// [`validate`] with an explicit filesystem.
pub fn validate_with(config: &Config, fs: &dyn FileSystem) -> Result<()> {
    let errors = validate_config_with(config, fs);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(WaveError::ConfigValidation { errors })
    }
}

fn validate_service(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let service = &config.service;

    if !(1..=60).contains(&service.timeout) {
        errors.push(ValidationError::new(
            "service.timeout",
            ValidationRule::OutOfRange,
            service.timeout,
            format!(
                "timeout must be between 1 and 60 seconds (got {})",
                service.timeout
            ),
        ));
    }

    if !(1..=10).contains(&service.retry_attempts) {
        errors.push(ValidationError::new(
            "service.retry_attempts",
            ValidationRule::OutOfRange,
            service.retry_attempts,
            format!(
                "retry_attempts must be between 1 and 10 (got {})",
                service.retry_attempts
            ),
        ));
    }

    if service.socket_path.is_empty() {
        errors.push(ValidationError::new(
            "service.socket_path",
            ValidationRule::Empty,
            "",
            "socket_path must not be empty".to_string(),
        ));
    } else if !Path::new(&service.socket_path).is_absolute() {
        errors.push(ValidationError::new(
            "service.socket_path",
            ValidationRule::NotAbsolute,
            &service.socket_path,
            format!(
                "socket_path must be an absolute path (got '{}')",
                service.socket_path
            ),
        ));
    }

    errors
}

fn validate_logging(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let logging = &config.logging;

    if logging.level.parse::<LogLevel>().is_err() {
        errors.push(ValidationError::new(
            "logging.level",
            ValidationRule::UnknownValue,
            &logging.level,
            format!(
                "level must be one of {} (got '{}')",
                LogLevel::NAMES.join(", "),
                logging.level
            ),
        ));
    }

    if logging.format.parse::<LogFormat>().is_err() {
        errors.push(ValidationError::new(
            "logging.format",
            ValidationRule::UnknownValue,
            &logging.format,
            format!(
                "format must be one of {} (got '{}')",
                LogFormat::NAMES.join(", "),
                logging.format
            ),
        ));
    }

    errors
}

fn validate_audio(config: &Config, fs: &dyn FileSystem) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let audio = &config.audio;

    if !(0..=100).contains(&audio.volume) {
        errors.push(ValidationError::new(
            "audio.volume",
            ValidationRule::OutOfRange,
            audio.volume,
            format!("volume must be between 0 and 100 (got {})", audio.volume),
        ));
    }

    let sounds = [
        ("audio.custom_sound_success", "custom_sound_success", &audio.custom_sound_success),
        ("audio.custom_sound_failure", "custom_sound_failure", &audio.custom_sound_failure),
    ];
    for (field, key, path) in sounds {
        // Empty selects the built-in sound
        if !path.is_empty() && !fs.exists(Path::new(path)) {
            errors.push(ValidationError::new(
                field,
                ValidationRule::FileNotFound,
                path,
                format!("{} file not found: {}", key, path),
            ));
        }
    }

    errors
}

fn validate_security(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let security = &config.security;

    // NaN fails the range check as well
    if !(0.0..=1.0).contains(&security.match_threshold) {
        errors.push(ValidationError::new(
            "security.match_threshold",
            ValidationRule::OutOfRange,
            security.match_threshold,
            format!(
                "match_threshold must be between 0.0 and 1.0 (got {})",
                security.match_threshold
            ),
        ));
    }

    if !(1..=20).contains(&security.max_auth_attempts) {
        errors.push(ValidationError::new(
            "security.max_auth_attempts",
            ValidationRule::OutOfRange,
            security.max_auth_attempts,
            format!(
                "max_auth_attempts must be between 1 and 20 (got {})",
                security.max_auth_attempts
            ),
        ));
    }

    if !(0..=3600).contains(&security.lockout_duration) {
        errors.push(ValidationError::new(
            "security.lockout_duration",
            ValidationRule::OutOfRange,
            security.lockout_duration,
            format!(
                "lockout_duration must be between 0 and 3600 seconds (got {})",
                security.lockout_duration
            ),
        ));
    }

    errors
}
