//! Error types for linux-wave operations.
//!
//! This module defines [`WaveError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Loading stops at the first fatal error and reports the offending path
//! - Validation never stops early; every violation travels in one error
//! - Use `anyhow::Error` (via `WaveError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::config::validator::ValidationError;

/// Core error type for linux-wave operations.
#[derive(Debug, Error)]
pub enum WaveError {
    /// A path could not be expanded (usually an undeterminable home directory).
    #[error("Failed to resolve path {path}: {message}")]
    PathResolution { path: String, message: String },

    /// A configuration file exists but could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file is not a well-formed document of the expected shape.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// One or more configuration values violate their constraints.
    #[error("Invalid configuration: {}", join_messages(.errors))]
    ConfigValidation { errors: Vec<ValidationError> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveError {
    /// Validation violations carried by this error, if any.
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::ConfigValidation { errors } => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for linux-wave operations.
pub type Result<T> = std::result::Result<T, WaveError>;
