//! Layered configuration for linux-wave.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - Built-in values in [`defaults`]
//! - Path expansion and well-known locations in [`paths`]
//! - File reading and the load pipeline in [`loader`]
//! - Field merging in [`merger`]
//! - Validation in [`validator`]
//! - Human-readable output in [`display`]
//!
//! # Example
//!
//! ```
//! use linux_wave::config::load_from_path;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yaml");
//! fs::write(&path, "service:\n  timeout: 20").unwrap();
//!
//! let config = load_from_path(path.to_str().unwrap()).unwrap();
//! assert_eq!(config.service.timeout, 20);
//! assert_eq!(config.security.max_auth_attempts, 3);
//! ```
//!
//! # Configuration File Locations
//!
//! [`load`] merges configuration in this order:
//! 1. Built-in defaults
//! 2. System config (`/etc/linux-wave/config.yaml`)
//! 3. User config (`~/.config/linux-wave/config.yaml`)

pub mod defaults;
pub mod display;
pub mod json_schema;
pub mod loader;
pub mod merger;
pub mod paths;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    AudioSection, Config, LogFormat, LogLevel, LoggingSection, SecuritySection, ServiceSection,
};

pub use defaults::default_config;

pub use display::NOT_SET;

pub use json_schema::SchemaGenerator;

// Loader re-exports
pub use loader::{
    load, load_config_file, load_from_path, parse_config, ConfigLoader, LoadedConfig,
};

// Merger re-exports
pub use merger::{merge_all, merge_configs};

// Path re-exports
pub use paths::{
    expand_env, expand_path, expand_path_with, ConfigPaths, SYSTEM_CONFIG_PATH,
    USER_CONFIG_REL_PATH,
};

// Validator re-exports
pub use validator::{
    validate, validate_config, validate_config_with, validate_with, FileSystem, RealFileSystem,
    ValidationError, ValidationRule,
};
