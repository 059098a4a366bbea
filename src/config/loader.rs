//! Configuration file loading and layering.
//!
//! This module reads configuration files and runs the load pipeline:
//!
//! 1. Start from the built-in defaults
//! 2. Merge the system config (`/etc/linux-wave/config.yaml`) if it exists
//! 3. Merge the user config (`~/.config/linux-wave/config.yaml`) if it exists
//! 4. Validate the result
//!
//! A missing file is skipped. An unreadable or malformed file stops the
//! pipeline and no configuration is returned.

use crate::config::defaults::default_config;
use crate::config::merger::{merge_configs, overlay_value};
use crate::config::paths::{expand_path, ConfigPaths};
use crate::config::schema::{Config, LoggingSection};
use crate::config::validator::{validate_with, FileSystem, RealFileSystem};
use crate::error::{Result, WaveError};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A validated configuration together with the files it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// The merged, validated configuration
    pub config: Config,

    /// Files that were applied, in merge order
    pub sources: Vec<PathBuf>,
}

/// Runs the layered load against a set of candidate paths.
pub struct ConfigLoader {
    paths: ConfigPaths,
    fs: Box<dyn FileSystem>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(ConfigPaths::default())
    }
}

impl ConfigLoader {
    /// Create a loader for the given candidate paths using the real filesystem.
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            paths,
            fs: Box::new(RealFileSystem),
        }
    }

    /// Replace the filesystem used for existence checks.
    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Get the candidate paths.
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Get the filesystem used for existence checks.
    pub fn file_system(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Logging section from whichever files decode cleanly, without validation.
    ///
    /// Meant for configuring log output before the real load runs, so it
    /// never fails: unresolvable, missing or malformed files are skipped.
    /// With `explicit` set only that file is considered.
    pub fn logging_settings(&self, explicit: Option<&str>) -> LoggingSection {
        let candidates = match explicit {
            Some(path) => vec![path],
            None => vec![self.paths.system.as_str(), self.paths.user.as_str()],
        };

        let mut config = default_config();
        for raw in candidates {
            let Ok(path) = expand_path(raw) else {
                continue;
            };
            if !self.fs.exists(&path) {
                continue;
            }
            if let Ok(overlay) = load_config_file(&path, &Config::default()) {
                config = merge_configs(&config, &overlay);
            }
        }

        config.logging
    }

    /// Load defaults, then system and user overlays, then validate.
    ///
    /// # Errors
    ///
    /// Returns `PathResolution` if the user path cannot be expanded,
    /// `ConfigRead` / `ConfigParse` for the first bad overlay, and
    /// `ConfigValidation` if the merged result breaks any rule.
    pub fn load(&self) -> Result<Config> {
        self.load_layered().map(|loaded| loaded.config)
    }

    /// Like [`ConfigLoader::load`], but also reports which files were applied.
    pub fn load_layered(&self) -> Result<LoadedConfig> {
        let mut config = default_config();
        let mut sources = Vec::new();

        for (layer, raw) in [("system", &self.paths.system), ("user", &self.paths.user)] {
            let path = expand_path(raw)?;

            if !self.fs.exists(&path) {
                tracing::debug!("No {} config at {}, skipping", layer, path.display());
                continue;
            }

            tracing::debug!("Loading {} config from {}", layer, path.display());
            let overlay = load_config_file(&path, &Config::default())?;
            config = merge_configs(&config, &overlay);
            sources.push(path);
        }

        self.finish(config, sources)
    }

    /// Load defaults plus exactly one explicit file, then validate.
    ///
    /// The file is decoded directly over the defaults, so every key it sets
    /// (including `false` booleans and zero scalars) takes effect. A missing
    /// file is an error here.
    pub fn load_from_path(&self, path: &str) -> Result<LoadedConfig> {
        let path = expand_path(path)?;

        tracing::debug!("Loading config from {}", path.display());
        let config = load_config_file(&path, &default_config())?;

        self.finish(config, vec![path])
    }

    fn finish(&self, config: Config, sources: Vec<PathBuf>) -> Result<LoadedConfig> {
        if let Err(err) = validate_with(&config, self.fs.as_ref()) {
            tracing::warn!(
                "Configuration failed validation with {} error(s)",
                err.violations().len()
            );
            return Err(err);
        }

        tracing::info!("Configuration loaded from {} file(s)", sources.len());
        Ok(LoadedConfig { config, sources })
    }
}

/// Load configuration from the well-known system and user locations.
///
/// File not found is not an error; read, parse and validation errors are.
pub fn load() -> Result<Config> {
    ConfigLoader::default().load()
}

/// Load configuration from a specific file over the built-in defaults.
pub fn load_from_path(path: &str) -> Result<Config> {
    ConfigLoader::default()
        .load_from_path(path)
        .map(|loaded| loaded.config)
}

/// Read a config file and decode it over `dest`.
///
/// # Errors
///
/// Returns `ConfigRead` if the file cannot be read (including not found).
/// Returns `ConfigParse` if the YAML is invalid or has the wrong shape.
pub fn load_config_file(path: &Path, dest: &Config) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| WaveError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content, dest, path)
}

/// Decode YAML content over `dest`.
///
/// Keys present in the document replace the matching fields of `dest`;
/// absent keys and explicit nulls keep `dest`'s values.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `dest` - Values for keys the document does not set
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, dest: &Config, source_path: &Path) -> Result<Config> {
    let parse_error = |message: String| WaveError::ConfigParse {
        path: source_path.to_path_buf(),
        message,
    };

    let document: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    match document {
        Value::Null => Ok(dest.clone()),
        Value::Mapping(_) => {
            let base = serde_yaml::to_value(dest).map_err(|e| parse_error(e.to_string()))?;
            serde_yaml::from_value(overlay_value(&base, &document))
                .map_err(|e| parse_error(e.to_string()))
        }
        _ => Err(parse_error(
            "expected a mapping with service, logging, audio and security sections".to_string(),
        )),
    }
}
