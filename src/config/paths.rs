//! Path expansion and well-known configuration locations.
//!
//! Paths in linux-wave may start with `~` and may reference environment
//! variables as `$NAME` or `${NAME}`:
//!
//! - `~` and `~/rest` expand to the current user's home directory
//! - `$NAME` / `${NAME}` expand to the variable's value
//! - An undefined variable expands to the empty string
//!
//! Home directory and variable lookup are passed in by [`expand_path_with`]
//! so the expansion rules can be exercised without touching the process
//! environment.

use crate::error::{Result, WaveError};
use regex::{Captures, Regex};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/linux-wave/config.yaml";

/// User configuration file, relative to the home directory.
pub const USER_CONFIG_REL_PATH: &str = ".config/linux-wave/config.yaml";

/// Matches `${NAME}` (group 1) or `$NAME` (group 2).
static ENV_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([^}]*)\}|([A-Za-z0-9_]+))").expect("ENV_REF must compile")
});

/// Candidate configuration files in merge order (later overrides earlier).
///
/// Paths are kept unexpanded; [`crate::config::ConfigLoader`] resolves them
/// when it runs so a missing home directory surfaces as a load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// System-wide config: /etc/linux-wave/config.yaml
    pub system: String,

    /// User config: ~/.config/linux-wave/config.yaml
    pub user: String,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            system: SYSTEM_CONFIG_PATH.to_string(),
            user: format!("~/{}", USER_CONFIG_REL_PATH),
        }
    }
}

impl ConfigPaths {
    /// Build paths from explicit locations (tests, alternate deployments).
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Expand `~` and environment variables using the real home directory and
/// process environment.
///
/// # Errors
///
/// Returns `PathResolution` if the path starts with `~` and the home
/// directory cannot be determined.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    expand_path_with(path, dirs::home_dir, |name| env::var(name).ok())
}

/// Expand `~` and environment variables with injected lookups.
///
/// `home_dir` is only consulted when the path needs it.
pub fn expand_path_with<H, E>(path: &str, home_dir: H, lookup: E) -> Result<PathBuf>
where
    H: FnOnce() -> Option<PathBuf>,
    E: Fn(&str) -> Option<String>,
{
    let with_home = match tilde_rest(path) {
        Some(rest) => {
            let home = home_dir().ok_or_else(|| WaveError::PathResolution {
                path: path.to_string(),
                message: "home directory could not be determined".to_string(),
            })?;
            join_home(&home, rest)
        }
        None => path.to_string(),
    };

    Ok(PathBuf::from(expand_env(&with_home, lookup)))
}

/// Replace `$NAME` and `${NAME}` references; unknown names become "".
pub fn expand_env<E>(input: &str, lookup: E) -> String
where
    E: Fn(&str) -> Option<String>,
{
    ENV_REF
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            lookup(name).unwrap_or_else(|| {
                tracing::debug!("Environment variable '{}' is not set, expanding to empty", name);
                String::new()
            })
        })
        .into_owned()
}

/// Returns the part after a leading `~` or `~/`, or None if the path is not
/// home-relative. `~user` forms are left alone.
fn tilde_rest(path: &str) -> Option<&str> {
    if path == "~" {
        return Some("");
    }
    path.strip_prefix("~/")
}

fn join_home(home: &Path, rest: &str) -> String {
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        home.to_string_lossy().into_owned()
    } else {
        home.join(rest).to_string_lossy().into_owned()
    }
}
