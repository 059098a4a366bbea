//! Config command implementation.
//!
//! The `linuxwave config` command loads, checks and describes configuration.

use crate::cli::args::{ConfigAction, ShowArgs};
use crate::config::{default_config, expand_path, ConfigLoader, LoadedConfig, SchemaGenerator};
use crate::error::{Result, WaveError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for configuration that cannot be read, parsed or validated.
const EXIT_LOAD_FAILED: i32 = 1;

/// Exit code for a configuration path that cannot be resolved.
const EXIT_PATH_UNRESOLVED: i32 = 2;

/// The config command implementation.
pub struct ConfigCommand {
    loader: ConfigLoader,
    config_path: Option<String>,
    action: ConfigAction,
}

impl ConfigCommand {
    /// Create a new config command.
    ///
    /// With `config_path` set, that file is loaded over the defaults
    /// instead of the system and user files.
    pub fn new(loader: ConfigLoader, config_path: Option<String>, action: ConfigAction) -> Self {
        Self {
            loader,
            config_path,
            action,
        }
    }

    fn load(&self) -> Result<LoadedConfig> {
        match &self.config_path {
            Some(path) => self.loader.load_from_path(path),
            None => self.loader.load_layered(),
        }
    }

    fn show(&self, args: &ShowArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match self.load() {
            Ok(loaded) => loaded,
            Err(e) => return report_load_error(e, ui),
        };

        // JSON has no comment syntax, so the source list is left out
        if args.json {
            let json = serde_json::to_string_pretty(&loaded.config)
                .map_err(|e| WaveError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if loaded.sources.is_empty() {
            ui.message("# built-in defaults");
        } else {
            for path in &loaded.sources {
                ui.message(&format!("# {}", path.display()));
            }
        }
        ui.message("");

        let rendered = if args.yaml {
            serde_yaml::to_string(&loaded.config).map_err(|e| WaveError::Other(e.into()))?
        } else {
            loaded.config.to_string()
        };
        ui.message(rendered.trim_end());

        Ok(CommandResult::success())
    }

    fn validate(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.load() {
            Ok(loaded) => {
                ui.success(&format!(
                    "Configuration is valid ({} file(s) applied)",
                    loaded.sources.len()
                ));
                Ok(CommandResult::success())
            }
            Err(e) => report_load_error(e, ui),
        }
    }

    fn paths(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Configuration files (later overrides earlier)");

        let paths = self.loader.paths();
        let mut candidates = vec![
            ("System", paths.system.as_str()),
            ("User", paths.user.as_str()),
        ];
        if let Some(explicit) = &self.config_path {
            ui.warning("--config is set; the system and user files are ignored");
            candidates = vec![("Explicit", explicit.as_str())];
        }

        for (label, raw) in candidates {
            let resolved = match expand_path(raw) {
                Ok(path) => path,
                Err(e) => {
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(EXIT_PATH_UNRESOLVED));
                }
            };
            let status = if self.loader.file_system().exists(&resolved) {
                "found"
            } else {
                "not found"
            };
            ui.show_key_value(label, &format!("{} ({})", resolved.display(), status));
        }

        Ok(CommandResult::success())
    }

    fn defaults(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let yaml =
            serde_yaml::to_string(&default_config()).map_err(|e| WaveError::Other(e.into()))?;
        ui.message(yaml.trim_end());
        Ok(CommandResult::success())
    }

    fn schema(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let json = serde_json::to_string_pretty(&schema).map_err(|e| WaveError::Other(e.into()))?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.action {
            ConfigAction::Show(args) => self.show(args, ui),
            ConfigAction::Validate => self.validate(ui),
            ConfigAction::Paths => self.paths(ui),
            ConfigAction::Defaults => self.defaults(ui),
            ConfigAction::Schema => self.schema(ui),
        }
    }
}

/// Print a load failure and choose the exit code for it.
fn report_load_error(err: WaveError, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    match err {
        WaveError::ConfigValidation { errors } => {
            ui.error(&format!(
                "Configuration is invalid ({} error(s)):",
                errors.len()
            ));
            for violation in &errors {
                ui.error(&format!("  {} [{}]", violation, violation.rule));
            }
            Ok(CommandResult::failure(EXIT_LOAD_FAILED))
        }
        WaveError::PathResolution { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(EXIT_PATH_UNRESOLVED))
        }
        WaveError::ConfigRead { .. } | WaveError::ConfigParse { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(EXIT_LOAD_FAILED))
        }
        other => Err(other),
    }
}
