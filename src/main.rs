//! Linux Wave CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use linux_wave::cli::{Cli, CommandDispatcher};
use linux_wave::config::{ConfigLoader, ConfigPaths};
use linux_wave::logging::{init_tracing, TracingSettings};
use linux_wave::ui::create_ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut paths = ConfigPaths::default();
    if let Some(system) = &cli.system_config {
        paths.system = system.clone();
    }

    // Only the logging section is read here; the command does the validated load
    let logging = ConfigLoader::new(paths.clone()).logging_settings(cli.config.as_deref());
    let rust_log = std::env::var("RUST_LOG").ok();
    init_tracing(&TracingSettings::resolve(
        rust_log.as_deref(),
        cli.debug,
        &logging,
    ));

    tracing::debug!("linuxwave starting with args: {:?}", cli);

    let mut ui = create_ui(cli.no_color);
    let dispatcher = CommandDispatcher::new(paths);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
