//! Integration tests for the `linuxwave` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Command with HOME and the system config location both inside `home`,
/// and no inherited overrides.
fn linuxwave(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("linuxwave"));
    cmd.env("HOME", home.path())
        .env("LINUXWAVE_SYSTEM_CONFIG", system_config_path(home))
        .env_remove("LINUXWAVE_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn system_config_path(home: &TempDir) -> PathBuf {
    home.path().join("system.yaml")
}

fn write_user_config(home: &TempDir, content: &str) -> PathBuf {
    let dir = home.path().join(".config/linux-wave");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.yaml");
    fs::write(&path, content).unwrap();
    path
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("face authentication"));
    Ok(())
}

#[test]
fn cli_shows_version_flag() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn version_command_prints_banner() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Linux Wave CLI v0.1.0"));
    Ok(())
}

#[test]
fn missing_subcommand_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home).assert().failure().code(2);
    Ok(())
}

#[test]
fn config_show_applies_user_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let path = write_user_config(
        &home,
        "audio:\n  enabled: true\n  volume: 75\nsecurity:\n  liveness_required: true\n",
    );

    linuxwave(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# {}", path.display())))
        .stdout(predicate::str::contains("Volume: 75"))
        .stdout(predicate::str::contains("Timeout: 10s"));
    Ok(())
}

#[test]
fn config_show_json_with_explicit_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let path = write_file(&home, "wave.yaml", "service:\n  retry_attempts: 9\n");

    let output = linuxwave(&home)
        .args(["config", "show", "--json", "--config"])
        .arg(&path)
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["service"]["retry_attempts"], 9);
    assert_eq!(value["audio"]["enabled"], true);
    Ok(())
}

#[test]
fn config_show_json_stdout_is_only_json() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    let output = linuxwave(&home).args(["config", "show", "--json"]).output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["service"]["timeout"], 10);

    write_user_config(&home, "service:\n  timeout: 40\n");
    let output = linuxwave(&home).args(["config", "show", "--json"]).output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["service"]["timeout"], 40);
    Ok(())
}

#[test]
fn config_show_applies_system_then_user() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    fs::write(
        system_config_path(&home),
        "audio:\n  enabled: true\n  volume: 20\n\
         security:\n  liveness_required: true\n  lockout_duration: 90\n",
    )?;
    write_user_config(
        &home,
        "audio:\n  enabled: true\n  volume: 60\nsecurity:\n  liveness_required: true\n",
    );

    linuxwave(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("system.yaml"))
        .stdout(predicate::str::contains("Volume: 60"))
        .stdout(predicate::str::contains("LockoutDuration: 90s"));
    Ok(())
}

#[test]
fn config_file_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let path = write_file(&home, "wave.yaml", "logging:\n  format: json\n");

    linuxwave(&home)
        .env("LINUXWAVE_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format: json"));
    Ok(())
}

#[test]
fn config_validate_succeeds_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
    Ok(())
}

#[test]
fn config_validate_lists_every_violation() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let path = write_file(
        &home,
        "wave.yaml",
        "service:\n  timeout: 0\naudio:\n  volume: 150\n",
    );

    linuxwave(&home)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("service.timeout"))
        .stderr(predicate::str::contains("audio.volume"));
    Ok(())
}

#[test]
fn config_validate_reports_malformed_user_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    write_user_config(&home, "service: [\n");

    linuxwave(&home)
        .args(["config", "validate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn config_validate_missing_explicit_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let missing = home.path().join("missing.yaml");

    linuxwave(&home)
        .args(["config", "validate", "--config"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.yaml"));
    Ok(())
}

#[test]
fn config_validate_names_missing_sound() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let path = write_file(
        &home,
        "wave.yaml",
        "audio:\n  custom_sound_success: /nonexistent/path/ok.wav\n",
    );

    linuxwave(&home)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/path/ok.wav"));
    Ok(())
}

#[test]
fn config_paths_resolves_home() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let expected = home.path().join(".config/linux-wave/config.yaml");

    linuxwave(&home)
        .args(["config", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{} (not found)",
            system_config_path(&home).display()
        )))
        .stdout(predicate::str::contains(format!(
            "{} (not found)",
            expected.display()
        )));
    Ok(())
}

#[test]
fn config_defaults_prints_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home)
        .args(["config", "defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("socket_path: /run/linux-wave/auth.sock"))
        .stdout(predicate::str::contains("match_threshold: 0.85"));
    Ok(())
}

#[test]
fn config_schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    linuxwave(&home)
        .args(["config", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draft-07"))
        .stdout(predicate::str::contains("max_auth_attempts"));
    Ok(())
}
