//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables hold ENV_MUTEX to avoid
//! interference between tests.

use bngl_export::config::{load_config, load_config_or_default};
use bngl_export::core::export::{ExportOptions, RateMode};
use bngl_export::domain::BnglError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("BNGL_EXPORT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("BNGL_EXPORT_EXPORT_MODE");
    std::env::remove_var("BNGL_EXPORT_EXPORT_VOLUME_UM3");
    std::env::remove_var("BNGL_EXPORT_EXPORT_AREA_UM2");
    std::env::remove_var("BNGL_EXPORT_EXPORT_MODEL_NAME");
    std::env::remove_var("BNGL_EXPORT_OUTPUT_WRITE_CHECKSUM");
    std::env::remove_var("TEST_BNGL_MODEL_NAME");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[export]
mode = "nfsim"
volume_um3 = 2.5
area_um2 = 0.5
model_name = "receptor binding"

[output]
path = "out/model.bngl"
write_checksum = true

[logging]
local_enabled = false
local_path = "/tmp/bngl-export"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.export.model_name.as_deref(), Some("receptor binding"));
    assert_eq!(config.output.path.as_deref(), Some("out/model.bngl"));
    assert!(config.output.write_checksum);
    assert_eq!(config.logging.local_rotation, "hourly");

    let options = ExportOptions::from_config(&config.export).unwrap();
    assert_eq!(options.mode, RateMode::Simulator);
    assert_eq!(options.volume_um3, 2.5);
    assert_eq!(options.area_um2, 0.5);
}

#[test]
fn test_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    let options = ExportOptions::from_config(&config.export).unwrap();
    assert_eq!(options, ExportOptions::default());
    assert!(config.output.path.is_none());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_BNGL_MODEL_NAME", "from environment");

    let file = write_config(
        r#"
# model_name = "${SOME_UNSET_VARIABLE_IN_A_COMMENT}"
[export]
model_name = "${TEST_BNGL_MODEL_NAME}"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.export.model_name.as_deref(), Some("from environment"));

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[export]\nmodel_name = \"${TEST_BNGL_MODEL_NAME}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, BnglError::Configuration(_)));
    assert!(err.to_string().contains("TEST_BNGL_MODEL_NAME"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("BNGL_EXPORT_EXPORT_MODE", "simulator");
    std::env::set_var("BNGL_EXPORT_EXPORT_VOLUME_UM3", "4.0");
    std::env::set_var("BNGL_EXPORT_OUTPUT_WRITE_CHECKSUM", "true");

    let file = write_config("[export]\nmode = \"default\"\nvolume_um3 = 1.0\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.export.mode, "simulator");
    assert_eq!(config.export.volume_um3, 4.0);
    assert!(config.output.write_checksum);

    cleanup_env_vars();
}

#[test]
fn test_env_override_can_invalidate_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("BNGL_EXPORT_EXPORT_MODE", "simulator");
    std::env::set_var("BNGL_EXPORT_EXPORT_AREA_UM2", "0");

    let err = load_config_or_default("no-such-bngl-export-config.toml").unwrap_err();
    assert!(err.to_string().contains("area_um2"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[export\nmode = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_invalid_mode_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[export]\nmode = \"ode\"\n");
    assert!(load_config(file.path()).is_err());
}
