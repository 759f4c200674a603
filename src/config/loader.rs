//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BnglExportConfig;
use crate::domain::errors::BnglError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "BNGL_EXPORT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BnglExportConfig
/// 4. Applies environment variable overrides (BNGL_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use bngl_export::config::loader::load_config;
///
/// let config = load_config("bngl-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BnglExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BnglError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BnglError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text, see [`load_config`]
pub fn load_config_str(contents: &str) -> Result<BnglExportConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: BnglExportConfig = toml::from_str(&contents)
        .map_err(|e| BnglError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        BnglError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads the configuration file if it exists, defaults otherwise
///
/// Environment overrides are applied in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<BnglExportConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = BnglExportConfig::default();
    apply_env_overrides(&mut config);
    config.validate().map_err(|e| {
        BnglError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged. Every line keeps its original line
/// ending, so the output has the same number of lines as the input.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BnglError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(BnglError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the BNGL_EXPORT_* prefix
///
/// Environment variables follow the pattern: BNGL_EXPORT_<SECTION>_<KEY>
/// For example: BNGL_EXPORT_EXPORT_MODE, BNGL_EXPORT_EXPORT_VOLUME_UM3
fn apply_env_overrides(config: &mut BnglExportConfig) {
    let var = |key: &str| std::env::var(format!("{ENV_PREFIX}{key}")).ok();

    if let Some(val) = var("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = var("EXPORT_MODE") {
        config.export.mode = val;
    }
    if let Some(val) = var("EXPORT_VOLUME_UM3") {
        if let Ok(volume) = val.parse() {
            config.export.volume_um3 = volume;
        }
    }
    if let Some(val) = var("EXPORT_AREA_UM2") {
        if let Ok(area) = val.parse() {
            config.export.area_um2 = area;
        }
    }
    if let Some(val) = var("EXPORT_MODEL_NAME") {
        config.export.model_name = Some(val);
    }

    if let Some(val) = var("OUTPUT_PATH") {
        config.output.path = Some(val);
    }
    if let Some(val) = var("OUTPUT_WRITE_CHECKSUM") {
        config.output.write_checksum = val.parse().unwrap_or(false);
    }

    if let Some(val) = var("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = var("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = var("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("BNGL_LOADER_TEST_VAR", "test_value");
        let input = "model_name = \"${BNGL_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "model_name = \"test_value\"");
        std::env::remove_var("BNGL_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("BNGL_LOADER_MISSING_VAR");
        let input = "model_name = \"${BNGL_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("BNGL_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("BNGL_LOADER_COMMENTED_VAR");
        let input = "# model_name = \"${BNGL_LOADER_COMMENTED_VAR}\"\nmode = \"default\"\n";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-bngl-export.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[export]
mode = "simulator"
volume_um3 = 2.5
area_um2 = 4.0
model_name = "test model"

[output]
write_checksum = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.export.mode, "simulator");
        assert_eq!(config.export.volume_um3, 2.5);
        assert_eq!(config.export.model_name.as_deref(), Some("test model"));
        assert!(config.output.write_checksum);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let toml_content = r#"
[export]
mode = "simulator"
volume_um3 = -3.0
"#;
        let err = load_config_str(toml_content).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("does-not-exist-bngl-export.toml").unwrap();
        assert_eq!(config.application.log_level, "info");
    }
}
