//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML
//! file.

use crate::core::export::RateMode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BnglExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BnglExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Rate conversion mode (default or simulator)
    #[serde(default = "default_export_mode")]
    pub mode: String,

    /// Characteristic volume in um^3 (simulator mode only)
    #[serde(default = "default_characteristic_size")]
    pub volume_um3: f64,

    /// Characteristic area in um^2 (simulator mode only)
    #[serde(default = "default_characteristic_size")]
    pub area_um2: f64,

    /// Written as a comment at the top of the document
    #[serde(default)]
    pub model_name: Option<String>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        let mode = RateMode::from_str(&self.mode).map_err(|e| e.to_string())?;

        if mode == RateMode::Simulator {
            if !(self.volume_um3.is_finite() && self.volume_um3 > 0.0) {
                return Err(format!(
                    "export.volume_um3 must be a positive number in simulator mode, got {}",
                    self.volume_um3
                ));
            }
            if !(self.area_um2.is_finite() && self.area_um2 > 0.0) {
                return Err(format!(
                    "export.area_um2 must be a positive number in simulator mode, got {}",
                    self.area_um2
                ));
            }
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            mode: default_export_mode(),
            volume_um3: default_characteristic_size(),
            area_um2: default_characteristic_size(),
            model_name: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output file, stdout when unset
    #[serde(default)]
    pub path: Option<String>,

    /// Write `<path>.sha256` next to the output file
    #[serde(default)]
    pub write_checksum: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must be set when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_mode() -> String {
    "default".to_string()
}

fn default_characteristic_size() -> f64 {
    1.0
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
