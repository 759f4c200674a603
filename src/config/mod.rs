//! Configuration management for bngl-export.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `BNGL_EXPORT_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bngl_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("bngl-export.toml")?;
//! println!("Rate mode: {}", config.export.mode);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! mode = "simulator"
//! volume_um3 = 2.5
//! area_um2 = 1.0
//! model_name = "${MODEL_NAME}"
//!
//! [output]
//! path = "model.bngl"
//! write_checksum = true
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, BnglExportConfig, ExportConfig, LoggingConfig, OutputConfig};
