//! Validate config command implementation

use super::{EXIT_INPUT_ERROR, EXIT_OK};
use crate::config::load_config;
use crate::core::export::{f_to_str, ExportOptions};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        let options = match ExportOptions::from_config(&config.export) {
            Ok(o) => o,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };
        let rates = options.rate_conversion();

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Rate Mode: {}", options.mode);
        println!("  Rate Conversion (volume): {}", f_to_str(rates.rate_conv_volume));
        println!("  Rate Conversion (surface): {}", f_to_str(rates.rate_conv_thickness));
        println!(
            "  Model Name: {}",
            config.export.model_name.as_deref().unwrap_or("(none)")
        );
        println!(
            "  Output: {}",
            config.output.path.as_deref().unwrap_or("stdout")
        );
        println!("  Write Checksum: {}", config.output.write_checksum);
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(EXIT_OK)
    }
}
