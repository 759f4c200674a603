//! Init command implementation
//!
//! Writes a commented sample configuration file.

use super::{EXIT_FATAL, EXIT_INPUT_ERROR, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "bngl-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_INPUT_ERROR);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!(
                    "  2. Validate configuration: bngl-export -c {} validate-config",
                    self.output
                );
                println!("  3. Run export: bngl-export export --model model.json");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with every option and its default
    fn sample_config() -> &'static str {
        r#"# bngl-export configuration
#
# Values may reference environment variables with ${VAR_NAME}.
# Any value can also be overridden with BNGL_EXPORT_<SECTION>_<KEY>,
# for example BNGL_EXPORT_EXPORT_MODE=simulator.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[export]
# Rate conversion mode
# - default: rates for the deterministic network generator
# - simulator: rates for a particle-based simulator; needs the
#   characteristic volume and area below
mode = "default"

# Characteristic volume in um^3 (simulator mode)
volume_um3 = 1.0

# Characteristic area in um^2 (simulator mode)
area_um2 = 1.0

# Optional comment written at the top of the document
# model_name = "my model"

[output]
# Output file, stdout when unset
# path = "model.bngl"

# Write <path>.sha256 next to the output file
write_checksum = false

[logging]
# JSON log files with rotation (daily or hourly)
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
