//! Export command implementation
//!
//! Loads a model snapshot, exports it as BNGL and writes the document to a
//! file or to stdout. Status messages go to stderr.

use super::{EXIT_INPUT_ERROR, EXIT_OK, EXIT_PARTIAL};
use crate::config::{load_config_or_default, BnglExportConfig};
use crate::core::export::{BnglExporter, ExportOptions, ExportSummary};
use crate::core::verification::document_checksum;
use crate::domain::ModelSnapshot;
use anyhow::Context;
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Model snapshot (JSON) to export
    #[arg(short, long)]
    pub model: String,

    /// Output BNGL file (stdout when neither this nor output.path is set)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override rate conversion mode (default or simulator)
    #[arg(long)]
    pub mode: Option<String>,

    /// Override characteristic volume in um^3
    #[arg(long)]
    pub volume: Option<f64>,

    /// Override characteristic area in um^2
    #[arg(long)]
    pub area: Option<f64>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(model = %self.model, "Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_INPUT_ERROR);
        }

        let options = match ExportOptions::from_config(&config.export) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Invalid export settings: {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        let model = match ModelSnapshot::from_json_file(&self.model) {
            Ok(m) => m,
            Err(e) => {
                tracing::error!(error = %e, model = %self.model, "Failed to load model");
                eprintln!("Failed to load model: {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        let outcome = match BnglExporter::new(&model).export_sections(&options) {
            Ok(o) => o,
            Err(e) if e.is_input_fault() => {
                eprintln!("Export failed: {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
            Err(e) => return Err(e).context("Export failed"),
        };

        let document = outcome.document(config.export.model_name.as_deref());
        let checksum = document_checksum(&document);

        match config.output.path.as_deref() {
            Some(path) => {
                write_document(Path::new(path), &document)?;
                if config.output.write_checksum {
                    let checksum_path = format!("{path}.sha256");
                    fs::write(&checksum_path, format!("{checksum}\n"))
                        .with_context(|| format!("Failed to write {checksum_path}"))?;
                }
                eprintln!("Wrote {path}");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(document.as_bytes())
                    .context("Failed to write document to stdout")?;
                stdout.flush()?;
            }
        }

        print_summary(&outcome.summary, &checksum);

        if outcome.summary.is_successful() {
            Ok(EXIT_OK)
        } else {
            eprintln!("{}", outcome.summary.error_text());
            Ok(EXIT_PARTIAL)
        }
    }

    fn apply_overrides(&self, config: &mut BnglExportConfig) {
        if let Some(mode) = &self.mode {
            tracing::info!(mode = %mode, "Overriding rate mode from CLI");
            config.export.mode = mode.clone();
        }
        if let Some(volume) = self.volume {
            config.export.volume_um3 = volume;
        }
        if let Some(area) = self.area {
            config.export.area_um2 = area;
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
    }
}

fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    fs::write(path, document).with_context(|| format!("Failed to write {}", path.display()))
}

fn print_summary(summary: &ExportSummary, checksum: &str) {
    eprintln!();
    eprintln!("Export Summary:");
    eprintln!("  Molecule types: {}", summary.molecule_types_exported);
    eprintln!("  Compartments: {}", summary.compartments_exported);
    eprintln!("  Reaction rules: {}", summary.rules_exported);
    eprintln!("  Skipped rules: {}", summary.rules_skipped);
    eprintln!("  Duration: {:.3}s", summary.duration.as_secs_f64());
    eprintln!("  SHA-256: {checksum}");
    eprintln!();
}
