//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for bngl-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// BNGL Export - writes reaction-diffusion models as BioNetGen language
#[derive(Parser, Debug)]
#[command(name = "bngl-export")]
#[command(version, about, long_about = None)]
#[command(author = "BNGL Export Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(
        short,
        long,
        default_value = "bngl-export.toml",
        env = "BNGL_EXPORT_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BNGL_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a model snapshot to a BNGL file
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
