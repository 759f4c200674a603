// BNGL Export - Reaction network to BioNetGen language exporter
// Copyright (c) 2025 BNGL Export Contributors
// Licensed under the MIT License

//! # BNGL Export
//!
//! Writes an in-memory reaction-diffusion model (molecule types,
//! compartments, reaction rules) as BioNetGen language (BNGL) text.
//!
//! ## Overview
//!
//! The exporter produces four text sections:
//! - **Parameters**: unit conversions, diffusion constants, rate constants
//!   and compartment sizes
//! - **Molecule types**: one declaration per exported molecule type
//! - **Compartments**: declarations in parent-before-child order
//! - **Reaction rules**: one rule per exported reaction, referencing its
//!   rate parameter
//!
//! Rate constants are scaled from the simulator's units into BNGL units.
//! Two modes are supported: the default mode targets the deterministic
//! network generator, the simulator mode targets a particle-based simulator
//! and uses a characteristic volume and area.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export and verification
//! - [`domain`] - Model snapshot types, ids and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bngl_export::core::export::{BnglExporter, ExportOptions};
//! use bngl_export::domain::ModelSnapshot;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = ModelSnapshot::from_json_file("model.json")?;
//!
//!     let outcome = BnglExporter::new(&model).export_sections(&ExportOptions::default())?;
//!     if !outcome.summary.is_successful() {
//!         eprintln!("{}", outcome.summary.error_text());
//!     }
//!
//!     print!("{}", outcome.document(Some("my model")));
//!     Ok(())
//! }
//! ```
//!
//! ## Writing into separate sinks
//!
//! Callers that assemble their own file can pass any four
//! [`std::fmt::Write`] sinks:
//!
//! ```rust
//! use bngl_export::core::export::{BnglExporter, ExportOptions, RateMode};
//! use bngl_export::domain::{ElemMolType, ModelBuilder, MolTypeKind};
//!
//! let mut builder = ModelBuilder::new();
//! builder.add_molecule_type(ElemMolType::new("A", MolTypeKind::Volume, 1e-6));
//! let model = builder.build().unwrap();
//!
//! let (mut params, mut mol_types, mut comps, mut rules) =
//!     (String::new(), String::new(), String::new(), String::new());
//! let options = ExportOptions::new(RateMode::Simulator, 2.5, 1.0);
//! let summary = BnglExporter::new(&model)
//!     .export_to_bngl(&mut params, &mut mol_types, &mut comps, &mut rules, &options)
//!     .unwrap();
//!
//! assert!(summary.is_successful());
//! assert!(mol_types.contains("A()"));
//! ```
//!
//! ## Error Handling
//!
//! Hard failures are reported as [`domain::BnglError`]. Reaction rules that
//! cannot be expressed in BNGL are skipped and listed in the
//! [`core::export::ExportSummary`] instead.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
