//! Core export logic.
//!
//! # Modules
//!
//! - [`export`] - Section emitters and export orchestration
//! - [`verification`] - Checksums of exported documents
//!
//! # Export Workflow
//!
//! 1. **Check**: Order the compartment forest and verify it is complete
//! 2. **Preamble**: Write the rate unit-conversion parameters
//! 3. **Molecule types**: Declare molecule types and diffusion constants
//! 4. **Reaction rules**: Write scaled rate parameters and rule lines
//! 5. **Compartments**: Write size parameters and declarations, parents first
//! 6. **Report**: Collect skipped rules into the export summary
//!
//! # Example
//!
//! ```rust
//! use bngl_export::core::export::{BnglExporter, ExportOptions};
//! use bngl_export::domain::{Dimensionality, ModelBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = ModelBuilder::new();
//! builder.add_compartment("Cell", Dimensionality::Volume, 10.0, None);
//! let model = builder.build()?;
//!
//! let outcome = BnglExporter::new(&model).export_sections(&ExportOptions::default())?;
//! let document = outcome.document(Some("cell model"));
//!
//! assert!(outcome.summary.error_text().is_empty());
//! assert!(document.contains("Cell 3 vol_Cell"));
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod verification;
