//! BNGL export
//!
//! This module turns a [`ModelSnapshot`](crate::domain::ModelSnapshot) into
//! BioNetGen language text:
//! - Rate unit conversion ([`rates`])
//! - Molecule types and diffusion constants ([`molecule_types`])
//! - Reaction rules with scaled rate parameters ([`reaction_rules`])
//! - Compartment ordering and declarations ([`compartments`])
//! - Orchestration and reporting ([`coordinator`], [`summary`])

pub mod compartments;
pub mod coordinator;
pub mod document;
pub mod format;
pub mod molecule_types;
pub mod names;
pub mod rates;
pub mod reaction_rules;
pub mod summary;

pub use compartments::{order_compartments, CompartmentOrder};
pub use coordinator::{BnglExporter, ExportOptions, ExportOutcome};
pub use document::BnglSections;
pub use format::f_to_str;
pub use rates::{RateConversionTable, RateMode};
pub use summary::{ExportError, ExportErrorKind, ExportSummary};
