//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CompartmentId`], [`MolTypeId`])
//! - **The model snapshot** ([`ModelSnapshot`]) with its molecule types,
//!   compartments and reaction rules
//! - **Error types** ([`BnglError`])
//! - **Result type alias** ([`Result`])
//!
//! # Building a snapshot
//!
//! ```rust
//! use bngl_export::domain::{
//!     Dimensionality, ElemMolType, Locality, ModelBuilder, MolTypeKind, Reactant, RxnRule,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = ModelBuilder::new();
//! builder.add_molecule_type(ElemMolType::new("A", MolTypeKind::Volume, 1e-6));
//! builder.add_compartment("Cell", Dimensionality::Volume, 10.0, None);
//! builder.add_rule(RxnRule::new(
//!     vec![Reactant::new("A", Locality::Volume)],
//!     vec![],
//!     0.1,
//! ));
//! let model = builder.build()?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod errors;
pub mod ids;
pub mod model;
pub mod result;

pub use errors::BnglError;
pub use ids::{CompartmentId, MolTypeId};
pub use model::{
    Compartment, ComponentType, Dimensionality, ElemMolType, Locality, ModelBuilder,
    ModelSnapshot, MolTypeKind, Reactant, RxnKind, RxnRule, DEFAULT_COMPARTMENT_NAME,
};
pub use result::Result;
