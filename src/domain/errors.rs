//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Only hard
//! failures live here; per-rule export problems are reported through
//! [`crate::core::export::ExportSummary`] instead.

use crate::domain::ids::CompartmentId;
use thiserror::Error;

/// Main exporter error type
///
/// Every fallible operation in the crate returns this type. An error of this
/// kind means that no usable output was produced by the failing call.
#[derive(Debug, Error)]
pub enum BnglError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model snapshot could not be loaded or is malformed
    #[error("Model error: {0}")]
    Model(String),

    /// The compartment forest could not be ordered completely
    ///
    /// Raised when the parent-before-child traversal does not reach every
    /// compartment, which means the snapshot contains a cycle or an orphan.
    #[error(
        "Inconsistent compartment hierarchy: ordered {ordered}, visited {visited}, total {total}"
    )]
    InconsistentCompartments {
        ordered: usize,
        visited: usize,
        total: usize,
    },

    /// A compartment id referenced by the snapshot does not exist
    #[error("Unknown compartment id: {0}")]
    UnknownCompartment(CompartmentId),

    /// Writing to an output sink failed
    #[error("Write error: {0}")]
    Write(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl BnglError {
    /// Whether the error signals a contract violation by the model builder
    /// rather than a problem with the caller's environment
    pub fn is_input_fault(&self) -> bool {
        matches!(
            self,
            BnglError::InconsistentCompartments { .. }
                | BnglError::UnknownCompartment(_)
                | BnglError::Model(_)
        )
    }
}

impl From<std::io::Error> for BnglError {
    fn from(err: std::io::Error) -> Self {
        BnglError::Io(err.to_string())
    }
}

impl From<std::fmt::Error> for BnglError {
    fn from(err: std::fmt::Error) -> Self {
        BnglError::Write(err.to_string())
    }
}

impl From<serde_json::Error> for BnglError {
    fn from(err: serde_json::Error) -> Self {
        BnglError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BnglError {
    fn from(err: toml::de::Error) -> Self {
        BnglError::Configuration(format!("TOML parse error: {err}"))
    }
}
