//! Domain identifier types
//!
//! Opaque numeric ids used to index entities inside a
//! [`ModelSnapshot`](crate::domain::model::ModelSnapshot). Each id type is a
//! distinct newtype so a compartment id can never be passed where a molecule
//! type id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compartment identifier
///
/// # Examples
///
/// ```
/// use bngl_export::domain::ids::CompartmentId;
/// use std::str::FromStr;
///
/// let id = CompartmentId::from_str("3").unwrap();
/// assert_eq!(id.value(), 3);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompartmentId(u32);

impl CompartmentId {
    /// Creates a new CompartmentId
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CompartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompartmentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| format!("Invalid compartment id '{s}': {e}"))
    }
}

/// Elementary molecule type identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MolTypeId(u32);

impl MolTypeId {
    /// Creates a new MolTypeId
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MolTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MolTypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| format!("Invalid molecule type id '{s}': {e}"))
    }
}
