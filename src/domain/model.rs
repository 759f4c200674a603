//! Reaction-network model snapshot
//!
//! The exporter never builds or mutates a reaction network itself. It reads
//! an already populated, immutable [`ModelSnapshot`] holding elementary
//! molecule types, compartments and reaction rules, and borrows it for the
//! duration of one export call.
//!
//! Snapshots are produced either programmatically through [`ModelBuilder`]
//! or by deserializing the JSON form written by a network generator:
//!
//! ```json
//! {
//!   "molecule_types": [
//!     { "name": "A", "kind": "volume", "diffusion_constant": 1e-6 }
//!   ],
//!   "compartments": [
//!     { "id": 1, "name": "Cell", "dimensionality": "volume", "volume_or_area": 10.0 }
//!   ],
//!   "rxn_rules": [
//!     {
//!       "reactants": [{ "pattern": "A", "locality": "volume" }],
//!       "products": [],
//!       "base_rate_constant": 0.5
//!     }
//!   ]
//! }
//! ```

use crate::domain::errors::BnglError;
use crate::domain::ids::{CompartmentId, MolTypeId};
use crate::domain::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// Name of the implicit compartment that holds everything not placed
/// elsewhere. It takes part in ordering but is never exported.
pub const DEFAULT_COMPARTMENT_NAME: &str = "default_compartment";

/// Built-in wildcard molecule types that match whole classes of species.
/// They have no diffusion constant of their own and are never declared.
pub const SPECIES_SUPERCLASS_NAMES: [&str; 3] = [
    "ALL_MOLECULES",
    "ALL_VOLUME_MOLECULES",
    "ALL_SURFACE_MOLECULES",
];

/// Returns true for the reserved wildcard molecule type names
pub fn is_species_superclass(name: &str) -> bool {
    SPECIES_SUPERCLASS_NAMES.contains(&name)
}

/// Where instances of a molecule type live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MolTypeKind {
    /// Freely diffusing in a 3-D volume
    Volume,
    /// Bound to a 2-D surface
    Surface,
    /// A reactive surface region, not a molecule
    ReactiveSurface,
}

/// Component (binding site) of an elementary molecule type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentType {
    pub name: String,

    /// Allowed internal states, empty for stateless components
    #[serde(default)]
    pub states: Vec<String>,
}

/// Elementary molecule type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElemMolType {
    pub name: String,

    #[serde(default)]
    pub components: Vec<ComponentType>,

    /// Diffusion constant in cm^2/s
    #[serde(alias = "D")]
    pub diffusion_constant: f64,

    pub kind: MolTypeKind,
}

impl ElemMolType {
    /// Creates a molecule type without components
    pub fn new(name: impl Into<String>, kind: MolTypeKind, diffusion_constant: f64) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            diffusion_constant,
            kind,
        }
    }

    /// Adds a component with the given allowed states
    pub fn with_component(mut self, name: impl Into<String>, states: &[&str]) -> Self {
        self.components.push(ComponentType {
            name: name.into(),
            states: states.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn is_vol(&self) -> bool {
        self.kind == MolTypeKind::Volume
    }

    pub fn is_surf(&self) -> bool {
        self.kind == MolTypeKind::Surface
    }

    pub fn is_reactive_surface(&self) -> bool {
        self.kind == MolTypeKind::ReactiveSurface
    }

    /// Renders the molecule type declaration, e.g. `A(s~U~P,b)`
    pub fn to_bngl(&self) -> String {
        let components: Vec<String> = self
            .components
            .iter()
            .map(|c| {
                let mut s = c.name.clone();
                for state in &c.states {
                    s.push('~');
                    s.push_str(state);
                }
                s
            })
            .collect();
        format!("{}({})", self.name, components.join(","))
    }
}

/// Spatial dimensionality of a compartment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensionality {
    /// 3-D compartment measured in um^3
    Volume,
    /// 2-D compartment measured in um^2
    Surface,
}

impl Dimensionality {
    /// Dimension count as written in a BNGL compartment declaration
    pub fn bngl_dims(&self) -> u8 {
        match self {
            Dimensionality::Volume => 3,
            Dimensionality::Surface => 2,
        }
    }
}

/// Compartment of the simulated geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    pub id: CompartmentId,
    pub name: String,
    pub dimensionality: Dimensionality,

    /// Volume (um^3) for 3-D compartments, area (um^2) for 2-D ones
    #[serde(alias = "size")]
    pub volume_or_area: f64,

    #[serde(default)]
    pub parent: Option<CompartmentId>,

    #[serde(default)]
    pub children: BTreeSet<CompartmentId>,
}

impl Compartment {
    pub fn new(
        id: CompartmentId,
        name: impl Into<String>,
        dimensionality: Dimensionality,
        volume_or_area: f64,
        parent: Option<CompartmentId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dimensionality,
            volume_or_area,
            parent,
            children: BTreeSet::new(),
        }
    }

    pub fn is_3d(&self) -> bool {
        self.dimensionality == Dimensionality::Volume
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_COMPARTMENT_NAME
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

/// Locality of one reactant pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    Volume,
    Surface,
    ReactiveSurface,
}

/// Reactant pattern of a reaction rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reactant {
    /// BNGL pattern text, e.g. `A(b!1).B(a!1)@Cell`
    pub pattern: String,
    pub locality: Locality,
}

impl Reactant {
    pub fn new(pattern: impl Into<String>, locality: Locality) -> Self {
        Self {
            pattern: pattern.into(),
            locality,
        }
    }
}

/// Molecularity class of a reaction rule
///
/// Determined once per rule by [`RxnRule::classify`]; the emitters dispatch
/// on it with exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RxnKind {
    Unimolecular,
    BimolecularVolume,
    BimolecularVolumeSurface,
    BimolecularSurfaceSurface,
    ReactiveSurface,
}

impl fmt::Display for RxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RxnKind::Unimolecular => "unimolecular",
            RxnKind::BimolecularVolume => "bimolecular volume",
            RxnKind::BimolecularVolumeSurface => "bimolecular volume-surface",
            RxnKind::BimolecularSurfaceSurface => "bimolecular surface-surface",
            RxnKind::ReactiveSurface => "reactive surface",
        };
        write!(f, "{s}")
    }
}

/// Reaction rule as produced by the network generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RxnRule {
    #[serde(default)]
    pub name: Option<String>,

    pub reactants: Vec<Reactant>,

    /// Product patterns, empty for a degradation rule
    #[serde(default)]
    pub products: Vec<String>,

    pub base_rate_constant: f64,
}

impl RxnRule {
    pub fn new(reactants: Vec<Reactant>, products: Vec<String>, base_rate_constant: f64) -> Self {
        Self {
            name: None,
            reactants,
            products,
            base_rate_constant,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Classifies the rule by reactant count and reactant localities
    ///
    /// Returns `None` for rules that have no BNGL molecularity class, i.e.
    /// rules with zero or more than two reactants.
    pub fn classify(&self) -> Option<RxnKind> {
        match self.reactants.as_slice() {
            [r] => Some(match r.locality {
                Locality::ReactiveSurface => RxnKind::ReactiveSurface,
                Locality::Volume | Locality::Surface => RxnKind::Unimolecular,
            }),
            [a, b] => Some(match (a.locality, b.locality) {
                (Locality::ReactiveSurface, _) | (_, Locality::ReactiveSurface) => {
                    RxnKind::ReactiveSurface
                }
                (Locality::Volume, Locality::Volume) => RxnKind::BimolecularVolume,
                (Locality::Volume, Locality::Surface) | (Locality::Surface, Locality::Volume) => {
                    RxnKind::BimolecularVolumeSurface
                }
                (Locality::Surface, Locality::Surface) => RxnKind::BimolecularSurfaceSurface,
            }),
            _ => None,
        }
    }

    /// Renders the rule body, e.g. `bind: A + B -> AB`
    pub fn to_bngl(&self) -> String {
        let lhs: Vec<&str> = self.reactants.iter().map(|r| r.pattern.as_str()).collect();
        let rhs = if self.products.is_empty() {
            "0".to_string()
        } else {
            self.products.join(" + ")
        };

        let body = format!("{} -> {}", lhs.join(" + "), rhs);
        match &self.name {
            Some(name) => format!("{name}: {body}"),
            None => body,
        }
    }
}

/// Serialized form of a snapshot before indexes are built
#[derive(Debug, Clone, Default, Deserialize)]
struct SnapshotData {
    #[serde(default)]
    molecule_types: Vec<ElemMolType>,
    #[serde(default)]
    compartments: Vec<Compartment>,
    #[serde(default)]
    rxn_rules: Vec<RxnRule>,
}

#[derive(Serialize)]
struct SnapshotView<'a> {
    molecule_types: &'a [ElemMolType],
    compartments: &'a [Compartment],
    rxn_rules: &'a [RxnRule],
}

/// Immutable model snapshot
#[derive(Debug, Clone)]
pub struct ModelSnapshot {
    molecule_types: Vec<ElemMolType>,
    compartments: Vec<Compartment>,
    rxn_rules: Vec<RxnRule>,
    compartment_index: HashMap<CompartmentId, usize>,
}

impl ModelSnapshot {
    /// Parses a snapshot from its JSON form
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: SnapshotData = serde_json::from_str(json)
            .map_err(|e| BnglError::Model(format!("Failed to parse model snapshot: {e}")))?;
        Self::from_data(data)
    }

    /// Loads a snapshot from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BnglError::Model(format!(
                "Failed to read model snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&contents)
    }

    fn from_data(data: SnapshotData) -> Result<Self> {
        let SnapshotData {
            molecule_types,
            mut compartments,
            rxn_rules,
        } = data;

        let defaults = compartments.iter().filter(|c| c.is_default()).count();
        if defaults > 1 {
            return Err(BnglError::Model(format!(
                "Duplicate default compartment '{}' ({} entries)",
                DEFAULT_COMPARTMENT_NAME, defaults
            )));
        }
        if defaults == 0 {
            let id = free_compartment_id(&compartments)?;
            compartments.push(Compartment::new(
                id,
                DEFAULT_COMPARTMENT_NAME,
                Dimensionality::Volume,
                0.0,
                None,
            ));
        }

        let mut compartment_index = HashMap::with_capacity(compartments.len());
        for (pos, comp) in compartments.iter().enumerate() {
            if compartment_index.insert(comp.id, pos).is_some() {
                return Err(BnglError::Model(format!(
                    "Duplicate compartment id {} ('{}')",
                    comp.id, comp.name
                )));
            }
        }

        // Child sets are derived from parent ids only. Parents that do not
        // resolve are left alone, the exporter reports them as unreachable
        // compartments.
        for comp in compartments.iter_mut() {
            comp.children.clear();
        }
        let links: Vec<(usize, CompartmentId)> = compartments
            .iter()
            .filter_map(|c| {
                let parent = c.parent?;
                compartment_index.get(&parent).map(|&pos| (pos, c.id))
            })
            .collect();
        for (parent_pos, child) in links {
            compartments[parent_pos].children.insert(child);
        }

        Ok(Self {
            molecule_types,
            compartments,
            rxn_rules,
            compartment_index,
        })
    }

    pub fn molecule_types(&self) -> &[ElemMolType] {
        &self.molecule_types
    }

    pub fn molecule_type(&self, id: MolTypeId) -> Option<&ElemMolType> {
        self.molecule_types.get(id.value() as usize)
    }

    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    pub fn rxn_rules(&self) -> &[RxnRule] {
        &self.rxn_rules
    }

    pub fn compartment(&self, id: CompartmentId) -> Option<&Compartment> {
        self.compartment_index
            .get(&id)
            .map(|&pos| &self.compartments[pos])
    }

    /// Looks up a compartment, failing for ids not present in the snapshot
    pub fn get_compartment(&self, id: CompartmentId) -> Result<&Compartment> {
        self.compartment(id)
            .ok_or(BnglError::UnknownCompartment(id))
    }

    pub fn find_compartment(&self, name: &str) -> Option<&Compartment> {
        self.compartments.iter().find(|c| c.name == name)
    }
}

/// Picks an id for the inserted default compartment
///
/// One past the largest id in use, or the smallest unused id when the
/// largest one is `u32::MAX`.
fn free_compartment_id(compartments: &[Compartment]) -> Result<CompartmentId> {
    let Some(max) = compartments.iter().map(|c| c.id.value()).max() else {
        return Ok(CompartmentId::new(0));
    };
    if let Some(next) = max.checked_add(1) {
        return Ok(CompartmentId::new(next));
    }
    let used: BTreeSet<u32> = compartments.iter().map(|c| c.id.value()).collect();
    (0..=u32::MAX)
        .find(|id| !used.contains(id))
        .map(CompartmentId::new)
        .ok_or_else(|| BnglError::Model("No free compartment id for the default compartment".to_string()))
}

impl Serialize for ModelSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SnapshotView {
            molecule_types: &self.molecule_types,
            compartments: &self.compartments,
            rxn_rules: &self.rxn_rules,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModelSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = SnapshotData::deserialize(deserializer)?;
        Self::from_data(data).map_err(serde::de::Error::custom)
    }
}

/// Builder for model snapshots
///
/// # Examples
///
/// ```
/// use bngl_export::domain::model::{Dimensionality, ModelBuilder};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = ModelBuilder::new();
/// let cell = builder.add_compartment("Cell", Dimensionality::Volume, 10.0, None);
/// builder.add_compartment("Membrane", Dimensionality::Surface, 5.0, Some(cell));
/// let model = builder.build()?;
/// assert_eq!(model.compartments().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    data: SnapshotData,
    next_compartment_id: u32,
}

impl ModelBuilder {
    /// Creates a builder that already holds the default compartment
    pub fn new() -> Self {
        let mut data = SnapshotData::default();
        data.compartments.push(Compartment::new(
            CompartmentId::new(0),
            DEFAULT_COMPARTMENT_NAME,
            Dimensionality::Volume,
            0.0,
            None,
        ));
        Self {
            data,
            next_compartment_id: 1,
        }
    }

    pub fn add_molecule_type(&mut self, mol_type: ElemMolType) -> MolTypeId {
        let id = MolTypeId::new(self.data.molecule_types.len() as u32);
        self.data.molecule_types.push(mol_type);
        id
    }

    /// Adds a compartment with a fresh id
    ///
    /// The child set of `parent` is filled in when the snapshot is built.
    pub fn add_compartment(
        &mut self,
        name: impl Into<String>,
        dimensionality: Dimensionality,
        volume_or_area: f64,
        parent: Option<CompartmentId>,
    ) -> CompartmentId {
        let id = CompartmentId::new(self.next_compartment_id);
        self.next_compartment_id = self.next_compartment_id.saturating_add(1);
        self.data.compartments.push(Compartment::new(
            id,
            name,
            dimensionality,
            volume_or_area,
            parent,
        ));
        id
    }

    /// Adds a fully specified compartment, keeping its id as given
    pub fn add_compartment_raw(&mut self, compartment: Compartment) -> CompartmentId {
        let id = compartment.id;
        self.next_compartment_id = self.next_compartment_id.max(id.value().saturating_add(1));
        self.data.compartments.push(compartment);
        id
    }

    pub fn add_rule(&mut self, rule: RxnRule) -> &mut Self {
        self.data.rxn_rules.push(rule);
        self
    }

    pub fn build(self) -> Result<ModelSnapshot> {
        ModelSnapshot::from_data(self.data)
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
