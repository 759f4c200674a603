//! Molecule type declarations and diffusion constants

use super::format::f_to_str;
use super::names::{
    BEGIN_MOLECULE_TYPES, END_MOLECULE_TYPES, IND, MCELL_DIFFUSION_CONSTANT_2D_PREFIX,
    MCELL_DIFFUSION_CONSTANT_3D_PREFIX,
};
use crate::domain::model::{is_species_superclass, ElemMolType, MolTypeKind};
use crate::domain::{ModelSnapshot, Result};
use std::fmt::Write;

/// Whether a molecule type is declared in the exported model
///
/// Reactive surfaces are not molecules, and the built-in superclass
/// wildcards have no diffusion constant of their own.
pub fn is_exported(mol_type: &ElemMolType) -> bool {
    !mol_type.is_reactive_surface() && !is_species_superclass(&mol_type.name)
}

/// Writes the molecule types section and one diffusion constant parameter
/// per declared type
///
/// Returns the number of declared molecule types.
pub fn export_molecule_types(
    model: &ModelSnapshot,
    out_parameters: &mut dyn Write,
    out_molecule_types: &mut dyn Write,
) -> Result<usize> {
    writeln!(out_molecule_types, "{BEGIN_MOLECULE_TYPES}")?;

    writeln!(out_parameters)?;
    writeln!(out_parameters, "{IND}# diffusion constants")?;

    let mut count = 0;
    for mt in model.molecule_types().iter().filter(|mt| is_exported(mt)) {
        let prefix = match mt.kind {
            MolTypeKind::Volume => MCELL_DIFFUSION_CONSTANT_3D_PREFIX,
            MolTypeKind::Surface => MCELL_DIFFUSION_CONSTANT_2D_PREFIX,
            MolTypeKind::ReactiveSurface => continue,
        };

        writeln!(out_molecule_types, "{IND}{}", mt.to_bngl())?;
        writeln!(
            out_parameters,
            "{IND}{prefix}{} {}",
            mt.name,
            f_to_str(mt.diffusion_constant)
        )?;
        count += 1;
    }

    writeln!(out_molecule_types, "{END_MOLECULE_TYPES}")?;

    tracing::debug!(count, "Exported molecule types");
    Ok(count)
}
