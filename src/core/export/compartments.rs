//! Compartment ordering and declarations
//!
//! BNGL requires a compartment's parent to be declared before the
//! compartment itself. [`order_compartments`] walks the compartment forest
//! depth-first from every root and records each compartment before its
//! children, and [`CompartmentOrder::verify`] checks that the walk reached
//! every compartment of the snapshot exactly once.

use super::format::f_to_str;
use super::names::{
    BEGIN_COMPARTMENTS, END_COMPARTMENTS, IND, PARAM_THICKNESS, PREFIX_AREA, PREFIX_VOLUME,
};
use crate::domain::{BnglError, CompartmentId, Dimensionality, ModelSnapshot, Result};
use std::collections::HashSet;
use std::fmt::Write;

/// Parent-before-child order of the compartments of a snapshot
#[derive(Debug, Clone, Default)]
pub struct CompartmentOrder {
    order: Vec<CompartmentId>,
    visited: HashSet<CompartmentId>,
}

impl CompartmentOrder {
    pub fn ids(&self) -> &[CompartmentId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Checks that the order covers `total` compartments, each exactly once
    ///
    /// A mismatch means some compartment is unreachable from any root,
    /// either because its parent does not exist or because it sits on a
    /// parent cycle.
    pub fn verify(&self, total: usize) -> Result<()> {
        if self.order.len() != self.visited.len() || self.order.len() != total {
            return Err(BnglError::InconsistentCompartments {
                ordered: self.order.len(),
                visited: self.visited.len(),
                total,
            });
        }
        Ok(())
    }
}

/// Computes the emission order of all compartments reachable from a root
pub fn order_compartments(model: &ModelSnapshot) -> CompartmentOrder {
    let mut result = CompartmentOrder::default();
    for root in model.compartments().iter().filter(|c| !c.has_parent()) {
        visit(model, root.id, &mut result.visited, &mut result.order);
    }
    result
}

fn visit(
    model: &ModelSnapshot,
    id: CompartmentId,
    visited: &mut HashSet<CompartmentId>,
    order: &mut Vec<CompartmentId>,
) {
    if !visited.insert(id) {
        return;
    }
    order.push(id);

    if let Some(comp) = model.compartment(id) {
        for &child in &comp.children {
            visit(model, child, visited, order);
        }
    }
}

/// Writes the compartments section in the given order together with one
/// size parameter per compartment
///
/// The default compartment is skipped, and so is any reference to it as a
/// parent. Returns the number of declared compartments.
pub fn export_compartments(
    model: &ModelSnapshot,
    order: &CompartmentOrder,
    out_parameters: &mut dyn Write,
    out_compartments: &mut dyn Write,
) -> Result<usize> {
    writeln!(out_compartments, "{BEGIN_COMPARTMENTS}")?;

    writeln!(out_parameters)?;
    writeln!(out_parameters, "{IND}# compartment sizes")?;

    let mut count = 0;
    for &id in order.ids() {
        let comp = model.get_compartment(id)?;
        if comp.is_default() {
            continue;
        }

        let dims = comp.dimensionality.bngl_dims();
        match comp.dimensionality {
            Dimensionality::Volume => {
                let vol_name = format!("{PREFIX_VOLUME}{}", comp.name);
                writeln!(
                    out_parameters,
                    "{IND}{vol_name} {} # um^3",
                    f_to_str(comp.volume_or_area)
                )?;
                write!(out_compartments, "{IND}{} {dims} {vol_name}", comp.name)?;
            }
            Dimensionality::Surface => {
                let area_name = format!("{PREFIX_AREA}{}", comp.name);
                writeln!(
                    out_parameters,
                    "{IND}{area_name} {} # um^2",
                    f_to_str(comp.volume_or_area)
                )?;
                write!(
                    out_compartments,
                    "{IND}{} {dims} {area_name} * {PARAM_THICKNESS}",
                    comp.name
                )?;
            }
        }

        if let Some(parent_id) = comp.parent {
            let parent = model.get_compartment(parent_id)?;
            if !parent.is_default() {
                write!(out_compartments, " {}", parent.name)?;
            }
        }
        writeln!(out_compartments)?;
        count += 1;
    }

    writeln!(out_compartments, "{END_COMPARTMENTS}")?;

    tracing::debug!(count, "Exported compartments");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Compartment, ModelBuilder};

    #[test]
    fn test_parent_before_child() {
        let mut builder = ModelBuilder::new();
        let cell = builder.add_compartment("Cell", Dimensionality::Volume, 10.0, None);
        let membrane =
            builder.add_compartment("Membrane", Dimensionality::Surface, 5.0, Some(cell));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        order.verify(model.compartments().len()).unwrap();

        let pos = |id: CompartmentId| order.ids().iter().position(|&x| x == id).unwrap();
        assert!(pos(cell) < pos(membrane));
        assert_eq!(order.visited_count(), 3);
    }

    #[test]
    fn test_children_declared_before_parent_in_snapshot() {
        let mut builder = ModelBuilder::new();
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(10),
            "Nucleus",
            Dimensionality::Volume,
            1.0,
            Some(CompartmentId::new(11)),
        ));
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(11),
            "Cytosol",
            Dimensionality::Volume,
            8.0,
            None,
        ));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        order.verify(model.compartments().len()).unwrap();
        let pos = |id: u32| {
            order
                .ids()
                .iter()
                .position(|&x| x == CompartmentId::new(id))
                .unwrap()
        };
        assert!(pos(11) < pos(10));
    }

    #[test]
    fn test_orphan_fails_verification() {
        let mut builder = ModelBuilder::new();
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(5),
            "Lost",
            Dimensionality::Volume,
            1.0,
            Some(CompartmentId::new(99)),
        ));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        let err = order.verify(model.compartments().len()).unwrap_err();
        assert!(matches!(
            err,
            BnglError::InconsistentCompartments {
                ordered: 1,
                visited: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_cycle_fails_verification() {
        let mut builder = ModelBuilder::new();
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(1),
            "A",
            Dimensionality::Volume,
            1.0,
            Some(CompartmentId::new(2)),
        ));
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(2),
            "B",
            Dimensionality::Volume,
            1.0,
            Some(CompartmentId::new(1)),
        ));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        assert!(order.verify(model.compartments().len()).is_err());
    }

    #[test]
    fn test_stray_child_entry_does_not_move_compartment() {
        let mut builder = ModelBuilder::new();
        let mut q = Compartment::new(
            CompartmentId::new(1),
            "Q",
            Dimensionality::Volume,
            1.0,
            None,
        );
        // claims X although X names P as its parent
        q.children.insert(CompartmentId::new(3));
        builder.add_compartment_raw(q);
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(2),
            "P",
            Dimensionality::Volume,
            1.0,
            None,
        ));
        builder.add_compartment_raw(Compartment::new(
            CompartmentId::new(3),
            "X",
            Dimensionality::Volume,
            1.0,
            Some(CompartmentId::new(2)),
        ));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        order.verify(model.compartments().len()).unwrap();
        assert_eq!(order.len(), 4);

        let mut params = String::new();
        let mut comps = String::new();
        export_compartments(&model, &order, &mut params, &mut comps).unwrap();
        let p_line = comps.find("  P 3 vol_P\n").unwrap();
        let x_line = comps.find("  X 3 vol_X P\n").unwrap();
        assert!(p_line < x_line);
    }

    #[test]
    fn test_export_cell_and_membrane() {
        let mut builder = ModelBuilder::new();
        let cell = builder.add_compartment("Cell", Dimensionality::Volume, 10.0, None);
        builder.add_compartment("Membrane", Dimensionality::Surface, 5.0, Some(cell));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        let mut params = String::new();
        let mut comps = String::new();
        let count = export_compartments(&model, &order, &mut params, &mut comps).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            comps,
            "begin compartments\n  Cell 3 vol_Cell\n  Membrane 2 area_Membrane * thickness Cell\nend compartments\n"
        );
        assert!(params.contains("  vol_Cell 10.0 # um^3\n"));
        assert!(params.contains("  area_Membrane 5.0 # um^2\n"));
        assert!(!comps.contains("default_compartment"));
    }

    #[test]
    fn test_default_parent_not_referenced() {
        let mut builder = ModelBuilder::new();
        builder.add_compartment("EC", Dimensionality::Volume, 100.0, Some(CompartmentId::new(0)));
        let model = builder.build().unwrap();

        let order = order_compartments(&model);
        order.verify(model.compartments().len()).unwrap();
        let mut params = String::new();
        let mut comps = String::new();
        export_compartments(&model, &order, &mut params, &mut comps).unwrap();
        assert!(comps.contains("  EC 3 vol_EC\n"));
    }
}
