//! Export coordinator - sequences the section emitters
//!
//! The coordinator checks the compartment hierarchy first, then writes the
//! rate-conversion preamble, molecule types, reaction rules and
//! compartments, in that order, into four caller supplied sinks.

use crate::config::schema::ExportConfig;
use crate::core::export::compartments::{export_compartments, order_compartments};
use crate::core::export::document::BnglSections;
use crate::core::export::molecule_types::export_molecule_types;
use crate::core::export::rates::{RateConversionTable, RateMode};
use crate::core::export::reaction_rules::export_reaction_rules;
use crate::core::export::summary::ExportSummary;
use crate::domain::context::ResultExt;
use crate::domain::{ModelSnapshot, Result};
use std::fmt::Write;
use std::str::FromStr;
use std::time::Instant;

/// Parameters of one export call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub mode: RateMode,

    /// Characteristic volume (um^3), used in simulator mode only
    pub volume_um3: f64,

    /// Characteristic area (um^2), used in simulator mode only
    pub area_um2: f64,
}

impl ExportOptions {
    pub fn new(mode: RateMode, volume_um3: f64, area_um2: f64) -> Self {
        Self {
            mode,
            volume_um3,
            area_um2,
        }
    }

    /// Builds options from the `[export]` configuration section
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Ok(Self {
            mode: RateMode::from_str(&config.mode)?,
            volume_um3: config.volume_um3,
            area_um2: config.area_um2,
        })
    }

    pub fn rate_conversion(&self) -> RateConversionTable {
        RateConversionTable::new(self.mode, self.volume_um3, self.area_um2)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new(RateMode::Standard, 1.0, 1.0)
    }
}

/// Result of exporting into fresh buffers
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub sections: BnglSections,
    pub summary: ExportSummary,
}

impl ExportOutcome {
    pub fn document(&self, model_name: Option<&str>) -> String {
        self.sections.to_document(model_name)
    }
}

/// Exports one model snapshot as BNGL
///
/// Holds a shared borrow of the snapshot only; any number of exporters may
/// run over different snapshots at the same time.
pub struct BnglExporter<'a> {
    model: &'a ModelSnapshot,
}

impl<'a> BnglExporter<'a> {
    pub fn new(model: &'a ModelSnapshot) -> Self {
        Self { model }
    }

    /// Writes the four BNGL sections into the given sinks
    ///
    /// Rules that cannot be exported are skipped and listed in the returned
    /// summary; [`ExportSummary::error_text`] gives the diagnostic text. An
    /// `Err` is returned only for hard failures: an inconsistent compartment
    /// hierarchy (detected before anything is written) or a failing sink.
    pub fn export_to_bngl(
        &self,
        out_parameters: &mut dyn Write,
        out_molecule_types: &mut dyn Write,
        out_compartments: &mut dyn Write,
        out_reaction_rules: &mut dyn Write,
        options: &ExportOptions,
    ) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        crate::log_export_start!(options.mode, self.model.rxn_rules().len());

        let order = order_compartments(self.model);
        if let Err(e) = order.verify(self.model.compartments().len()) {
            crate::log_error_with_context!(&e, "Compartment hierarchy check failed");
            return Err(e);
        }

        options
            .rate_conversion()
            .write_parameters(out_parameters)
            .context("Failed to write rate conversion parameters")?;

        summary.molecule_types_exported =
            export_molecule_types(self.model, out_parameters, out_molecule_types)
                .context("Failed to write molecule types")?;

        let rules = export_reaction_rules(self.model, out_parameters, out_reaction_rules)
            .context("Failed to write reaction rules")?;
        summary.rules_exported = rules.exported;
        summary.rules_skipped = rules.errors.len();
        for error in rules.errors {
            summary.add_error(error);
        }

        summary.compartments_exported =
            export_compartments(self.model, &order, out_parameters, out_compartments)
                .context("Failed to write compartments")?;

        let summary = summary.with_duration(start_time.elapsed());
        crate::log_export_complete!(
            summary.rules_exported + summary.compartments_exported + summary.molecule_types_exported,
            summary.duration
        );
        summary.log_summary();
        Ok(summary)
    }

    /// Exports into new in-memory sections
    pub fn export_sections(&self, options: &ExportOptions) -> Result<ExportOutcome> {
        let mut sections = BnglSections::new();
        let summary = self.export_to_bngl(
            &mut sections.parameters,
            &mut sections.molecule_types,
            &mut sections.compartments,
            &mut sections.reaction_rules,
            options,
        )?;
        Ok(ExportOutcome { sections, summary })
    }
}
