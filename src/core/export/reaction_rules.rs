//! Reaction rules and their scaled rate parameters
//!
//! Each rule gets a rate parameter `k<index>` where `index` is the rule's
//! position in the snapshot. The parameter name is the join key between the
//! parameters stream and the reaction rules stream. Rules that cannot be
//! exported are left out of both streams and reported as [`ExportError`]s;
//! the remaining rules are still written.

use super::format::f_to_str;
use super::names::{
    rate_param_name, BEGIN_REACTION_RULES, END_REACTION_RULES, IND, PARAM_MCELL2BNG_SURF_CONV,
    PARAM_MCELL2BNG_VOL_CONV, PARAM_SURF_RXN, PARAM_VOL_RXN,
};
use super::summary::{ExportError, ExportErrorKind};
use crate::domain::{ModelSnapshot, Result, RxnKind};
use std::fmt::Write;

/// Outcome of exporting the reaction rules section
#[derive(Debug, Clone, Default)]
pub struct RuleExport {
    pub exported: usize,
    pub errors: Vec<ExportError>,
}

/// Rate expression for a rule of the given class
///
/// Unimolecular rates use the same time unit in both consumers and are
/// written verbatim. Returns `None` for classes with no BNGL equivalent.
pub fn rate_expression(kind: RxnKind, base_rate_constant: f64) -> Option<String> {
    let base = f_to_str(base_rate_constant);
    match kind {
        RxnKind::Unimolecular => Some(base),
        RxnKind::BimolecularVolume | RxnKind::BimolecularVolumeSurface => Some(format!(
            "{base} / {PARAM_MCELL2BNG_VOL_CONV} * {PARAM_VOL_RXN}"
        )),
        RxnKind::BimolecularSurfaceSurface => Some(format!(
            "{base} / {PARAM_MCELL2BNG_SURF_CONV} * {PARAM_SURF_RXN}"
        )),
        RxnKind::ReactiveSurface => None,
    }
}

/// Writes the reaction rules section and the rate parameters it uses
pub fn export_reaction_rules(
    model: &ModelSnapshot,
    out_parameters: &mut dyn Write,
    out_reaction_rules: &mut dyn Write,
) -> Result<RuleExport> {
    let mut result = RuleExport::default();

    writeln!(out_reaction_rules, "{BEGIN_REACTION_RULES}")?;

    writeln!(out_parameters)?;
    writeln!(out_parameters, "{IND}# reaction rates")?;

    for (index, rule) in model.rxn_rules().iter().enumerate() {
        let rxn_as_bngl = rule.to_bngl();

        let expression = match rule.classify() {
            Some(kind) => match rate_expression(kind, rule.base_rate_constant) {
                Some(expression) => expression,
                None => {
                    tracing::warn!(
                        rule_index = index,
                        rule = %rxn_as_bngl,
                        kind = %kind,
                        "Skipping rule without BNGL equivalent"
                    );
                    result.errors.push(
                        ExportError::new(
                            ExportErrorKind::UnsupportedReaction,
                            format!(
                                "Export of reactive surface reactions to BNGL is not supported, error for {rxn_as_bngl}."
                            ),
                        )
                        .with_context(format!("rule_index={index}")),
                    );
                    continue;
                }
            },
            None => {
                tracing::warn!(
                    rule_index = index,
                    rule = %rxn_as_bngl,
                    reactants = rule.reactants.len(),
                    "Skipping rule with unexpected molecularity"
                );
                result.errors.push(
                    ExportError::new(
                        ExportErrorKind::UnexpectedReaction,
                        format!("internal error, unexpected reaction type for {rxn_as_bngl}."),
                    )
                    .with_context(format!("rule_index={index}")),
                );
                continue;
            }
        };

        let rate_param = rate_param_name(index);
        writeln!(out_parameters, "{IND}{rate_param} {expression}")?;
        writeln!(out_reaction_rules, "{IND}{rxn_as_bngl} {rate_param}")?;
        result.exported += 1;
    }

    writeln!(out_reaction_rules, "{END_REACTION_RULES}")?;

    tracing::debug!(
        exported = result.exported,
        skipped = result.errors.len(),
        "Exported reaction rules"
    );
    Ok(result)
}
