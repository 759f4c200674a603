//! Rate constant unit conversion
//!
//! Rate constants in the model snapshot use the simulator's units: 1/s for
//! unimolecular rules, M^-1 s^-1 for bimolecular rules with a volume
//! reactant and um^2 N^-1 s^-1 for surface-surface rules. BNGL counts
//! molecules, so bimolecular rates must be divided by a volume expressed in
//! the right unit. How that volume is chosen depends on the consumer of the
//! exported file:
//!
//! - [`RateMode::Standard`] targets the BioNetGen network solvers and uses
//!   fixed physical factors (um^3 to litres, membrane thickness).
//! - [`RateMode::Simulator`] targets a rule-matching stochastic simulator
//!   that has no notion of compartment sizes, so a caller supplied
//!   characteristic volume and area are folded into the factors.

use super::format::f_to_str;
use super::names::{
    AVOGADRO, IND, MCELL_REDEFINE_PREFIX, PARAM_MCELL2BNG_SURF_CONV, PARAM_MCELL2BNG_VOL_CONV,
    PARAM_RATE_CONV_THICKNESS, PARAM_RATE_CONV_VOLUME, PARAM_SURF_RXN, PARAM_THICKNESS,
    PARAM_VOL_RXN, THICKNESS_UM, UM3_TO_LITRES,
};
use crate::domain::{BnglError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Unit-conversion regime for exported rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateMode {
    /// Fixed physical conversion factors
    #[default]
    Standard,
    /// Factors scaled by a characteristic volume and area
    Simulator,
}

impl FromStr for RateMode {
    type Err = BnglError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" | "standard" | "bng" => Ok(Self::Standard),
            "simulator" | "nfsim" => Ok(Self::Simulator),
            _ => Err(BnglError::Configuration(format!(
                "Invalid rate mode: {s}. Expected 'default' or 'simulator'"
            ))),
        }
    }
}

impl fmt::Display for RateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateMode::Standard => write!(f, "default"),
            RateMode::Simulator => write!(f, "simulator"),
        }
    }
}

/// Conversion factors for one export call
///
/// Values are computed once from the mode and the two characteristic sizes;
/// the sizes are ignored in [`RateMode::Standard`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConversionTable {
    pub mode: RateMode,
    volume_um3: f64,
    area_um2: f64,
    /// Assumed membrane thickness (um)
    pub thickness: f64,
    pub rate_conv_volume: f64,
    pub rate_conv_thickness: f64,
    /// Avogadro * `rate_conv_volume`
    pub vol_conv: f64,
    /// Same value as `rate_conv_thickness`
    pub surf_conv: f64,
}

impl RateConversionTable {
    pub fn new(mode: RateMode, volume_um3: f64, area_um2: f64) -> Self {
        let thickness = THICKNESS_UM;
        let (rate_conv_volume, rate_conv_thickness) = match mode {
            RateMode::Simulator => (
                volume_um3 * UM3_TO_LITRES,
                area_um2 * thickness * UM3_TO_LITRES,
            ),
            RateMode::Standard => (UM3_TO_LITRES, thickness),
        };

        Self {
            mode,
            volume_um3,
            area_um2,
            thickness,
            rate_conv_volume,
            rate_conv_thickness,
            vol_conv: AVOGADRO * rate_conv_volume,
            surf_conv: rate_conv_thickness,
        }
    }

    /// Writes the conversion parameters to the parameter stream
    ///
    /// Must run before any rate parameter is written, the rate expressions
    /// refer to the names defined here.
    pub fn write_parameters(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{IND}# unit conversions")?;
        writeln!(
            out,
            "{IND}{PARAM_THICKNESS} {} # um, assumed membrane thickness",
            f_to_str(self.thickness)
        )?;

        match self.mode {
            RateMode::Simulator => {
                writeln!(
                    out,
                    "{IND}{PARAM_RATE_CONV_VOLUME} {} * {} # compartment volume in litres",
                    f_to_str(self.volume_um3),
                    f_to_str(UM3_TO_LITRES)
                )?;
                writeln!(
                    out,
                    "{IND}{PARAM_RATE_CONV_THICKNESS} {} * {PARAM_THICKNESS} * {} # membrane volume in litres",
                    f_to_str(self.area_um2),
                    f_to_str(UM3_TO_LITRES)
                )?;
            }
            RateMode::Standard => {
                writeln!(
                    out,
                    "{IND}{PARAM_RATE_CONV_VOLUME} {} # um^3 to litres",
                    f_to_str(UM3_TO_LITRES)
                )?;
                writeln!(
                    out,
                    "{IND}{PARAM_RATE_CONV_THICKNESS} {PARAM_THICKNESS} # um^2 to um^3"
                )?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{IND}# parameters to control rates in MCell and BioNetGen"
        )?;
        writeln!(
            out,
            "{IND}{PARAM_MCELL2BNG_VOL_CONV} {} * {PARAM_RATE_CONV_VOLUME}",
            f_to_str(AVOGADRO)
        )?;
        writeln!(out, "{IND}{PARAM_VOL_RXN} 1")?;
        writeln!(
            out,
            "{IND}{MCELL_REDEFINE_PREFIX}{PARAM_VOL_RXN} {PARAM_MCELL2BNG_VOL_CONV}"
        )?;
        writeln!(
            out,
            "{IND}{PARAM_MCELL2BNG_SURF_CONV} {PARAM_RATE_CONV_THICKNESS}"
        )?;
        writeln!(out, "{IND}{PARAM_SURF_RXN} 1")?;
        writeln!(
            out,
            "{IND}{MCELL_REDEFINE_PREFIX}{PARAM_SURF_RXN} {PARAM_MCELL2BNG_SURF_CONV}"
        )?;

        Ok(())
    }
}
