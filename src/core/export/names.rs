//! BNGL keywords, parameter names and physical constants shared by the
//! section emitters
//!
//! Rate expressions written by one emitter refer to parameters defined by
//! another, so every shared name lives here.

/// Indent prefixed to every line inside a section
pub const IND: &str = "  ";

pub const BEGIN_MODEL: &str = "begin model";
pub const END_MODEL: &str = "end model";
pub const BEGIN_PARAMETERS: &str = "begin parameters";
pub const END_PARAMETERS: &str = "end parameters";
pub const BEGIN_MOLECULE_TYPES: &str = "begin molecule types";
pub const END_MOLECULE_TYPES: &str = "end molecule types";
pub const BEGIN_COMPARTMENTS: &str = "begin compartments";
pub const END_COMPARTMENTS: &str = "end compartments";
pub const BEGIN_REACTION_RULES: &str = "begin reaction rules";
pub const END_REACTION_RULES: &str = "end reaction rules";

pub const PARAM_THICKNESS: &str = "thickness";
pub const PARAM_RATE_CONV_VOLUME: &str = "rate_conv_volume";
pub const PARAM_RATE_CONV_THICKNESS: &str = "rate_conv_thickness";
pub const PARAM_MCELL2BNG_VOL_CONV: &str = "mcell_to_bng_vol_conv";
pub const PARAM_MCELL2BNG_SURF_CONV: &str = "mcell_to_bng_surf_conv";
pub const PARAM_VOL_RXN: &str = "vol_rxn";
pub const PARAM_SURF_RXN: &str = "surf_rxn";

/// Prefix of parameters a simulator reads in place of the unprefixed one
pub const MCELL_REDEFINE_PREFIX: &str = "MCELL_REDEFINE_";

pub const MCELL_DIFFUSION_CONSTANT_3D_PREFIX: &str = "MCELL_DIFFUSION_CONSTANT_3D_";
pub const MCELL_DIFFUSION_CONSTANT_2D_PREFIX: &str = "MCELL_DIFFUSION_CONSTANT_2D_";

pub const PREFIX_VOLUME: &str = "vol_";
pub const PREFIX_AREA: &str = "area_";

/// Prefix of per-rule rate parameters (`k0`, `k1`, ...)
pub const RATE_PARAM_PREFIX: &str = "k";

/// Assumed membrane thickness in um
pub const THICKNESS_UM: f64 = 0.01;

/// Avogadro constant in 1/mol
pub const AVOGADRO: f64 = 6.02214076e23;

/// um^3 to litres
pub const UM3_TO_LITRES: f64 = 1e-15;

/// Name of the rate parameter of the rule at `index`
pub fn rate_param_name(index: usize) -> String {
    format!("{RATE_PARAM_PREFIX}{index}")
}
