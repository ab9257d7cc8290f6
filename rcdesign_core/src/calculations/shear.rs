//! # Shear Design
//!
//! One-way shear of a rectangular beam with vertical stirrups
//! (ACI 318 / E.060, kgf and cm).
//!
//! ## Procedure
//!
//! 1. Vc = 0.53·√f'c·b·d, φ = 0.75
//! 2. Vu ≤ φVc: no stirrups required by strength, spacing s_max = min(d/2, 60 cm)
//! 3. Otherwise Vs = Vu/φ − Vc and s = Av·fy·d/Vs, clipped to s_max
//! 4. Av,min = 0.2·√f'c·b·s/fy at the design spacing
//! 5. Vu ≤ φ·(Vc + Vs,provided), with Vs ≤ 2.1·√f'c·b·d
//!
//! Av is the area of one bar of the selected stirrup size.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::section::BeamSection;
use crate::equations::{
    concrete_shear_capacity, max_stirrup_spacing, minimum_shear_steel, stirrup_shear_capacity,
    stirrup_shear_limit, stirrup_spacing, PHI_SHEAR,
};
use crate::errors::{require_non_negative, CalcResult};
use crate::materials::{self, BarSize, MaterialInput, MaterialSet};
use crate::settings::DesignSettings;

/// Relative slack on the capacity check so that a spacing sized exactly to
/// Vs still verifies after rounding
pub(crate) const CHECK_TOLERANCE: f64 = 1e-9;

/// Input parameters for shear design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-101",
///   "material": { "fc": 210.0, "fy": 4200.0 },
///   "section": { "width_cm": 25.0, "depth_cm": 54.0 },
///   "vu_kgf": 12000.0,
///   "stirrup": "#3"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearInput {
    /// User label
    pub label: String,
    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,
    /// Section geometry
    pub section: BeamSection,
    /// Factored shear Vu (kgf)
    pub vu_kgf: f64,
    /// Stirrup bar size (#3 if omitted)
    #[serde(default)]
    pub stirrup: BarSize,
}

impl ShearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        require_non_negative("vu_kgf", self.vu_kgf)
    }
}

/// Results from shear design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    // === Concrete ===
    /// Nominal concrete shear Vc (kgf)
    pub vc_kgf: f64,
    /// Strength reduction factor φ
    pub phi: f64,
    /// Design concrete shear φVc (kgf)
    pub phi_vc_kgf: f64,
    /// Demand Vu (kgf)
    pub vu_kgf: f64,

    // === Stirrups ===
    /// Vu > φVc
    pub stirrups_required: bool,
    /// Stirrup bar used
    pub stirrup: BarSize,
    /// Area of one stirrup bar Av (cm²)
    pub av_cm2: f64,
    /// Vs = Vu/φ − Vc, zero when not required (kgf)
    pub vs_required_kgf: f64,
    /// Spacing that exactly supplies Vs (cm); absent when not required
    pub s_required_cm: Option<f64>,
    /// Spacing limit min(d/2, 60) (cm)
    pub s_max_cm: f64,
    /// Design spacing (cm)
    pub spacing_cm: f64,
    /// Steel per unit length needed for Vs, Vs/(fy·d) (cm²/cm)
    pub av_over_s_required: f64,
    /// Minimum shear steel at the design spacing (cm²)
    pub av_min_cm2: f64,
    /// Av ≥ Av,min
    pub av_min_ok: bool,
    /// Shear carried by stirrups at the design spacing (kgf)
    pub vs_provided_kgf: f64,
    /// Upper limit on Vs, 2.1·√f'c·b·d (kgf)
    pub vs_limit_kgf: f64,

    // === Checks ===
    /// Design capacity φ·(Vc + Vs,provided) (kgf)
    pub phi_vn_kgf: f64,
    /// Vu / φVn
    pub shear_unity: f64,
    /// Vu ≤ φVn
    pub capacity_ok: bool,
    /// Vs,required ≤ Vs,max (section large enough for stirrups to work)
    pub section_ok: bool,
}

impl ShearResult {
    /// True if the section and stirrups carry Vu
    pub fn passes(&self) -> bool {
        self.capacity_ok && self.section_ok
    }
}

/// Shear design of a section once materials are resolved.
pub fn design(mat: &MaterialSet, section: &BeamSection, vu_kgf: f64, stirrup: BarSize) -> ShearResult {
    let (fc, fy) = (mat.fc(), mat.fy());
    let (b, d) = (section.width_cm, section.depth_cm);
    let av_cm2 = stirrup.area_cm2();

    let vc_kgf = concrete_shear_capacity(fc, b, d);
    let phi_vc_kgf = PHI_SHEAR * vc_kgf;
    let s_max_cm = max_stirrup_spacing(d);
    let stirrups_required = vu_kgf > phi_vc_kgf;

    let (vs_required_kgf, s_required_cm) = if stirrups_required {
        let vs = vu_kgf / PHI_SHEAR - vc_kgf;
        (vs, Some(stirrup_spacing(av_cm2, fy, d, vs)))
    } else {
        (0.0, None)
    };
    let spacing_cm = s_required_cm.map_or(s_max_cm, |s| s.min(s_max_cm));

    let vs_provided_kgf = if stirrups_required {
        stirrup_shear_capacity(av_cm2, fy, d, spacing_cm)
    } else {
        0.0
    };
    let av_min_cm2 = minimum_shear_steel(fc, b, spacing_cm, fy);
    let vs_limit_kgf = stirrup_shear_limit(fc, b, d);
    let phi_vn_kgf = PHI_SHEAR * (vc_kgf + vs_provided_kgf);

    ShearResult {
        vc_kgf,
        phi: PHI_SHEAR,
        phi_vc_kgf,
        vu_kgf,
        stirrups_required,
        stirrup,
        av_cm2,
        vs_required_kgf,
        s_required_cm,
        s_max_cm,
        spacing_cm,
        av_over_s_required: vs_required_kgf / (fy * d),
        av_min_cm2,
        av_min_ok: av_cm2 >= av_min_cm2,
        vs_provided_kgf,
        vs_limit_kgf,
        phi_vn_kgf,
        shear_unity: vu_kgf / phi_vn_kgf,
        capacity_ok: vu_kgf <= phi_vn_kgf * (1.0 + CHECK_TOLERANCE),
        section_ok: vs_required_kgf <= vs_limit_kgf,
    }
}

/// Design stirrups for a section.
pub fn calculate(input: &ShearInput, settings: &DesignSettings) -> CalcResult<ShearResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;

    let result = design(&mat, &input.section, input.vu_kgf, input.stirrup);

    debug!(
        label = %input.label,
        vc = result.vc_kgf,
        phi_vc = result.phi_vc_kgf,
        vs = result.vs_required_kgf,
        spacing = result.spacing_cm,
        "shear designed"
    );
    if !result.passes() {
        warn!(
            label = %input.label,
            vu = input.vu_kgf,
            phi_vn = result.phi_vn_kgf,
            vs_limit = result.vs_limit_kgf,
            "shear design does not verify"
        );
    }

    Ok(result)
}
