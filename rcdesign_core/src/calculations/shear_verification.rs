//! # Shear Verification and Stirrup Layout
//!
//! Shear check of a simply supported beam that, beyond [`shear`](super::shear):
//!
//! - derives Vu from service dead/live loads and the span when they are given,
//!   and takes the larger of the supplied and derived values
//! - reports φVc/2, below which no stirrups are needed at all
//! - lays the stirrups out in zones: a critical zone of length d at each
//!   support at the design spacing (half the span each when L < 2d), and the
//!   remaining length at min(d/2, 60 cm)
//!
//! ## Load Derivation
//!
//! Dead and live loads are area loads (kgf/m²) over the beam's width:
//!
//! ```text
//! w  = (CM + CV)·b/100     kgf/m   (b in cm)
//! Vu = w·L/2               kgf
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::section::BeamSection;
use crate::calculations::shear::{self, ShearResult};
use crate::equations::concrete::MAX_STIRRUP_SPACING_CM;
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{self, BarSize, MaterialInput};
use crate::settings::DesignSettings;
use crate::units::{Centimeters, Meters};

/// Input parameters for a shear verification.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-102",
///   "material": { "fc": 210.0, "fy": 4200.0 },
///   "section": { "width_cm": 25.0, "depth_cm": 54.0 },
///   "vu_kgf": 0.0,
///   "span_m": 6.0,
///   "dead_load_kgf_m2": 3000.0,
///   "live_load_kgf_m2": 2000.0,
///   "stirrup": "#3",
///   "stirrup_count": 30
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearVerificationInput {
    /// User label
    pub label: String,
    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,
    /// Section geometry
    pub section: BeamSection,
    /// Supplied factored shear Vu (kgf); may be zero when loads are given
    #[serde(default)]
    pub vu_kgf: f64,
    /// Clear span (m)
    pub span_m: f64,
    /// Dead load CM (kgf/m²)
    #[serde(default)]
    pub dead_load_kgf_m2: f64,
    /// Live load CV (kgf/m²)
    #[serde(default)]
    pub live_load_kgf_m2: f64,
    /// Stirrup bar size (#3 if omitted)
    #[serde(default)]
    pub stirrup: BarSize,
    /// Number of stirrups the designer intends to place along the span
    #[serde(default)]
    pub stirrup_count: Option<u32>,
}

impl ShearVerificationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        require_positive("span_m", self.span_m)?;
        require_non_negative("vu_kgf", self.vu_kgf)?;
        require_non_negative("dead_load_kgf_m2", self.dead_load_kgf_m2)?;
        require_non_negative("live_load_kgf_m2", self.live_load_kgf_m2)?;

        if self.vu_kgf == 0.0 && self.dead_load_kgf_m2 == 0.0 && self.live_load_kgf_m2 == 0.0 {
            return Err(CalcError::invalid_input(
                "vu_kgf",
                "0",
                "Give Vu or the dead/live loads it is derived from",
            ));
        }
        if self.stirrup_count == Some(0) {
            return Err(CalcError::invalid_input(
                "stirrup_count",
                "0",
                "Stirrup count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Line load from the area loads, w = (CM + CV)·b/100 (kgf/m)
    pub fn line_load_kgf_m(&self) -> f64 {
        (self.dead_load_kgf_m2 + self.live_load_kgf_m2) * self.section.width_cm / 100.0
    }
}

/// Stirrups over one zone of the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StirrupZone {
    /// Zone length (cm)
    pub length_cm: f64,
    /// Stirrup spacing (cm)
    pub spacing_cm: f64,
    /// Whole stirrups that fit, floor(length/spacing)
    pub stirrups: u32,
}

impl StirrupZone {
    fn new(length_cm: f64, spacing_cm: f64) -> Self {
        StirrupZone {
            length_cm,
            spacing_cm,
            stirrups: (length_cm / spacing_cm).floor() as u32,
        }
    }
}

/// Results from a shear verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearVerificationResult {
    // === Demand ===
    /// Line load from CM and CV (kgf/m), zero when no loads were given
    pub line_load_kgf_m: f64,
    /// Vu supplied by the caller (kgf)
    pub vu_supplied_kgf: f64,
    /// Vu = w·L/2 (kgf)
    pub vu_derived_kgf: f64,
    /// Governing Vu, the larger of the two (kgf)
    pub vu_kgf: f64,

    /// Section design at the governing Vu
    pub design: ShearResult,

    // === Thresholds ===
    /// φVc/2 (kgf)
    pub half_phi_vc_kgf: f64,
    /// Vu ≤ φVc/2: no stirrups needed by code
    pub below_half_capacity: bool,

    // === Layout ===
    /// Zone of length min(d, L/2) at each support, at the design spacing
    pub critical_zone: StirrupZone,
    /// Remaining length between the critical zones, at min(d/2, 60)
    pub non_critical_zone: StirrupZone,
    /// Spacing implied by the designer's stirrup count, L·100/count,
    /// capped at the design spacing (cm)
    pub layout_spacing_cm: Option<f64>,
}

impl ShearVerificationResult {
    /// True if the section and stirrups carry the governing Vu
    pub fn passes(&self) -> bool {
        self.design.passes()
    }

    /// Stirrups over the whole beam (both critical zones plus the middle)
    pub fn total_stirrups(&self) -> u32 {
        2 * self.critical_zone.stirrups + self.non_critical_zone.stirrups
    }
}

/// Verify shear and lay out stirrups.
pub fn calculate(
    input: &ShearVerificationInput,
    settings: &DesignSettings,
) -> CalcResult<ShearVerificationResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;

    let line_load_kgf_m = input.line_load_kgf_m();
    let vu_derived_kgf = line_load_kgf_m * input.span_m / 2.0;
    let vu_kgf = input.vu_kgf.max(vu_derived_kgf);

    let design = shear::design(&mat, &input.section, vu_kgf, input.stirrup);
    let half_phi_vc_kgf = design.phi_vc_kgf / 2.0;

    let d = input.section.depth_cm;
    let span = Centimeters::from(Meters(input.span_m));
    // Spans shorter than 2d are split evenly between the two support zones
    let critical = d.min((span / 2.0).value());
    let middle = (span - Centimeters(2.0 * critical)).value().max(0.0);
    let critical_zone = StirrupZone::new(critical, design.spacing_cm);
    let non_critical_zone = StirrupZone::new(middle, (d / 2.0).min(MAX_STIRRUP_SPACING_CM));

    let layout_spacing_cm = input
        .stirrup_count
        .map(|count| (span.value() / f64::from(count)).min(design.spacing_cm));

    let result = ShearVerificationResult {
        line_load_kgf_m,
        vu_supplied_kgf: input.vu_kgf,
        vu_derived_kgf,
        vu_kgf,
        half_phi_vc_kgf,
        below_half_capacity: vu_kgf <= half_phi_vc_kgf,
        critical_zone,
        non_critical_zone,
        layout_spacing_cm,
        design,
    };

    debug!(
        label = %input.label,
        vu = vu_kgf,
        phi_vc = result.design.phi_vc_kgf,
        spacing = result.design.spacing_cm,
        stirrups = result.total_stirrups(),
        "shear verified"
    );
    if !result.passes() {
        warn!(label = %input.label, vu = vu_kgf, "shear verification fails");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn input() -> ShearVerificationInput {
        ShearVerificationInput {
            label: "Test".to_string(),
            material: MaterialInput { fc: 210.0, fy: 4200.0 },
            section: BeamSection::new(25.0, 54.0),
            vu_kgf: 0.0,
            span_m: 6.0,
            dead_load_kgf_m2: 3000.0,
            live_load_kgf_m2: 2000.0,
            stirrup: BarSize::No3,
            stirrup_count: None,
        }
    }

    #[test]
    fn test_derived_shear() {
        let result = calculate(&input(), &DesignSettings::default()).unwrap();
        // w = 5000 * 25 / 100 = 1250 kgf/m, Vu = 1250 * 6 / 2 = 3750
        assert!(approx_eq(result.line_load_kgf_m, 1250.0, 1e-12));
        assert!(approx_eq(result.vu_derived_kgf, 3750.0, 1e-12));
        assert!(approx_eq(result.vu_kgf, 3750.0, 1e-12));
        assert!(result.below_half_capacity);
        assert!(!result.design.stirrups_required);
        assert!(result.passes());
    }

    #[test]
    fn test_supplied_shear_governs_when_larger() {
        let mut i = input();
        i.vu_kgf = 15_000.0;
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        assert_eq!(result.vu_kgf, 15_000.0);
        assert!(result.design.stirrups_required);
        assert!(!result.below_half_capacity);
        // Vs = Vu/φ − Vc
        let vs = 15_000.0 / 0.75 - result.design.vc_kgf;
        assert!(approx_eq(result.design.vs_required_kgf, vs, 1e-12));
    }

    #[test]
    fn test_shear_only_without_loads() {
        let mut i = input();
        i.dead_load_kgf_m2 = 0.0;
        i.live_load_kgf_m2 = 0.0;
        i.vu_kgf = 9000.0;
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        assert_eq!(result.line_load_kgf_m, 0.0);
        assert_eq!(result.vu_derived_kgf, 0.0);
        assert_eq!(result.vu_kgf, 9000.0);
    }

    #[test]
    fn test_zone_layout() {
        let mut i = input();
        i.vu_kgf = 15_000.0;
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        let s = result.design.spacing_cm;

        assert_eq!(result.critical_zone.length_cm, 54.0);
        assert_eq!(result.critical_zone.spacing_cm, s);
        assert_eq!(result.critical_zone.stirrups, (54.0 / s).floor() as u32);

        // 600 - 2*54 = 492 cm at 27 cm
        assert!(approx_eq(result.non_critical_zone.length_cm, 492.0, 1e-12));
        assert_eq!(result.non_critical_zone.spacing_cm, 27.0);
        assert_eq!(result.non_critical_zone.stirrups, 18);
        assert_eq!(
            result.total_stirrups(),
            2 * result.critical_zone.stirrups + 18
        );
    }

    #[test]
    fn test_short_span_has_no_middle_zone() {
        let mut i = input();
        i.span_m = 1.0;
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        assert_eq!(result.non_critical_zone.length_cm, 0.0);
        assert_eq!(result.non_critical_zone.stirrups, 0);
    }

    #[test]
    fn test_short_span_zones_fit_the_span() {
        let mut i = input();
        i.span_m = 0.8;
        i.vu_kgf = 15_000.0;
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        let s = result.design.spacing_cm;

        // 80 cm < 2d = 108 cm: each support zone takes half the span
        assert!(approx_eq(result.critical_zone.length_cm, 40.0, 1e-12));
        assert_eq!(result.non_critical_zone.length_cm, 0.0);
        assert!(approx_eq(
            2.0 * result.critical_zone.length_cm + result.non_critical_zone.length_cm,
            80.0,
            1e-12
        ));
        assert_eq!(
            result.critical_zone.stirrups,
            (result.critical_zone.length_cm / s).floor() as u32
        );
        assert!(f64::from(result.total_stirrups()) * s <= 80.0);
    }

    #[test]
    fn test_layout_spacing_from_count() {
        let mut i = input();
        i.stirrup_count = Some(30);
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        // 600 / 30 = 20 cm, under the 27 cm design spacing
        assert!(approx_eq(result.layout_spacing_cm.unwrap(), 20.0, 1e-12));

        i.stirrup_count = Some(10);
        let result = calculate(&i, &DesignSettings::default()).unwrap();
        // 60 cm is capped at the design spacing
        assert_eq!(result.layout_spacing_cm.unwrap(), result.design.spacing_cm);
    }

    #[test]
    fn test_minimum_steel_reported() {
        let result = calculate(&input(), &DesignSettings::default()).unwrap();
        let expected = 0.2 * 210f64.sqrt() * 25.0 * 27.0 / 4200.0;
        assert!(approx_eq(result.design.av_min_cm2, expected, 1e-12));
        assert!(result.design.av_min_ok);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut i = input();
        i.stirrup_count = Some(0);
        assert!(calculate(&i, &DesignSettings::default()).is_err());

        let mut i = input();
        i.dead_load_kgf_m2 = 0.0;
        i.live_load_kgf_m2 = 0.0;
        assert!(calculate(&i, &DesignSettings::default()).is_err());

        let mut i = input();
        i.span_m = 0.0;
        assert!(calculate(&i, &DesignSettings::default()).is_err());
    }
}
