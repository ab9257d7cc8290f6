//! # Flexural Design
//!
//! Singly reinforced rectangular section under factored moment Mu
//! (ACI 318 / E.060, kgf and cm).
//!
//! ## Procedure
//!
//! 1. β1 from f'c
//! 2. ρ_b = 0.85·β1·(f'c/fy)·(6000/(6000 + fy))
//! 3. ρ_min = max(0.8·√f'c/fy, 14/fy), ρ_max = 0.75·ρ_b
//! 4. Working ratio ρ from [`WorkingRatioPolicy`] (midpoint of the range by default)
//! 5. As = ρ·b·d, a = As·fy/(0.85·f'c·b), Mn = As·fy·(d − a/2)
//! 6. φMn = 0.9·Mn, verified against Mu
//!
//! The working ratio is a policy choice, not a demand-based steel selection:
//! the reported As is the steel the policy places, and the check tells whether
//! it is enough.
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::calculations::flexure::{calculate, FlexureInput};
//! use rcdesign_core::calculations::section::BeamSection;
//! use rcdesign_core::materials::MaterialInput;
//! use rcdesign_core::settings::DesignSettings;
//!
//! let input = FlexureInput {
//!     label: "V-101".to_string(),
//!     material: MaterialInput { fc: 210.0, fy: 4200.0 },
//!     section: BeamSection::new(25.0, 54.0),
//!     mu_kgf_cm: 1_500_000.0,
//! };
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::section::BeamSection;
use crate::equations::{
    balanced_ratio, maximum_flexural_ratio, minimum_flexural_ratio, nominal_moment,
    stress_block_depth, PHI_FLEXURE,
};
use crate::errors::{require_non_negative, CalcResult};
use crate::materials::{self, MaterialInput, MaterialSet};
use crate::settings::{DesignSettings, WorkingRatioPolicy};

/// Input parameters for flexural design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-101",
///   "material": { "fc": 210.0, "fy": 4200.0 },
///   "section": { "width_cm": 25.0, "depth_cm": 54.0 },
///   "mu_kgf_cm": 1500000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexureInput {
    /// User label (e.g., "V-101")
    pub label: String,
    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,
    /// Section geometry
    pub section: BeamSection,
    /// Factored moment Mu (kgf·cm)
    pub mu_kgf_cm: f64,
}

impl FlexureInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        require_non_negative("mu_kgf_cm", self.mu_kgf_cm)
    }
}

/// Results from flexural design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexureResult {
    /// Stress-block depth factor β1
    pub beta1: f64,

    // === Reinforcement Ratios ===
    /// Balanced ratio ρ_b
    pub rho_balanced: f64,
    /// Minimum ratio ρ_min
    pub rho_min: f64,
    /// Maximum ratio ρ_max = 0.75·ρ_b
    pub rho_max: f64,
    /// Working ratio ρ chosen by the policy
    pub rho: f64,
    /// Policy that chose ρ
    pub working_ratio: WorkingRatioPolicy,

    // === Steel and Capacity ===
    /// Tension steel area As (cm²)
    pub as_cm2: f64,
    /// Equivalent stress-block depth a (cm)
    pub a_cm: f64,
    /// Nominal moment Mn (kgf·cm)
    pub mn_kgf_cm: f64,
    /// Strength reduction factor φ
    pub phi: f64,
    /// Design moment φMn (kgf·cm)
    pub phi_mn_kgf_cm: f64,
    /// Demand Mu (kgf·cm)
    pub mu_kgf_cm: f64,

    // === Checks ===
    /// Mu / φMn
    pub flexure_unity: f64,
    /// φMn ≥ Mu
    pub moment_ok: bool,
    /// ρ_min ≤ ρ ≤ ρ_max
    pub ratio_ok: bool,
}

impl FlexureResult {
    /// True if the section carries Mu with a ratio inside code bounds
    pub fn passes(&self) -> bool {
        self.moment_ok && self.ratio_ok
    }
}

/// Flexural design of a section once materials are resolved.
pub fn design(
    mat: &MaterialSet,
    section: &BeamSection,
    mu_kgf_cm: f64,
    policy: WorkingRatioPolicy,
) -> FlexureResult {
    let (fc, fy) = (mat.fc(), mat.fy());
    let (b, d) = (section.width_cm, section.depth_cm);
    let beta1 = mat.concrete.beta1;

    let rho_balanced = balanced_ratio(fc, fy, beta1);
    let rho_min = minimum_flexural_ratio(fc, fy);
    let rho_max = maximum_flexural_ratio(rho_balanced);
    let rho = policy.select(rho_min, rho_max);

    let as_cm2 = rho * b * d;
    let a_cm = stress_block_depth(as_cm2, fy, fc, b);
    let mn_kgf_cm = nominal_moment(as_cm2, fy, d, a_cm);
    let phi_mn_kgf_cm = PHI_FLEXURE * mn_kgf_cm;

    FlexureResult {
        beta1,
        rho_balanced,
        rho_min,
        rho_max,
        rho,
        working_ratio: policy,
        as_cm2,
        a_cm,
        mn_kgf_cm,
        phi: PHI_FLEXURE,
        phi_mn_kgf_cm,
        mu_kgf_cm,
        flexure_unity: mu_kgf_cm / phi_mn_kgf_cm,
        moment_ok: phi_mn_kgf_cm >= mu_kgf_cm,
        ratio_ok: rho >= rho_min && rho <= rho_max,
    }
}

/// Design a section for flexure.
pub fn calculate(input: &FlexureInput, settings: &DesignSettings) -> CalcResult<FlexureResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;

    let result = design(&mat, &input.section, input.mu_kgf_cm, settings.working_ratio);

    debug!(
        label = %input.label,
        rho = result.rho,
        as_cm2 = result.as_cm2,
        phi_mn = result.phi_mn_kgf_cm,
        "flexure designed"
    );
    if !result.passes() {
        warn!(
            label = %input.label,
            mu = input.mu_kgf_cm,
            phi_mn = result.phi_mn_kgf_cm,
            ratio_ok = result.ratio_ok,
            "flexural design does not verify"
        );
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

    fn input(fc: f64, mu: f64) -> FlexureInput {
        FlexureInput {
            label: "Test".to_string(),
            material: MaterialInput { fc, fy: 4200.0 },
            section: BeamSection::new(25.0, 54.0),
            mu_kgf_cm: mu,
        }
    }

    #[test]
    fn test_ratios_210_4200() {
        let result = calculate(&input(210.0, 1_000_000.0), &DesignSettings::default()).unwrap();
        assert_eq!(result.beta1, 0.85);
        assert!(approx_eq(result.rho_balanced, 0.02125, 1e-9));
        assert!(approx_eq(result.rho_min, 14.0 / 4200.0, 1e-12));
        assert!(approx_eq(result.rho_max, 0.75 * 0.02125, 1e-9));
        assert!(approx_eq(result.rho, (result.rho_min + result.rho_max) / 2.0, 1e-12));
        assert!(result.ratio_ok);
    }

    #[test]
    fn test_capacity_chain() {
        let result = calculate(&input(210.0, 1_000_000.0), &DesignSettings::default()).unwrap();
        let as_cm2 = result.rho * 25.0 * 54.0;
        let a = as_cm2 * 4200.0 / (0.85 * 210.0 * 25.0);
        let mn = as_cm2 * 4200.0 * (54.0 - a / 2.0);

        assert!(approx_eq(result.as_cm2, as_cm2, 1e-12));
        assert!(approx_eq(result.a_cm, a, 1e-12));
        assert!(approx_eq(result.mn_kgf_cm, mn, 1e-12));
        assert!(approx_eq(result.phi_mn_kgf_cm, 0.9 * mn, 1e-12));
        // ≈ 2.35e6 kgf·cm for this section
        assert!(approx_eq(result.phi_mn_kgf_cm, 2_354_000.0, 1e-3), "phiMn = {}", result.phi_mn_kgf_cm);
    }

    #[test]
    fn test_verification() {
        let ok = calculate(&input(210.0, 2_000_000.0), &DesignSettings::default()).unwrap();
        assert!(ok.moment_ok);
        assert!(ok.flexure_unity < 1.0);

        let fail = calculate(&input(210.0, 3_000_000.0), &DesignSettings::default()).unwrap();
        assert!(!fail.moment_ok);
        assert!(!fail.passes());
        assert!(fail.flexure_unity > 1.0);
    }

    #[test]
    fn test_beta1_high_strength() {
        let result = calculate(&input(350.0, 1_000_000.0), &DesignSettings::default()).unwrap();
        assert!(approx_eq(result.beta1, 0.80, 1e-12));
    }

    #[test]
    fn test_fixed_ratio_policy() {
        let settings = DesignSettings {
            working_ratio: WorkingRatioPolicy::Fixed { rho: 0.01 },
            ..DesignSettings::default()
        };
        let result = calculate(&input(210.0, 1_000_000.0), &settings).unwrap();
        assert_eq!(result.rho, 0.01);
        assert!(approx_eq(result.as_cm2, 13.5, 1e-12));
        assert!(result.ratio_ok);

        let settings = DesignSettings {
            working_ratio: WorkingRatioPolicy::Fixed { rho: 0.02 },
            ..DesignSettings::default()
        };
        let result = calculate(&input(210.0, 1_000_000.0), &settings).unwrap();
        assert!(!result.ratio_ok);
        assert!(!result.passes());
    }

    #[test]
    fn test_idempotent() {
        let a = calculate(&input(280.0, 1_750_000.0), &DesignSettings::default()).unwrap();
        let b = calculate(&input(280.0, 1_750_000.0), &DesignSettings::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&input(0.0, 1.0), &DesignSettings::default()).is_err());
        assert!(calculate(&input(210.0, -1.0), &DesignSettings::default()).is_err());
        let mut bad = input(210.0, 1.0);
        bad.section.depth_cm = 0.0;
        assert!(calculate(&bad, &DesignSettings::default()).is_err());
    }
}
