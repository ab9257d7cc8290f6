//! # Combined Beam Design
//!
//! Flexure and shear design of one beam section in a single request, with an
//! overall verdict. Both parts share the material set and section geometry.
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::calculations::beam_design::{calculate, BeamDesignInput};
//! use rcdesign_core::calculations::section::BeamSection;
//! use rcdesign_core::materials::{BarSize, MaterialInput};
//! use rcdesign_core::settings::DesignSettings;
//!
//! let input = BeamDesignInput {
//!     label: "V-103".to_string(),
//!     material: MaterialInput { fc: 210.0, fy: 4200.0 },
//!     section: BeamSection::new(25.0, 54.0),
//!     mu_kgf_cm: 1_800_000.0,
//!     vu_kgf: 12_000.0,
//!     stirrup: BarSize::No3,
//! };
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::flexure::{self, FlexureResult};
use crate::calculations::section::BeamSection;
use crate::calculations::shear::{self, ShearResult};
use crate::errors::{require_non_negative, CalcResult};
use crate::materials::{self, BarSize, MaterialInput};
use crate::settings::DesignSettings;

/// Input parameters for combined flexure and shear design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignInput {
    /// User label
    pub label: String,
    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,
    /// Section geometry
    pub section: BeamSection,
    /// Factored moment Mu (kgf·cm)
    pub mu_kgf_cm: f64,
    /// Factored shear Vu (kgf)
    pub vu_kgf: f64,
    /// Stirrup bar size (#3 if omitted)
    #[serde(default)]
    pub stirrup: BarSize,
}

impl BeamDesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        require_non_negative("mu_kgf_cm", self.mu_kgf_cm)?;
        require_non_negative("vu_kgf", self.vu_kgf)
    }
}

/// Results from combined beam design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignResult {
    pub flexure: FlexureResult,
    pub shear: ShearResult,
}

impl BeamDesignResult {
    /// True if both flexure and shear verify
    pub fn passes(&self) -> bool {
        self.flexure.passes() && self.shear.passes()
    }

    /// Get the governing (highest) unity ratio
    pub fn governing_unity(&self) -> f64 {
        self.flexure.flexure_unity.max(self.shear.shear_unity)
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        if self.flexure.flexure_unity >= self.shear.shear_unity {
            "Flexure"
        } else {
            "Shear"
        }
    }
}

/// Design a beam section for flexure and shear.
pub fn calculate(input: &BeamDesignInput, settings: &DesignSettings) -> CalcResult<BeamDesignResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;

    let result = BeamDesignResult {
        flexure: flexure::design(&mat, &input.section, input.mu_kgf_cm, settings.working_ratio),
        shear: shear::design(&mat, &input.section, input.vu_kgf, input.stirrup),
    };

    debug!(
        label = %input.label,
        as_cm2 = result.flexure.as_cm2,
        spacing = result.shear.spacing_cm,
        governing = result.governing_condition(),
        "beam designed"
    );
    if !result.passes() {
        warn!(
            label = %input.label,
            unity = result.governing_unity(),
            governing = result.governing_condition(),
            "beam design does not verify"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WorkingRatioPolicy;

    fn input(mu: f64, vu: f64) -> BeamDesignInput {
        BeamDesignInput {
            label: "Test".to_string(),
            material: MaterialInput { fc: 210.0, fy: 4200.0 },
            section: BeamSection::new(25.0, 54.0),
            mu_kgf_cm: mu,
            vu_kgf: vu,
            stirrup: BarSize::No3,
        }
    }

    #[test]
    fn test_matches_separate_designs() {
        let settings = DesignSettings::default();
        let combined = calculate(&input(1_800_000.0, 12_000.0), &settings).unwrap();

        let f = flexure::calculate(
            &flexure::FlexureInput {
                label: "F".to_string(),
                material: MaterialInput { fc: 210.0, fy: 4200.0 },
                section: BeamSection::new(25.0, 54.0),
                mu_kgf_cm: 1_800_000.0,
            },
            &settings,
        )
        .unwrap();
        assert_eq!(combined.flexure, f);
        assert!(combined.shear.stirrups_required);
    }

    #[test]
    fn test_legacy_one_percent_ratio() {
        let settings = DesignSettings {
            working_ratio: WorkingRatioPolicy::Fixed { rho: 0.01 },
            ..DesignSettings::default()
        };
        let result = calculate(&input(1_800_000.0, 5_000.0), &settings).unwrap();
        assert!((result.flexure.as_cm2 - 13.5).abs() < 1e-9);
        assert!(result.passes());
    }

    #[test]
    fn test_governing_condition() {
        let result = calculate(&input(3_000_000.0, 5_000.0), &DesignSettings::default()).unwrap();
        assert!(!result.passes());
        assert_eq!(result.governing_condition(), "Flexure");
        assert!(result.governing_unity() > 1.0);

        let result = calculate(&input(100_000.0, 45_000.0), &DesignSettings::default()).unwrap();
        assert!(!result.passes());
        assert!(!result.shear.section_ok);
    }
}
