//! # Predimensioning
//!
//! Rules of thumb for trial member sizes of a regular frame, ahead of any
//! analysis:
//!
//! - Slab thickness h = max(L/25, 0.17 m)
//! - Beam depth d = L/10, width b = max(0.3·d, 25 cm)
//! - Column area from the tributary load of a square plan of side L·bays,
//!   carried over all stories:
//!   - service: P = n·(CM + 0.25·CV)·(L·bays)², A = P/(0.45·f'c)
//!   - factored: P = n·(1.2·CM + 1.6·CV)·(L·bays)², A = P/(0.65·0.80·f'c)
//!   - the larger area governs; side = √A
//!
//! The ratios and minimums come from [`PredimensionSettings`](crate::settings::PredimensionSettings).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::section::BeamSection;
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{self, MaterialInput};
use crate::settings::DesignSettings;
use crate::units::{Centimeters, Meters};

/// Live load fraction in the service estimate
pub const SERVICE_LIVE_FRACTION: f64 = 0.25;

/// Allowable stress fraction of f'c under service load
pub const SERVICE_STRESS_FRACTION: f64 = 0.45;

/// Allowable stress fraction of f'c under factored load (φ·0.80)
pub const FACTORED_STRESS_FRACTION: f64 = 0.65 * 0.80;

/// Dead and live load factors
pub const DEAD_LOAD_FACTOR: f64 = 1.2;
pub const LIVE_LOAD_FACTOR: f64 = 1.6;

/// Input parameters for predimensioning.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Frame A",
///   "span_m": 6.0,
///   "stories": 4,
///   "bays": 3,
///   "dead_load_kgf_m2": 500.0,
///   "live_load_kgf_m2": 250.0,
///   "material": { "fc": 210.0, "fy": 4200.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredimensionInput {
    /// User label
    pub label: String,
    /// Typical beam span L (m)
    pub span_m: f64,
    /// Number of stories n
    pub stories: u32,
    /// Number of bays
    pub bays: u32,
    /// Dead load CM (kgf/m²)
    pub dead_load_kgf_m2: f64,
    /// Live load CV (kgf/m²)
    pub live_load_kgf_m2: f64,
    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,
}

impl PredimensionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_non_negative("dead_load_kgf_m2", self.dead_load_kgf_m2)?;
        require_non_negative("live_load_kgf_m2", self.live_load_kgf_m2)?;
        if self.stories == 0 {
            return Err(CalcError::invalid_input("stories", "0", "At least one story"));
        }
        if self.bays == 0 {
            return Err(CalcError::invalid_input("bays", "0", "At least one bay"));
        }
        if self.dead_load_kgf_m2 + self.live_load_kgf_m2 == 0.0 {
            return Err(CalcError::invalid_input(
                "dead_load_kgf_m2",
                "0",
                "Dead and live loads are both zero",
            ));
        }
        Ok(())
    }
}

/// Which load estimate sized the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningLoad {
    Service,
    Factored,
}

/// Results from predimensioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredimensionResult {
    // === Slab ===
    /// Slab thickness h (m)
    pub slab_thickness_m: f64,

    // === Beam ===
    /// Beam depth d (cm)
    pub beam_depth_cm: f64,
    /// Beam width b (cm)
    pub beam_width_cm: f64,

    // === Column ===
    /// Service load estimate (kgf)
    pub service_load_kgf: f64,
    /// Factored load estimate (kgf)
    pub factored_load_kgf: f64,
    /// Area from the service estimate (cm²)
    pub column_area_service_cm2: f64,
    /// Area from the factored estimate (cm²)
    pub column_area_factored_cm2: f64,
    /// Governing column area (cm²)
    pub column_area_cm2: f64,
    /// Square column side (cm)
    pub column_side_cm: f64,
    /// Estimate that governs the column area
    pub governing: GoverningLoad,
}

impl PredimensionResult {
    /// Trial beam section for the section-design routines
    pub fn beam_section(&self) -> BeamSection {
        BeamSection::new(self.beam_width_cm, self.beam_depth_cm)
    }
}

/// Estimate trial member sizes.
pub fn calculate(input: &PredimensionInput, settings: &DesignSettings) -> CalcResult<PredimensionResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;
    let rules = &settings.predimension;

    let slab_thickness_m = (input.span_m / rules.slab_span_ratio).max(rules.min_slab_thickness_m);

    let span_cm = Centimeters::from(Meters(input.span_m));
    let beam_depth_cm = (span_cm / rules.beam_span_ratio).value();
    let beam_width_cm = (rules.beam_width_ratio * beam_depth_cm).max(rules.min_beam_width_cm);

    let stories = f64::from(input.stories);
    let tributary_m2 = (input.span_m * f64::from(input.bays)).powi(2);
    let (cm, cv) = (input.dead_load_kgf_m2, input.live_load_kgf_m2);

    let service_load_kgf = stories * (cm + SERVICE_LIVE_FRACTION * cv) * tributary_m2;
    let factored_load_kgf = stories * (DEAD_LOAD_FACTOR * cm + LIVE_LOAD_FACTOR * cv) * tributary_m2;
    let column_area_service_cm2 = service_load_kgf / (SERVICE_STRESS_FRACTION * mat.fc());
    let column_area_factored_cm2 = factored_load_kgf / (FACTORED_STRESS_FRACTION * mat.fc());

    let (column_area_cm2, governing) = if column_area_service_cm2 >= column_area_factored_cm2 {
        (column_area_service_cm2, GoverningLoad::Service)
    } else {
        (column_area_factored_cm2, GoverningLoad::Factored)
    };
    let column_side_cm = column_area_cm2.sqrt();

    debug!(
        label = %input.label,
        h = slab_thickness_m,
        b = beam_width_cm,
        d = beam_depth_cm,
        column_side = column_side_cm,
        "members predimensioned"
    );

    Ok(PredimensionResult {
        slab_thickness_m,
        beam_depth_cm,
        beam_width_cm,
        service_load_kgf,
        factored_load_kgf,
        column_area_service_cm2,
        column_area_factored_cm2,
        column_area_cm2,
        column_side_cm,
        governing,
    })
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

    fn input(span_m: f64) -> PredimensionInput {
        PredimensionInput {
            label: "Test".to_string(),
            span_m,
            stories: 4,
            bays: 1,
            dead_load_kgf_m2: 500.0,
            live_load_kgf_m2: 250.0,
            material: MaterialInput { fc: 210.0, fy: 4200.0 },
        }
    }

    #[test]
    fn test_slab_thickness() {
        // 6/25 = 0.24
        let result = calculate(&input(6.0), &DesignSettings::default()).unwrap();
        assert!(approx_eq(result.slab_thickness_m, 0.24, 1e-12));
        // 3/25 = 0.12, minimum 0.17 governs
        let result = calculate(&input(3.0), &DesignSettings::default()).unwrap();
        assert_eq!(result.slab_thickness_m, 0.17);
    }

    #[test]
    fn test_beam_section() {
        let result = calculate(&input(6.0), &DesignSettings::default()).unwrap();
        assert!(approx_eq(result.beam_depth_cm, 60.0, 1e-12));
        assert_eq!(result.beam_width_cm, 25.0);

        let result = calculate(&input(10.0), &DesignSettings::default()).unwrap();
        assert!(approx_eq(result.beam_depth_cm, 100.0, 1e-12));
        assert!(approx_eq(result.beam_width_cm, 30.0, 1e-12));
        assert_eq!(result.beam_section(), BeamSection::new(result.beam_width_cm, result.beam_depth_cm));
    }

    #[test]
    fn test_column_area() {
        let result = calculate(&input(6.0), &DesignSettings::default()).unwrap();
        // Service: 4 * (500 + 62.5) * 36 = 81,000; A = 81,000 / 94.5 = 857.14
        // Factored: 4 * (600 + 400) * 36 = 144,000; A = 144,000 / 109.2 = 1318.68
        assert!(approx_eq(result.service_load_kgf, 81_000.0, 1e-12));
        assert!(approx_eq(result.factored_load_kgf, 144_000.0, 1e-12));
        assert!(approx_eq(result.column_area_service_cm2, 81_000.0 / (0.45 * 210.0), 1e-12));
        assert!(approx_eq(result.column_area_factored_cm2, 144_000.0 / (0.52 * 210.0), 1e-12));
        assert_eq!(result.governing, GoverningLoad::Factored);
        assert!(approx_eq(result.column_side_cm, result.column_area_factored_cm2.sqrt(), 1e-12));
    }

    #[test]
    fn test_custom_rules() {
        let mut settings = DesignSettings::default();
        settings.predimension.beam_span_ratio = 12.0;
        settings.predimension.min_slab_thickness_m = 0.20;
        let result = calculate(&input(6.0), &settings).unwrap();
        assert!(approx_eq(result.beam_depth_cm, 50.0, 1e-12));
        assert!(approx_eq(result.slab_thickness_m, 0.24, 1e-12));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut i = input(6.0);
        i.stories = 0;
        assert!(calculate(&i, &DesignSettings::default()).is_err());
        let mut i = input(6.0);
        i.bays = 0;
        assert!(calculate(&i, &DesignSettings::default()).is_err());
        assert!(calculate(&input(-1.0), &DesignSettings::default()).is_err());
    }
}
