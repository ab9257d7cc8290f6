//! # Reinforced-Concrete Section Formulas
//!
//! Capacity and reinforcement-ratio expressions from ACI 318 / E.060 in
//! metric-technical units (kgf, cm, kgf/cm²). The constants 0.53, 0.2, 2.1
//! and 6000 are the kgf/cm² forms of the ACI expressions.
//!
//! ## References
//!
//! - ACI 318-19 §21.2 (strength reduction factors)
//! - ACI 318-19 §22.2 (flexural strength, equivalent stress block)
//! - ACI 318-19 §22.4 (axial strength)
//! - ACI 318-19 §22.5 (one-way shear), §22.6 (two-way shear)
//! - ACI 318-19 §9.6, §9.7 (minimum steel, spacing limits)

/// Strength reduction factor for tension-controlled flexure
pub const PHI_FLEXURE: f64 = 0.90;

/// Strength reduction factor for shear
pub const PHI_SHEAR: f64 = 0.75;

/// Strength reduction factor for compression-controlled tied members
pub const PHI_TIED_COLUMN: f64 = 0.65;

/// Absolute cap on stirrup spacing (cm)
pub const MAX_STIRRUP_SPACING_CM: f64 = 60.0;

/// Column longitudinal steel ratio bounds
pub const COLUMN_RHO_MIN: f64 = 0.01;
pub const COLUMN_RHO_MAX: f64 = 0.06;

// =============================================================================
// FLEXURE
// =============================================================================

/// Balanced reinforcement ratio
///
/// ρ_b = 0.85·β1·(f'c/fy)·(6000/(6000 + fy))
#[inline]
pub fn balanced_ratio(fc: f64, fy: f64, beta1: f64) -> f64 {
    0.85 * beta1 * (fc / fy) * (6000.0 / (6000.0 + fy))
}

/// Minimum flexural reinforcement ratio: max(0.8·√f'c/fy, 14/fy)
#[inline]
pub fn minimum_flexural_ratio(fc: f64, fy: f64) -> f64 {
    (0.8 * fc.sqrt() / fy).max(14.0 / fy)
}

/// Maximum flexural reinforcement ratio: 0.75·ρ_b
#[inline]
pub fn maximum_flexural_ratio(rho_b: f64) -> f64 {
    0.75 * rho_b
}

/// Depth of the equivalent stress block: a = As·fy/(0.85·f'c·b)
#[inline]
pub fn stress_block_depth(as_cm2: f64, fy: f64, fc: f64, b: f64) -> f64 {
    as_cm2 * fy / (0.85 * fc * b)
}

/// Nominal flexural strength: Mn = As·fy·(d - a/2)
#[inline]
pub fn nominal_moment(as_cm2: f64, fy: f64, d: f64, a: f64) -> f64 {
    as_cm2 * fy * (d - a / 2.0)
}

// =============================================================================
// SHEAR
// =============================================================================

/// Nominal one-way shear strength of concrete: Vc = 0.53·√f'c·b·d
#[inline]
pub fn concrete_shear_capacity(fc: f64, b: f64, d: f64) -> f64 {
    0.53 * fc.sqrt() * b * d
}

/// Maximum stirrup spacing: min(d/2, 60 cm)
#[inline]
pub fn max_stirrup_spacing(d: f64) -> f64 {
    (d / 2.0).min(MAX_STIRRUP_SPACING_CM)
}

/// Stirrup spacing needed to supply Vs: s = Av·fy·d/Vs
#[inline]
pub fn stirrup_spacing(av: f64, fy: f64, d: f64, vs: f64) -> f64 {
    av * fy * d / vs
}

/// Shear carried by stirrups at spacing s: Vs = Av·fy·d/s
#[inline]
pub fn stirrup_shear_capacity(av: f64, fy: f64, d: f64, s: f64) -> f64 {
    av * fy * d / s
}

/// Minimum shear reinforcement area: Av,min = 0.2·√f'c·b·s/fy
#[inline]
pub fn minimum_shear_steel(fc: f64, b: f64, s: f64, fy: f64) -> f64 {
    0.2 * fc.sqrt() * b * s / fy
}

/// Upper limit on stirrup shear: Vs,max = 2.1·√f'c·b·d
#[inline]
pub fn stirrup_shear_limit(fc: f64, b: f64, d: f64) -> f64 {
    2.1 * fc.sqrt() * b * d
}

// =============================================================================
// AXIAL
// =============================================================================

/// Unreduced axial strength: Po = 0.85·f'c·(Ag - Ast) + Ast·fy
#[inline]
pub fn column_squash_load(fc: f64, fy: f64, ag: f64, ast: f64) -> f64 {
    0.85 * fc * (ag - ast) + ast * fy
}

/// Tie spacing limit: min(16·d_bar, 48·d_tie, least column side)
#[inline]
pub fn tie_spacing_limit(bar_diameter: f64, tie_diameter: f64, least_side: f64) -> f64 {
    (16.0 * bar_diameter).min(48.0 * tie_diameter).min(least_side)
}

// =============================================================================
// TWO-WAY SHEAR
// =============================================================================

/// Critical punching perimeter around a square column: b0 = 4·(c + d)
#[inline]
pub fn punching_perimeter(column_side: f64, d: f64) -> f64 {
    4.0 * (column_side + d)
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

    #[test]
    fn test_balanced_ratio_210_4200() {
        // 0.85 * 0.85 * (210/4200) * (6000/10200) = 0.02125
        let rho_b = balanced_ratio(210.0, 4200.0, 0.85);
        assert!(approx_eq(rho_b, 0.02125, 1e-3), "rho_b = {}", rho_b);
    }

    #[test]
    fn test_minimum_ratio_governed_by_14_over_fy() {
        // 0.8*sqrt(210)/4200 = 0.00276, 14/4200 = 0.00333
        let rho_min = minimum_flexural_ratio(210.0, 4200.0);
        assert!(approx_eq(rho_min, 14.0 / 4200.0, 1e-9));
    }

    #[test]
    fn test_minimum_ratio_governed_by_root_fc() {
        // f'c = 350: 0.8*sqrt(350)/4200 = 0.003563 > 0.003333
        let rho_min = minimum_flexural_ratio(350.0, 4200.0);
        assert!(approx_eq(rho_min, 0.8 * 350f64.sqrt() / 4200.0, 1e-9));
    }

    #[test]
    fn test_concrete_shear_capacity() {
        // 0.53 * sqrt(210) * 25 * 54 = 10,368.6
        let vc = concrete_shear_capacity(210.0, 25.0, 54.0);
        assert!(approx_eq(vc, 0.53 * 210f64.sqrt() * 1350.0, 1e-12));
        assert!((vc - 10_368.6).abs() < 1.0, "Vc = {}", vc);
    }

    #[test]
    fn test_max_stirrup_spacing() {
        assert_eq!(max_stirrup_spacing(54.0), 27.0);
        assert_eq!(max_stirrup_spacing(150.0), 60.0);
    }

    #[test]
    fn test_stirrup_spacing_inverse() {
        let s = stirrup_spacing(0.71, 4200.0, 54.0, 5000.0);
        let vs = stirrup_shear_capacity(0.71, 4200.0, 54.0, s);
        assert!(approx_eq(vs, 5000.0, 1e-12));
    }

    #[test]
    fn test_column_squash_load() {
        // 0.85*210*(900-9) + 9*4200 = 159,043.5 + 37,800
        let po = column_squash_load(210.0, 4200.0, 900.0, 9.0);
        assert!(approx_eq(po, 196_843.5, 1e-9));
    }

    #[test]
    fn test_tie_spacing_limit() {
        // 16*1.91 = 30.56, 48*0.95 = 45.6, side 30
        assert!(approx_eq(tie_spacing_limit(1.91, 0.95, 30.0), 30.0, 1e-12));
        assert!(approx_eq(tie_spacing_limit(1.91, 0.95, 40.0), 30.56, 1e-9));
    }

    #[test]
    fn test_punching_perimeter() {
        assert_eq!(punching_perimeter(25.0, 30.0), 220.0);
    }
}
