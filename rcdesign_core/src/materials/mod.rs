//! # Materials
//!
//! Physical constants of concrete and reinforcing steel derived from the two
//! strengths a designer specifies: f'c and fy (both kgf/cm²).
//!
//! ## Concrete (ACI 318 / E.060, metric-technical form)
//!
//! - Ec = 15000·√f'c
//! - εcu = 0.003
//! - fr = 2·√f'c
//! - β1 = 0.85 for f'c ≤ 280, otherwise 0.85 − 0.05·(f'c − 280)/70, not below 0.65
//!
//! ## Steel
//!
//! - Es = 2,000,000 kgf/cm²
//! - εy = fy/Es
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::materials::MaterialSet;
//!
//! let mat = MaterialSet::new(350.0, 4200.0).unwrap();
//! assert!((mat.concrete.beta1 - 0.80).abs() < 1e-12);
//! assert!((mat.steel.ey - 0.0021).abs() < 1e-12);
//! ```

pub mod rebar;

pub use rebar::BarSize;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Ultimate concrete compressive strain
pub const CONCRETE_ULTIMATE_STRAIN: f64 = 0.003;

/// Modulus of elasticity of reinforcing steel (kgf/cm²)
pub const STEEL_ELASTIC_MODULUS: f64 = 2_000_000.0;

/// Stress-block depth factor β1 for a given f'c (kgf/cm²).
pub fn beta1(fc: f64) -> f64 {
    if fc <= 280.0 {
        0.85
    } else {
        (0.85 - 0.05 * ((fc - 280.0) / 70.0)).max(0.65)
    }
}

/// Concrete properties derived from f'c.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Specified compressive strength f'c (kgf/cm²)
    pub fc: f64,
    /// Modulus of elasticity Ec = 15000·√f'c (kgf/cm²)
    pub ec: f64,
    /// Ultimate strain εcu
    pub ecu: f64,
    /// Modulus of rupture fr = 2·√f'c (kgf/cm²)
    pub fr: f64,
    /// Stress-block depth factor β1
    pub beta1: f64,
}

impl ConcreteProperties {
    /// Derive concrete properties, rejecting non-positive strengths.
    pub fn from_fc(fc: f64) -> CalcResult<Self> {
        require_positive("fc", fc)?;
        let root = fc.sqrt();
        Ok(ConcreteProperties {
            fc,
            ec: 15_000.0 * root,
            ecu: CONCRETE_ULTIMATE_STRAIN,
            fr: 2.0 * root,
            beta1: beta1(fc),
        })
    }
}

/// Steel properties derived from fy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Yield strength fy (kgf/cm²)
    pub fy: f64,
    /// Modulus of elasticity Es (kgf/cm²)
    pub es: f64,
    /// Yield strain εy = fy/Es
    pub ey: f64,
}

impl SteelProperties {
    /// Derive steel properties, rejecting non-positive strengths.
    pub fn from_fy(fy: f64) -> CalcResult<Self> {
        require_positive("fy", fy)?;
        Ok(SteelProperties {
            fy,
            es: STEEL_ELASTIC_MODULUS,
            ey: fy / STEEL_ELASTIC_MODULUS,
        })
    }
}

/// Concrete and steel constants for one calculation run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "concrete": { "fc": 210.0, "ec": 217370.65, "ecu": 0.003, "fr": 28.98, "beta1": 0.85 },
///   "steel": { "fy": 4200.0, "es": 2000000.0, "ey": 0.0021 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSet {
    pub concrete: ConcreteProperties,
    pub steel: SteelProperties,
}

impl MaterialSet {
    /// Derive the full material set from (f'c, fy).
    pub fn new(fc: f64, fy: f64) -> CalcResult<Self> {
        Ok(MaterialSet {
            concrete: ConcreteProperties::from_fc(fc)?,
            steel: SteelProperties::from_fy(fy)?,
        })
    }

    /// f'c shorthand
    pub fn fc(&self) -> f64 {
        self.concrete.fc
    }

    /// fy shorthand
    pub fn fy(&self) -> f64 {
        self.steel.fy
    }
}

/// Material request as it appears in a calculation batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    /// Concrete compressive strength f'c (kgf/cm²)
    pub fc: f64,
    /// Steel yield strength fy (kgf/cm²)
    pub fy: f64,
}

/// Evaluate a material request.
pub fn calculate(input: &MaterialInput) -> CalcResult<MaterialSet> {
    MaterialSet::new(input.fc, input.fy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1_normal_strength() {
        assert_eq!(beta1(175.0), 0.85);
        assert_eq!(beta1(210.0), 0.85);
        assert_eq!(beta1(280.0), 0.85);
    }

    #[test]
    fn test_beta1_high_strength() {
        assert!((beta1(350.0) - 0.80).abs() < 1e-12);
        assert!((beta1(420.0) - 0.75).abs() < 1e-12);
        // Floor at 0.65
        assert_eq!(beta1(700.0), 0.65);
        assert_eq!(beta1(1000.0), 0.65);
    }

    #[test]
    fn test_concrete_properties() {
        let c = ConcreteProperties::from_fc(210.0).unwrap();
        // Ec = 15000 * sqrt(210) = 217,370.65
        assert!((c.ec - 217_370.65).abs() < 0.1, "Ec = {}", c.ec);
        // fr = 2 * sqrt(210) = 28.98
        assert!((c.fr - 28.98).abs() < 0.01, "fr = {}", c.fr);
        assert_eq!(c.ecu, 0.003);
    }

    #[test]
    fn test_steel_properties() {
        let s = SteelProperties::from_fy(4200.0).unwrap();
        assert_eq!(s.es, 2_000_000.0);
        assert!((s.ey - 0.0021).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_strength() {
        assert!(MaterialSet::new(0.0, 4200.0).is_err());
        assert!(MaterialSet::new(210.0, -4200.0).is_err());
    }

    #[test]
    fn test_material_set_serialization() {
        let mat = MaterialSet::new(210.0, 4200.0).unwrap();
        let json = serde_json::to_string(&mat).unwrap();
        let roundtrip: MaterialSet = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);
    }
}
