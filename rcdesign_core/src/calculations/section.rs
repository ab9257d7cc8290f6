//! Rectangular beam section geometry shared by the section-design routines.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Rectangular beam cross-section.
///
/// ## JSON Example
///
/// ```json
/// { "width_cm": 25.0, "depth_cm": 54.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    /// Web width b (cm)
    pub width_cm: f64,
    /// Effective depth d (cm), extreme compression fiber to tension steel
    pub depth_cm: f64,
}

impl BeamSection {
    pub fn new(width_cm: f64, depth_cm: f64) -> Self {
        BeamSection { width_cm, depth_cm }
    }

    /// Validate dimensions.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("section.width_cm", self.width_cm)?;
        require_positive("section.depth_cm", self.depth_cm)
    }

    /// Effective area b·d (cm²)
    pub fn effective_area_cm2(&self) -> f64 {
        self.width_cm * self.depth_cm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_area() {
        assert_eq!(BeamSection::new(25.0, 54.0).effective_area_cm2(), 1350.0);
    }

    #[test]
    fn test_validate() {
        assert!(BeamSection::new(25.0, 54.0).validate().is_ok());
        let err = BeamSection::new(0.0, 54.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(BeamSection::new(25.0, f64::NAN).validate().is_err());
    }
}
