//! # Simplified Static Base Shear
//!
//! Equivalent static lateral force per Peruvian Standard E.030:
//!
//! ```text
//! V = (Z·U·C·S / R)·W
//! ```
//!
//! - Z: zone factor, from the zone code
//! - S: soil factor, from the soil profile code
//! - U: importance factor, supplied directly
//! - C, R: from [`SeismicSettings`](crate::settings::SeismicSettings).
//!   C = 2.5 and R = 7.0 by default; neither comes from a response spectrum
//!   unless `Amplification::FromPeriod` is selected.
//!
//! W is the estimated total weight in tonnes; V is reported in kgf and tf.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::DesignSettings;
use crate::units::{Kgf, TonnesForce};

/// Seismic zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SeismicZone {
    Z1,
    Z2,
    Z3,
    Z4,
}

impl SeismicZone {
    /// All zones, lowest hazard first
    pub const ALL: [SeismicZone; 4] = [SeismicZone::Z1, SeismicZone::Z2, SeismicZone::Z3, SeismicZone::Z4];

    /// Zone factor Z
    pub fn factor(&self) -> f64 {
        match self {
            SeismicZone::Z1 => 0.10,
            SeismicZone::Z2 => 0.15,
            SeismicZone::Z3 => 0.25,
            SeismicZone::Z4 => 0.35,
        }
    }

    /// Code (e.g., "Z3")
    pub fn code(&self) -> &'static str {
        match self {
            SeismicZone::Z1 => "Z1",
            SeismicZone::Z2 => "Z2",
            SeismicZone::Z3 => "Z3",
            SeismicZone::Z4 => "Z4",
        }
    }
}

impl fmt::Display for SeismicZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SeismicZone {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        SeismicZone::ALL
            .iter()
            .copied()
            .find(|zone| zone.code().eq_ignore_ascii_case(key))
            .ok_or_else(|| CalcError::unsupported_code("seismic zone", s))
    }
}

impl TryFrom<String> for SeismicZone {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Soil profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SoilProfile {
    /// Rock or very stiff soil
    S1,
    /// Intermediate soil
    S2,
    /// Soft soil
    S3,
    /// Exceptional conditions
    S4,
}

impl SoilProfile {
    /// All profiles, stiffest first
    pub const ALL: [SoilProfile; 4] = [SoilProfile::S1, SoilProfile::S2, SoilProfile::S3, SoilProfile::S4];

    /// Soil factor S
    pub fn factor(&self) -> f64 {
        match self {
            SoilProfile::S1 => 0.8,
            SoilProfile::S2 => 1.0,
            SoilProfile::S3 => 1.2,
            SoilProfile::S4 => 1.4,
        }
    }

    /// Code (e.g., "S2")
    pub fn code(&self) -> &'static str {
        match self {
            SoilProfile::S1 => "S1",
            SoilProfile::S2 => "S2",
            SoilProfile::S3 => "S3",
            SoilProfile::S4 => "S4",
        }
    }
}

impl fmt::Display for SoilProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SoilProfile {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        SoilProfile::ALL
            .iter()
            .copied()
            .find(|soil| soil.code().eq_ignore_ascii_case(key))
            .ok_or_else(|| CalcError::unsupported_code("soil profile", s))
    }
}

impl TryFrom<String> for SoilProfile {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Input parameters for a base shear estimate.
///
/// ## JSON Example
///
/// ```json
/// { "label": "Block A", "zone": "Z3", "soil": "S2", "importance_u": 1.0, "weight_t": 500.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicInput {
    /// User label
    pub label: String,
    /// Seismic zone
    pub zone: SeismicZone,
    /// Soil profile
    pub soil: SoilProfile,
    /// Importance factor U
    pub importance_u: f64,
    /// Estimated total weight W (t)
    pub weight_t: f64,
}

impl SeismicInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("importance_u", self.importance_u)?;
        require_positive("weight_t", self.weight_t)
    }
}

/// Results from a base shear estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicResult {
    pub z: f64,
    pub s: f64,
    pub u: f64,
    pub c: f64,
    pub r: f64,
    /// Seismic coefficient ZUCS/R
    pub coefficient: f64,
    /// Base shear (kgf)
    pub base_shear_kgf: Kgf,
    /// Base shear (tf)
    pub base_shear_tf: TonnesForce,
}

/// Estimate the static base shear.
pub fn calculate(input: &SeismicInput, settings: &DesignSettings) -> CalcResult<SeismicResult> {
    input.validate()?;
    settings.validate()?;

    let z = input.zone.factor();
    let s = input.soil.factor();
    let u = input.importance_u;
    let c = settings.seismic.amplification.coefficient();
    let r = settings.seismic.reduction_r;

    let coefficient = z * u * c * s / r;
    let base_shear_tf = TonnesForce(coefficient * input.weight_t);
    let base_shear_kgf = Kgf::from(base_shear_tf);

    debug!(
        label = %input.label,
        zone = %input.zone,
        soil = %input.soil,
        coefficient,
        v_tf = base_shear_tf.value(),
        "base shear estimated"
    );

    Ok(SeismicResult {
        z,
        s,
        u,
        c,
        r,
        coefficient,
        base_shear_kgf,
        base_shear_tf,
    })
}
