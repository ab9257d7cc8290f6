//! # Isolated Footing Sizing
//!
//! Square spread footing under a square column (kgf and cm).
//!
//! ## Procedure
//!
//! ```text
//! qn   = qu / FS                         net allowable bearing (kgf/cm²)
//! A    = Pu / qn                         required area (cm²)
//! B    = √A                              footing side (cm)
//! d    ≈ B / 10                          effective depth estimate (cm)
//! b0   = 4·(c + d)                       punching perimeter (cm)
//! Vc,p = 0.53·√f'c·b0·d                  punching capacity (kgf)
//! Vc,1 = 0.53·√f'c·B·d                   one-way capacity (kgf)
//! Mu   = (Pu/B)·(B − c)²/8               moment at the column face (kgf·cm)
//! As   = Mu / (φ·fy·j·d)                 φ = 0.9, j = 0.9
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{concrete_shear_capacity, punching_perimeter, PHI_FLEXURE};
use crate::errors::{require_positive, CalcResult};
use crate::materials::{self, MaterialInput};
use crate::settings::DesignSettings;

/// Lever-arm factor j for footing steel
pub const FOOTING_LEVER_ARM: f64 = 0.9;

/// Effective depth as a fraction of the footing side
pub const FOOTING_DEPTH_RATIO: f64 = 10.0;

fn default_safety_factor() -> f64 {
    3.0
}

fn default_column_side() -> f64 {
    25.0
}

/// Input parameters for footing sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Z-1",
///   "material": { "fc": 210.0, "fy": 4200.0 },
///   "pu_kgf": 100000.0,
///   "soil_capacity_kgf_cm2": 3.0,
///   "safety_factor": 3.0,
///   "column_side_cm": 25.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingInput {
    /// User label
    pub label: String,
    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,
    /// Factored column load Pu (kgf)
    pub pu_kgf: f64,
    /// Ultimate soil bearing capacity qu (kgf/cm²)
    pub soil_capacity_kgf_cm2: f64,
    /// Safety factor FS on bearing (3.0 if omitted)
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,
    /// Side of the square column (cm, 25 if omitted)
    #[serde(default = "default_column_side")]
    pub column_side_cm: f64,
}

impl FootingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("pu_kgf", self.pu_kgf)?;
        require_positive("soil_capacity_kgf_cm2", self.soil_capacity_kgf_cm2)?;
        require_positive("safety_factor", self.safety_factor)?;
        require_positive("column_side_cm", self.column_side_cm)
    }
}

/// Results from footing sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingResult {
    // === Plan Size ===
    /// Net allowable bearing qn (kgf/cm²)
    pub qn_kgf_cm2: f64,
    /// Required area (cm²)
    pub area_cm2: f64,
    /// Footing side (cm)
    pub side_cm: f64,

    // === Depth and Shear ===
    /// Estimated effective depth (cm)
    pub depth_cm: f64,
    /// Punching perimeter b0 (cm)
    pub punching_perimeter_cm: f64,
    /// Punching shear capacity (kgf)
    pub vc_punching_kgf: f64,
    /// One-way shear capacity (kgf)
    pub vc_one_way_kgf: f64,

    // === Flexure ===
    /// Moment at the column face (kgf·cm)
    pub mu_kgf_cm: f64,
    /// Strength reduction factor φ
    pub phi: f64,
    /// Lever-arm factor j
    pub lever_arm: f64,
    /// Required flexural steel (cm²)
    pub as_cm2: f64,

    /// Column fits inside the footing (B > c)
    pub column_fits: bool,
}

impl FootingResult {
    /// Footing plan area in m²
    pub fn area_m2(&self) -> f64 {
        self.area_cm2 / 10_000.0
    }
}

/// Size a square footing.
pub fn calculate(input: &FootingInput, settings: &DesignSettings) -> CalcResult<FootingResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;

    let c = input.column_side_cm;
    let qn_kgf_cm2 = input.soil_capacity_kgf_cm2 / input.safety_factor;
    let area_cm2 = input.pu_kgf / qn_kgf_cm2;
    let side_cm = area_cm2.sqrt();
    let depth_cm = side_cm / FOOTING_DEPTH_RATIO;

    let punching_perimeter_cm = punching_perimeter(c, depth_cm);
    let vc_punching_kgf = concrete_shear_capacity(mat.fc(), punching_perimeter_cm, depth_cm);
    let vc_one_way_kgf = concrete_shear_capacity(mat.fc(), side_cm, depth_cm);

    let mu_kgf_cm = (input.pu_kgf / side_cm) * (side_cm - c).powi(2) / 8.0;
    let as_cm2 = mu_kgf_cm / (PHI_FLEXURE * mat.fy() * FOOTING_LEVER_ARM * depth_cm);

    debug!(
        label = %input.label,
        qn = qn_kgf_cm2,
        side = side_cm,
        d = depth_cm,
        as_cm2,
        "footing sized"
    );

    Ok(FootingResult {
        qn_kgf_cm2,
        area_cm2,
        side_cm,
        depth_cm,
        punching_perimeter_cm,
        vc_punching_kgf,
        vc_one_way_kgf,
        mu_kgf_cm,
        phi: PHI_FLEXURE,
        lever_arm: FOOTING_LEVER_ARM,
        as_cm2,
        column_fits: side_cm > c,
    })
}
