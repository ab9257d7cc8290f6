//! # Column Design
//!
//! Axial capacity of a short tied column (ACI 318 / E.060, kgf and cm).
//!
//! ## Procedure
//!
//! 1. Po = 0.85·f'c·(Ag − Ast) + Ast·fy
//! 2. Pn from [`ColumnCapacityFormula`]: 0.80·Po (tied maximum, default) or Po
//! 3. φPn with φ = 0.65
//! 4. ρ = Ast/Ag within [0.01, 0.06]
//! 5. Tie spacing ≤ min(16·d_bar, 48·d_tie, least side)
//!
//! ## Assumptions
//!
//! - Concentric axial load; slenderness and moment interaction are not checked
//! - Square section unless the least side is given
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::calculations::column::{calculate, ColumnInput};
//! use rcdesign_core::materials::{BarSize, MaterialInput};
//! use rcdesign_core::settings::DesignSettings;
//!
//! let input = ColumnInput {
//!     label: "C-1".to_string(),
//!     material: MaterialInput { fc: 210.0, fy: 4200.0 },
//!     gross_area_cm2: 900.0,
//!     steel_area_cm2: 11.36,
//!     pu_kgf: 80_000.0,
//!     least_side_cm: None,
//!     longitudinal_bar: BarSize::No6,
//!     tie_bar: BarSize::No3,
//! };
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::concrete::{COLUMN_RHO_MAX, COLUMN_RHO_MIN};
use crate::equations::{column_squash_load, tie_spacing_limit, PHI_TIED_COLUMN};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{self, BarSize, MaterialInput};
use crate::settings::{ColumnCapacityFormula, DesignSettings};

fn default_longitudinal_bar() -> BarSize {
    BarSize::No6
}

/// Input parameters for a tied column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "material": { "fc": 210.0, "fy": 4200.0 },
///   "gross_area_cm2": 900.0,
///   "steel_area_cm2": 11.36,
///   "pu_kgf": 80000.0,
///   "longitudinal_bar": "#6",
///   "tie_bar": "#3"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label for this column (e.g., "C-1", "Interior Column")
    pub label: String,

    /// Material strengths (kgf/cm²)
    pub material: MaterialInput,

    /// Gross section area Ag (cm²)
    pub gross_area_cm2: f64,

    /// Longitudinal steel area Ast (cm²)
    pub steel_area_cm2: f64,

    /// Factored axial load Pu (kgf)
    pub pu_kgf: f64,

    /// Least side of the section (cm); √Ag when omitted
    #[serde(default)]
    pub least_side_cm: Option<f64>,

    /// Longitudinal bar size (#6 if omitted)
    #[serde(default = "default_longitudinal_bar")]
    pub longitudinal_bar: BarSize,

    /// Tie bar size (#3 if omitted)
    #[serde(default)]
    pub tie_bar: BarSize,
}

impl ColumnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("gross_area_cm2", self.gross_area_cm2)?;
        require_non_negative("steel_area_cm2", self.steel_area_cm2)?;
        require_non_negative("pu_kgf", self.pu_kgf)?;

        if self.steel_area_cm2 >= self.gross_area_cm2 {
            return Err(CalcError::invalid_input(
                "steel_area_cm2",
                self.steel_area_cm2.to_string(),
                format!("Steel area must be less than the gross area {}", self.gross_area_cm2),
            ));
        }
        if let Some(side) = self.least_side_cm {
            require_positive("least_side_cm", side)?;
        }
        Ok(())
    }

    /// Least side used for the tie spacing limit (cm)
    pub fn least_side(&self) -> f64 {
        self.least_side_cm.unwrap_or_else(|| self.gross_area_cm2.sqrt())
    }
}

/// Longitudinal steel area for a target ratio: Ast = ρ·Ag (cm²)
pub fn steel_area_for_ratio(rho: f64, gross_area_cm2: f64) -> f64 {
    rho * gross_area_cm2
}

/// Components of the tie spacing limit (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TieSpacing {
    /// 16 longitudinal bar diameters
    pub bar_limit_cm: f64,
    /// 48 tie diameters
    pub tie_limit_cm: f64,
    /// Least column side
    pub side_limit_cm: f64,
    /// Governing maximum spacing
    pub max_spacing_cm: f64,
}

/// Results from column design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    // === Capacity ===
    /// Unreduced axial strength Po (kgf)
    pub po_kgf: f64,
    /// Formula that produced Pn
    pub capacity_formula: ColumnCapacityFormula,
    /// Nominal axial strength Pn (kgf)
    pub pn_kgf: f64,
    /// Strength reduction factor φ
    pub phi: f64,
    /// Design axial strength φPn (kgf)
    pub phi_pn_kgf: f64,
    /// Demand Pu (kgf)
    pub pu_kgf: f64,
    /// Pu / φPn
    pub axial_unity: f64,

    // === Reinforcement ===
    /// ρ = Ast/Ag
    pub rho: f64,
    pub rho_min: f64,
    pub rho_max: f64,
    /// Bars used for the tie spacing limit
    pub longitudinal_bar: BarSize,
    pub tie_bar: BarSize,
    /// Tie spacing limit
    pub ties: TieSpacing,

    // === Checks ===
    /// Pu ≤ φPn
    pub load_ok: bool,
    /// ρ within [ρ_min, ρ_max]
    pub ratio_ok: bool,
}

impl ColumnResult {
    /// Check if both the load and ratio checks pass
    pub fn passes(&self) -> bool {
        self.load_ok && self.ratio_ok
    }
}

/// Check a tied column under axial load.
pub fn calculate(input: &ColumnInput, settings: &DesignSettings) -> CalcResult<ColumnResult> {
    input.validate()?;
    settings.validate()?;
    let mat = materials::calculate(&input.material)?;

    let (ag, ast) = (input.gross_area_cm2, input.steel_area_cm2);
    let po_kgf = column_squash_load(mat.fc(), mat.fy(), ag, ast);
    let pn_kgf = settings.column_capacity.nominal(po_kgf);
    let phi_pn_kgf = PHI_TIED_COLUMN * pn_kgf;
    let rho = ast / ag;

    let bar_d = input.longitudinal_bar.diameter_cm();
    let tie_d = input.tie_bar.diameter_cm();
    let side = input.least_side();
    let ties = TieSpacing {
        bar_limit_cm: 16.0 * bar_d,
        tie_limit_cm: 48.0 * tie_d,
        side_limit_cm: side,
        max_spacing_cm: tie_spacing_limit(bar_d, tie_d, side),
    };

    let result = ColumnResult {
        po_kgf,
        capacity_formula: settings.column_capacity,
        pn_kgf,
        phi: PHI_TIED_COLUMN,
        phi_pn_kgf,
        pu_kgf: input.pu_kgf,
        axial_unity: input.pu_kgf / phi_pn_kgf,
        rho,
        rho_min: COLUMN_RHO_MIN,
        rho_max: COLUMN_RHO_MAX,
        longitudinal_bar: input.longitudinal_bar,
        tie_bar: input.tie_bar,
        ties,
        load_ok: input.pu_kgf <= phi_pn_kgf,
        ratio_ok: (COLUMN_RHO_MIN..=COLUMN_RHO_MAX).contains(&rho),
    };

    debug!(
        label = %input.label,
        po = po_kgf,
        phi_pn = phi_pn_kgf,
        rho,
        tie_spacing = ties.max_spacing_cm,
        "column checked"
    );
    if !result.passes() {
        warn!(
            label = %input.label,
            pu = input.pu_kgf,
            phi_pn = phi_pn_kgf,
            rho,
            "column does not verify"
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

    fn input(ast: f64, pu: f64) -> ColumnInput {
        ColumnInput {
            label: "Test".to_string(),
            material: MaterialInput { fc: 210.0, fy: 4200.0 },
            gross_area_cm2: 900.0,
            steel_area_cm2: ast,
            pu_kgf: pu,
            least_side_cm: None,
            longitudinal_bar: BarSize::No6,
            tie_bar: BarSize::No3,
        }
    }

    #[test]
    fn test_capacity_tied_maximum() {
        let result = calculate(&input(9.0, 50_000.0), &DesignSettings::default()).unwrap();
        // Po = 0.85*210*891 + 9*4200 = 196,843.5
        assert!(approx_eq(result.po_kgf, 196_843.5, 1e-12));
        assert!(approx_eq(result.pn_kgf, 0.80 * 196_843.5, 1e-12));
        assert!(approx_eq(result.phi_pn_kgf, 0.65 * 0.80 * 196_843.5, 1e-12));
        assert_eq!(result.capacity_formula, ColumnCapacityFormula::TiedMaximum);
    }

    #[test]
    fn test_capacity_unreduced() {
        let settings = DesignSettings {
            column_capacity: ColumnCapacityFormula::Unreduced,
            ..DesignSettings::default()
        };
        let result = calculate(&input(9.0, 50_000.0), &settings).unwrap();
        assert_eq!(result.pn_kgf, result.po_kgf);
        assert!(approx_eq(result.phi_pn_kgf, 0.65 * 196_843.5, 1e-12));
    }

    #[test]
    fn test_ratio_reported_regardless_of_load() {
        for pu in [0.0, 50_000.0, 500_000.0] {
            let result = calculate(&input(18.0, pu), &DesignSettings::default()).unwrap();
            assert_eq!(result.rho, 18.0 / 900.0);
            assert!(result.ratio_ok);
        }
    }

    #[test]
    fn test_ratio_bounds() {
        let low = calculate(&input(8.0, 10_000.0), &DesignSettings::default()).unwrap();
        assert!(!low.ratio_ok);
        assert!(!low.passes());

        let high = calculate(&input(60.0, 10_000.0), &DesignSettings::default()).unwrap();
        assert!(!high.ratio_ok);

        let edge = calculate(&input(9.0, 10_000.0), &DesignSettings::default()).unwrap();
        assert!(edge.ratio_ok);
    }

    #[test]
    fn test_load_check() {
        // φPn ≈ 102,359 kgf
        assert!(calculate(&input(9.0, 100_000.0), &DesignSettings::default()).unwrap().load_ok);
        let over = calculate(&input(9.0, 110_000.0), &DesignSettings::default()).unwrap();
        assert!(!over.load_ok);
        assert!(over.axial_unity > 1.0);
    }

    #[test]
    fn test_tie_spacing() {
        let result = calculate(&input(9.0, 10_000.0), &DesignSettings::default()).unwrap();
        // 16*1.91 = 30.56, 48*0.95 = 45.6, side √900 = 30
        assert!(approx_eq(result.ties.bar_limit_cm, 30.56, 1e-9));
        assert!(approx_eq(result.ties.tie_limit_cm, 45.6, 1e-9));
        assert_eq!(result.ties.side_limit_cm, 30.0);
        assert_eq!(result.ties.max_spacing_cm, 30.0);

        let mut wide = input(9.0, 10_000.0);
        wide.least_side_cm = Some(40.0);
        let result = calculate(&wide, &DesignSettings::default()).unwrap();
        assert!(approx_eq(result.ties.max_spacing_cm, 30.56, 1e-9));
    }

    #[test]
    fn test_steel_area_for_ratio() {
        assert!(approx_eq(steel_area_for_ratio(0.02, 900.0), 18.0, 1e-12));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&input(900.0, 1.0), &DesignSettings::default()).is_err());
        assert!(calculate(&input(-1.0, 1.0), &DesignSettings::default()).is_err());
        let mut bad = input(9.0, 1.0);
        bad.gross_area_cm2 = 0.0;
        assert!(calculate(&bad, &DesignSettings::default()).is_err());
    }

    #[test]
    fn test_bar_defaults() {
        let json = r#"{
            "label": "C",
            "material": { "fc": 210.0, "fy": 4200.0 },
            "gross_area_cm2": 900.0,
            "steel_area_cm2": 9.0,
            "pu_kgf": 1000.0
        }"#;
        let input: ColumnInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.longitudinal_bar, BarSize::No6);
        assert_eq!(input.tie_bar, BarSize::No3);
        assert_eq!(input.least_side_cm, None);
    }
}
