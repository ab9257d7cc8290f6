//! # Structural Calculations
//!
//! This module contains all structural calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with `validate()`
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input, &settings) -> CalcResult<*Result>` - Pure calculation function
//!
//! Design results carry their pass/fail checks as booleans and a `passes()`
//! helper; a design that does not verify is still `Ok`.
//!
//! ## Available Calculations
//!
//! Force analysis:
//! - [`beam_analysis`] - Simple and fixed-fixed spans
//! - [`continuous_beam`] - Two-span continuous beam (coefficient method)
//!
//! Section design:
//! - [`flexure`] - Flexural reinforcement
//! - [`shear`] - Stirrup design
//! - [`shear_verification`] - Shear check with load derivation and stirrup layout
//! - [`beam_design`] - Flexure and shear together
//! - [`column`] - Tied column axial capacity
//! - [`footing`] - Square footing sizing
//!
//! Estimates:
//! - [`seismic`] - Static base shear
//! - [`predimension`] - Trial member sizes

pub mod beam_analysis;
pub mod beam_design;
pub mod column;
pub mod continuous_beam;
pub mod flexure;
pub mod footing;
pub mod predimension;
pub mod section;
pub mod seismic;
pub mod shear;
pub mod shear_verification;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::materials::{self, BarSize, MaterialInput, MaterialSet};
use crate::settings::DesignSettings;

// Re-export commonly used types
pub use beam_analysis::{BeamSpanInput, BeamSpanResult, ForceDiagram, LoadCase, SupportCondition};
pub use beam_design::{BeamDesignInput, BeamDesignResult};
pub use column::{ColumnInput, ColumnResult};
pub use continuous_beam::{ContinuousBeamInput, ContinuousBeamResult};
pub use flexure::{FlexureInput, FlexureResult};
pub use footing::{FootingInput, FootingResult};
pub use predimension::{PredimensionInput, PredimensionResult};
pub use section::BeamSection;
pub use seismic::{SeismicInput, SeismicResult, SeismicZone, SoilProfile};
pub use shear::{ShearInput, ShearResult};
pub use shear_verification::{ShearVerificationInput, ShearVerificationResult};

/// Labelled material request.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Materials", "label": "Concrete 210", "fc": 210.0, "fy": 4200.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequest {
    pub label: String,
    /// Concrete compressive strength f'c (kgf/cm²)
    pub fc: f64,
    /// Steel yield strength fy (kgf/cm²)
    pub fy: f64,
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Concrete and steel constants
    Materials(MaterialRequest),
    /// Simple or fixed-fixed span forces
    BeamSpan(BeamSpanInput),
    /// Two-span continuous beam forces
    ContinuousBeam(ContinuousBeamInput),
    /// Flexural design
    Flexure(FlexureInput),
    /// Shear design
    Shear(ShearInput),
    /// Shear verification with stirrup layout
    ShearVerification(ShearVerificationInput),
    /// Combined flexure and shear design
    BeamDesign(BeamDesignInput),
    /// Tied column check
    Column(ColumnInput),
    /// Footing sizing
    Footing(FootingInput),
    /// Static base shear
    Seismic(SeismicInput),
    /// Trial member sizes
    Predimension(PredimensionInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Materials(i) => &i.label,
            CalculationItem::BeamSpan(i) => &i.label,
            CalculationItem::ContinuousBeam(i) => &i.label,
            CalculationItem::Flexure(i) => &i.label,
            CalculationItem::Shear(i) => &i.label,
            CalculationItem::ShearVerification(i) => &i.label,
            CalculationItem::BeamDesign(i) => &i.label,
            CalculationItem::Column(i) => &i.label,
            CalculationItem::Footing(i) => &i.label,
            CalculationItem::Seismic(i) => &i.label,
            CalculationItem::Predimension(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Materials(_) => "Materials",
            CalculationItem::BeamSpan(_) => "BeamSpan",
            CalculationItem::ContinuousBeam(_) => "ContinuousBeam",
            CalculationItem::Flexure(_) => "Flexure",
            CalculationItem::Shear(_) => "Shear",
            CalculationItem::ShearVerification(_) => "ShearVerification",
            CalculationItem::BeamDesign(_) => "BeamDesign",
            CalculationItem::Column(_) => "Column",
            CalculationItem::Footing(_) => "Footing",
            CalculationItem::Seismic(_) => "Seismic",
            CalculationItem::Predimension(_) => "Predimension",
        }
    }

    /// Decode one request from JSON.
    ///
    /// Unknown zone, soil, bar and support codes are reported as
    /// `UnsupportedCode`; any other malformed request is a `SerializationError`.
    pub fn from_value(value: serde_json::Value) -> CalcResult<Self> {
        check_codes(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Run the calculation.
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<CalculationOutput> {
        debug!(label = self.label(), calc_type = self.calc_type(), "running calculation");
        let output = match self {
            CalculationItem::Materials(i) => CalculationOutput::Materials(materials::calculate(
                &MaterialInput { fc: i.fc, fy: i.fy },
            )?),
            CalculationItem::BeamSpan(i) => {
                CalculationOutput::BeamSpan(beam_analysis::calculate(i, settings)?)
            }
            CalculationItem::ContinuousBeam(i) => {
                CalculationOutput::ContinuousBeam(continuous_beam::calculate(i, settings)?)
            }
            CalculationItem::Flexure(i) => CalculationOutput::Flexure(flexure::calculate(i, settings)?),
            CalculationItem::Shear(i) => CalculationOutput::Shear(shear::calculate(i, settings)?),
            CalculationItem::ShearVerification(i) => {
                CalculationOutput::ShearVerification(shear_verification::calculate(i, settings)?)
            }
            CalculationItem::BeamDesign(i) => {
                CalculationOutput::BeamDesign(beam_design::calculate(i, settings)?)
            }
            CalculationItem::Column(i) => CalculationOutput::Column(column::calculate(i, settings)?),
            CalculationItem::Footing(i) => CalculationOutput::Footing(footing::calculate(i, settings)?),
            CalculationItem::Seismic(i) => CalculationOutput::Seismic(seismic::calculate(i, settings)?),
            CalculationItem::Predimension(i) => {
                CalculationOutput::Predimension(predimension::calculate(i, settings)?)
            }
        };
        Ok(output)
    }
}

/// Enum wrapper for all calculation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Materials(MaterialSet),
    BeamSpan(BeamSpanResult),
    ContinuousBeam(ContinuousBeamResult),
    Flexure(FlexureResult),
    Shear(ShearResult),
    ShearVerification(ShearVerificationResult),
    BeamDesign(BeamDesignResult),
    Column(ColumnResult),
    Footing(FootingResult),
    Seismic(SeismicResult),
    Predimension(PredimensionResult),
}

impl CalculationOutput {
    /// Design verdict, for results that carry one
    pub fn passes(&self) -> Option<bool> {
        match self {
            CalculationOutput::Flexure(r) => Some(r.passes()),
            CalculationOutput::Shear(r) => Some(r.passes()),
            CalculationOutput::ShearVerification(r) => Some(r.passes()),
            CalculationOutput::BeamDesign(r) => Some(r.passes()),
            CalculationOutput::Column(r) => Some(r.passes()),
            CalculationOutput::Materials(_)
            | CalculationOutput::BeamSpan(_)
            | CalculationOutput::ContinuousBeam(_)
            | CalculationOutput::Footing(_)
            | CalculationOutput::Seismic(_)
            | CalculationOutput::Predimension(_) => None,
        }
    }
}

/// Parse lookup-table codes ahead of deserialization so an unknown code
/// keeps its own error kind.
fn check_codes(value: &serde_json::Value) -> CalcResult<()> {
    let Some(fields) = value.as_object() else {
        return Ok(());
    };
    for (key, code) in fields {
        let Some(code) = code.as_str() else {
            continue;
        };
        match key.as_str() {
            "zone" => {
                code.parse::<SeismicZone>()?;
            }
            "soil" => {
                code.parse::<SoilProfile>()?;
            }
            "support" => {
                code.parse::<SupportCondition>()?;
            }
            "stirrup" | "longitudinal_bar" | "tie_bar" => {
                code.parse::<BarSize>()?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Decode a request document holding one calculation or an array of them.
///
/// The outer `Err` means the document is not JSON at all. Array elements are
/// decoded independently, so one malformed item does not hide the others.
pub fn parse_batch(json: &str) -> CalcResult<Vec<CalcResult<CalculationItem>>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let requests = match value {
        serde_json::Value::Array(values) => values.into_iter().map(CalculationItem::from_value).collect(),
        single => vec![CalculationItem::from_value(single)],
    };
    Ok(requests)
}

/// Run decoded requests in order. A request that failed to decode keeps its
/// error in the matching slot.
pub fn run_requests(
    requests: &[CalcResult<CalculationItem>],
    settings: &DesignSettings,
) -> Vec<CalcResult<CalculationOutput>> {
    requests
        .iter()
        .map(|request| match request {
            Ok(item) => item.run(settings),
            Err(e) => Err(e.clone()),
        })
        .collect()
}

/// Run independent calculations, one result per item, in order.
///
/// A failing item does not stop the batch.
pub fn run_batch(items: &[CalculationItem], settings: &DesignSettings) -> Vec<CalcResult<CalculationOutput>> {
    items.iter().map(|item| item.run(settings)).collect()
}
