//! # Design Settings
//!
//! Every tunable constant and named design policy the engine uses, gathered in
//! one plain-data record that callers pass explicitly into each calculation.
//! The engine holds no session state of its own.
//!
//! All fields have defaults, and a settings JSON file only needs to name the
//! fields it overrides:
//!
//! ```rust
//! use rcdesign_core::settings::{DesignSettings, LoadSuperposition};
//!
//! let settings = DesignSettings::from_json(r#"{ "load_superposition": "LegacyOverwrite" }"#).unwrap();
//! assert_eq!(settings.load_superposition, LoadSuperposition::LegacyOverwrite);
//! assert_eq!(settings.sample_points, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Default number of diagram samples for a single span
pub const DEFAULT_SAMPLE_POINTS: usize = 100;

/// Default number of diagram samples per span of a continuous beam
pub const DEFAULT_CONTINUOUS_SAMPLE_POINTS: usize = 50;

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Samples along a simple or fixed-fixed span (inclusive of both ends)
    pub sample_points: usize,

    /// Samples along each span of a two-span continuous beam
    pub continuous_sample_points: usize,

    /// How a point load combines with the distributed load on one span
    pub load_superposition: LoadSuperposition,

    /// How the working steel ratio is chosen in flexural design
    pub working_ratio: WorkingRatioPolicy,

    /// Which nominal axial capacity expression governs column checks
    pub column_capacity: ColumnCapacityFormula,

    /// Simplified static seismic coefficients
    pub seismic: SeismicSettings,

    /// Predimensioning rules of thumb
    pub predimension: PredimensionSettings,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            sample_points: DEFAULT_SAMPLE_POINTS,
            continuous_sample_points: DEFAULT_CONTINUOUS_SAMPLE_POINTS,
            load_superposition: LoadSuperposition::default(),
            working_ratio: WorkingRatioPolicy::default(),
            column_capacity: ColumnCapacityFormula::default(),
            seismic: SeismicSettings::default(),
            predimension: PredimensionSettings::default(),
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_points < 2 {
            return Err(CalcError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                "At least 2 samples are needed to span a beam",
            ));
        }
        if self.continuous_sample_points < 2 {
            return Err(CalcError::invalid_input(
                "continuous_sample_points",
                self.continuous_sample_points.to_string(),
                "At least 2 samples are needed to span a beam",
            ));
        }
        if let WorkingRatioPolicy::Fixed { rho } = self.working_ratio {
            require_positive("working_ratio.rho", rho)?;
        }
        self.seismic.validate()?;
        self.predimension.validate()
    }
}

/// Combination rule for a point load acting together with the distributed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadSuperposition {
    /// Add the point-load and distributed-load contributions
    #[default]
    Superpose,
    /// Let the point-load solution replace the distributed-load solution
    /// whenever a point load is present, reproducing legacy output
    LegacyOverwrite,
}

/// Working reinforcement ratio policy for flexural design.
///
/// `Midpoint` is a simplification: it takes the middle of the permitted range
/// [ρ_min, ρ_max] instead of sizing steel to the demand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy")]
pub enum WorkingRatioPolicy {
    /// ρ = (ρ_min + ρ_max) / 2
    #[default]
    Midpoint,
    /// A caller-chosen ratio (e.g. 0.01 for a first trial)
    Fixed { rho: f64 },
}

impl WorkingRatioPolicy {
    /// Select the working ratio given the code bounds.
    pub fn select(&self, rho_min: f64, rho_max: f64) -> f64 {
        match self {
            WorkingRatioPolicy::Midpoint => (rho_min + rho_max) / 2.0,
            WorkingRatioPolicy::Fixed { rho } => *rho,
        }
    }
}

/// Nominal axial strength expression for tied columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnCapacityFormula {
    /// Pn = 0.80·Po, the ACI 318 maximum for tied columns
    #[default]
    TiedMaximum,
    /// Pn = Po = 0.85·f'c·(Ag − Ast) + Ast·fy
    Unreduced,
}

impl ColumnCapacityFormula {
    /// Apply the formula to the unreduced capacity Po.
    pub fn nominal(&self, po: f64) -> f64 {
        match self {
            ColumnCapacityFormula::TiedMaximum => 0.80 * po,
            ColumnCapacityFormula::Unreduced => po,
        }
    }
}

/// Seismic amplification factor C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum Amplification {
    /// Constant C, not derived from the structure's period
    Fixed { c: f64 },
    /// E.030 spectrum shape from the fundamental period T and the soil
    /// platform periods Tp and TL (seconds)
    FromPeriod { period_s: f64, tp_s: f64, tl_s: f64 },
}

impl Default for Amplification {
    fn default() -> Self {
        Amplification::Fixed { c: 2.5 }
    }
}

impl Amplification {
    /// Evaluate C.
    pub fn coefficient(&self) -> f64 {
        match *self {
            Amplification::Fixed { c } => c,
            Amplification::FromPeriod { period_s, tp_s, tl_s } => {
                if period_s < tp_s {
                    2.5
                } else if period_s <= tl_s {
                    2.5 * tp_s / period_s
                } else {
                    2.5 * tp_s * tl_s / period_s.powi(2)
                }
            }
        }
    }

    fn validate(&self) -> CalcResult<()> {
        match *self {
            Amplification::Fixed { c } => require_positive("seismic.amplification.c", c),
            Amplification::FromPeriod { period_s, tp_s, tl_s } => {
                require_positive("seismic.amplification.period_s", period_s)?;
                require_positive("seismic.amplification.tp_s", tp_s)?;
                require_positive("seismic.amplification.tl_s", tl_s)?;
                if tl_s < tp_s {
                    return Err(CalcError::invalid_input(
                        "seismic.amplification.tl_s",
                        tl_s.to_string(),
                        "TL must not be shorter than Tp",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Simplified static seismic settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeismicSettings {
    /// Amplification factor C
    pub amplification: Amplification,
    /// Response reduction coefficient R (7.0 for concrete frames)
    pub reduction_r: f64,
}

impl Default for SeismicSettings {
    fn default() -> Self {
        SeismicSettings {
            amplification: Amplification::default(),
            reduction_r: 7.0,
        }
    }
}

impl SeismicSettings {
    fn validate(&self) -> CalcResult<()> {
        self.amplification.validate()?;
        require_positive("seismic.reduction_r", self.reduction_r)
    }
}

/// Predimensioning rules of thumb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredimensionSettings {
    /// Slab thickness h = L / this (25)
    pub slab_span_ratio: f64,
    /// Minimum slab thickness (m)
    pub min_slab_thickness_m: f64,
    /// Beam depth d = L / this (10)
    pub beam_span_ratio: f64,
    /// Beam width as a fraction of depth (0.3)
    pub beam_width_ratio: f64,
    /// Minimum beam width (cm)
    pub min_beam_width_cm: f64,
}

impl Default for PredimensionSettings {
    fn default() -> Self {
        PredimensionSettings {
            slab_span_ratio: 25.0,
            min_slab_thickness_m: 0.17,
            beam_span_ratio: 10.0,
            beam_width_ratio: 0.3,
            min_beam_width_cm: 25.0,
        }
    }
}

impl PredimensionSettings {
    fn validate(&self) -> CalcResult<()> {
        require_positive("predimension.slab_span_ratio", self.slab_span_ratio)?;
        require_positive("predimension.min_slab_thickness_m", self.min_slab_thickness_m)?;
        require_positive("predimension.beam_span_ratio", self.beam_span_ratio)?;
        require_positive("predimension.beam_width_ratio", self.beam_width_ratio)?;
        require_positive("predimension.min_beam_width_cm", self.min_beam_width_cm)
    }
}
