//! # Single-Span Beam Analysis
//!
//! Shear and moment distributions for one span, either simply supported or
//! fixed at both ends, under a distributed load and an optional point load.
//!
//! Contributions of individual loads are evaluated separately and summed
//! (superposition). `LoadSuperposition::LegacyOverwrite` instead lets the
//! point load replace the distributed load whenever both are given.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Fixed-end moments: `M_A` negative, `M_B` positive; diagram ends at `-M_B`
//!
//! ## Example
//! ```rust
//! use rcdesign_core::calculations::beam_analysis::{calculate, BeamSpanInput, LoadCase, SupportCondition};
//! use rcdesign_core::settings::DesignSettings;
//!
//! let input = BeamSpanInput {
//!     label: "V-101".to_string(),
//!     span_m: 6.0,
//!     support: SupportCondition::FixedFixed,
//!     load: LoadCase::uniform(2000.0),
//! };
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! let fem = result.fixed_end_moments.unwrap();
//! assert!((fem.m_a_kgf_m + 6000.0).abs() < 1e-9); // -wL²/12
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::beam::{
    fixed_fixed_point_end_moments, fixed_fixed_point_reactions, fixed_fixed_uniform_end_moments,
    point_load_moment, point_load_reactions, point_load_shear, uniform_load_moment,
    uniform_load_reactions, uniform_load_shear,
};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::settings::{DesignSettings, LoadSuperposition};

/// Boundary condition of a single span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SupportCondition {
    /// Pin at left, roller at right
    #[default]
    Simple,
    /// Both ends restrained against rotation
    FixedFixed,
}

impl SupportCondition {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::Simple => "simple",
            SupportCondition::FixedFixed => "fixed-fixed",
        }
    }
}

impl fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SupportCondition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "simply-supported" | "simply supported" => Ok(SupportCondition::Simple),
            "fixed" | "fixed-fixed" | "fixedfixed" => Ok(SupportCondition::FixedFixed),
            _ => Err(CalcError::unsupported_code("support condition", s)),
        }
    }
}

impl TryFrom<String> for SupportCondition {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Concentrated load on a span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Magnitude (kgf), positive downward
    pub magnitude_kgf: f64,
    /// Offset from the left support (m)
    pub offset_m: f64,
}

/// Loads acting on one span
///
/// ## JSON Example
///
/// ```json
/// { "uniform_kgf_m": 1500.0, "point": { "magnitude_kgf": 3000.0, "offset_m": 2.0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Distributed load over the full span (kgf/m)
    pub uniform_kgf_m: f64,
    /// Optional concentrated load
    #[serde(default)]
    pub point: Option<PointLoad>,
}

impl LoadCase {
    /// Distributed load only
    pub fn uniform(uniform_kgf_m: f64) -> Self {
        LoadCase {
            uniform_kgf_m,
            point: None,
        }
    }

    /// Add a point load (builder pattern)
    pub fn with_point(mut self, magnitude_kgf: f64, offset_m: f64) -> Self {
        self.point = Some(PointLoad {
            magnitude_kgf,
            offset_m,
        });
        self
    }

    /// Loads that take part in the solution under the given policy
    pub fn active_loads(&self, policy: LoadSuperposition) -> Vec<SpanLoad> {
        let uniform = (self.uniform_kgf_m > 0.0).then_some(SpanLoad::Uniform {
            w: self.uniform_kgf_m,
        });
        let point = self.point.map(|p| SpanLoad::Point {
            p: p.magnitude_kgf,
            a: p.offset_m,
        });

        match (policy, point) {
            (LoadSuperposition::LegacyOverwrite, Some(point)) => vec![point],
            _ => uniform.into_iter().chain(point).collect(),
        }
    }
}

/// One load, solved independently before superposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanLoad {
    /// Uniform load w (kgf/m) over the full span
    Uniform { w: f64 },
    /// Point load P (kgf) at offset a (m)
    Point { p: f64, a: f64 },
}

impl SpanLoad {
    /// Support reactions (R_A, R_B)
    pub fn reactions(&self, support: SupportCondition, l: f64) -> (f64, f64) {
        match (self, support) {
            (SpanLoad::Uniform { w }, _) => uniform_load_reactions(*w, l),
            (SpanLoad::Point { p, a }, SupportCondition::Simple) => point_load_reactions(*p, *a, l),
            (SpanLoad::Point { p, a }, SupportCondition::FixedFixed) => {
                fixed_fixed_point_reactions(*p, *a, l)
            }
        }
    }

    /// Fixed-end moments (M_A, M_B); zero for a simple span
    pub fn fixed_end_moments(&self, support: SupportCondition, l: f64) -> (f64, f64) {
        match (self, support) {
            (_, SupportCondition::Simple) => (0.0, 0.0),
            (SpanLoad::Uniform { w }, SupportCondition::FixedFixed) => {
                fixed_fixed_uniform_end_moments(*w, l)
            }
            (SpanLoad::Point { p, a }, SupportCondition::FixedFixed) => {
                fixed_fixed_point_end_moments(*p, *a, l)
            }
        }
    }

    /// Shear at x
    pub fn shear_at(&self, support: SupportCondition, l: f64, x: f64) -> f64 {
        let (r_a, _) = self.reactions(support, l);
        match self {
            SpanLoad::Uniform { w } => uniform_load_shear(*w, r_a, x),
            SpanLoad::Point { p, a } => point_load_shear(*p, *a, r_a, x),
        }
    }

    /// Moment at x, starting from the fixed-end moment M_A
    pub fn moment_at(&self, support: SupportCondition, l: f64, x: f64) -> f64 {
        let (r_a, _) = self.reactions(support, l);
        let (m_a, _) = self.fixed_end_moments(support, l);
        match self {
            SpanLoad::Uniform { w } => m_a + uniform_load_moment(*w, r_a, x),
            SpanLoad::Point { p, a } => m_a + point_load_moment(*p, *a, r_a, x),
        }
    }
}

/// Input parameters for a single-span analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSpanInput {
    /// User label (e.g., "V-101")
    pub label: String,
    /// Span length (m)
    pub span_m: f64,
    /// Support condition
    pub support: SupportCondition,
    /// Loads on the span
    pub load: LoadCase,
}

impl BeamSpanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_non_negative("load.uniform_kgf_m", self.load.uniform_kgf_m)?;

        if let Some(point) = self.load.point {
            require_positive("load.point.magnitude_kgf", point.magnitude_kgf)?;
            if !point.offset_m.is_finite() || point.offset_m < 0.0 || point.offset_m > self.span_m {
                return Err(CalcError::invalid_input(
                    "load.point.offset_m",
                    point.offset_m.to_string(),
                    format!("Offset must lie within [0, {}]", self.span_m),
                ));
            }
        } else if self.load.uniform_kgf_m == 0.0 {
            return Err(CalcError::invalid_input(
                "load.uniform_kgf_m",
                "0",
                "Span carries no load",
            ));
        }
        Ok(())
    }
}

/// One sample of the force diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position (m)
    pub x_m: f64,
    /// Shear (kgf)
    pub shear_kgf: f64,
    /// Moment (kgf·m)
    pub moment_kgf_m: f64,
}

/// Ordered samples of shear and moment along a beam
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForceDiagram {
    pub points: Vec<DiagramPoint>,
}

impl ForceDiagram {
    /// Sample `count` evenly spaced positions over [0, length], reporting
    /// positions shifted by `origin_m`.
    pub fn sample(
        count: usize,
        length_m: f64,
        origin_m: f64,
        forces_at: impl Fn(f64) -> (f64, f64),
    ) -> Self {
        let points = (0..count)
            .map(|i| {
                let x = length_m * i as f64 / (count - 1) as f64;
                let (shear_kgf, moment_kgf_m) = forces_at(x);
                DiagramPoint {
                    x_m: origin_m + x,
                    shear_kgf,
                    moment_kgf_m,
                }
            })
            .collect();
        ForceDiagram { points }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the diagram has no samples
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample with the largest shear magnitude
    pub fn max_abs_shear(&self) -> Option<DiagramPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.shear_kgf.abs().total_cmp(&b.shear_kgf.abs()))
    }

    /// Sample with the largest (most sagging) moment
    pub fn max_moment(&self) -> Option<DiagramPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.moment_kgf_m.total_cmp(&b.moment_kgf_m))
    }

    /// Sample with the smallest (most hogging) moment
    pub fn min_moment(&self) -> Option<DiagramPoint> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a.moment_kgf_m.total_cmp(&b.moment_kgf_m))
    }
}

/// A peak value and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extreme {
    pub x_m: f64,
    pub value: f64,
}

/// Support moments of a fixed-fixed span (kgf·m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedEndMoments {
    pub m_a_kgf_m: f64,
    pub m_b_kgf_m: f64,
}

/// Results from a single-span analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSpanResult {
    /// Support condition analysed
    pub support: SupportCondition,
    /// Span length (m)
    pub span_m: f64,
    /// Left support reaction (kgf), positive upward
    pub reaction_left_kgf: f64,
    /// Right support reaction (kgf), positive upward
    pub reaction_right_kgf: f64,
    /// Fixed-end moments, present for fixed-fixed spans
    pub fixed_end_moments: Option<FixedEndMoments>,
    /// Largest moment, including positions between samples where the
    /// moment peaks (under the point load, at zero shear)
    pub max_moment: Extreme,
    /// Smallest moment (hogging at fixed supports)
    pub min_moment: Extreme,
    /// Largest shear magnitude
    pub max_abs_shear: Extreme,
    /// Sampled diagram
    pub diagram: ForceDiagram,
}

/// Superposed analysis of one span
#[derive(Debug, Clone)]
pub struct BeamAnalysis {
    pub span_m: f64,
    pub support: SupportCondition,
    pub loads: Vec<SpanLoad>,
}

impl BeamAnalysis {
    /// Build the analysis for an input under the settings' superposition policy
    pub fn new(input: &BeamSpanInput, policy: LoadSuperposition) -> Self {
        BeamAnalysis {
            span_m: input.span_m,
            support: input.support,
            loads: input.load.active_loads(policy),
        }
    }

    /// Total reactions (R_A, R_B)
    pub fn reactions(&self) -> (f64, f64) {
        self.loads
            .iter()
            .map(|load| load.reactions(self.support, self.span_m))
            .fold((0.0, 0.0), |(ra, rb), (a, b)| (ra + a, rb + b))
    }

    /// Total fixed-end moments (M_A, M_B)
    pub fn fixed_end_moments(&self) -> (f64, f64) {
        self.loads
            .iter()
            .map(|load| load.fixed_end_moments(self.support, self.span_m))
            .fold((0.0, 0.0), |(ma, mb), (a, b)| (ma + a, mb + b))
    }

    /// Total shear at x
    pub fn shear_at(&self, x: f64) -> f64 {
        self.loads
            .iter()
            .map(|load| load.shear_at(self.support, self.span_m, x))
            .sum()
    }

    /// Total moment at x
    pub fn moment_at(&self, x: f64) -> f64 {
        self.loads
            .iter()
            .map(|load| load.moment_at(self.support, self.span_m, x))
            .sum()
    }

    /// Positions where the moment can peak between samples:
    /// under the point load and where the shear changes sign.
    fn critical_positions(&self) -> Vec<f64> {
        let (r_a, _) = self.reactions();
        let w: f64 = self
            .loads
            .iter()
            .map(|load| match load {
                SpanLoad::Uniform { w } => *w,
                SpanLoad::Point { .. } => 0.0,
            })
            .sum();

        let mut positions = vec![0.0, self.span_m];
        for load in &self.loads {
            if let SpanLoad::Point { p, a } = load {
                positions.push(*a);
                if w > 0.0 {
                    positions.push((r_a - p) / w);
                }
            }
        }
        if w > 0.0 {
            positions.push(r_a / w);
        }
        positions.retain(|x| x.is_finite() && *x >= 0.0 && *x <= self.span_m);
        positions
    }

    /// Sample the diagram and locate peaks
    pub fn analyze(&self, sample_points: usize) -> BeamSpanResult {
        let diagram = ForceDiagram::sample(sample_points, self.span_m, 0.0, |x| {
            (self.shear_at(x), self.moment_at(x))
        });

        let candidates = diagram
            .points
            .iter()
            .map(|pt| (pt.x_m, pt.shear_kgf, pt.moment_kgf_m))
            .chain(
                self.critical_positions()
                    .into_iter()
                    .map(|x| (x, self.shear_at(x), self.moment_at(x))),
            );

        let mut max_moment = Extreme { x_m: 0.0, value: f64::NEG_INFINITY };
        let mut min_moment = Extreme { x_m: 0.0, value: f64::INFINITY };
        let mut max_abs_shear = Extreme::default();
        for (x, v, m) in candidates {
            if m > max_moment.value {
                max_moment = Extreme { x_m: x, value: m };
            }
            if m < min_moment.value {
                min_moment = Extreme { x_m: x, value: m };
            }
            if v.abs() > max_abs_shear.value {
                max_abs_shear = Extreme { x_m: x, value: v.abs() };
            }
        }

        let (reaction_left_kgf, reaction_right_kgf) = self.reactions();
        let fixed_end_moments = match self.support {
            SupportCondition::Simple => None,
            SupportCondition::FixedFixed => {
                let (m_a_kgf_m, m_b_kgf_m) = self.fixed_end_moments();
                Some(FixedEndMoments { m_a_kgf_m, m_b_kgf_m })
            }
        };

        BeamSpanResult {
            support: self.support,
            span_m: self.span_m,
            reaction_left_kgf,
            reaction_right_kgf,
            fixed_end_moments,
            max_moment,
            min_moment,
            max_abs_shear,
            diagram,
        }
    }
}

/// Analyse a single span.
pub fn calculate(input: &BeamSpanInput, settings: &DesignSettings) -> CalcResult<BeamSpanResult> {
    input.validate()?;
    settings.validate()?;

    let analysis = BeamAnalysis::new(input, settings.load_superposition);
    let result = analysis.analyze(settings.sample_points);

    debug!(
        label = %input.label,
        support = %input.support,
        r_a = result.reaction_left_kgf,
        r_b = result.reaction_right_kgf,
        m_max = result.max_moment.value,
        m_min = result.min_moment.value,
        "span analysed"
    );

    Ok(result)
}
