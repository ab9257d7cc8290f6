//! # Two-Span Continuous Beam
//!
//! Approximate analysis of a beam continuous over one interior support, by the
//! coefficient method:
//!
//! 1. Interior moment M_B = -(w1·L1² + w2·L2²)/8
//! 2. Each span is then an independent simple span carrying its own uniform
//!    load plus M_B at the interior end, which fixes its reactions
//! 3. Span 1 is sampled from A to B; span 2 from B to C with its moment curve
//!    starting at M_B
//!
//! This is not an exact solution for unequal spans or loads; exact multi-span
//! analysis is out of scope.
//!
//! ## Notation
//!
//! ```text
//!    ↓↓↓↓↓↓ w1 ↓↓↓↓↓↓↓↓↓↓↓ w2 ↓↓↓↓
//!    ══════════════╤═════════════
//!    △             △             △
//!    A ←── L1 ───→ B ←── L2 ───→ C
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::calculations::continuous_beam::{calculate, ContinuousBeamInput, SpanSegment};
//! use rcdesign_core::settings::DesignSettings;
//!
//! let input = ContinuousBeamInput {
//!     label: "VC-1".to_string(),
//!     spans: [SpanSegment::new(5.0, 1000.0), SpanSegment::new(5.0, 1000.0)],
//! };
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert!((result.interior_moment_kgf_m + 6250.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::beam_analysis::{Extreme, ForceDiagram};
use crate::equations::beam::{two_span_interior_moment, two_span_reactions};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::settings::DesignSettings;

/// One span of the continuous beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanSegment {
    /// Span length (m)
    pub length_m: f64,
    /// Uniform load over the span (kgf/m)
    pub uniform_kgf_m: f64,
}

impl SpanSegment {
    pub fn new(length_m: f64, uniform_kgf_m: f64) -> Self {
        SpanSegment {
            length_m,
            uniform_kgf_m,
        }
    }
}

/// Input parameters for a two-span continuous beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousBeamInput {
    /// User label
    pub label: String,
    /// Left span (A–B) and right span (B–C)
    pub spans: [SpanSegment; 2],
}

impl ContinuousBeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let [first, second] = &self.spans;
        require_positive("spans[0].length_m", first.length_m)?;
        require_positive("spans[1].length_m", second.length_m)?;
        require_non_negative("spans[0].uniform_kgf_m", first.uniform_kgf_m)?;
        require_non_negative("spans[1].uniform_kgf_m", second.uniform_kgf_m)?;
        if first.uniform_kgf_m == 0.0 && second.uniform_kgf_m == 0.0 {
            return Err(CalcError::invalid_input(
                "spans",
                "0",
                "Neither span carries load",
            ));
        }
        Ok(())
    }

    /// Total length A–C (m)
    pub fn total_length_m(&self) -> f64 {
        self.spans[0].length_m + self.spans[1].length_m
    }
}

/// Support reactions (kgf), positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousReactions {
    /// End support A
    pub a_kgf: f64,
    /// Interior support B, share from span 1
    pub b_left_kgf: f64,
    /// Interior support B, share from span 2
    pub b_right_kgf: f64,
    /// End support C
    pub c_kgf: f64,
}

impl ContinuousReactions {
    /// Total reaction at B
    pub fn b_total_kgf(&self) -> f64 {
        self.b_left_kgf + self.b_right_kgf
    }

    /// Sum of all reactions
    pub fn total_kgf(&self) -> f64 {
        self.a_kgf + self.b_total_kgf() + self.c_kgf
    }
}

/// Results from a two-span continuous beam analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousBeamResult {
    /// Interior support moment M_B (kgf·m), negative (hogging)
    pub interior_moment_kgf_m: f64,
    /// Support reactions
    pub reactions: ContinuousReactions,
    /// Largest sagging moment in each span, positions measured from A
    pub max_span_moments: [Extreme; 2],
    /// Largest shear magnitude over both spans, position measured from A
    pub max_abs_shear: Extreme,
    /// Span A–B samples, x measured from A
    pub span1: ForceDiagram,
    /// Span B–C samples, x measured from A (starting at L1)
    pub span2: ForceDiagram,
}

/// Analyse a two-span continuous beam.
pub fn calculate(
    input: &ContinuousBeamInput,
    settings: &DesignSettings,
) -> CalcResult<ContinuousBeamResult> {
    input.validate()?;
    settings.validate()?;

    let [first, second] = input.spans;
    let (l1, w1) = (first.length_m, first.uniform_kgf_m);
    let (l2, w2) = (second.length_m, second.uniform_kgf_m);

    let m_b = two_span_interior_moment(w1, l1, w2, l2);
    let (r_a, r_b1, r_b2, r_c) = two_span_reactions(w1, l1, w2, l2, m_b);

    let count = settings.continuous_sample_points;
    let span1 = ForceDiagram::sample(count, l1, 0.0, |x| {
        (r_a - w1 * x, r_a * x - w1 * x * x / 2.0)
    });
    let span2 = ForceDiagram::sample(count, l2, l1, |x| {
        (r_b2 - w2 * x, m_b + r_b2 * x - w2 * x * x / 2.0)
    });

    // Sagging peaks sit at zero shear, x = R/w from the span's left end
    let peak = |r: f64, w: f64, l: f64, m_start: f64, origin: f64| -> Extreme {
        if w > 0.0 {
            let x = (r / w).clamp(0.0, l);
            Extreme {
                x_m: origin + x,
                value: m_start + r * x - w * x * x / 2.0,
            }
        } else {
            // No load: moment is linear and peaks at an end
            let end = m_start + r * l;
            if end > m_start {
                Extreme { x_m: origin + l, value: end }
            } else {
                Extreme { x_m: origin, value: m_start }
            }
        }
    };
    let max_span_moments = [peak(r_a, w1, l1, 0.0, 0.0), peak(r_b2, w2, l2, m_b, l1)];

    let max_abs_shear = span1
        .points
        .iter()
        .chain(span2.points.iter())
        .map(|pt| Extreme {
            x_m: pt.x_m,
            value: pt.shear_kgf.abs(),
        })
        .fold(Extreme::default(), |best, e| if e.value > best.value { e } else { best });

    debug!(
        label = %input.label,
        m_b,
        r_a,
        r_b = r_b1 + r_b2,
        r_c,
        "continuous beam analysed"
    );

    Ok(ContinuousBeamResult {
        interior_moment_kgf_m: m_b,
        reactions: ContinuousReactions {
            a_kgf: r_a,
            b_left_kgf: r_b1,
            b_right_kgf: r_b2,
            c_kgf: r_c,
        },
        max_span_moments,
        max_abs_shear,
        span1,
        span2,
    })
}
