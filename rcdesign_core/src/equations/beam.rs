//! # Beam Force Formulas
//!
//! Closed-form reactions, shears and moments for the three beam models the
//! engine solves: simply supported, fixed-fixed, and the two-span continuous
//! beam by the approximate coefficient method.
//!
//! ## Notation
//!
//! - `L` = Span length (m)
//! - `x` = Position along beam from left support (m)
//! - `a` = Point load offset from left support (m), `b = L - a`
//! - `P` = Point load magnitude (kgf)
//! - `w` = Uniform load intensity (kgf/m)
//! - `M_A`, `M_B` = Fixed-end moments (kgf·m)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Shear: Positive when left side up relative to right
//! - Reactions: Positive upward
//! - Fixed-end moments are reported as support actions: `M_A` negative,
//!   `M_B` positive. The moment diagram starts at `M_A` and ends at `-M_B`.

// =============================================================================
// SIMPLY-SUPPORTED: POINT LOAD
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R_A ←───────L────→ R_B
/// ```
///
/// - R_A = P(L-a)/L
/// - R_B = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (p * (l - a) / l, p * a / l)
}

/// Shear at x for a point load, given the left reaction.
///
/// - V(x) = R_A       for x ≤ a
/// - V(x) = R_A - P   for x > a
#[inline]
pub fn point_load_shear(p: f64, a: f64, r_a: f64, x: f64) -> f64 {
    if x <= a {
        r_a
    } else {
        r_a - p
    }
}

/// Moment at x for a point load, given the left reaction.
///
/// - M(x) = R_A·x           for x ≤ a
/// - M(x) = R_A·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, r_a: f64, x: f64) -> f64 {
    if x <= a {
        r_a * x
    } else {
        r_a * x - p * (x - a)
    }
}

// =============================================================================
// SIMPLY-SUPPORTED: UNIFORM LOAD
// =============================================================================

/// Reactions for uniform load w over span L: R_A = R_B = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Shear at x for a uniform load, given the left reaction: V(x) = R_A - wx
#[inline]
pub fn uniform_load_shear(w: f64, r_a: f64, x: f64) -> f64 {
    r_a - w * x
}

/// Moment at x for a uniform load, given the left reaction:
/// M(x) = R_A·x - wx²/2
#[inline]
pub fn uniform_load_moment(w: f64, r_a: f64, x: f64) -> f64 {
    r_a * x - w * x * x / 2.0
}

/// Maximum simple-span moment for uniform load: wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

// =============================================================================
// FIXED-FIXED
// =============================================================================

/// Fixed-end moments for uniform load: M_A = -wL²/12, M_B = wL²/12
#[inline]
pub fn fixed_fixed_uniform_end_moments(w: f64, l: f64) -> (f64, f64) {
    let m = w * l * l / 12.0;
    (-m, m)
}

/// Fixed-end moments for point load P at a:
///
/// - M_A = -P·a·b²/L²
/// - M_B = P·a²·b/L²
#[inline]
pub fn fixed_fixed_point_end_moments(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let l2 = l * l;
    (-p * a * b * b / l2, p * a * a * b / l2)
}

/// Reactions for point load P at a on a fixed-fixed span:
///
/// - R_A = P·b²·(3a + b)/L³
/// - R_B = P·a²·(a + 3b)/L³
#[inline]
pub fn fixed_fixed_point_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let l3 = l * l * l;
    (
        p * b * b * (3.0 * a + b) / l3,
        p * a * a * (a + 3.0 * b) / l3,
    )
}

// =============================================================================
// TWO-SPAN CONTINUOUS (approximate coefficient method)
// =============================================================================

/// Approximate interior support moment: M_B = -(w1·L1² + w2·L2²)/8
#[inline]
pub fn two_span_interior_moment(w1: f64, l1: f64, w2: f64, l2: f64) -> f64 {
    -(w1 * l1 * l1 + w2 * l2 * l2) / 8.0
}

/// Support reactions of a two-span beam under the interior moment M_B.
///
/// Each span is a simple span carrying its own load plus the end moment M_B
/// at the interior support, so with hogging (negative) M_B:
///
/// - R_A  = w1·L1/2 + M_B/L1
/// - R_B1 = w1·L1/2 - M_B/L1
/// - R_B2 = w2·L2/2 - M_B/L2
/// - R_C  = w2·L2/2 + M_B/L2
///
/// Returns (R_A, R_B1, R_B2, R_C).
#[inline]
pub fn two_span_reactions(w1: f64, l1: f64, w2: f64, l2: f64, m_b: f64) -> (f64, f64, f64, f64) {
    let half1 = w1 * l1 / 2.0;
    let half2 = w2 * l2 / 2.0;
    (
        half1 + m_b / l1,
        half1 - m_b / l1,
        half2 - m_b / l2,
        half2 + m_b / l2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_point_load_asymmetric_reactions() {
        // 10 m beam, 1000 kgf at 3 m from left
        let (r_a, r_b) = point_load_reactions(1000.0, 3.0, 10.0);
        assert!(approx_eq(r_a, 700.0), "R_A = {}", r_a);
        assert!(approx_eq(r_b, 300.0), "R_B = {}", r_b);
    }

    #[test]
    fn test_point_load_moment_zero_at_supports() {
        let (r_a, _) = point_load_reactions(1000.0, 4.0, 10.0);
        assert!(approx_eq(point_load_moment(1000.0, 4.0, r_a, 0.0), 0.0));
        assert!(approx_eq(point_load_moment(1000.0, 4.0, r_a, 10.0), 0.0));
        // Peak under the load: Pab/L = 1000*4*6/10 = 2400
        assert!(approx_eq(point_load_moment(1000.0, 4.0, r_a, 4.0), 2400.0));
    }

    #[test]
    fn test_point_load_shear_jump() {
        let (r_a, r_b) = point_load_reactions(1000.0, 4.0, 10.0);
        assert_eq!(point_load_shear(1000.0, 4.0, r_a, 4.0), r_a);
        assert!(approx_eq(point_load_shear(1000.0, 4.0, r_a, 4.01), -r_b));
    }

    #[test]
    fn test_uniform_load() {
        let (r_a, r_b) = uniform_load_reactions(2000.0, 6.0);
        assert_eq!(r_a, 6000.0);
        assert_eq!(r_b, 6000.0);
        assert!(approx_eq(uniform_load_shear(2000.0, r_a, 3.0), 0.0));
        assert!(approx_eq(uniform_load_moment(2000.0, r_a, 3.0), uniform_load_max_moment(2000.0, 6.0)));
        assert!(approx_eq(uniform_load_max_moment(2000.0, 6.0), 9000.0));
    }

    #[test]
    fn test_fixed_fixed_uniform_end_moments() {
        let (m_a, m_b) = fixed_fixed_uniform_end_moments(1200.0, 5.0);
        assert!(approx_eq(m_a, -2500.0));
        assert!(approx_eq(m_b, 2500.0));
    }

    #[test]
    fn test_fixed_fixed_point_midspan() {
        // Midspan: M_A = -PL/8, M_B = PL/8, R_A = R_B = P/2
        let (m_a, m_b) = fixed_fixed_point_end_moments(800.0, 2.0, 4.0);
        assert!(approx_eq(m_a, -400.0));
        assert!(approx_eq(m_b, 400.0));
        let (r_a, r_b) = fixed_fixed_point_reactions(800.0, 2.0, 4.0);
        assert!(approx_eq(r_a, 400.0));
        assert!(approx_eq(r_b, 400.0));
    }

    #[test]
    fn test_fixed_fixed_point_equilibrium() {
        let (p, a, l) = (1000.0, 1.5, 6.0);
        let (r_a, r_b) = fixed_fixed_point_reactions(p, a, l);
        assert!(approx_eq(r_a + r_b, p));
        // Moment diagram closes at -M_B
        let (m_a, m_b) = fixed_fixed_point_end_moments(p, a, l);
        let m_end = m_a + point_load_moment(p, a, r_a, l);
        assert!(approx_eq(m_end, -m_b), "M(L) = {}, M_B = {}", m_end, m_b);
    }

    #[test]
    fn test_two_span_symmetry() {
        let m_b = two_span_interior_moment(1000.0, 5.0, 1000.0, 5.0);
        assert!(approx_eq(m_b, -1000.0 * 25.0 / 4.0));
        let (r_a, r_b1, r_b2, r_c) = two_span_reactions(1000.0, 5.0, 1000.0, 5.0, m_b);
        assert!(approx_eq(r_a, r_c));
        assert!(approx_eq(r_b1, r_b2));
        // Total load carried
        assert!(approx_eq(r_a + r_b1 + r_b2 + r_c, 10_000.0));
    }
}
