//! Four-point cubic segment interpolation.
//!
//! The segment runs from `p1` (t = 0) to `p2` (t = 1); `p0` and `p3` only
//! shape the tangents at either end. Coefficients are the Catmull-Rom style
//! blend with tension 0.5:
//!
//! ```text
//! a = -0.5 p0 + 1.5 p1 - 1.5 p2 + 0.5 p3
//! b =      p0 - 2.5 p1 + 2.0 p2 - 0.5 p3
//! c = -0.5 p0          + 0.5 p2
//! d =           p1
//! y = a t^3 + b t^2 + c t + d
//! ```
//!
//! The output is not bounded. Extreme control values overshoot the
//! `[min(p), max(p)]` range; clipping is up to whoever draws the result.

use ce_core::Real;

const THREE_HALVES: Real = 3.0 / 2.0;
const FIVE_HALVES: Real = 5.0 / 2.0;

/// Polynomial coefficients of one segment, computed once and evaluated many
/// times by the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
}

impl CubicSegment {
    pub fn new(p0: Real, p1: Real, p2: Real, p3: Real) -> Self {
        Self {
            a: -0.5 * p0 + THREE_HALVES * p1 - THREE_HALVES * p2 + 0.5 * p3,
            b: p0 - FIVE_HALVES * p1 + 2.0 * p2 - 0.5 * p3,
            c: -0.5 * p0 + 0.5 * p2,
            d: p1,
        }
    }

    pub fn from_points(p: [Real; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }

    /// Evaluate at `t`, nominally in `[0, 1]`.
    pub fn eval(&self, t: Real) -> Real {
        let t2 = t * t;
        let t3 = t2 * t;
        self.a * t3 + self.b * t2 + self.c * t + self.d
    }
}

/// One-shot evaluation of the segment defined by `p0..p3` at `t`.
pub fn cubic(p0: Real, p1: Real, p2: Real, p3: Real, t: Real) -> Real {
    CubicSegment::new(p0, p1, p2, p3).eval(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_match_blend_matrix() {
        let seg = CubicSegment::new(0.25, 0.5, 0.1, 0.75);
        assert!((seg.a - (-0.125 + 0.75 - 0.15 + 0.375)).abs() < 1e-12);
        assert!((seg.b - (0.25 - 1.25 + 0.2 - 0.375)).abs() < 1e-12);
        assert!((seg.c - (-0.125 + 0.05)).abs() < 1e-12);
        assert_eq!(seg.d, 0.5);
    }

    #[test]
    fn collinear_points_give_a_line() {
        // Evenly spaced values: the blend reproduces linear data exactly.
        for i in 0..=10 {
            let t = i as Real / 10.0;
            let y = cubic(0.0, 1.0, 2.0, 3.0, t);
            assert!((y - (1.0 + t)).abs() < 1e-12, "t={t} y={y}");
        }
    }

    #[test]
    fn flat_points_stay_flat() {
        for i in 0..=4 {
            let t = i as Real / 4.0;
            assert!((cubic(0.4, 0.4, 0.4, 0.4, t) - 0.4).abs() < 1e-12);
        }
    }

    #[test]
    fn overshoot_is_not_clipped() {
        // Sharp tangents pull the segment outside the unit range.
        let peak = (0..=100)
            .map(|i| cubic(-5.0, 1.0, 1.0, -5.0, i as Real / 100.0))
            .fold(Real::MIN, Real::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn midpoint_of_default_shape() {
        let p = [75.0, 50.0, 90.0, 25.0].map(ce_core::normalize);
        let y = CubicSegment::from_points(p).eval(0.5);
        // a/8 + b/4 + c/2 + d with p = (0.25, 0.5, 0.1, 0.75)
        let expected = 0.85 / 8.0 + (-1.175) / 4.0 + (-0.075) / 2.0 + 0.5;
        assert!((y - expected).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn passes_through_inner_points(
            p0 in -1.0e6_f64..1.0e6,
            p1 in -1.0e6_f64..1.0e6,
            p2 in -1.0e6_f64..1.0e6,
            p3 in -1.0e6_f64..1.0e6,
        ) {
            let scale = 1.0 + p0.abs().max(p1.abs()).max(p2.abs()).max(p3.abs());
            prop_assert_eq!(cubic(p0, p1, p2, p3, 0.0), p1);
            prop_assert!((cubic(p0, p1, p2, p3, 1.0) - p2).abs() <= 1e-12 * scale);
        }
    }
}
