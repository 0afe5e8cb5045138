//! Turning four control values into a discrete point sequence.
//!
//! Control values live in `[0, 100]` with 0 at the top of the surface. The
//! interpolator works on the flipped unit range, so each value goes through
//! `(100 - p) / 100` on the way in and the result is flipped back for y.
//! Samples are spread across a horizontal band of the 100x100 editor view
//! box, which by default spans the middle third, between the p1 and p2
//! anchors.

use ce_core::{Point, Real, VALUE_MAX, denormalize, normalize};
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::interp::CubicSegment;

/// Smallest accepted step. Caps a sample set at 100 000 points.
pub const MIN_STEP: Real = 1e-3;

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Distance between samples, in domain units over `[0, 100)`.
    pub step: Real,
    /// Left edge of the drawing band, as a fraction of the view-box width.
    pub band_start: Real,
    /// Width of the drawing band, as a fraction of the view-box width.
    pub band_width: Real,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            step: 0.5,
            band_start: 1.0 / 3.0,
            band_width: 1.0 / 3.0,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> CurveResult<()> {
        if !(self.step.is_finite() && self.step >= MIN_STEP && self.step <= VALUE_MAX) {
            return Err(CurveError::InvalidSampling {
                what: "step must be in [0.001, 100]",
            });
        }
        if !(self.band_start.is_finite() && self.band_width.is_finite()) {
            return Err(CurveError::InvalidSampling {
                what: "band must be finite",
            });
        }
        if self.band_width <= 0.0 {
            return Err(CurveError::InvalidSampling {
                what: "band_width must be positive",
            });
        }
        Ok(())
    }

    /// Number of samples taken over `[0, 100)`.
    pub fn sample_count(&self) -> usize {
        (VALUE_MAX / self.step).ceil() as usize
    }
}

/// Sample the segment defined by the four control values.
///
/// Returns one point per step, in editor view-box coordinates, ordered left
/// to right. Steps are indexed rather than accumulated so the count does not
/// drift with the step size.
pub fn sample_curve(values: [Real; 4], config: &SamplingConfig) -> Vec<Point> {
    let segment = CubicSegment::from_points(values.map(normalize));
    (0..config.sample_count())
        .map(|i| {
            let t = (i as Real * config.step) / VALUE_MAX;
            let x = (config.band_start + config.band_width * t) * VALUE_MAX;
            let y = denormalize(segment.eval(t));
            Point::new(x, y)
        })
        .collect()
}
