//! Curve math for the editor: the four-point cubic segment and the sampler
//! that turns four control values into a drawable point sequence.

pub mod error;
pub mod interp;
pub mod sampling;

pub use error::{CurveError, CurveResult};
pub use interp::{CubicSegment, cubic};
pub use sampling::{MIN_STEP, SamplingConfig, sample_curve};
