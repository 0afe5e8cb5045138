use crate::CoreError;

/// Floating point type used throughout the editor.
pub type Real = f64;

/// Lower bound of a control value (top of the drawable range).
pub const VALUE_MIN: Real = 0.0;
/// Upper bound of a control value (bottom of the drawable range).
pub const VALUE_MAX: Real = 100.0;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Check that `v` is a finite control value inside `[VALUE_MIN, VALUE_MAX]`.
pub fn ensure_in_domain(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if (VALUE_MIN..=VALUE_MAX).contains(&v) {
        Ok(v)
    } else {
        Err(CoreError::OutOfRange {
            what,
            value: v,
            min: VALUE_MIN,
            max: VALUE_MAX,
        })
    }
}

/// Clamp a control value into `[VALUE_MIN, VALUE_MAX]`.
///
/// NaN collapses to `VALUE_MIN` so the stored value always stays in range.
pub fn clamp_value(v: Real) -> Real {
    if v.is_nan() {
        return VALUE_MIN;
    }
    v.clamp(VALUE_MIN, VALUE_MAX)
}

/// Map a control value to the interpolator's unit range, flipping the axis
/// so that the top of the surface (0) becomes 1.0.
pub fn normalize(v: Real) -> Real {
    (VALUE_MAX - v) / VALUE_MAX
}

/// Inverse of [`normalize`].
pub fn denormalize(n: Real) -> Real {
    VALUE_MAX - n * VALUE_MAX
}
