//! Number helpers
//!
//! Clamping, bounded random values and integer truncation. Bounds are `f64`;
//! a NaN bound is treated as "not a number" and rejected.

use crate::error::{Result, UtilError};
use rand::Rng;

/// Constrain `value` to `[min, max]`
///
/// Values above `max` become `max`, values below `min` (and NaN) become `min`.
///
/// # Errors
///
/// Returns [`UtilError::InvalidArgument`] if `min` or `max` is NaN.
///
/// # Examples
///
/// ```
/// use entkit::numeric::constrain_to_range;
///
/// assert_eq!(constrain_to_range(13.0, 0.0, 6.0).unwrap(), 6.0);
/// ```
pub fn constrain_to_range(value: f64, min: f64, max: f64) -> Result<f64> {
    if min.is_nan() || max.is_nan() {
        return Err(UtilError::invalid_argument(
            "constrain_to_range(...) requires number args",
        ));
    }

    if value >= min {
        return Ok(if value <= max { value } else { max });
    }
    Ok(min)
}

/// Random value in `[min, max]`, rounded to the nearest integer
///
/// # Errors
///
/// See [`random_within_range_with`].
pub fn random_within_range(min: f64, max: f64) -> Result<f64> {
    random_within_range_with(&mut rand::thread_rng(), min, max, true)
}

/// Random value in `[min, max]` drawn from `rng`
///
/// With `round` set, halves round toward positive infinity.
///
/// # Errors
///
/// - [`UtilError::InvalidArgument`] if either bound is not finite
/// - [`UtilError::InvalidRange`] if `max < min`
pub fn random_within_range_with<R: Rng>(
    rng: &mut R,
    min: f64,
    max: f64,
    round: bool,
) -> Result<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(UtilError::invalid_argument(
            "random_within_range(...) requires number args",
        ));
    }

    if max < min {
        return Err(UtilError::invalid_range(
            "random_within_range(...) max should not be less than min",
        ));
    }

    if max == min {
        return Ok(max);
    }

    // Interpolate instead of scaling `max - min`, which overflows for wide spans.
    let r = rng.gen::<f64>();
    let value = (min * (1.0 - r) + max * r).clamp(min, max);
    Ok(if round { (value + 0.5).floor() } else { value })
}

/// Coin flip built on [`random_within_range`] over `[0, 1]`
pub fn random_bool() -> bool {
    matches!(random_within_range(0.0, 1.0), Ok(n) if n != 0.0)
}

/// Drop the fractional part: negatives are ceiled, everything else floored
pub fn integer_truncate(value: f64) -> f64 {
    if value < 0.0 {
        value.ceil()
    } else {
        value.floor()
    }
}
