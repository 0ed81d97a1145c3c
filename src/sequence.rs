//! Slice helpers

use crate::error::{Result, UtilError};

/// Map any index, negative or past the end, onto `0..items.len()` by wrapping
///
/// # Errors
///
/// Returns [`UtilError::InvalidArgument`] for an empty slice, which has no
/// index to wrap onto.
///
/// # Examples
///
/// ```
/// use entkit::sequence::wrapped_index;
///
/// let items = [0, 1, 2, 3, 4];
/// assert_eq!(wrapped_index(&items, -3).unwrap(), 2);
/// assert_eq!(wrapped_index(&items, 6).unwrap(), 1);
/// ```
pub fn wrapped_index<T>(items: &[T], index: i64) -> Result<usize> {
    let len = i64::try_from(items.len())
        .map_err(|_| UtilError::invalid_argument("wrapped_index(...) slice too long"))?;
    if len == 0 {
        return Err(UtilError::invalid_argument(
            "wrapped_index(...) requires a non-empty slice",
        ));
    }

    // `rem_euclid` is never negative, so the cast cannot wrap.
    Ok(index.rem_euclid(len) as usize)
}

/// Like [`wrapped_index`], for callers holding the index as a float
///
/// # Errors
///
/// Returns [`UtilError::InvalidArgument`] if `index` is not a finite,
/// integer-valued number, or if `items` is empty. Indices beyond the `i64`
/// range still wrap.
pub fn wrapped_index_f64<T>(items: &[T], index: f64) -> Result<usize> {
    if !index.is_finite() || index.fract() != 0.0 {
        return Err(UtilError::invalid_argument(
            "wrapped_index(...) requires an integer arg",
        ));
    }
    if index >= i64::MIN as f64 && index < i64::MAX as f64 {
        return wrapped_index(items, index as i64);
    }

    if items.is_empty() {
        return Err(UtilError::invalid_argument(
            "wrapped_index(...) requires a non-empty slice",
        ));
    }

    // Past the i64 range; float remainder is exact for integer-valued operands.
    Ok(index.rem_euclid(items.len() as f64) as usize)
}
