//! Lossless float-to-integer conversion.

use crate::{Error, Result};

/// Convert a float to an integer only when no information is lost.
///
/// Succeeds for finite values with a zero fractional part that fit in
/// `i64`; anything else is a non-integer failure carrying `warning` (or
/// the built-in message). This is what lets integer acquisition accept
/// `"1.0"` while rejecting `"1.01"`.
pub fn float_to_int(value: f64, warning: Option<&str>) -> Result<i64> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Ok(value as i64)
    } else {
        Err(Error::non_integer(warning))
    }
}
