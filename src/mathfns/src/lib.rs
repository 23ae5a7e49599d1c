// mathfns/src/lib.rs

//! Small numeric helpers: decimal rounding to integers and a logarithm that
//! never fails on zero or negative input.

use thiserror::Error;

/// Values below this are treated as zero by [`safe_log`].
pub const LOG_ZERO_THRESHOLD: f64 = 1e-100;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("cannot round non-finite value {value}")]
    NonFinite { value: f64 },
    #[error("rounded value {value} does not fit in a 64-bit integer")]
    OutOfRange { value: f64 },
}

/// Represent `x` with `digits` digits after the decimal point as an integer.
///
/// The value is scaled by `10^digits`, rounded half away from zero and
/// truncated. Useful when floating point comparisons fail on precision,
/// e.g. `round_to(1.234, 2) == Ok(123)`.
pub fn round_to(x: f64, digits: i32) -> Result<i64, MathError> {
    if !x.is_finite() {
        return Err(MathError::NonFinite { value: x });
    }

    let scaled = x * 10f64.powi(digits);
    let rounded = if x >= 0.0 {
        (scaled + 0.5).trunc()
    } else {
        (scaled - 0.5).trunc()
    };

    if !rounded.is_finite() {
        return Err(MathError::NonFinite { value: rounded });
    }
    // 2^63 is exact in f64; i64::MAX is not
    let limit = 2f64.powi(63);
    if rounded < -limit || rounded >= limit {
        return Err(MathError::OutOfRange { value: rounded });
    }
    Ok(rounded as i64)
}

/// Natural log of `n`, or `neg` for negative `n`, or `zero` for `n` below
/// [`LOG_ZERO_THRESHOLD`].
///
/// Pass `None` for both fallbacks to get an `Option<f64>`:
///
/// ```
/// use nexscan_mathfns::safe_log;
///
/// assert_eq!(safe_log(1.0, None, None), Some(0.0));
/// assert_eq!(safe_log(0.0, None, None), None);
/// assert_eq!(safe_log(-2.0, 0.0, f64::NEG_INFINITY), f64::NEG_INFINITY);
/// ```
pub fn safe_log<T: From<f64>>(n: f64, zero: T, neg: T) -> T {
    if n < 0.0 {
        neg
    } else if n < LOG_ZERO_THRESHOLD {
        zero
    } else {
        T::from(n.ln())
    }
}
