use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use luma::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `i64` to `u32` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns an error if the value is negative or exceeds `u32::MAX`.
///
/// ## Parameters
/// - `value`: The integer value to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(u32)`: The converted value if safe.
/// - `Err(RuntimeError::LiteralTooLarge | LiteralTooSmall)`: If conversion is
///   invalid.
///
/// ## Example
/// ```
/// use luma::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// // Safe
/// let u = i64_to_u32_checked(45, 5).unwrap();
/// assert_eq!(u, 45);
///
/// // Negative value
/// let err = i64_to_u32_checked(-1, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooSmall { line: 5 }));
///
/// // Too large
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 11 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub const fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    if value > u32::MAX as i64 {
        return Err(RuntimeError::LiteralTooLarge { line });
    }

    if value < 0 {
        return Err(RuntimeError::LiteralTooSmall { line });
    }
    Ok(value as u32)
}
