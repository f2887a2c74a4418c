/// Converts an `i64` to the nearest `f64`.
///
/// Values beyond `2^53` in magnitude are rounded. This is the promotion used
/// when integer arithmetic overflows or meets a real operand.
///
/// ## Example
/// ```
/// use infixcalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `i64` exponent to `u32` if it is non-negative and in range.
///
/// ## Example
/// ```
/// use infixcalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

