use crate::interpreter::value::Number;

/// Applies an arithmetic operation with integer preservation.
///
/// Two integers are combined with `integer_op`. If it reports overflow by
/// returning `None`, or if either operand is real, both operands are
/// promoted and combined with `real_op`.
pub fn combine(left: Number,
               right: Number,
               integer_op: impl FnOnce(i64, i64) -> Option<i64>,
               real_op: impl FnOnce(f64, f64) -> f64)
               -> Number {
    if let (Number::Integer(a), Number::Integer(b)) = (left, right)
       && let Some(result) = integer_op(a, b)
    {
        return Number::Integer(result);
    }

    Number::Real(real_op(left.as_real(), right.as_real()))
}

/// Floored integer remainder: the result has the sign of `divisor`.
///
/// Returns `None` for a zero divisor and for `i64::MIN % -1`.
///
/// # Example
/// ```
/// use infixcalc::interpreter::evaluator::binary::scalar::floored_rem_i64;
///
/// assert_eq!(floored_rem_i64(-7, 3), Some(2));
/// assert_eq!(floored_rem_i64(7, -3), Some(-2));
/// assert_eq!(floored_rem_i64(1, 0), None);
/// ```
#[must_use]
pub fn floored_rem_i64(dividend: i64, divisor: i64) -> Option<i64> {
    let rem = dividend.checked_rem(divisor)?;
    if rem != 0 && (rem < 0) != (divisor < 0) { Some(rem + divisor) } else { Some(rem) }
}

/// Floored real remainder: the result has the sign of `divisor`.
#[must_use]
pub fn floored_rem_f64(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) { rem + divisor } else { rem }
}
