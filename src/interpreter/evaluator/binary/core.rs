use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                power::eval_pow,
                scalar::{combine, floored_rem_f64, floored_rem_i64},
            },
            core::EvalResult,
        },
        value::Number,
    },
};

/// Evaluates a binary operation between two values.
///
/// `+ - *` and `%` keep integer operands integral and promote to a real on
/// overflow or when either side is real. `/` is true division and always
/// yields a real. `%` is floored, so the result takes the sign of the
/// divisor. `^` is handled by [`eval_pow`].
///
/// # Errors
/// [`RuntimeError::DivisionByZero`] when the right operand of `/` or `%` is
/// zero, plus any error raised by [`eval_pow`].
///
/// # Example
/// ```
/// use infixcalc::{
///     Number, Operator, RuntimeError, interpreter::evaluator::binary::core::eval_binary,
/// };
///
/// let seven = Number::Integer(7);
/// assert_eq!(eval_binary(Operator::Mod, seven, Number::Integer(-3)), Ok(Number::Integer(-2)));
/// assert_eq!(eval_binary(Operator::Div, seven, Number::Integer(2)), Ok(Number::Real(3.5)));
/// assert_eq!(eval_binary(Operator::Div, seven, Number::Real(0.0)),
///            Err(RuntimeError::DivisionByZero));
/// ```
pub fn eval_binary(op: Operator, left: Number, right: Number) -> EvalResult<Number> {
    if matches!(op, Operator::Div | Operator::Mod) && right.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(match op {
           Operator::Add => combine(left, right, i64::checked_add, |a, b| a + b),
           Operator::Sub => combine(left, right, i64::checked_sub, |a, b| a - b),
           Operator::Mul => combine(left, right, i64::checked_mul, |a, b| a * b),
           Operator::Div => Number::Real(left.as_real() / right.as_real()),
           Operator::Mod => combine(left, right, floored_rem_i64, floored_rem_f64),
           Operator::Pow => return eval_pow(left, right),
       })
}
