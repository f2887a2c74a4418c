use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::i64_to_u32_checked,
};

/// Evaluates an exponentiation operation.
///
/// Integer–integer exponentiation with a non-negative exponent uses checked
/// arithmetic and stays integral while the result fits in an `i64`. Every
/// other combination, including integer overflow and negative exponents, is
/// computed with `powf` and yields a real.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for zero raised to a negative power.
/// - [`RuntimeError::InvalidNumber`] when the result is not a real number,
///   e.g. a negative base with a fractional exponent.
/// - [`RuntimeError::Overflow`] when finite operands produce an infinite
///   result.
///
/// # Example
/// ```
/// use infixcalc::{Number, RuntimeError, interpreter::evaluator::binary::power::eval_pow};
///
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(10)), Ok(Number::Integer(1024)));
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(-1)), Ok(Number::Real(0.5)));
/// assert_eq!(eval_pow(Number::Integer(-8), Number::Real(0.5)),
///            Err(RuntimeError::InvalidNumber("-8 ^ 0.5".to_string())));
/// ```
pub fn eval_pow(base: Number, exponent: Number) -> EvalResult<Number> {
    if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
       && let Some(e) = i64_to_u32_checked(e)
       && let Some(result) = b.checked_pow(e)
    {
        return Ok(Number::Integer(result));
    }

    let (b, e) = (base.as_real(), exponent.as_real());
    if b == 0.0 && e < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    let result = b.powf(e);
    if result.is_nan() {
        return Err(RuntimeError::InvalidNumber(format!("{base} ^ {exponent}")));
    }
    if result.is_infinite() && b.is_finite() && e.is_finite() {
        return Err(RuntimeError::Overflow);
    }

    Ok(Number::Real(result))
}
