use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::i64_to_f64,
};

/// Evaluates an operator applied to a single operand.
///
/// `+` returns the operand unchanged and `-` negates it. Negating
/// `i64::MIN` yields a real. Every other operator fails with
/// [`RuntimeError::BinaryOperatorRequiresTwoOperands`].
///
/// # Example
/// ```
/// use infixcalc::{Number, Operator, RuntimeError, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(Operator::Sub, Number::Integer(5)), Ok(Number::Integer(-5)));
/// assert_eq!(eval_unary(Operator::Add, Number::Real(1.5)), Ok(Number::Real(1.5)));
/// assert_eq!(eval_unary(Operator::Pow, Number::Integer(2)),
///            Err(RuntimeError::BinaryOperatorRequiresTwoOperands));
/// ```
pub fn eval_unary(op: Operator, value: Number) -> EvalResult<Number> {
    match op {
        Operator::Add => Ok(value),
        Operator::Sub => Ok(match value {
                                Number::Integer(n) => {
                                    n.checked_neg()
                                     .map_or_else(|| Number::Real(-i64_to_f64(n)), Number::Integer)
                                },
                                Number::Real(r) => Number::Real(-r),
                            }),
        Operator::Mul | Operator::Div | Operator::Mod | Operator::Pow => {
            Err(RuntimeError::BinaryOperatorRequiresTwoOperands)
        },
    }
}
