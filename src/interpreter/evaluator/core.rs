use log::trace;

use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Pending work of the evaluator's explicit stack.
enum Step<'a> {
    /// Reduce a subtree to a value.
    Visit(&'a Expr),
    /// Apply a prefix operator to the top value.
    Unary(Operator),
    /// Apply an operator to the top two values.
    Binary(Operator),
}

/// Evaluates an expression tree and returns its value.
///
/// The walk is post-order: every child, including structured parenthesis
/// groups, is fully reduced before its parent operator is applied. Left
/// operands are reduced before right ones and the first error encountered is
/// returned. Pending work lives on a heap stack, so tree depth does not
/// consume call stack.
///
/// # Example
/// ```
/// use infixcalc::{Expr, Number, Operator, RuntimeError, evaluate};
///
/// let expr = Expr::binary(Operator::Mul,
///                         Expr::binary(Operator::Add, Expr::from(2_i64), Expr::from(3_i64)),
///                         Expr::from(4_i64));
/// assert_eq!(evaluate(&expr), Ok(Number::Integer(20)));
///
/// let expr = Expr::binary(Operator::Mod, Expr::from(1_i64), Expr::from(0_i64));
/// assert_eq!(evaluate(&expr), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    let mut steps = vec![Step::Visit(expr)];
    let mut values: Vec<Number> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Literal(value)) => values.push(*value),
            Step::Visit(Expr::Unary { op, operand }) => {
                steps.push(Step::Unary(*op));
                steps.push(Step::Visit(operand));
            },
            Step::Visit(Expr::Binary { op, left, right }) => {
                steps.push(Step::Binary(*op));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            },
            Step::Unary(op) => {
                let Some(value) = values.pop() else { break };
                values.push(eval_unary(op, value)?);
            },
            Step::Binary(op) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else { break };
                let result = eval_binary(op, left, right)?;
                trace!("{left} {op} {right} = {result}");
                values.push(result);
            },
        }
    }

    values.pop().ok_or(RuntimeError::BinaryOperatorRequiresTwoOperands)
}
