use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An operator other than `+` or `-` was applied to a single operand.
    #[error("This operator requires two numbers")]
    BinaryOperatorRequiresTwoOperands,
    /// The right operand of `/` or `%` was zero, or zero was raised to a
    /// negative power.
    #[error("Division by zero")]
    DivisionByZero,
    /// The operation has no real-valued result, e.g. `(-8) ^ 0.5`.
    #[error("Invalid number \"{0}\"")]
    InvalidNumber(String),
    /// The result of an exponentiation is too large to represent.
    #[error("Numerical result out of range")]
    Overflow,
}
