use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while validating, tokenizing or
/// structuring an expression, before any arithmetic is attempted.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree, such as division by zero or a result that is not a real number.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input could not be turned into an expression tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
