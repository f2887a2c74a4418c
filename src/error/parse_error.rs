use thiserror::Error;

/// Represents all errors that can occur during validation, lexing or
/// structuring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Parenthesis counts do not balance, or a `)` closes nothing.
    #[error("Unmatched parenthesis")]
    UnmatchedParenthesis,
    /// An unrecognized operator word or symbol run.
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
    /// A number-shaped token that does not parse to a finite value.
    #[error("Invalid number \"{0}\"")]
    InvalidNumber(String),
    /// The operand/operator layout cannot form an expression.
    #[error("Failed to structure \"{0}\"")]
    MalformedExpression(String),
    /// Parenthesis groups nest deeper than the parser accepts.
    #[error("Maximum nesting depth exceeded")]
    NestingTooDeep,
    /// The expression holds more operators than the parser accepts.
    #[error("Maximum operator count exceeded")]
    TooManyOperators,
    /// A token was requested past the end of the input.
    #[error("End of string")]
    UnexpectedEndOfInput,
}
