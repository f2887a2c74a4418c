/// Binary operator evaluation logic.
///
/// Handles the arithmetic of all six operators applied to two operands,
/// including integer-preserving arithmetic and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix forms of `+` and `-` and rejects every other
/// operator in prefix position.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the recursive tree walk and the evaluator's result type.
pub mod core;
