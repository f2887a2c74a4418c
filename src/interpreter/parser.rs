/// Entry points of the parser.
///
/// Holds the text driver that resolves parenthesis groups with an explicit
/// cursor, and the [`core::structure`] step that validates the
/// operand/operator layout of one nesting level.
pub mod core;

/// Binary operator reduction.
///
/// Precedence climbing over the term sequence. `^` groups right-to-left, all
/// other operators group left-to-right.
pub mod binary;

/// Leading unary operators and plain operands.
pub mod unary;
