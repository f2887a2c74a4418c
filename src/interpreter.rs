/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree bottom-up, applies the arithmetic of each
/// operator and reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// # Responsibilities
/// - Recognizes numbers, symbolic operators, word aliases and parentheses.
/// - Reports invalid operators and malformed numbers with the offending text.
pub mod lexer;
/// The parser module builds expression trees from text.
///
/// The driver walks the text with an explicit cursor, resolves parenthesis
/// groups recursively, and hands the flat term sequence of each nesting level
/// to the structurer, which applies precedence and associativity.
pub mod parser;
/// The validator checks parenthesis balance before anything else runs.
pub mod validator;
/// The value module defines the numeric result type.
pub mod value;
