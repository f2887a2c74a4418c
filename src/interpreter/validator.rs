use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Checks that every `(` has a matching `)`.
///
/// Only parenthesis characters are inspected, in a single left-to-right pass.
/// A `)` that closes nothing, or any `(` left open at the end, fails with
/// [`ParseError::UnmatchedParenthesis`]. No other validation happens here.
///
/// # Example
/// ```
/// use infixcalc::{ParseError, validate};
///
/// assert!(validate("((1 + 2) * 3)").is_ok());
/// assert_eq!(validate("(1 + 2"), Err(ParseError::UnmatchedParenthesis));
/// assert_eq!(validate("1 + 2)"), Err(ParseError::UnmatchedParenthesis));
/// ```
pub fn validate(text: &str) -> ParseResult<()> {
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or(ParseError::UnmatchedParenthesis)?,
            _ => {},
        }
    }

    if depth == 0 { Ok(()) } else { Err(ParseError::UnmatchedParenthesis) }
}
