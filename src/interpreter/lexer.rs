use std::num::IntErrorKind;

use log::trace;
use logos::Logos;

use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{parser::core::ParseResult, value::Number},
};

/// A lexical token of an expression.
///
/// Tokens are produced one at a time by [`next_token`] and are immutable once
/// produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, possibly carrying a leading `-`.
    Number(Number),
    /// A symbolic operator or a word alias.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

/// Raw lexeme shapes recognized by the generated lexer.
///
/// Whitespace never reaches the lexer; it is stripped before scanning.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Digits and dots, optionally signed: `42`, `-3`, `2.5`, `1.2.3`.
    #[regex(r"-?[0-9][0-9.]*")]
    Number,
    /// A letter run plus any trailing run of non-alphanumeric,
    /// non-parenthesis characters: `add`, `pow`, `mul*`, `éadd`.
    #[regex(r"\p{L}+[^\p{L}0-9()]*", allow_greedy = true)]
    Word,
    /// A run of symbols that starts with something other than a known
    /// operator or parenthesis: `$`, `&&`, `.`.
    #[regex(r"[^\p{L}0-9()+\-*/%^][^\p{L}0-9()]*", allow_greedy = true)]
    Stray,
    /// One of `+ - * / % ^`.
    #[regex(r"[+\-*/%^]")]
    Symbol,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Returns the token starting at byte offset `position` and the number of
/// bytes it spans.
///
/// `text` is expected to be free of whitespace. The rules are:
/// - a letter starts a word operator, which absorbs any trailing symbols and
///   must then be exactly one of `add sub mul div mod pow`;
/// - `+ - * / % ^ ( )` are single-character tokens;
/// - a digit, or a `-` directly followed by a digit, starts a number made of
///   digits and dots;
/// - anything else is an invalid operator, reported together with the symbols
///   that follow it.
///
/// # Errors
/// - [`ParseError::InvalidOperator`] for unknown words and symbol runs.
/// - [`ParseError::InvalidNumber`] for number-shaped text that does not parse
///   to a finite value.
/// - [`ParseError::UnexpectedEndOfInput`] if `position` is at or past the end.
///
/// # Example
/// ```
/// use infixcalc::{Number, Operator, ParseError, Token, next_token};
///
/// let text = "12.5mul3";
/// assert_eq!(next_token(text, 0), Ok((Token::Number(Number::Real(12.5)), 4)));
/// assert_eq!(next_token(text, 4), Ok((Token::Operator(Operator::Mul), 3)));
/// assert_eq!(next_token(text, 7), Ok((Token::Number(Number::Integer(3)), 1)));
/// assert_eq!(next_token(text, 8), Err(ParseError::UnexpectedEndOfInput));
///
/// assert_eq!(next_token("-3", 0), Ok((Token::Number(Number::Integer(-3)), 2)));
/// assert_eq!(next_token("plus1", 0), Err(ParseError::InvalidOperator("plus".into())));
/// assert_eq!(next_token("mul-3", 0), Err(ParseError::InvalidOperator("mul-".into())));
/// ```
pub fn next_token(text: &str, position: usize) -> ParseResult<(Token, usize)> {
    let rest = text.get(position..).unwrap_or_default();
    let mut lexer = Lexeme::lexer(rest);
    let lexeme = lexer.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    let slice = lexer.slice();

    let token = match lexeme {
        Ok(Lexeme::Number) => Token::Number(parse_number(slice)?),
        Ok(Lexeme::Word) => Token::Operator(Operator::from_word(slice).ok_or_else(|| {
                                                ParseError::InvalidOperator(slice.to_string())
                                            })?),
        Ok(Lexeme::Symbol) => Token::Operator(slice.chars()
                                                    .next()
                                                    .and_then(Operator::from_symbol)
                                                    .ok_or_else(|| {
                                                        ParseError::InvalidOperator(slice.to_string())
                                                    })?),
        Ok(Lexeme::LParen) => Token::OpenParen,
        Ok(Lexeme::RParen) => Token::CloseParen,
        Ok(Lexeme::Stray) | Err(()) => {
            return Err(ParseError::InvalidOperator(slice.to_string()));
        },
    };

    trace!("token {token:?} from {slice:?} at {position}");
    Ok((token, slice.len()))
}

/// Parses the text of a number lexeme.
///
/// Text containing a `.` is read as a real. Anything else is read as an
/// integer, falling back to a real when it does not fit in an `i64`.
fn parse_number(text: &str) -> ParseResult<Number> {
    let invalid = || ParseError::InvalidNumber(text.to_string());

    let number = if text.contains('.') {
        Number::Real(text.parse().map_err(|_| invalid())?)
    } else {
        match text.parse::<i64>() {
            Ok(n) => Number::Integer(n),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Number::Real(text.parse().map_err(|_| invalid())?)
            },
            Err(_) => return Err(invalid()),
        }
    };

    if number.is_finite() { Ok(number) } else { Err(invalid()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn single(text: &str) -> ParseResult<(Token, usize)> {
        next_token(text, 0)
    }

    #[test]
    fn symbols_are_single_characters() {
        let expected = [('+', Operator::Add),
                        ('-', Operator::Sub),
                        ('*', Operator::Mul),
                        ('/', Operator::Div),
                        ('%', Operator::Mod),
                        ('^', Operator::Pow)];
        for (symbol, op) in expected {
            let text = format!("{symbol}(");
            assert_eq!(single(&text), Ok((Token::Operator(op), 1)));
        }
        assert_eq!(single("(1"), Ok((Token::OpenParen, 1)));
        assert_eq!(single(")1"), Ok((Token::CloseParen, 1)));
    }

    #[test]
    fn word_aliases() {
        for op in Operator::ALL {
            let text = format!("{}7", op.word());
            assert_eq!(single(&text), Ok((Token::Operator(op), 3)));
        }
        assert_eq!(single("add(1)"), Ok((Token::Operator(Operator::Add), 3)));
    }

    #[test]
    fn word_absorbs_trailing_symbols() {
        assert_eq!(single("add+3"), Err(ParseError::InvalidOperator("add+".to_string())));
        assert_eq!(single("mul$%(2)"), Err(ParseError::InvalidOperator("mul$%".to_string())));
        assert_eq!(single("ADD3"), Err(ParseError::InvalidOperator("ADD".to_string())));
        assert_eq!(single("plus"), Err(ParseError::InvalidOperator("plus".to_string())));
    }

    #[test]
    fn words_start_on_any_letter() {
        assert_eq!(single("éadd(1)"), Err(ParseError::InvalidOperator("éadd".to_string())));
        assert_eq!(single("ßmul+2"), Err(ParseError::InvalidOperator("ßmul+".to_string())));
        assert_eq!(single("→1"), Err(ParseError::InvalidOperator("→".to_string())));
    }

    #[test]
    fn stray_symbols_report_the_whole_run() {
        assert_eq!(single("$$1"), Err(ParseError::InvalidOperator("$$".to_string())));
        assert_eq!(single("&+2"), Err(ParseError::InvalidOperator("&+".to_string())));
        assert_eq!(single(".5"), Err(ParseError::InvalidOperator(".".to_string())));
        assert_eq!(single("!(1)"), Err(ParseError::InvalidOperator("!".to_string())));
    }

    #[test]
    fn numbers() {
        assert_eq!(single("42+"), Ok((Token::Number(Number::Integer(42)), 2)));
        assert_eq!(single("-7*"), Ok((Token::Number(Number::Integer(-7)), 2)));
        assert_eq!(single("3.25)"), Ok((Token::Number(Number::Real(3.25)), 4)));
        assert_eq!(single("1."), Ok((Token::Number(Number::Real(1.0)), 2)));
        assert_eq!(single("-0.5"), Ok((Token::Number(Number::Real(-0.5)), 4)));
    }

    #[test]
    fn oversized_integers_become_reals() {
        assert_eq!(single("99999999999999999999"),
                   Ok((Token::Number(Number::Real(1e20)), 20)));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(single("1.2.3"), Err(ParseError::InvalidNumber("1.2.3".to_string())));
        assert_eq!(single("4.."), Err(ParseError::InvalidNumber("4..".to_string())));

        let huge = format!("1{}.0", "0".repeat(400));
        assert_eq!(single(&huge), Err(ParseError::InvalidNumber(huge)));
    }

    #[test]
    fn position_is_a_byte_offset() {
        let text = "1+22";
        assert_eq!(next_token(text, 1), Ok((Token::Operator(Operator::Add), 1)));
        assert_eq!(next_token(text, 2), Ok((Token::Number(Number::Integer(22)), 2)));
        assert_eq!(next_token(text, 4), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(next_token(text, 10), Err(ParseError::UnexpectedEndOfInput));
    }
}
