use log::{debug, trace};

use crate::{
    ast::{Expr, Operator, Term},
    error::ParseError,
    interpreter::lexer::{Token, next_token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting accepted by [`parse`].
pub const MAX_NESTING: usize = 256;

/// Most operators accepted in one expression, counted across all nesting
/// levels. Tree depth never exceeds this plus one.
pub const MAX_OPERATORS: usize = 1_000;

/// Parses expression text into a tree.
///
/// Whitespace is removed first. The remaining text is scanned with an
/// explicit byte cursor:
/// - a `(` is matched to its `)` by depth counting, and the enclosed text is
///   parsed recursively into a single operand;
/// - a `)` with no pending `(` is dropped;
/// - a `-` directly after an operand is always subtraction, so `5-3` is
///   `5 - 3` while `-5+3` and `2*-3` keep the sign on the literal.
///
/// The flat term sequence of each nesting level goes to [`structure`].
/// Returns `Ok(None)` for empty input.
///
/// # Errors
/// Besides lexer and structuring errors, [`ParseError::NestingTooDeep`] when
/// groups nest deeper than [`MAX_NESTING`] and
/// [`ParseError::TooManyOperators`] when the expression holds more than
/// [`MAX_OPERATORS`] operators.
///
/// # Example
/// ```
/// use infixcalc::{Expr, Operator, parse};
///
/// let expr = parse("(2 + 3) * 4").unwrap().unwrap();
/// assert_eq!(expr,
///            Expr::binary(Operator::Mul,
///                         Expr::binary(Operator::Add, Expr::from(2_i64), Expr::from(3_i64)),
///                         Expr::from(4_i64)));
///
/// assert_eq!(parse("   ").unwrap(), None);
/// ```
pub fn parse(text: &str) -> ParseResult<Option<Expr>> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut operators = 0;
    parse_group(&stripped, 0, &mut operators)
}

/// Parses one nesting level of whitespace-free text.
///
/// `depth` is the number of enclosing groups and `operators` the running
/// operator count of the whole expression.
fn parse_group(text: &str, depth: usize, operators: &mut usize) -> ParseResult<Option<Expr>> {
    let mut terms = Vec::new();
    let mut position = 0;

    while position < text.len() {
        if text[position..].starts_with('-') && matches!(terms.last(), Some(Term::Operand(_))) {
            push_operator(&mut terms, Operator::Sub, operators)?;
            position += 1;
            continue;
        }

        let (token, consumed) = next_token(text, position)?;
        match token {
            Token::CloseParen => {
                trace!("dropping unmatched ')' at {position}");
                position += consumed;
            },
            Token::OpenParen => {
                if depth >= MAX_NESTING {
                    return Err(ParseError::NestingTooDeep);
                }
                let close = matching_paren(text, position)?;
                let inner = &text[position + consumed..close];
                let expr = parse_group(inner, depth + 1, operators)?.ok_or_else(|| {
                                                  ParseError::MalformedExpression("()".to_string())
                                              })?;
                terms.push(Term::Operand(expr));
                position = close + 1;
            },
            Token::Number(value) => {
                terms.push(Term::Operand(Expr::Literal(value)));
                position += consumed;
            },
            Token::Operator(op) => {
                push_operator(&mut terms, op, operators)?;
                position += consumed;
            },
        }
    }

    debug!("terms of {text:?}: [{}]", render_terms(&terms));
    structure(&terms)
}

fn push_operator(terms: &mut Vec<Term>, op: Operator, operators: &mut usize) -> ParseResult<()> {
    *operators += 1;
    if *operators > MAX_OPERATORS {
        return Err(ParseError::TooManyOperators);
    }
    terms.push(Term::Operator(op));
    Ok(())
}

/// Returns the byte offset of the `)` matching the `(` at `open`.
fn matching_paren(text: &str, open: usize) -> ParseResult<usize> {
    let mut depth = 0usize;

    for (offset, byte) in text.bytes().enumerate().skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(offset);
                }
            },
            _ => {},
        }
    }

    Err(ParseError::UnmatchedParenthesis)
}

/// Builds an expression tree from the flat term sequence of one nesting
/// level.
///
/// - An empty sequence yields `Ok(None)`.
/// - A single operand is returned unchanged.
/// - Otherwise the layout must alternate operand/operator. A single leading
///   operator is allowed and becomes a unary node. The check is
///   `operands - (operators - leading) == 1`.
///
/// Grouping follows precedence: `^` binds tightest and groups right-to-left,
/// then `* / %`, then `+ -`, both left-to-right. A leading unary operator
/// applies to the exponent-level operand that follows it.
///
/// # Errors
/// [`ParseError::MalformedExpression`] carrying the rendered terms when the
/// layout is not a valid expression.
///
/// # Example
/// ```
/// use infixcalc::{Expr, Operator, Term, structure};
///
/// let terms = [Term::Operand(Expr::from(2_i64)),
///              Term::Operator(Operator::Pow),
///              Term::Operand(Expr::from(3_i64)),
///              Term::Operator(Operator::Pow),
///              Term::Operand(Expr::from(2_i64))];
/// let expr = structure(&terms).unwrap().unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
///
/// let dangling = [Term::Operand(Expr::from(2_i64)), Term::Operator(Operator::Add)];
/// assert!(structure(&dangling).is_err());
/// ```
pub fn structure(terms: &[Term]) -> ParseResult<Option<Expr>> {
    if terms.is_empty() {
        return Ok(None);
    }

    let mut structurer = Structurer::new(terms);
    structurer.check_shape()?;

    let expr = structurer.parse_expression()?;
    if structurer.peek().is_some() {
        return Err(structurer.malformed());
    }

    trace!("structured [{}] as {expr}", render_terms(terms));
    Ok(Some(expr))
}

/// Cursor over the terms of one nesting level.
///
/// Reduction methods live in the `binary` and `unary` modules.
pub(crate) struct Structurer<'a> {
    terms:  &'a [Term],
    cursor: usize,
}

impl<'a> Structurer<'a> {
    const fn new(terms: &'a [Term]) -> Self {
        Self { terms, cursor: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a Term> {
        self.terms.get(self.cursor)
    }

    pub(crate) fn next_term(&mut self) -> Option<&'a Term> {
        let term = self.terms.get(self.cursor)?;
        self.cursor += 1;
        Some(term)
    }

    /// Returns the operator under the cursor without consuming it.
    pub(crate) fn peek_operator(&self) -> Option<Operator> {
        match self.peek() {
            Some(Term::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    pub(crate) fn malformed(&self) -> ParseError {
        ParseError::MalformedExpression(render_terms(self.terms))
    }

    /// Rejects sequences whose operand and operator counts cannot alternate.
    fn check_shape(&self) -> ParseResult<()> {
        let operators = self.terms.iter().filter(|term| matches!(term, Term::Operator(_))).count();
        let operands = self.terms.len() - operators;
        let leading = usize::from(matches!(self.terms.first(), Some(Term::Operator(_))));

        if operands == operators - leading + 1 { Ok(()) } else { Err(self.malformed()) }
    }
}

fn render_terms(terms: &[Term]) -> String {
    terms.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
