use crate::{
    ast::{Expr, Operator, Term},
    interpreter::parser::core::{ParseResult, Structurer},
};

impl Structurer<'_> {
    /// Parses the first operand of a nesting level, which may carry a prefix
    /// operator.
    ///
    /// The prefix applies to the exponent-level operand that follows, so
    /// `-(2)^2` is `-(2^2)` while `-(1)+2` is `(-1)+2`. Any operator is
    /// accepted here. The evaluator rejects every prefix except `+` and `-`.
    ///
    /// Grammar:
    /// ```text
    ///     leading := operator exponent
    ///              | operand
    /// ```
    pub(crate) fn parse_leading(&mut self) -> ParseResult<Expr> {
        if let Some(op) = self.peek_operator() {
            self.next_term();
            let operand = self.parse_binary(Operator::Pow.precedence())?;
            return Ok(Expr::unary(op, operand));
        }
        self.parse_operand()
    }

    /// Consumes a literal or an already structured parenthesis group.
    pub(crate) fn parse_operand(&mut self) -> ParseResult<Expr> {
        match self.next_term() {
            Some(Term::Operand(expr)) => Ok(expr.clone()),
            _ => Err(self.malformed()),
        }
    }
}
