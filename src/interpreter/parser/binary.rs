use crate::{
    ast::Expr,
    interpreter::parser::core::{ParseResult, Structurer},
};

impl Structurer<'_> {
    /// Parses a complete nesting level.
    ///
    /// The grammar, with `leading` allowing one prefix operator:
    /// ```text
    ///     expression := leading (operator operand)*
    /// ```
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let first = self.parse_leading()?;
        self.climb(first, 0)
    }

    /// Parses an operand followed by every operator that binds at least as
    /// tightly as `min_precedence`.
    pub(crate) fn parse_binary(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let left = self.parse_operand()?;
        self.climb(left, min_precedence)
    }

    /// Folds operators into `left` while they bind at least as tightly as
    /// `min_precedence`.
    ///
    /// For a left-associative operator the right-hand side may only contain
    /// strictly tighter operators, so `8-3-2` becomes `(8-3)-2`. For `^` the
    /// right-hand side may contain further `^`, so `2^3^2` becomes `2^(3^2)`.
    fn climb(&mut self, mut left: Expr, min_precedence: u8) -> ParseResult<Expr> {
        while let Some(op) = self.peek_operator()
              && op.precedence() >= min_precedence
        {
            self.next_term();

            let next_min =
                if op.is_right_associative() { op.precedence() } else { op.precedence() + 1 };
            let right = self.parse_binary(next_min)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }
}
