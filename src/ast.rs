use std::fmt;

use crate::interpreter::value::Number;

/// The closed set of arithmetic operators.
///
/// Every operator has a symbolic spelling and a word alias, for example `+`
/// and `add`. Both spellings produce the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+` / `add`
    Add,
    /// `-` / `sub`
    Sub,
    /// `*` / `mul`
    Mul,
    /// `/` / `div`
    Div,
    /// `%` / `mod`
    Mod,
    /// `^` / `pow`
    Pow,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod, Self::Pow];

    /// Binding strength. Higher binds tighter.
    ///
    /// `^` is 3, `* / %` are 2, `+ -` are 1.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Only exponentiation groups right-to-left: `2^3^2` is `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// The single-character spelling.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }

    /// The word alias.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "pow",
        }
    }

    /// Looks up an operator by its single-character spelling.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Looks up an operator by its word alias.
    ///
    /// The match is exact: `Add` and `add ` are not aliases.
    ///
    /// # Example
    /// ```
    /// use infixcalc::Operator;
    ///
    /// assert_eq!(Operator::from_word("pow"), Some(Operator::Pow));
    /// assert_eq!(Operator::from_word("power"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.word() == word)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One element of the flat sequence handed from the tokenizer to the
/// structurer.
///
/// A parenthesis group has already been reduced to a single
/// [`Term::Operand`] by the time it appears here.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A literal or a fully structured sub-expression.
    Operand(Expr),
    /// A bare operator awaiting its operands.
    Operator(Operator),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(expr) => write!(f, "{expr}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression tree node.
///
/// Each node owns its children, so a tree is acyclic and carries no shared
/// references. Trees are built per evaluation and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A finite numeric literal.
    Literal(Number),
    /// An operator applied to one operand, e.g. a leading `-`.
    Unary {
        /// The operator in prefix position.
        op:      Operator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An operator applied to two operands.
    Binary {
        /// The infix operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Binary { op, left: Box::new(left), right: Box::new(right) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: Operator, operand: Self) -> Self {
        Self::Unary { op, operand: Box::new(operand) }
    }
}

impl From<Number> for Expr {
    fn from(value: Number) -> Self {
        Self::Literal(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Literal(Number::Integer(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(Number::Real(value))
    }
}

/// Renders the tree fully parenthesized, so the grouping chosen by the
/// structurer is visible: `2+3*4` renders as `(2 + (3 * 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn both_spellings_resolve_to_the_same_operator() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operator::from_word(op.word()), Some(op));
        }
        assert_eq!(Operator::from_symbol('('), None);
        assert_eq!(Operator::from_word("ADD"), None);
    }

    #[test]
    fn precedence_tiers() {
        assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Div.precedence(), Operator::Mod.precedence());
        assert!(Operator::Mod.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());

        let right: Vec<_> = Operator::ALL.into_iter().filter(|op| op.is_right_associative()).collect();
        assert_eq!(right, vec![Operator::Pow]);
    }

    #[test]
    fn display_shows_grouping() {
        let expr = Expr::binary(Operator::Add,
                                Expr::from(2_i64),
                                Expr::binary(Operator::Mul, Expr::from(3_i64), Expr::from(4.5)));
        assert_eq!(expr.to_string(), "(2 + (3 * 4.5))");
        assert_eq!(Expr::unary(Operator::Sub, Expr::from(7_i64)).to_string(), "(-7)");
    }
}
