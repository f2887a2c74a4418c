use std::fmt;

use crate::util::num::i64_to_f64;

/// Represents a numeric value produced by the lexer or the evaluator.
///
/// Integer arithmetic stays integral while the result fits in an `i64`.
/// Division, real operands and overflow promote to [`Number::Real`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl Number {
    /// Converts the value to an `f64`, rounding integers beyond `2^53`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integer zero and for real `0.0` or `-0.0`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` unless the value is a real NaN or infinity.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(r) => r.is_finite(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// Integers print without a decimal point. Reals print in their shortest
/// round-trip form and always keep a fractional part or an exponent, so
/// `10 / 2` shows as `5.0`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
