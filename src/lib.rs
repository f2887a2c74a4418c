//! # infixcalc
//!
//! infixcalc evaluates arithmetic expressions written as text. It understands
//! the binary operators `+ - * / % ^`, their word aliases `add sub mul div mod
//! pow`, a leading unary `+`/`-` and arbitrarily nested parentheses.
//!
//! Evaluation runs in four stages: a parenthesis pre-check, tokenization,
//! structuring into an expression tree and evaluation of that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

pub use crate::{
    ast::{Expr, Operator, Term},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, next_token},
        parser::core::{parse, structure},
        validator::validate,
        value::Number,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the closed [`Operator`] set, the [`Term`] sequence
/// handed from the tokenizer to the structurer, and the [`Expr`] tree consumed
/// by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse-phase failures and runtime failures are kept apart, and the
/// crate-level [`Error`] wraps both so the pipeline can use `?` throughout.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// # Responsibilities
/// - Validates parenthesis balance before any other work.
/// - Tokenizes the input and structures it into an expression tree.
/// - Evaluates the tree into a [`Number`].
pub mod interpreter;
/// Interactive read-evaluate-print loop.
pub mod repl;
/// General utilities for numeric conversion.
pub mod util;

/// Evaluates an expression and returns the structured error on failure.
///
/// The pipeline is: [`validate`] → [`parse`] (which tokenizes and structures)
/// → [`evaluate`]. The first error encountered is returned.
///
/// # Examples
/// ```
/// use infixcalc::{Number, ParseError, try_evaluate};
///
/// assert_eq!(try_evaluate("2 + 3 * 4").unwrap(), Number::Integer(14));
///
/// let err = try_evaluate("(1 + 2").unwrap_err();
/// assert_eq!(err, ParseError::UnmatchedParenthesis.into());
/// ```
pub fn try_evaluate(text: &str) -> Result<Number, Error> {
    validate(text)?;

    let expr = parse(text)?.ok_or_else(|| ParseError::MalformedExpression(String::new()))?;
    debug!("structured {text:?} as {expr}");

    let value = evaluate(&expr)?;
    debug!("{expr} evaluated to {value}");

    Ok(value)
}

/// Evaluates an expression and renders any failure as a diagnostic line.
///
/// On success the numeric value is returned. On failure the message has the
/// form `Error: <cause>`, ready to be shown to a user.
///
/// # Examples
/// ```
/// use infixcalc::{Number, evaluate_expression};
///
/// assert_eq!(evaluate_expression("(2 + 3) * 4"), Ok(Number::Integer(20)));
/// assert_eq!(evaluate_expression("2 ^ 3 ^ 2"), Ok(Number::Integer(512)));
/// assert_eq!(evaluate_expression("2 add 3"), Ok(Number::Integer(5)));
/// assert_eq!(evaluate_expression("10 div 0"), Err("Error: Division by zero".to_string()));
/// ```
pub fn evaluate_expression(text: &str) -> Result<Number, String> {
    try_evaluate(text).map_err(|e| format!("Error: {e}"))
}
