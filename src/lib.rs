//! # textcalc
//!
//! textcalc is a small text calculator written in Rust.
//! It evaluates one-line arithmetic expressions made of number literals,
//! parenthesized groups, the binary operators `+ - * / % // **` and the unary
//! functions `sin`, `cos` and `tan`.
//!
//! There is no precedence table. Every fragment is tested against a fixed list
//! of shapes, the first shape that fits splits the fragment, and each piece is
//! evaluated recursively.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalError, interpreter::evaluator::core::Context};

/// Defines the shapes a fragment can be recognized as.
///
/// This module declares `ExpressionKind`, the binary operators and `Capture`,
/// the named sub-fragments a recognition rule extracts. None of these outlive
/// a single evaluation.
pub mod ast;
/// Provides the error type for evaluation.
///
/// Every failure, whether a fragment matched no rule or a name was missing from
/// a lookup table, is reported through the single `EvalError` enum.
pub mod error;
/// Recognizes and evaluates expressions.
///
/// This module ties together the literal lexer, the recognition rules and the
/// recursive evaluator.
///
/// # Responsibilities
/// - Recognizes number literals with a `logos` lexer.
/// - Splits fragments with hand-written scanners in a fixed trial order.
/// - Evaluates the captured sub-fragments and combines them.
pub mod interpreter;
/// Floating-point helpers shared by the operator table.
pub mod util;

/// Evaluates an expression with the default [`Context`].
///
/// The text is trimmed and matched against the recognition rules in their
/// fixed trial order. Sub-fragments are evaluated recursively and the first
/// error stops the evaluation.
///
/// # Errors
/// Returns an [`EvalError`] if any fragment matches no rule, a function or
/// operator is unknown, or the nesting exceeds the default depth limit.
///
/// # Examples
/// ```
/// use textcalc::evaluate;
///
/// assert_eq!(evaluate("(2+1)*3").unwrap(), 9.0);
///
/// // The leftmost `**` splits first, so this is (2+1*5)**2.
/// assert_eq!(evaluate("2+1*5**2").unwrap(), 225.0);
///
/// assert!(evaluate("1+").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    Context::new().evaluate(text)
}
