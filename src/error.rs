/// Evaluation errors.
///
/// Defines every failure that can stop an evaluation: fragments that fit no
/// recognition rule, unparseable literals, names missing from the function or
/// operator tables, and nesting beyond the configured depth.
pub mod eval_error;

pub use eval_error::EvalError;
