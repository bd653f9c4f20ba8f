use tracing::debug;

use crate::{
    ast::Capture,
    error::EvalError,
    interpreter::parser::core::classify,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on how deeply fragments may nest.
pub const MAX_DEPTH: usize = 256;

/// Stores the evaluation options.
///
/// Evaluation itself is stateless: a `Context` can be shared and reused, and
/// every call to [`Context::evaluate`] is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// How many nested recursive evaluations are allowed below the top-level
    /// fragment.
    pub max_depth: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default depth limit, [`MAX_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: MAX_DEPTH }
    }

    /// Creates a context with a custom depth limit.
    ///
    /// # Example
    /// ```
    /// use textcalc::{error::EvalError, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::with_max_depth(2);
    /// assert_eq!(context.evaluate("(1)").unwrap(), 1.0);
    /// assert_eq!(context.evaluate("((((1))))"),
    ///            Err(EvalError::DepthExceeded { limit: 2 }));
    /// ```
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for evaluation. The text is trimmed, the
    /// first matching recognition rule splits it, and the captured
    /// sub-fragments are evaluated recursively.
    ///
    /// # Parameters
    /// - `text`: The expression.
    ///
    /// # Returns
    /// The value of the expression. Division by zero follows IEEE-754 and
    /// yields an infinity or `NaN` rather than an error.
    ///
    /// # Example
    /// ```
    /// use textcalc::{error::EvalError, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// assert_eq!(context.evaluate("2 ** 3").unwrap(), 8.0);
    /// assert_eq!(context.evaluate("foo(1)"),
    ///            Err(EvalError::UnknownFunction { name: "foo".to_string() }));
    /// ```
    pub fn evaluate(&self, text: &str) -> EvalResult<f64> {
        self.eval_fragment(text, 0)
    }

    /// Evaluates one fragment found `depth` levels below the top.
    fn eval_fragment(&self, fragment: &str, depth: usize) -> EvalResult<f64> {
        if depth > self.max_depth {
            return Err(EvalError::DepthExceeded { limit: self.max_depth });
        }

        let fragment = fragment.trim();
        let Some((kind, capture)) = classify(fragment) else {
            return Err(EvalError::NoMatchingRule { fragment: fragment.to_string() });
        };

        debug!(%kind, %capture, fragment, depth, "matched");

        self.eval_capture(capture, depth)
    }

    /// Evaluates the captures of a recognized fragment.
    ///
    /// Operands are evaluated left to right before the operator or function is
    /// looked up, so an error inside an argument is reported before an unknown
    /// function name.
    fn eval_capture(&self, capture: Capture<'_>, depth: usize) -> EvalResult<f64> {
        match capture {
            Capture::Value { value } => Self::eval_literal(value),
            Capture::Group { exp } => self.eval_fragment(exp, depth + 1),
            Capture::Call { func_name, exp } => {
                let argument = self.eval_fragment(exp, depth + 1)?;
                Self::eval_function(func_name, argument)
            },
            Capture::Binary { exp1, op, exp2 } => {
                let left = self.eval_fragment(exp1, depth + 1)?;
                let right = self.eval_fragment(exp2, depth + 1)?;
                Self::eval_binary(op, left, right)
            },
        }
    }

    /// Parses a literal fragment into a float.
    fn eval_literal(value: &str) -> EvalResult<f64> {
        value.parse()
             .map_err(|_| EvalError::MalformedNumber { fragment: value.to_string() })
    }
}
