use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Errors from nested fragments reach the caller unchanged; the first one
/// raised wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No recognition rule matched the fragment. Empty input ends up here too.
    #[error("No rule matches the fragment '{fragment}'.")]
    NoMatchingRule {
        /// The trimmed fragment.
        fragment: String,
    },
    /// A literal fragment could not be parsed as a float.
    #[error("Malformed number '{fragment}'.")]
    MalformedNumber {
        /// The literal text.
        fragment: String,
    },
    /// The function name is not in the function table.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name before the opening parenthesis.
        name: String,
    },
    /// The operator symbol is not in the operator table.
    #[error("Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// The expression nests deeper than the context allows.
    #[error("Expression nests deeper than {limit} levels.")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}
