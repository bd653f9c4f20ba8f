use std::fmt;

/// The shape a fragment was recognized as.
///
/// Each variant owns one recognition rule (see
/// [`crate::interpreter::parser::core`]) and one evaluation rule (see
/// [`crate::interpreter::evaluator::core`]). Binary operations carry the
/// operator they split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// A decimal literal such as `3`, `-2` or `0.5`.
    NumericLiteral,
    /// A named unary function applied to a fragment, `name(inner)`.
    FunctionCall,
    /// A fragment wrapped in parentheses, `(inner)`.
    Parenthesized,
    /// Two fragments joined by a binary operator.
    BinaryOp(BinaryOperator),
}

/// Binary operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `//`
    FloorDiv,
    /// `%`
    Mod,
    /// `**`
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use textcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::FloorDiv.symbol(), "//");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    /// Returns the two-character operator this one is a prefix of, if any.
    ///
    /// A lone `*` must not be read out of `**`, nor a lone `/` out of `//`.
    #[must_use]
    pub const fn longer_form(self) -> Option<Self> {
        match self {
            Self::Mul => Some(Self::Pow),
            Self::Div => Some(Self::FloorDiv),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericLiteral => f.write_str("literal"),
            Self::FunctionCall => f.write_str("call"),
            Self::Parenthesized => f.write_str("group"),
            Self::BinaryOp(op) => write!(f, "binary `{op}`"),
        }
    }
}

/// Named sub-fragments captured by a successful recognition.
///
/// All fragments borrow from the text being evaluated. Operands of binary
/// operations are already trimmed on the side facing the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'a> {
    /// The whole fragment is a literal.
    Value {
        /// The literal text.
        value: &'a str,
    },
    /// The fragment between a leading `(` and a trailing `)`.
    Group {
        /// The inner fragment.
        exp: &'a str,
    },
    /// A function name and its parenthesized argument.
    Call {
        /// The name before the opening parenthesis.
        func_name: &'a str,
        /// The inner fragment.
        exp:       &'a str,
    },
    /// The fragments on either side of an operator.
    Binary {
        /// Everything before the operator.
        exp1: &'a str,
        /// The operator symbol.
        op:   &'static str,
        /// Everything after the operator.
        exp2: &'a str,
    },
}

impl<'a> Capture<'a> {
    /// Returns the sub-fragments that will be evaluated recursively.
    ///
    /// Every returned fragment is strictly shorter than the fragment it was
    /// captured from.
    ///
    /// # Example
    /// ```
    /// use textcalc::interpreter::parser::core::classify;
    ///
    /// let (_, capture) = classify("1+2*3").unwrap();
    /// assert_eq!(capture.sub_fragments(), vec!["1+2", "3"]);
    /// ```
    #[must_use]
    pub fn sub_fragments(&self) -> Vec<&'a str> {
        match *self {
            Self::Value { .. } => Vec::new(),
            Self::Group { exp } | Self::Call { exp, .. } => vec![exp],
            Self::Binary { exp1, exp2, .. } => vec![exp1, exp2],
        }
    }
}

impl fmt::Display for Capture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { value } => write!(f, "{{value: {value:?}}}"),
            Self::Group { exp } => write!(f, "{{exp: {exp:?}}}"),
            Self::Call { func_name, exp } => {
                write!(f, "{{func_name: {func_name:?}, exp: {exp:?}}}")
            },
            Self::Binary { exp1, op, exp2 } => {
                write!(f, "{{exp1: {exp1:?}, op: {op:?}, exp2: {exp2:?}}}")
            },
        }
    }
}
