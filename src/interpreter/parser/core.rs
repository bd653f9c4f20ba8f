use crate::{
    ast::{
        BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub},
        Capture, ExpressionKind,
    },
    interpreter::{
        lexer::literal,
        parser::{
            binary::split_binary,
            unary::{split_call, split_group},
        },
    },
};

/// The order in which recognition rules are tried. The first match wins.
///
/// Literals come first so that `-2` is a number rather than a subtraction with
/// an empty left side. Operators follow from `//` down to `-`: a fragment
/// holding `**` anywhere is split on `**` before `*`, `/`, `+` or `-` are
/// considered, which is why `2+1*5**2` reads as `(2+1*5)**2`.
pub const TRIAL_ORDER: [ExpressionKind; 10] = [ExpressionKind::NumericLiteral,
                                               ExpressionKind::FunctionCall,
                                               ExpressionKind::Parenthesized,
                                               ExpressionKind::BinaryOp(FloorDiv),
                                               ExpressionKind::BinaryOp(Mod),
                                               ExpressionKind::BinaryOp(Pow),
                                               ExpressionKind::BinaryOp(Mul),
                                               ExpressionKind::BinaryOp(Div),
                                               ExpressionKind::BinaryOp(Add),
                                               ExpressionKind::BinaryOp(Sub)];

impl ExpressionKind {
    /// Tests a fragment against this kind's recognition rule.
    ///
    /// The fragment is expected to be trimmed already. On success the named
    /// sub-fragments are returned; nothing is evaluated here.
    ///
    /// # Example
    /// ```
    /// use textcalc::ast::{BinaryOperator, Capture, ExpressionKind};
    ///
    /// let kind = ExpressionKind::BinaryOp(BinaryOperator::Add);
    /// assert_eq!(kind.recognize("1 + 2 + 3"),
    ///            Some(Capture::Binary { exp1: "1",
    ///                                   op:   "+",
    ///                                   exp2: "2 + 3", }));
    /// assert_eq!(ExpressionKind::Parenthesized.recognize("1 + 2"), None);
    /// ```
    #[must_use]
    pub fn recognize(self, fragment: &str) -> Option<Capture<'_>> {
        match self {
            Self::NumericLiteral => literal(fragment).map(|value| Capture::Value { value }),
            Self::FunctionCall => split_call(fragment),
            Self::Parenthesized => split_group(fragment),
            Self::BinaryOp(op) => split_binary(fragment, op),
        }
    }
}

/// Returns the first kind in [`TRIAL_ORDER`] that recognizes the fragment,
/// together with its captures.
///
/// The fragment is not trimmed here; the evaluator does that before calling.
///
/// # Example
/// ```
/// use textcalc::{
///     ast::{BinaryOperator, ExpressionKind},
///     interpreter::parser::core::classify,
/// };
///
/// let (kind, _) = classify("2+1*5**2").unwrap();
/// assert_eq!(kind, ExpressionKind::BinaryOp(BinaryOperator::Pow));
///
/// let (kind, _) = classify("-2").unwrap();
/// assert_eq!(kind, ExpressionKind::NumericLiteral);
///
/// assert!(classify("abc").is_none());
/// ```
#[must_use]
pub fn classify(fragment: &str) -> Option<(ExpressionKind, Capture<'_>)> {
    TRIAL_ORDER.iter()
               .find_map(|&kind| kind.recognize(fragment).map(|capture| (kind, capture)))
}
