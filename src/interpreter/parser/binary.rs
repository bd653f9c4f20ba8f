use crate::ast::{BinaryOperator, Capture};

/// Splits a fragment at the leftmost occurrence of an operator.
///
/// The left operand is everything before the operator with trailing blanks
/// removed, the right operand everything after it with leading blanks removed.
/// Either side may be empty or contain further operators; both are left to the
/// recursive evaluation.
///
/// # Parameters
/// - `fragment`: The trimmed fragment.
/// - `op`: The operator to split on.
///
/// # Returns
/// A `Capture::Binary`, or `None` if the operator does not occur.
///
/// # Example
/// ```
/// use textcalc::{
///     ast::{BinaryOperator, Capture},
///     interpreter::parser::binary::split_binary,
/// };
///
/// assert_eq!(split_binary("1-2-3", BinaryOperator::Sub),
///            Some(Capture::Binary { exp1: "1",
///                                   op:   "-",
///                                   exp2: "2-3", }));
///
/// // `*` inside `**` is not a multiplication.
/// assert_eq!(split_binary("2**3", BinaryOperator::Mul), None);
/// ```
#[must_use]
pub fn split_binary(fragment: &str, op: BinaryOperator) -> Option<Capture<'_>> {
    let symbol = op.symbol();
    let at = find_operator(fragment, op)?;

    Some(Capture::Binary { exp1: fragment[..at].trim_end(),
                           op:   symbol,
                           exp2: fragment[at + symbol.len()..].trim_start(), })
}

/// Returns the byte offset of the leftmost standalone occurrence of `op`.
///
/// Occurrences that belong to the operator's longer form (`*` in `**`, `/` in
/// `//`) are skipped.
#[must_use]
pub fn find_operator(fragment: &str, op: BinaryOperator) -> Option<usize> {
    let symbol = op.symbol();

    fragment.match_indices(symbol)
            .map(|(at, _)| at)
            .find(|&at| {
                op.longer_form().is_none()
                || !(fragment[at + symbol.len()..].starts_with(symbol)
                     || fragment[..at].ends_with(symbol))
            })
}
