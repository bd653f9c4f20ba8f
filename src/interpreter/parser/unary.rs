use crate::ast::Capture;

/// Recognizes a function call, `name(inner)`.
///
/// The name is every character before the first `(` and must be a non-empty
/// run of word characters. The call runs to the last character, which must be
/// `)`, so `sin(0)+cos(0)` captures the argument `0)+cos(0`. Whether the name
/// is a known function is only checked during evaluation.
///
/// # Example
/// ```
/// use textcalc::{ast::Capture, interpreter::parser::unary::split_call};
///
/// assert_eq!(split_call("sin(1+2)"),
///            Some(Capture::Call { func_name: "sin",
///                                 exp:       "1+2", }));
/// assert_eq!(split_call("(1+2)"), None);
/// assert_eq!(split_call("sin()"), None);
/// ```
#[must_use]
pub fn split_call(fragment: &str) -> Option<Capture<'_>> {
    let open = fragment.find('(')?;
    let func_name = &fragment[..open];

    if func_name.is_empty() || !func_name.chars().all(is_word_char) {
        return None;
    }

    let exp = fragment[open + 1..].strip_suffix(')')?;
    (!exp.is_empty()).then_some(Capture::Call { func_name, exp })
}

/// Recognizes a parenthesized group, `(inner)`.
///
/// Only the first and last characters are checked; the parentheses inside are
/// not balanced against each other.
///
/// # Example
/// ```
/// use textcalc::{ast::Capture, interpreter::parser::unary::split_group};
///
/// assert_eq!(split_group("(2+1)"), Some(Capture::Group { exp: "2+1" }));
/// assert_eq!(split_group("(2+1)*3"), None);
/// assert_eq!(split_group("()"), None);
/// ```
#[must_use]
pub fn split_group(fragment: &str) -> Option<Capture<'_>> {
    let exp = fragment.strip_prefix('(')?.strip_suffix(')')?;
    (!exp.is_empty()).then_some(Capture::Group { exp })
}

/// Letters, digits and `_`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
