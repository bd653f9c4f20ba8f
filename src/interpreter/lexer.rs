use logos::Logos;

/// Represents a lexical token of a literal fragment.
///
/// Only literals are lexed. Anything else is a lexing error, which simply
/// means the fragment is not a literal.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Signed decimal literal tokens, such as `3`, `-2`, `+0.5` or `7.`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?")]
    Number,
}

/// Returns the fragment if it is a single number literal.
///
/// The fragment must lex as exactly one [`Token::Number`] spanning all of it,
/// so surrounding or inner blanks disqualify it.
///
/// # Example
/// ```
/// use textcalc::interpreter::lexer::literal;
///
/// assert_eq!(literal("-2.5"), Some("-2.5"));
/// assert_eq!(literal("1+2"), None);
/// assert_eq!(literal(".5"), None);
/// ```
#[must_use]
pub fn literal(fragment: &str) -> Option<&str> {
    let mut lexer = Token::lexer(fragment);

    match lexer.next() {
        Some(Ok(Token::Number)) if lexer.span() == (0..fragment.len()) => Some(fragment),
        _ => None,
    }
}
