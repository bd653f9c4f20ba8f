/// The evaluator module computes the value of a fragment.
///
/// The evaluator hands a trimmed fragment to the recognition rules, evaluates
/// the captured sub-fragments recursively and combines them with the operator
/// or function table.
///
/// # Responsibilities
/// - Holds the evaluation `Context` and its depth limit.
/// - Owns the operator table and the function table.
/// - Reports missing rules, names and malformed literals as `EvalError`s.
pub mod evaluator;
/// The lexer module recognizes number literals.
///
/// A fragment is a literal when the lexer reads it as exactly one `Number`
/// token covering the whole fragment.
pub mod lexer;
/// The parser module holds the recognition rules and their trial order.
///
/// Rules do not build a tree. Each one tests a fragment and, on success,
/// returns the named sub-fragments the evaluator recurses into.
///
/// # Responsibilities
/// - Fixes the order in which shapes are tried.
/// - Finds the leftmost operator occurrence without confusing `*` with `**` or
///   `/` with `//`.
/// - Extracts the name and argument of function calls and the inside of groups.
pub mod parser;
