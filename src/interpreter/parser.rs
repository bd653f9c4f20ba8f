/// Trial order and the dispatch step.
///
/// Declares the fixed order of recognition rules and `classify`, which returns
/// the first rule that matches a fragment.
pub mod core;

/// Binary operator splitting.
///
/// Finds the leftmost occurrence of an operator and splits the fragment
/// around it.
pub mod binary;

/// Function calls and parenthesized groups.
///
/// Recognizes `name(inner)` and `(inner)` and extracts their parts.
pub mod unary;
