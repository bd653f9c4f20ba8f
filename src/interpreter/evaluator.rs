/// Binary operator evaluation.
///
/// Holds the operator table that maps each symbol to its floating-point
/// operation.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the recursive dispatcher and the depth
/// guard.
pub mod core;

/// Function evaluation.
///
/// Holds the table of built-in unary functions.
pub mod function;
