/// Floored division helpers.
///
/// `%` and `//` round the quotient toward negative infinity, so the remainder
/// always takes the sign of the divisor. Both are computed from one shared
/// division so that `a == b * (a // b) + a % b` holds as closely as floating
/// point allows.
pub mod num;
