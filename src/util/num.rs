/// Computes the floored quotient and remainder of `a / b`.
///
/// The quotient is derived from the IEEE remainder rather than from `a / b`
/// directly: `1 / 0.1` rounds up to `10`, but `0.1` fits into `1` only nine
/// whole times.
///
/// A zero divisor yields `(a / b).floor()` and `NaN`, the IEEE results, rather
/// than an error.
///
/// ## Example
/// ```
/// use textcalc::util::num::div_mod;
///
/// assert_eq!(div_mod(7.0, 2.0), (3.0, 1.0));
/// assert_eq!(div_mod(-7.0, 2.0), (-4.0, 1.0));
/// assert_eq!(div_mod(7.0, -2.0), (-4.0, -1.0));
/// assert_eq!(div_mod(1.0, 0.1).0, 9.0);
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn div_mod(a: f64, b: f64) -> (f64, f64) {
    if b == 0.0 {
        return ((a / b).floor(), a % b);
    }

    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem == 0.0 {
        rem = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (rem < 0.0) {
        rem += b;
        div -= 1.0;
    }

    let quotient = if div == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let floored = div.floor();
        if div - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (quotient, rem)
}

/// Returns `a // b`, the quotient rounded toward negative infinity.
///
/// ## Example
/// ```
/// use textcalc::util::num::floor_div;
///
/// assert_eq!(floor_div(2.0, 3.0), 0.0);
/// assert_eq!(floor_div(-1.0, 3.0), -1.0);
/// assert_eq!(floor_div(1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn floor_div(a: f64, b: f64) -> f64 {
    div_mod(a, b).0
}

/// Returns `a % b` with the sign of the divisor.
///
/// ## Example
/// ```
/// use textcalc::util::num::floor_mod;
///
/// assert_eq!(floor_mod(1.0, 2.0), 1.0);
/// assert_eq!(floor_mod(-1.0, 3.0), 2.0);
/// assert!(floor_mod(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn floor_mod(a: f64, b: f64) -> f64 {
    div_mod(a, b).1
}
