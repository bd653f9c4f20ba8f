use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument and returns the result.
type BuiltinFn = fn(f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ($($name:literal => $func:expr),* $(,)?) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

// Arguments are in radians.
builtin_functions! {
    "sin" => f64::sin,
    "cos" => f64::cos,
    "tan" => f64::tan,
}

impl Context {
    /// Applies a builtin function to an evaluated argument.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `argument`: The evaluated argument.
    ///
    /// # Returns
    /// The function result, or `UnknownFunction` if the name is not a builtin.
    ///
    /// # Example
    /// ```
    /// use textcalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_function("cos", 0.0).unwrap(), 1.0);
    /// assert!(Context::eval_function("sqrt", 4.0).is_err());
    /// ```
    pub fn eval_function(name: &str, argument: f64) -> EvalResult<f64> {
        BUILTIN_TABLE.iter()
                     .find(|builtin| builtin.name == name)
                     .map(|builtin| (builtin.func)(argument))
                     .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })
    }
}
