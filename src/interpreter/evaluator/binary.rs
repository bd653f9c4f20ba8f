use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{floor_div, floor_mod},
};

/// Type alias for operator handlers.
///
/// An operator receives the evaluated left and right operands.
type OperatorFn = fn(f64, f64) -> f64;

/// Defines the operator table and the list of its symbols.
///
/// Each entry maps a source symbol to the function implementing it.
macro_rules! operator_table {
    ($($symbol:literal => $func:expr),* $(,)?) => {
        struct OperatorDef {
            symbol: &'static str,
            func:   OperatorFn,
        }
        static OPERATOR_TABLE: &[OperatorDef] = &[
            $(
                OperatorDef { symbol: $symbol, func: $func },
            )*
        ];
        /// Every symbol present in the operator table.
        pub const OPERATORS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

operator_table! {
    "+"  => |a, b| a + b,
    "-"  => |a, b| a - b,
    "*"  => |a, b| a * b,
    "/"  => |a, b| a / b,
    "%"  => floor_mod,
    "//" => floor_div,
    "**" => f64::powf,
}

impl Context {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// The symbol is looked up in the operator table. `/` by zero produces an
    /// infinity or `NaN`; `%` and `//` use floored division.
    ///
    /// # Parameters
    /// - `symbol`: The operator symbol.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result, or `UnknownOperator` if the symbol is not in the table.
    ///
    /// # Example
    /// ```
    /// use textcalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_binary("//", -7.0, 2.0).unwrap(), -4.0);
    /// assert!(Context::eval_binary("^", 2.0, 3.0).is_err());
    /// ```
    pub fn eval_binary(symbol: &str, left: f64, right: f64) -> EvalResult<f64> {
        let def = OPERATOR_TABLE.iter()
                                .find(|def| def.symbol == symbol)
                                .ok_or_else(|| EvalError::UnknownOperator { symbol: symbol.to_string() })?;

        Ok((def.func)(left, right))
    }
}
