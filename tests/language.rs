use std::fs;

use textcalc::{
    ast::{BinaryOperator, Capture, ExpressionKind},
    error::EvalError,
    evaluate,
    interpreter::{
        evaluator::{
            binary::OPERATORS,
            core::{Context, MAX_DEPTH},
            function::BUILTIN_FUNCTIONS,
        },
        parser::{
            binary::split_binary,
            core::{TRIAL_ORDER, classify},
        },
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!(value == expected || (value - expected).abs() <= 1e-12,
                    "'{src}' evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &EvalError) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

fn no_match(fragment: &str) -> EvalError {
    EvalError::NoMatchingRule { fragment: fragment.to_string() }
}

#[test]
fn literals_evaluate_to_their_value() {
    for literal in ["3.5", "-2", "+4", "0", "7.", "007", "12.250"] {
        assert_value(literal, literal.parse().unwrap());
    }
}

#[test]
fn single_operators() {
    assert_value("1+2", 3.0);
    assert_value("1-2", -1.0);
    assert_value("1*2", 2.0);
    assert_value("1/2", 0.5);
    assert_value("1%2", 1.0);
    assert_value("2**3", 8.0);
    assert_value("2//3", 0.0);
}

#[test]
fn mixed_operators_follow_trial_order() {
    assert_value("2+1*5", 15.0);
    assert_value("2+1*5**2", 225.0);
    assert_value("1-2-3", 2.0);
    assert_value("2**3**2", 512.0);
    assert_value("9%4+1", 4.0);
}

#[test]
fn groups_and_functions() {
    assert_value("(2+1)*3", 9.0);
    assert_value("((1))", 1.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("sin(cos(0)-1)", 0.0);
    assert_value("cos(2*(1-1))", 1.0);
}

#[test]
fn blanks_around_fragments_are_ignored() {
    assert_value(" 1 + 2 ", 3.0);
    assert_value("2 ** 3", 8.0);
    assert_value("( 1 + 2 ) * 3", 9.0);
    assert_value("sin( 0 )", 0.0);
}

#[test]
fn wrapping_in_parentheses_keeps_the_value() {
    for expression in ["1+2", "2+1*5**2", "(2+1)*3", "sin(0)", "7%-2", "2//3", "-2"] {
        let bare = evaluate(expression).unwrap();
        let wrapped = evaluate(&format!("({expression})")).unwrap();
        assert_eq!(bare, wrapped, "wrapping '{expression}' changed its value");
    }
}

#[test]
fn floored_division_and_remainder() {
    assert_value("-7//2", -4.0);
    assert_value("-7%2", 1.0);
    assert_value("7%-2", -1.0);
    assert_value("1//0.1", 9.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("1/0", f64::INFINITY);
    assert_value("-1/0", f64::NEG_INFINITY);
    assert_value("1//0", f64::INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
    assert!(evaluate("1%0").unwrap().is_nan());
}

#[test]
fn malformed_input_is_error() {
    assert_failure("", &no_match(""));
    assert_failure("   ", &no_match(""));
    assert_failure("abc", &no_match("abc"));
    assert_failure("1+", &no_match(""));
    assert_failure("1.2.3", &no_match("1.2.3"));
    assert_failure("()", &no_match("()"));
    assert_failure("-(1)", &no_match(""));
}

#[test]
fn parentheses_are_not_balanced() {
    assert_failure("(1)+(2)", &no_match("1)"));
    assert_failure("sin(0)+cos(0)", &no_match("0)"));
}

#[test]
fn unknown_function_is_error() {
    assert_failure("foo(1)", &EvalError::UnknownFunction { name: "foo".to_string() });
    assert_failure("2(3)", &EvalError::UnknownFunction { name: "2".to_string() });
}

#[test]
fn argument_errors_come_before_unknown_function() {
    assert_failure("foo(x)", &no_match("x"));
}

#[test]
fn unknown_operator_is_error() {
    assert_eq!(Context::eval_binary("^", 2.0, 3.0),
               Err(EvalError::UnknownOperator { symbol: "^".to_string() }));
}

#[test]
fn every_trial_operator_is_in_the_table() {
    for kind in TRIAL_ORDER {
        if let ExpressionKind::BinaryOp(op) = kind {
            assert!(OPERATORS.contains(&op.symbol()), "{op} missing from the table");
        }
    }
    assert_eq!(BUILTIN_FUNCTIONS, &["sin", "cos", "tan"]);
}

#[test]
fn depth_limit() {
    let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_value(&nested, 1.0);

    let shallow = Context::with_max_depth(2);
    assert_eq!(shallow.evaluate("((1))").unwrap(), 1.0);
    assert_eq!(shallow.evaluate("(((1)))"),
               Err(EvalError::DepthExceeded { limit: 2 }));

    let too_deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert_eq!(evaluate(&too_deep),
               Err(EvalError::DepthExceeded { limit: MAX_DEPTH }));
}

#[test]
fn classify_picks_first_matching_rule() {
    assert_eq!(classify("2+1*5**2"),
               Some((ExpressionKind::BinaryOp(BinaryOperator::Pow),
                     Capture::Binary { exp1: "2+1*5",
                                       op:   "**",
                                       exp2: "2", })));
    assert_eq!(classify("-2"),
               Some((ExpressionKind::NumericLiteral, Capture::Value { value: "-2" })));
    assert_eq!(classify("sin(0)"),
               Some((ExpressionKind::FunctionCall,
                     Capture::Call { func_name: "sin",
                                     exp:       "0", })));
    assert_eq!(classify("(1)"),
               Some((ExpressionKind::Parenthesized, Capture::Group { exp: "1" })));
    assert_eq!(classify(""), None);
}

#[test]
fn longer_operators_are_not_split_as_shorter_ones() {
    assert_eq!(split_binary("2**3", BinaryOperator::Mul), None);
    assert_eq!(split_binary("4//2", BinaryOperator::Div), None);
    assert_eq!(split_binary("2**3*4", BinaryOperator::Mul),
               Some(Capture::Binary { exp1: "2**3",
                                      op:   "*",
                                      exp2: "4", }));
    assert_eq!(split_binary("1--2", BinaryOperator::Sub),
               Some(Capture::Binary { exp1: "1",
                                      op:   "-",
                                      exp2: "-2", }));
}

#[test]
fn sub_fragments_are_strictly_shorter() {
    for fragment in ["1+2", "2+1*5**2", "(2+1)*3", "sin(cos(0)-1)", "((1))", "1 - -2", "a//b",
                     "+", "(x)", "f(y)"]
    {
        let (_, capture) = classify(fragment).unwrap();
        for sub in capture.sub_fragments() {
            assert!(sub.len() < fragment.len(), "'{sub}' is not shorter than '{fragment}'");
        }
    }
}

#[test]
fn example_file_values() {
    let contents = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut count = 0;

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (expression, expected) =
            line.rsplit_once('=').unwrap_or_else(|| panic!("Malformed line: {line}"));
        let expected: f64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("Bad value in {line:?}: {e}"));
        assert_value(expression.trim(), expected);
        count += 1;
    }

    assert!(count > 0, "No expressions found in tests/example.calc");
}
