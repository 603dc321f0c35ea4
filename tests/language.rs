use std::fs;

use minilisp::{
    error::{Error, ParseError, RuntimeError},
    eval,
    interpreter::{evaluator::operator::Arity, value::{Value, ValueKind}},
    session::Session,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lisp"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            count += 1;

            let (source, expected) = split_expectation(line);
            let rendered = match session.eval(source) {
                Ok(value) => value.to_string(),
                Err(_) => "error".to_string(),
            };

            if let Some(expected) = expected {
                assert_eq!(rendered,
                           expected,
                           "line {} of {:?} evaluated differently: {}",
                           i + 1,
                           path,
                           source);
            }
        }
    }

    assert!(count > 0, "No examples found in tests/scripts");
}

/// Splits `expr => expected` into its two halves.
fn split_expectation(line: &str) -> (&str, Option<&str>) {
    match line.split_once("=>") {
        Some((source, expected)) => (source.trim(), Some(expected.trim())),
        None => (line.trim(), None),
    }
}

fn assert_value(src: &str, expected: Value) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Value::Integer(expected));
}

fn assert_bool(src: &str, expected: bool) {
    assert_value(src, Value::Boolean(expected));
}

fn runtime_error(src: &str) -> RuntimeError {
    match eval(src) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Expression {src} failed to parse: {e}"),
        Ok(v) => panic!("Expression {src} evaluated to {v} but was expected to fail"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match eval(src) {
        Err(Error::Parse(e)) => e,
        Err(e) => panic!("Expression {src} failed at runtime: {e}"),
        Ok(v) => panic!("Expression {src} evaluated to {v} but was expected to fail"),
    }
}

#[test]
fn number_literals_evaluate_to_themselves() {
    assert_int("32", 32);
    assert_int("-10", -10);
    assert_int("0", 0);
    assert_int("007", 7);
    assert_int("  100  ", 100);
}

#[test]
fn addition_and_multiplication_are_variadic() {
    assert_int("(+)", 0);
    assert_int("(+ )", 0);
    assert_int("(+ 5)", 5);
    assert_int("(+ 1 2 3 4)", 10);
    assert_int("(*)", 1);
    assert_int("(* 7)", 7);
    assert_int("(* 2 3 4)", 24);
    assert_int("(* 0 5)", 0);
}

#[test]
fn subtraction_negates_or_folds_left() {
    assert_int("(- 5)", -5);
    assert_int("(- -5)", 5);
    assert_int("(- 0)", 0);
    assert_int("(- 10 3)", 7);
    assert_int("(- 20 5 3)", 12);
}

#[test]
fn division_and_modulo() {
    assert_int("(/ 20 4)", 5);
    assert_int("(/ 7 2)", 3);
    assert_int("(/ -7 2)", -3);
    assert_int("(/ 100 2 5)", 10);
    assert_int("(/ 9)", 9);
    assert_int("(% 10 3)", 1);
    assert_int("(% 20 5)", 0);
    assert_int("(% -7 2)", -1);
    assert_int("(% 7 -2)", 1);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("(/ 8 0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("(/ 8 2 0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("(% 5 0)"), RuntimeError::ModuloByZero);
    assert_int("(/ 0 5)", 0);
}

#[test]
fn comparisons_produce_booleans() {
    assert_bool("(> 10 5)", true);
    assert_bool("(> 5 5)", false);
    assert_bool("(< 3 7)", true);
    assert_bool("(< 5 5)", false);
    assert_bool("(= 5 5)", true);
    assert_bool("(= 5 10)", false);
    assert_bool("(= true true)", true);
    assert_bool("(= (> 2 1) (< 1 2))", true);
}

#[test]
fn equality_across_kinds_is_false() {
    assert_bool("(= 1 true)", false);
    assert_bool("(= false 0)", false);
}

#[test]
fn nested_expressions() {
    assert_int("(+ 1 (* 2 3))", 7);
    assert_int("(+ (* 2 3) (* 4 5))", 26);
    assert_int("(* (+ 1 2) (- 10 (/ 8 2)))", 18);
    assert_int("(+(* 2 3)(- 4 1))", 9);
}

#[test]
fn define_binds_and_overwrites() {
    let mut session = Session::new();

    assert_eq!(session.eval("(define x 10)"), Ok(Value::Integer(10)));
    assert_eq!(session.eval("x"), Ok(Value::Integer(10)));
    assert_eq!(session.eval("(define x 99)"), Ok(Value::Integer(99)));
    assert_eq!(session.eval("x"), Ok(Value::Integer(99)));

    assert_eq!(session.eval("(define y (+ x 1))"), Ok(Value::Integer(100)));
    assert_eq!(session.eval("(define flag (> x y))"), Ok(Value::Boolean(false)));
    assert_eq!(session.eval("flag"), Ok(Value::Boolean(false)));
    assert_eq!(session.environment().len(), 3);
}

#[test]
fn define_requires_a_symbol_target() {
    assert!(matches!(runtime_error("(define 5 10)"), RuntimeError::InvalidExpression { .. }));
    assert!(matches!(runtime_error("(define (x) 10)"),
                     RuntimeError::InvalidExpression { .. }));
    assert!(matches!(runtime_error("(define true 1)"), RuntimeError::InvalidExpression { .. }));
}

#[test]
fn operator_names_are_only_reserved_in_head_position() {
    let mut session = Session::new();

    assert_eq!(session.eval("(define if 3)"), Ok(Value::Integer(3)));
    assert_eq!(session.eval("(+ if 1)"), Ok(Value::Integer(4)));
    assert_eq!(session.eval("(define Foo 1)"), Ok(Value::Integer(1)));
    assert!(session.eval("foo").is_err());
}

#[test]
fn if_only_evaluates_the_taken_branch() {
    assert_int("(if (> 10 5) 100 200)", 100);
    assert_int("(if (< 10 5) 100 200)", 200);
    assert_int("(if true 1 (/ 1 0))", 1);
    assert_int("(if false (undefined-op) 2)", 2);

    let mut session = Session::new();
    session.eval("(if true 1 (define skipped 5))").unwrap();
    assert!(!session.environment().contains("skipped"));
}

#[test]
fn if_condition_must_be_boolean() {
    assert_eq!(runtime_error("(if 1 2 3)"),
               RuntimeError::TypeError { operator: "if".to_string(),
                                         expected: ValueKind::Boolean,
                                         actual:   ValueKind::Integer, });
}

#[test]
fn arithmetic_rejects_booleans() {
    assert_eq!(runtime_error("(> true 1)"),
               RuntimeError::TypeError { operator: ">".to_string(),
                                         expected: ValueKind::Integer,
                                         actual:   ValueKind::Boolean, });
    assert!(matches!(runtime_error("(+ 1 (< 1 2))"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("(- false)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("(% 4 true)"), RuntimeError::TypeError { .. }));
}

#[test]
fn arity_is_checked_per_operator() {
    assert_eq!(runtime_error("(-)"),
               RuntimeError::ArityError { operator: "-".to_string(),
                                          expected: Arity::AtLeast(1),
                                          actual:   0, });
    assert_eq!(runtime_error("(% 1 2 3)"),
               RuntimeError::ArityError { operator: "%".to_string(),
                                          expected: Arity::Exact(2),
                                          actual:   3, });
    assert!(matches!(runtime_error("(/)"), RuntimeError::ArityError { .. }));
    assert!(matches!(runtime_error("(define x)"), RuntimeError::ArityError { .. }));
    assert!(matches!(runtime_error("(if true 1)"), RuntimeError::ArityError { .. }));
    assert!(matches!(runtime_error("(> 1)"), RuntimeError::ArityError { .. }));
    assert!(matches!(runtime_error("(= 1 2 3)"), RuntimeError::ArityError { .. }));
}

#[test]
fn arity_is_checked_before_operands_are_evaluated() {
    let mut session = Session::new();

    assert!(session.eval("(% (define z 1) 2 3)").is_err());
    assert!(!session.environment().contains("z"));
}

#[test]
fn unknown_operator_is_error() {
    assert_eq!(runtime_error("(foo 1 2)"),
               RuntimeError::UnknownOperator { name: "foo".to_string() });
    assert_eq!(runtime_error("(DEFINE x 1)"),
               RuntimeError::UnknownOperator { name: "DEFINE".to_string() });
}

#[test]
fn undefined_symbol_is_error() {
    assert_eq!(runtime_error("x"), RuntimeError::UndefinedSymbol { name: "x".to_string() });
    assert_eq!(runtime_error("(+ 1 y)"), RuntimeError::UndefinedSymbol { name: "y".to_string() });
}

#[test]
fn invalid_list_shapes() {
    assert_eq!(runtime_error("()"),
               RuntimeError::InvalidExpression { reason: "cannot evaluate empty list".to_string() });
    assert_eq!(runtime_error("(1 2 3)"),
               RuntimeError::InvalidExpression { reason: "first element must be an operator".to_string() });
    assert!(matches!(runtime_error("((+ 1 2) 3)"), RuntimeError::InvalidExpression { .. }));
}

#[test]
fn unbalanced_input_is_parse_error() {
    assert_eq!(parse_error("(+ 1 2"), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error("((("), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error(""), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error("   "), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error(")"),
               ParseError::UnexpectedToken { token:    ")".to_string(),
                                             position: 0, });
    assert_eq!(parse_error("(+ 1 2))"),
               ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                      position: 7, });
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn parse_error_message_mentions_end_of_input() {
    let message = eval("(+ 1 2").unwrap_err().to_string();
    assert!(message.contains("unexpected end of input"), "{message}");
}

#[test]
fn out_of_range_literal_is_parse_error() {
    assert!(matches!(parse_error("99999999999999999999"), ParseError::LiteralTooLarge { .. }));
    assert_int("9223372036854775807", i64::MAX);
    assert_int("-9223372036854775808", i64::MIN);
}

#[test]
fn overflow_is_reported() {
    assert!(matches!(runtime_error("(+ 9223372036854775807 1)"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("(* 9223372036854775807 2)"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("(- -9223372036854775808)"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("(- -9223372036854775808 1)"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("(/ -9223372036854775808 -1)"),
                     RuntimeError::Overflow { .. }));
    assert_int("(% -9223372036854775808 -1)", 0);
}

#[test]
fn symbols_that_look_almost_numeric() {
    let mut session = Session::new();

    assert_eq!(session.eval("(define -x 4)"), Ok(Value::Integer(4)));
    assert_eq!(session.eval("(define +5 6)"), Ok(Value::Integer(6)));
    assert_eq!(session.eval("(+ -x +5)"), Ok(Value::Integer(10)));
    assert_eq!(session.eval("-"), Err(Error::Runtime(RuntimeError::UndefinedSymbol {
        name: "-".to_string(),
    })));
}

#[test]
fn operands_are_evaluated_left_to_right() {
    let mut session = Session::new();

    assert_eq!(session.eval("(+ (define y 1) (/ 1 0))"),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(session.eval("y"), Ok(Value::Integer(1)));

    assert!(session.eval("(+ true (define later 2))").is_err());
    assert!(!session.environment().contains("later"));
}

#[test]
fn sessions_are_isolated() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.eval("(define shared 1)").unwrap();

    assert!(second.eval("shared").is_err());
    assert_eq!(first.eval("shared"), Ok(Value::Integer(1)));
}

#[test]
fn errors_leave_the_session_usable() {
    let mut session = Session::new();

    session.eval("(define x 10)").unwrap();
    assert!(session.eval("(foo)").is_err());
    assert!(session.eval("(+ x").is_err());
    assert_eq!(session.eval("(* x 2)"), Ok(Value::Integer(20)));
}
