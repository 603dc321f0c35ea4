//! Property-based tests for the evaluator.
//!
//! Random integers and random arithmetic trees are checked against the
//! equivalent computation done directly in Rust.

use minilisp::{error::{Error, RuntimeError}, eval, interpreter::value::Value, session::Session};
use proptest::prelude::*;

/// Small operands so that sums and products of a few of them never overflow.
fn small() -> impl Strategy<Value = i64> {
    -1_000_i64..1_000
}

fn render(operator: &str, operands: &[i64]) -> String {
    let mut source = format!("({operator}");
    for n in operands {
        source.push_str(&format!(" {n}"));
    }
    source.push(')');
    source
}

proptest! {
    #[test]
    fn integers_evaluate_to_themselves(n in any::<i64>()) {
        prop_assert_eq!(eval(&n.to_string()), Ok(Value::Integer(n)));
    }

    #[test]
    fn addition_matches_iterator_sum(operands in prop::collection::vec(small(), 0..8)) {
        let expected = operands.iter().sum::<i64>();
        prop_assert_eq!(eval(&render("+", &operands)), Ok(Value::Integer(expected)));
    }

    #[test]
    fn multiplication_matches_iterator_product(operands in prop::collection::vec(-20_i64..20, 0..6)) {
        let expected = operands.iter().product::<i64>();
        prop_assert_eq!(eval(&render("*", &operands)), Ok(Value::Integer(expected)));
    }

    #[test]
    fn subtraction_folds_left(first in small(), rest in prop::collection::vec(small(), 1..8)) {
        let expected = rest.iter().fold(first, |acc, n| acc - n);
        let mut operands = vec![first];
        operands.extend(&rest);
        prop_assert_eq!(eval(&render("-", &operands)), Ok(Value::Integer(expected)));
    }

    #[test]
    fn division_and_modulo_match_rust(left in small(), right in small()) {
        let divided = eval(&render("/", &[left, right]));
        let remainder = eval(&render("%", &[left, right]));

        if right == 0 {
            prop_assert_eq!(divided, Err(Error::Runtime(RuntimeError::DivisionByZero)));
            prop_assert_eq!(remainder, Err(Error::Runtime(RuntimeError::ModuloByZero)));
        } else {
            prop_assert_eq!(divided, Ok(Value::Integer(left / right)));
            prop_assert_eq!(remainder, Ok(Value::Integer(left % right)));
        }
    }

    #[test]
    fn comparisons_match_rust(left in any::<i64>(), right in any::<i64>()) {
        prop_assert_eq!(eval(&render(">", &[left, right])), Ok(Value::Boolean(left > right)));
        prop_assert_eq!(eval(&render("<", &[left, right])), Ok(Value::Boolean(left < right)));
        prop_assert_eq!(eval(&render("=", &[left, right])), Ok(Value::Boolean(left == right)));
    }

    #[test]
    fn define_returns_and_binds_its_value(name in "[a-z][a-z0-9_]{0,8}", n in any::<i64>()) {
        prop_assume!(name != "true" && name != "false");

        let mut session = Session::new();
        prop_assert_eq!(session.eval(&format!("(define {name} {n})")), Ok(Value::Integer(n)));
        prop_assert_eq!(session.eval(&name), Ok(Value::Integer(n)));
    }

    #[test]
    fn garbage_input_never_panics(source in "[()a-z0-9 +*/%<>=-]{0,40}") {
        let _ = eval(&source);
    }
}
