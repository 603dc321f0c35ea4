use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, evaluate},
            operator::Arity,
        },
    },
};

/// Evaluates `node` and requires the result to be an integer.
///
/// # Errors
/// Whatever evaluating `node` reports, or `TypeError` naming `operator` if
/// the value is not an integer.
pub fn eval_integer(operator: &str, node: &Node, env: &mut Environment) -> EvalResult<i64> {
    evaluate(node, env)?.as_integer(operator)
}

/// Splits the operands into the first one and the rest.
///
/// The operator table already guarantees at least one operand for the
/// operators that call this; an empty slice still yields an `ArityError`
/// rather than a panic.
pub fn split_first<'a>(operator: &str, operands: &'a [Node]) -> EvalResult<(&'a Node, &'a [Node])> {
    operands.split_first()
            .ok_or_else(|| arity_error(operator, Arity::AtLeast(1), 0))
}

/// Destructures exactly two operands.
pub fn pair<'a>(operator: &str, operands: &'a [Node]) -> EvalResult<(&'a Node, &'a Node)> {
    match operands {
        [left, right] => Ok((left, right)),
        _ => Err(arity_error(operator, Arity::Exact(2), operands.len())),
    }
}

/// Destructures exactly three operands.
pub fn triple<'a>(operator: &str,
                  operands: &'a [Node])
                  -> EvalResult<(&'a Node, &'a Node, &'a Node)> {
    match operands {
        [first, second, third] => Ok((first, second, third)),
        _ => Err(arity_error(operator, Arity::Exact(3), operands.len())),
    }
}

/// Builds the overflow error for `operator`.
pub fn overflow(operator: &str) -> RuntimeError {
    RuntimeError::Overflow { operator: operator.to_string() }
}

fn arity_error(operator: &str, expected: Arity, actual: usize) -> RuntimeError {
    RuntimeError::ArityError { operator: operator.to_string(),
                               expected,
                               actual }
}
