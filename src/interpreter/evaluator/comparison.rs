use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, evaluate},
            utils::{eval_integer, pair},
        },
        value::Value,
    },
};

/// Evaluates an integer comparison such as `(> a b)` or `(< a b)`.
///
/// Both operands must be integers. `holds` decides the result; `operator` is
/// only used in error messages.
pub fn compare(operator: &str,
               holds: fn(&i64, &i64) -> bool,
               env: &mut Environment,
               operands: &[Node])
               -> EvalResult<Value> {
    let (left, right) = pair(operator, operands)?;
    let left = eval_integer(operator, left, env)?;
    let right = eval_integer(operator, right, env)?;

    Ok(Value::Boolean(holds(&left, &right)))
}

/// Evaluates `(= a b)`.
///
/// Accepts values of any kind. Two values are equal only when they are the
/// same kind with the same payload, so an integer never equals a boolean.
pub fn equal(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    let (left, right) = pair("=", operands)?;
    let left = evaluate(left, env)?;
    let right = evaluate(right, env)?;

    Ok(Value::Boolean(left == right))
}
