use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            utils::{eval_integer, overflow, pair, split_first},
        },
        value::Value,
    },
};

/// `(+ a b ...)`: the sum of all operands. The empty sum is `0`.
///
/// # Errors
/// `TypeError` for a non-integer operand, `Overflow` if the sum does not fit
/// into an `i64`.
pub fn add(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    operands.iter()
            .try_fold(0_i64, |acc, node| {
                let n = eval_integer("+", node, env)?;
                acc.checked_add(n).ok_or_else(|| overflow("+"))
            })
            .map(Value::Integer)
}

/// `(- a)` negates `a`; `(- a b c ...)` computes `((a - b) - c) - ...`.
pub fn subtract(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    let (first, rest) = split_first("-", operands)?;
    let first = eval_integer("-", first, env)?;

    if rest.is_empty() {
        return first.checked_neg()
                    .map(Value::Integer)
                    .ok_or_else(|| overflow("-"));
    }

    rest.iter()
        .try_fold(first, |acc, node| {
            let n = eval_integer("-", node, env)?;
            acc.checked_sub(n).ok_or_else(|| overflow("-"))
        })
        .map(Value::Integer)
}

/// `(* a b ...)`: the product of all operands. The empty product is `1`.
pub fn multiply(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    operands.iter()
            .try_fold(1_i64, |acc, node| {
                let n = eval_integer("*", node, env)?;
                acc.checked_mul(n).ok_or_else(|| overflow("*"))
            })
            .map(Value::Integer)
}

/// `(/ a b c ...)` computes `((a / b) / c) / ...` with truncating integer
/// division. A single operand is returned unchanged.
///
/// Divisors are evaluated one at a time, so a zero divisor stops evaluation
/// before any later operand runs.
///
/// # Errors
/// `DivisionByZero` for any zero divisor, `Overflow` for `i64::MIN / -1`.
pub fn divide(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    let (first, rest) = split_first("/", operands)?;
    let first = eval_integer("/", first, env)?;

    rest.iter()
        .try_fold(first, |acc, node| {
            let divisor = eval_integer("/", node, env)?;
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            acc.checked_div(divisor).ok_or_else(|| overflow("/"))
        })
        .map(Value::Integer)
}

/// `(% a b)`: the remainder of `a / b`, with the sign of `a`.
///
/// # Errors
/// `ModuloByZero` if `b` is zero.
pub fn modulo(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    let (left, right) = pair("%", operands)?;
    let left = eval_integer("%", left, env)?;
    let right = eval_integer("%", right, env)?;

    if right == 0 {
        return Err(RuntimeError::ModuloByZero);
    }

    // Only `i64::MIN % -1` wraps, and its remainder is 0 either way.
    Ok(Value::Integer(left.wrapping_rem(right)))
}
