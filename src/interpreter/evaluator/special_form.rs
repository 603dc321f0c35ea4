use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, constant, evaluate},
            utils::{pair, triple},
        },
        value::Value,
    },
};

/// Evaluates `(define name expr)`.
///
/// `name` is taken literally and never evaluated. `expr` is evaluated and the
/// result is bound to `name`, replacing any earlier binding. The bound value
/// is returned.
///
/// # Errors
/// - `InvalidExpression` if `name` is not a symbol or names a constant.
/// - Anything evaluating `expr` reports; nothing is bound in that case.
pub fn define(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    let (target, expr) = pair("define", operands)?;

    let Some(name) = target.as_symbol() else {
        return Err(RuntimeError::invalid(format!("define expects a symbol as its first \
                                                   operand, found {} '{target}'",
                                                  target.describe())));
    };

    if constant(name).is_some() {
        return Err(RuntimeError::invalid(format!("cannot redefine constant '{name}'")));
    }

    let value = evaluate(expr, env)?;
    env.define(name, value);
    Ok(value)
}

/// Evaluates `(if condition then else)`.
///
/// The condition is evaluated first and must be a boolean. Exactly one of the
/// two branches is then evaluated; the other is never touched, so errors or
/// definitions inside it have no effect.
pub fn if_expr(env: &mut Environment, operands: &[Node]) -> EvalResult<Value> {
    let (condition, then_branch, else_branch) = triple("if", operands)?;

    if evaluate(condition, env)?.as_boolean("if")? {
        evaluate(then_branch, env)
    } else {
        evaluate(else_branch, env)
    }
}
