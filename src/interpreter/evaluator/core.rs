use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::operator, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree against an environment.
///
/// This is the main entry point for evaluation. The evaluator dispatches on
/// the node variant:
/// - numbers evaluate to themselves,
/// - symbols are resolved as constants or looked up in `env`,
/// - lists are operator applications, whose head must name an operator.
///
/// Only `define` mutates `env`. Operands are evaluated left to right, and a
/// binding made by an earlier operand survives even if a later one fails.
///
/// # Example
/// ```
/// use minilisp::{
///     interpreter::{environment::Environment, evaluator::core::evaluate, parser::core::parse,
///                   value::Value},
/// };
///
/// let mut env = Environment::new();
/// let node = parse("(define x (* 6 7))").unwrap();
///
/// assert_eq!(evaluate(&node, &mut env).unwrap(), Value::Integer(42));
/// assert_eq!(env.lookup("x").unwrap(), Value::Integer(42));
/// ```
pub fn evaluate(node: &Node, env: &mut Environment) -> EvalResult<Value> {
    match node {
        Node::Number(n) => Ok(Value::Integer(*n)),
        Node::Symbol(name) => eval_symbol(name, env),
        Node::List(elements) => eval_list(elements, env),
    }
}

/// Returns the value of a built-in constant, if `name` is one.
///
/// `true` and `false` are the only constants. They are resolved before the
/// environment is consulted and can not be rebound.
#[must_use]
pub fn constant(name: &str) -> Option<Value> {
    match name {
        "true" => Some(Value::Boolean(true)),
        "false" => Some(Value::Boolean(false)),
        _ => None,
    }
}

fn eval_symbol(name: &str, env: &Environment) -> EvalResult<Value> {
    constant(name).map_or_else(|| env.lookup(name), Ok)
}

/// Evaluates a list as an operator application.
///
/// # Errors
/// - `InvalidExpression` for an empty list or a head that is not a symbol.
/// - Anything the operator itself reports.
fn eval_list(elements: &[Node], env: &mut Environment) -> EvalResult<Value> {
    let Some((head, operands)) = elements.split_first() else {
        return Err(RuntimeError::invalid("cannot evaluate empty list"));
    };

    let Some(name) = head.as_symbol() else {
        return Err(RuntimeError::invalid("first element must be an operator"));
    };

    operator::apply(name, operands, env)
}
