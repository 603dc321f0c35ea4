use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{arithmetic, comparison, core::EvalResult, special_form},
        value::Value,
    },
};

/// Type alias for operator handlers.
///
/// A handler receives the environment and the operands exactly as written.
/// Ordinary operators evaluate every operand themselves; special forms decide
/// which operands to evaluate.
type OperatorFn = fn(&mut Environment, &[Node]) -> EvalResult<Value>;

/// Specifies the allowed number of operands for an operator.
///
/// - `Exact(n)` means the operator must receive exactly `n` operands.
/// - `AtLeast(n)` means the operator accepts `n` or more operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given operand count satisfies this arity constraint.
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Defines the operators by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the operator.
///
/// The macro produces:
/// - `OperatorDef` (internal metadata),
/// - `OPERATOR_TABLE` (static table for lookup),
/// - `OPERATORS` (public list of operator names).
macro_rules! operators {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct OperatorDef {
            name:  &'static str,
            arity: Arity,
            func:  OperatorFn,
        }
        static OPERATOR_TABLE: &[OperatorDef] = &[
            $(
                OperatorDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const OPERATORS: &[&str] = &[
            $($name,)*
        ];
    };
}

operators! {
    "+"      => { arity: Arity::AtLeast(0), func: arithmetic::add },
    "-"      => { arity: Arity::AtLeast(1), func: arithmetic::subtract },
    "*"      => { arity: Arity::AtLeast(0), func: arithmetic::multiply },
    "/"      => { arity: Arity::AtLeast(1), func: arithmetic::divide },
    "%"      => { arity: Arity::Exact(2),   func: arithmetic::modulo },
    "define" => { arity: Arity::Exact(2),   func: special_form::define },
    "if"     => { arity: Arity::Exact(3),   func: special_form::if_expr },
    ">"      => { arity: Arity::Exact(2),   func: |env, operands| comparison::compare(">", i64::gt, env, operands) },
    "<"      => { arity: Arity::Exact(2),   func: |env, operands| comparison::compare("<", i64::lt, env, operands) },
    "="      => { arity: Arity::Exact(2),   func: comparison::equal },
}

/// Applies the operator called `name` to `operands`.
///
/// The operator is looked up first, then its arity is verified; no operand
/// is evaluated before both checks pass.
///
/// # Errors
/// - `UnknownOperator` if `name` is not in the table.
/// - `ArityError` if the operand count is not accepted.
/// - Anything the operator itself reports.
pub(crate) fn apply(name: &str, operands: &[Node], env: &mut Environment) -> EvalResult<Value> {
    let Some(op) = OPERATOR_TABLE.iter().find(|op| op.name == name) else {
        return Err(RuntimeError::UnknownOperator { name: name.to_string() });
    };

    if !op.arity.check(operands.len()) {
        return Err(RuntimeError::ArityError { operator: name.to_string(),
                                              expected: op.arity,
                                              actual:   operands.len(), });
    }

    tracing::trace!(operator = name, operands = operands.len(), "applying operator");
    (op.func)(env, operands)
}
